//! Bars instead of dots: the motion primitives with the erase color equal to
//! the drawing color, so every visited slot keeps it.

use crate::color::Pixel;
use crate::effects::motion;
use crate::pixelbuffer::Strip;

pub fn fill_bottom_to_top(strip: &mut Strip, extent: usize, color: Pixel, delay_ms: u32) {
    motion::move_bottom_to_top(strip, extent, color, color, delay_ms);
}

pub fn fill_top_to_bottom(strip: &mut Strip, extent: usize, color: Pixel, delay_ms: u32) {
    motion::move_top_to_bottom(strip, extent, color, color, delay_ms);
}

pub fn fill_middle_out(strip: &mut Strip, extent: usize, color: Pixel, delay_ms: u32) {
    motion::move_middle_out(strip, extent, color, color, delay_ms);
}

pub fn fill_outside_in(strip: &mut Strip, extent: usize, color: Pixel, delay_ms: u32) {
    motion::move_outside_in(strip, extent, color, color, delay_ms);
}
