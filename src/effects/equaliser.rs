use crate::color::{Pixel, OFF};
use crate::effects::fill::{fill_bottom_to_top, fill_top_to_bottom};
use crate::pixelbuffer::Strip;

/// Rise and decay of a single audio-meter style bar.
///
/// The bar climbs to `top` slots, its last slot turns into the peak marker and
/// the bar then drains back down, leaving the peak standing.
pub fn equaliser(strip: &mut Strip, top: usize, peak: Pixel, bar: Pixel, delay_ms: u32) {
    fill_bottom_to_top(strip, top, bar, delay_ms);

    if top == 0 {
        return;
    }
    strip.set(top - 1, peak);
    // the peak gets a frame of its own before the bar drains
    strip.flush();
    strip.wait(delay_ms);

    if let Some(retract) = top.checked_sub(2) {
        fill_top_to_bottom(strip, retract, OFF, delay_ms);
    }
}
