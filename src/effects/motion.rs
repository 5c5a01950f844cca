use crate::color::Pixel;
use crate::pixelbuffer::Strip;

fn check_extent(strip: &Strip, extent: usize) {
    assert!(
        extent <= strip.len(),
        "extent {} exceeds strip of {}",
        extent,
        strip.len()
    );
}

fn blink(
    strip: &mut Strip,
    slots: &[usize],
    foreground: Pixel,
    background: Pixel,
    delay_ms: u32,
) {
    for &slot in slots {
        strip.set(slot, foreground);
    }
    strip.flush();
    for &slot in slots {
        strip.set(slot, background);
    }
    strip.wait(delay_ms);
}

/// A single dot travelling upwards over the first `extent` slots.
pub fn move_bottom_to_top(
    strip: &mut Strip,
    extent: usize,
    foreground: Pixel,
    background: Pixel,
    delay_ms: u32,
) {
    check_extent(strip, extent);
    for step in 0..extent {
        blink(strip, &[step], foreground, background, delay_ms);
    }
}

/// A single dot travelling downwards, starting at slot `extent` itself.
///
/// The start slot is one past the range `move_bottom_to_top` covers. When that
/// would fall off the end of the strip the first step lands on the last slot.
pub fn move_top_to_bottom(
    strip: &mut Strip,
    extent: usize,
    foreground: Pixel,
    background: Pixel,
    delay_ms: u32,
) {
    check_extent(strip, extent);
    let start = extent.min(strip.len() - 1);
    for step in (0..=start).rev() {
        blink(strip, &[step], foreground, background, delay_ms);
    }
}

fn middle_pairs(extent: usize) -> impl DoubleEndedIterator<Item = [usize; 2]> {
    let half = extent / 2;
    (0..half).map(move |step| [half + step, half - step])
}

/// Two dots leaving the center of the extent towards both ends.
pub fn move_middle_out(
    strip: &mut Strip,
    extent: usize,
    foreground: Pixel,
    background: Pixel,
    delay_ms: u32,
) {
    check_extent(strip, extent);
    for pair in middle_pairs(extent) {
        blink(strip, &pair, foreground, background, delay_ms);
    }
}

/// Two dots converging on the center, the reverse of `move_middle_out`.
pub fn move_outside_in(
    strip: &mut Strip,
    extent: usize,
    foreground: Pixel,
    background: Pixel,
    delay_ms: u32,
) {
    check_extent(strip, extent);
    // starts at half-1, not half: same pairs as move_middle_out, reversed
    for pair in middle_pairs(extent).rev() {
        blink(strip, &pair, foreground, background, delay_ms);
    }
}
