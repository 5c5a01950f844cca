use crate::color::{Pixel, RAINBOW, RAINBOW_LEN};
use crate::pixelbuffer::Strip;

/// Number of slots per palette band. Strips shorter than the palette get
/// single-slot bands.
pub fn band_size(pixel_count: usize) -> usize {
    (pixel_count / RAINBOW_LEN).max(1)
}

/// Palette color for `slot`. Remainder slots past the last full band stay in
/// the last band.
pub fn band_color(slot: usize, pixel_count: usize) -> Pixel {
    let band = slot / band_size(pixel_count);
    RAINBOW[band.min(RAINBOW_LEN - 1)]
}

/// Slow reveal of the rainbow, one slot per frame from the bottom up.
pub fn rainbow(strip: &mut Strip, delay_ms: u32) {
    let len = strip.len();
    for slot in 0..len {
        strip.set(slot, band_color(slot, len));
        strip.flush();
        strip.wait(delay_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelbuffer::testing::recording_strip;

    #[test]
    fn bands_over_150_pixels() {
        assert_eq!(band_size(150), 21);
        assert_eq!(band_color(0, 150), RAINBOW[0]);
        assert_eq!(band_color(20, 150), RAINBOW[0]);
        assert_eq!(band_color(21, 150), RAINBOW[1]);
        for k in 0..RAINBOW_LEN {
            assert_eq!(band_color(k * 21, 150), RAINBOW[k], "band {k}");
            if k > 0 {
                assert_eq!(band_color(k * 21 - 1, 150), RAINBOW[k - 1], "band {k}");
            }
        }
    }

    #[test]
    fn remainder_joins_the_last_band() {
        for slot in 147..150 {
            assert_eq!(band_color(slot, 150), RAINBOW[RAINBOW_LEN - 1]);
        }
    }

    #[test]
    fn short_strip_uses_single_slot_bands() {
        assert_eq!(band_size(3), 1);
        assert_eq!(band_color(2, 3), RAINBOW[2]);
    }

    #[test]
    fn flushes_after_every_slot() {
        let (mut strip, output, delay) = recording_strip(14);
        rainbow(&mut strip, 4);
        assert_eq!(output.frame_count(), 14);
        assert_eq!(delay.waits(), vec![4; 14]);

        let frames = output.frames();
        assert_eq!(frames[0][0], RAINBOW[0]);
        assert_eq!(frames[0][1], crate::color::OFF);
        assert_eq!(strip.get(13), Some(RAINBOW[6]));
        assert_eq!(strip.get(2), Some(RAINBOW[1]));
    }
}
