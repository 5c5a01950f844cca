use crate::color::{Pixel, OFF};
use crate::pixelbuffer::Strip;

const GROUP_LEN: usize = 3;

/// Running triplet chase.
///
/// Each iteration walks the groups of three in order and, from the group's
/// current offset, writes two lit slots followed by one dark slot. Those
/// writes may spill into the next group; a later write wins. Slots before the
/// first write keep whatever the previous iteration left there, and writes
/// past the end of the strip are dropped.
pub fn chase(strip: &mut Strip, color: Pixel, iterations: usize, delay_ms: u32) {
    let len = strip.len();

    for iteration in 0..iterations {
        let offset = iteration % GROUP_LEN;
        for base in (0..len).step_by(GROUP_LEN) {
            let writes = [
                (base + offset, color),
                (base + offset + 1, color),
                (base + offset + 2, OFF),
            ];
            for (slot, pixel) in writes {
                if slot < len {
                    strip.set(slot, pixel);
                }
            }
        }
        strip.flush();
        strip.wait(delay_ms);
    }
}
