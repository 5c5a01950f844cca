use crate::color::{Pixel, OFF};
use crate::frametimer::Delay;
use crate::output::OutputSink;

/// Fixed-length framebuffer. Index 0 is the bottom of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    pub fn new(pixel_count: usize) -> PixelBuffer {
        assert!(pixel_count > 0, "a strip needs at least one pixel");
        PixelBuffer {
            pixels: vec![OFF; pixel_count],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Panics if `index` is outside the strip.
    pub fn set(&mut self, index: usize, color: Pixel) {
        let len = self.pixels.len();
        match self.pixels.get_mut(index) {
            Some(pixel) => *pixel = color,
            None => panic!("pixel index {index} out of range for strip of {len}"),
        }
    }

    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn flush(&self, sink: &mut dyn OutputSink) {
        sink.transmit(self.as_slice());
    }
}

/// The framebuffer together with where its frames go and how frames are paced.
///
/// Every effect borrows the strip mutably, so there is exactly one writer at
/// any time.
pub struct Strip {
    buffer: PixelBuffer,
    sink: Box<dyn OutputSink>,
    delay: Box<dyn Delay>,
}

impl Strip {
    pub fn new(pixel_count: usize, sink: Box<dyn OutputSink>, delay: Box<dyn Delay>) -> Strip {
        Strip {
            buffer: PixelBuffer::new(pixel_count),
            sink,
            delay,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn set(&mut self, index: usize, color: Pixel) {
        self.buffer.set(index, color);
    }

    pub fn fill(&mut self, color: Pixel) {
        self.buffer.fill(color);
    }

    pub fn flush(&mut self) {
        self.buffer.flush(self.sink.as_mut());
    }

    pub fn wait(&mut self, millis: u32) {
        self.delay.wait(millis);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::recording_strip;
    use super::*;
    use crate::color::rgb;

    #[test]
    fn starts_dark() {
        let buffer = PixelBuffer::new(4);
        assert_eq!(buffer.len(), 4);
        assert!(buffer.as_slice().iter().all(|&p| p == OFF));
    }

    #[test]
    fn set_one_slot() {
        let mut buffer = PixelBuffer::new(4);
        buffer.set(3, rgb(1, 2, 3));
        assert_eq!(buffer.as_slice()[3], rgb(1, 2, 3));
        assert_eq!(buffer.as_slice().get(4), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut buffer = PixelBuffer::new(4);
        buffer.set(4, rgb(1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn empty_strip_is_rejected() {
        PixelBuffer::new(0);
    }

    #[test]
    fn fill_sets_every_slot() {
        let mut buffer = PixelBuffer::new(5);
        buffer.fill(rgb(9, 8, 7));
        assert!(buffer.as_slice().iter().all(|&p| p == rgb(9, 8, 7)));
    }

    #[test]
    fn only_flush_reaches_the_sink() {
        let (mut strip, output, delay) = recording_strip(3);
        strip.set(0, rgb(255, 0, 0));
        strip.fill(rgb(0, 0, 255));
        assert_eq!(output.frame_count(), 0);

        strip.flush();
        strip.wait(7);
        assert_eq!(output.frames(), vec![vec![rgb(0, 0, 255); 3]]);
        assert_eq!(delay.waits(), vec![7]);
    }
}
