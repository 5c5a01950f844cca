use crate::color::Pixel;

/// Receives every frame meant to become visible.
///
/// Transmission is best effort: implementations log failures and carry on,
/// there is nobody upstream to hand an error to.
pub trait OutputSink {
    fn transmit(&mut self, frame: &[Pixel]);
}

/// Dry-run sink, prints frames to the log instead of driving hardware.
pub struct LogOutput {
    frames: u64,
}

impl LogOutput {
    pub fn new() -> LogOutput {
        LogOutput { frames: 0 }
    }

    fn render(frame: &[Pixel]) -> String {
        frame
            .iter()
            .map(|p| format!("{:02x}{:02x}{:02x}", p.red, p.green, p.blue))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl OutputSink for LogOutput {
    fn transmit(&mut self, frame: &[Pixel]) {
        self.frames += 1;
        log::debug!("frame {}: {}", self.frames, LogOutput::render(frame));
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb, OFF};

    #[test]
    fn log_output_renders_hex_triples() {
        let frame = [rgb(255, 0, 16), OFF];
        assert_eq!(LogOutput::render(&frame), "ff0010 000000");
    }

    #[test_log::test]
    fn log_output_counts_frames() {
        let mut out = LogOutput::new();
        out.transmit(&[OFF; 3]);
        out.transmit(&[OFF; 3]);
        assert_eq!(out.frames, 2);
    }
}
