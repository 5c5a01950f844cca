use std::{
    net::{SocketAddr, UdpSocket},
    str::FromStr,
};

use anyhow::Context;
use rosc::{encoder, OscMessage, OscPacket, OscType};

use crate::color::Pixel;
use crate::output::OutputSink;

pub const DMX_CHANNELS: usize = 512;

/// Sends frames to an OLA daemon as a DMX universe wrapped in OSC.
pub struct OlaOutput {
    sock: UdpSocket,
    target_addr: SocketAddr,
    osc_addr: String,
    brightness: u8,
    buffer: Vec<u8>,
}

impl OlaOutput {
    pub fn new(target_addr: SocketAddr, universe: u16, brightness: u8) -> anyhow::Result<Self> {
        let our_addr = SocketAddr::from_str("0.0.0.0:0")?;
        let sock = UdpSocket::bind(our_addr).context("Cannot bind OLA output socket")?;

        log::info!("Sending universe {} to OLA at {}", universe, target_addr);

        Ok(OlaOutput {
            sock,
            target_addr,
            osc_addr: format!("/dmx/universe/{universe}"),
            brightness,
            buffer: vec![0; DMX_CHANNELS],
        })
    }

    fn scale(&self, value: u8) -> u8 {
        (value as u16 * self.brightness as u16 / u8::MAX as u16) as u8
    }

    pub fn set_rgb(&mut self, start_channel: usize, pixel: Pixel) {
        let (r, g, b) = pixel.into_components();
        self.buffer[start_channel] = self.scale(r);
        self.buffer[start_channel + 1] = self.scale(g);
        self.buffer[start_channel + 2] = self.scale(b);
    }

    fn pack(&mut self, frame: &[Pixel]) {
        self.blackout();
        for (i, pixel) in frame.iter().take(DMX_CHANNELS / 3).enumerate() {
            self.set_rgb(i * 3, *pixel);
        }
    }

    pub fn blackout(&mut self) {
        self.buffer.fill(0);
    }
}

impl OutputSink for OlaOutput {
    fn transmit(&mut self, frame: &[Pixel]) {
        self.pack(frame);

        let msg_buf = match encoder::encode(&OscPacket::Message(OscMessage {
            addr: self.osc_addr.clone(),
            args: vec![OscType::Blob(self.buffer.clone())],
        })) {
            Ok(msg_buf) => msg_buf,
            Err(err) => {
                log::warn!("Cannot encode DMX frame: {:?}", err);
                return;
            }
        };

        if let Err(err) = self.sock.send_to(&msg_buf, self.target_addr) {
            log::warn!("Failed to send frame to {}: {}", self.target_addr, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb, OFF};

    fn output(brightness: u8) -> OlaOutput {
        let target = SocketAddr::from_str("127.0.0.1:7770").unwrap();
        OlaOutput::new(target, 1, brightness).unwrap()
    }

    #[test]
    fn packs_three_channels_per_pixel() {
        let mut ola = output(255);
        ola.pack(&[rgb(1, 2, 3), OFF, rgb(255, 128, 0)]);
        assert_eq!(&ola.buffer[0..9], &[1, 2, 3, 0, 0, 0, 255, 128, 0]);
        assert!(ola.buffer[9..].iter().all(|&v| v == 0));
        assert_eq!(ola.osc_addr, "/dmx/universe/1");
    }

    #[test]
    fn scales_by_brightness() {
        let mut ola = output(128);
        ola.pack(&[rgb(255, 100, 0)]);
        assert_eq!(&ola.buffer[0..3], &[128, 50, 0]);
    }

    #[test]
    fn drops_pixels_beyond_universe() {
        let mut ola = output(255);
        let frame = vec![rgb(9, 9, 9); 200];
        ola.pack(&frame);
        assert_eq!(ola.buffer.len(), DMX_CHANNELS);
        assert_eq!(ola.buffer[509], 9);
        assert_eq!(ola.buffer[510], 0);
    }

    #[test]
    fn repacking_clears_previous_frame() {
        let mut ola = output(255);
        ola.pack(&[rgb(5, 5, 5), rgb(5, 5, 5)]);
        ola.pack(&[rgb(5, 5, 5)]);
        assert_eq!(&ola.buffer[3..6], &[0, 0, 0]);
    }
}
