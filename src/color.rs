use palette::named;
use serde::{Deserialize, Deserializer};

/// One addressable light element's color state.
pub type Pixel = palette::Srgb<u8>;

pub const OFF: Pixel = Pixel::new(0, 0, 0);

pub const RAINBOW_LEN: usize = 7;

/// The seven canonical rainbow hues, bottom band first.
pub static RAINBOW: [Pixel; RAINBOW_LEN] = [
    named::RED,
    named::ORANGE,
    named::YELLOW,
    named::GREEN,
    named::BLUE,
    named::INDIGO,
    named::VIOLET,
];

/// Builds a pixel from arbitrary channel values.
///
/// Out-of-range channels are clamped into `0..=255` rather than rejected, so
/// this never fails.
pub fn rgb(red: i32, green: i32, blue: i32) -> Pixel {
    let clamp = |v: i32| v.clamp(0, u8::MAX as i32) as u8;
    Pixel::new(clamp(red), clamp(green), clamp(blue))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Off,
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl From<NamedColor> for Pixel {
    fn from(color: NamedColor) -> Self {
        match color {
            NamedColor::Off => OFF,
            NamedColor::White => named::WHITE,
            NamedColor::Red => named::RED,
            NamedColor::Orange => named::ORANGE,
            NamedColor::Yellow => named::YELLOW,
            NamedColor::Green => named::GREEN,
            NamedColor::Blue => named::BLUE,
            NamedColor::Indigo => named::INDIGO,
            NamedColor::Violet => named::VIOLET,
        }
    }
}

/// A color as written in the configuration file: either a name or an
/// `[r, g, b]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(NamedColor),
    Rgb([i32; 3]),
}

impl From<ColorSpec> for Pixel {
    fn from(spec: ColorSpec) -> Self {
        match spec {
            ColorSpec::Named(color) => color.into(),
            ColorSpec::Rgb([r, g, b]) => rgb(r, g, b),
        }
    }
}

/// Reads a [`ColorSpec`] straight into a [`Pixel`].
pub fn deserialize_pixel<'de, D>(deserializer: D) -> Result<Pixel, D::Error>
where
    D: Deserializer<'de>,
{
    ColorSpec::deserialize(deserializer).map(Pixel::from)
}
