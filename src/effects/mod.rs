pub(crate) mod chase;
pub(crate) mod equaliser;
pub(crate) mod fill;
pub(crate) mod motion;
pub(crate) mod rainbow;

use serde::Deserialize;

use crate::color::{self, Pixel, OFF};
use crate::pixelbuffer::Strip;

/// One step of a show: which effect to run and with what parameters.
///
/// A missing `extent`/`top` means the whole strip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case", deny_unknown_fields)]
pub enum Effect {
    MoveBottomToTop {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        foreground: Pixel,
        #[serde(default = "off", deserialize_with = "color::deserialize_pixel")]
        background: Pixel,
        delay_ms: u32,
    },
    MoveTopToBottom {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        foreground: Pixel,
        #[serde(default = "off", deserialize_with = "color::deserialize_pixel")]
        background: Pixel,
        delay_ms: u32,
    },
    MoveMiddleOut {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        foreground: Pixel,
        #[serde(default = "off", deserialize_with = "color::deserialize_pixel")]
        background: Pixel,
        delay_ms: u32,
    },
    MoveOutsideIn {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        foreground: Pixel,
        #[serde(default = "off", deserialize_with = "color::deserialize_pixel")]
        background: Pixel,
        delay_ms: u32,
    },
    FillBottomToTop {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        color: Pixel,
        delay_ms: u32,
    },
    FillTopToBottom {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        color: Pixel,
        delay_ms: u32,
    },
    FillMiddleOut {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        color: Pixel,
        delay_ms: u32,
    },
    FillOutsideIn {
        #[serde(default)]
        extent: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        color: Pixel,
        delay_ms: u32,
    },
    Equaliser {
        #[serde(default)]
        top: Option<usize>,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        peak: Pixel,
        #[serde(deserialize_with = "color::deserialize_pixel")]
        bar: Pixel,
        delay_ms: u32,
    },
    Chase {
        #[serde(deserialize_with = "color::deserialize_pixel")]
        color: Pixel,
        iterations: usize,
        delay_ms: u32,
    },
    Rainbow {
        delay_ms: u32,
    },
    Clear {
        #[serde(default)]
        delay_ms: u32,
    },
}

fn off() -> Pixel {
    OFF
}

impl Effect {
    /// The explicit extent of this step, if it has one.
    pub fn extent(&self) -> Option<usize> {
        match *self {
            Effect::MoveBottomToTop { extent, .. }
            | Effect::MoveTopToBottom { extent, .. }
            | Effect::MoveMiddleOut { extent, .. }
            | Effect::MoveOutsideIn { extent, .. }
            | Effect::FillBottomToTop { extent, .. }
            | Effect::FillTopToBottom { extent, .. }
            | Effect::FillMiddleOut { extent, .. }
            | Effect::FillOutsideIn { extent, .. } => extent,
            Effect::Equaliser { top, .. } => top,
            Effect::Chase { .. } | Effect::Rainbow { .. } | Effect::Clear { .. } => None,
        }
    }

    pub fn apply(&self, strip: &mut Strip) {
        let full = strip.len();
        match *self {
            Effect::MoveBottomToTop {
                extent,
                foreground,
                background,
                delay_ms,
            } => motion::move_bottom_to_top(
                strip,
                extent.unwrap_or(full),
                foreground,
                background,
                delay_ms,
            ),
            Effect::MoveTopToBottom {
                extent,
                foreground,
                background,
                delay_ms,
            } => motion::move_top_to_bottom(
                strip,
                extent.unwrap_or(full),
                foreground,
                background,
                delay_ms,
            ),
            Effect::MoveMiddleOut {
                extent,
                foreground,
                background,
                delay_ms,
            } => motion::move_middle_out(
                strip,
                extent.unwrap_or(full),
                foreground,
                background,
                delay_ms,
            ),
            Effect::MoveOutsideIn {
                extent,
                foreground,
                background,
                delay_ms,
            } => motion::move_outside_in(
                strip,
                extent.unwrap_or(full),
                foreground,
                background,
                delay_ms,
            ),
            Effect::FillBottomToTop {
                extent,
                color,
                delay_ms,
            } => fill::fill_bottom_to_top(strip, extent.unwrap_or(full), color, delay_ms),
            Effect::FillTopToBottom {
                extent,
                color,
                delay_ms,
            } => fill::fill_top_to_bottom(strip, extent.unwrap_or(full), color, delay_ms),
            Effect::FillMiddleOut {
                extent,
                color,
                delay_ms,
            } => fill::fill_middle_out(strip, extent.unwrap_or(full), color, delay_ms),
            Effect::FillOutsideIn {
                extent,
                color,
                delay_ms,
            } => fill::fill_outside_in(strip, extent.unwrap_or(full), color, delay_ms),
            Effect::Equaliser {
                top,
                peak,
                bar,
                delay_ms,
            } => equaliser::equaliser(strip, top.unwrap_or(full), peak, bar, delay_ms),
            Effect::Chase {
                color,
                iterations,
                delay_ms,
            } => chase::chase(strip, color, iterations, delay_ms),
            Effect::Rainbow { delay_ms } => rainbow::rainbow(strip, delay_ms),
            Effect::Clear { delay_ms } => {
                strip.fill(OFF);
                strip.flush();
                strip.wait(delay_ms);
            }
        }
    }
}
