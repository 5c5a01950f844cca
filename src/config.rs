use std::net::SocketAddr;
use std::path::Path;

use anyhow::{bail, Context};
use config_file::FromConfigFile;
use serde::Deserialize;

use crate::effects::Effect;
use crate::olaoutput::DMX_CHANNELS;

const DEFAULT_PIXEL_COUNT: usize = 150;

/// Startup settings. Read once, never changed afterwards.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub pixel_count: usize,
    pub measure_fps: bool,
    pub output: OutputConfig,
    /// Replaces the built-in show when not empty.
    pub show: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum OutputConfig {
    Ola {
        #[serde(default = "default_ola_addr")]
        addr: SocketAddr,
        #[serde(default)]
        universe: u16,
        #[serde(default = "default_brightness")]
        brightness: u8,
    },
    Log,
}

fn default_ola_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 7770))
}

fn default_brightness() -> u8 {
    u8::MAX
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig::Ola {
            addr: default_ola_addr(),
            universe: 0,
            brightness: default_brightness(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pixel_count: DEFAULT_PIXEL_COUNT,
            measure_fps: false,
            output: OutputConfig::default(),
            show: vec![],
        }
    }
}

impl Config {
    /// Reads `path` if given, falls back to defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Config::from_config_file(path)
                    .with_context(|| format!("Cannot read configuration {}", path.display()))
            }
            None => Ok(Config::default()),
        }
    }

    pub fn set_universe(&mut self, new_universe: u16) {
        match &mut self.output {
            OutputConfig::Ola { universe, .. } => *universe = new_universe,
            OutputConfig::Log => log::warn!("Ignoring universe, output is not OLA"),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.pixel_count == 0 {
            bail!("pixel_count must be at least 1");
        }

        if let OutputConfig::Ola { .. } = self.output {
            if self.pixel_count > DMX_CHANNELS / 3 {
                bail!(
                    "{} pixels do not fit a DMX universe of {} channels",
                    self.pixel_count,
                    DMX_CHANNELS
                );
            }
        }

        for (i, effect) in self.show.iter().enumerate() {
            if let Some(extent) = effect.extent() {
                if extent > self.pixel_count {
                    bail!(
                        "show step {} reaches {} slots but the strip has {}",
                        i + 1,
                        extent,
                        self.pixel_count
                    );
                }
            }
        }

        Ok(())
    }
}
