pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod frametimer;
pub(crate) mod olaoutput;
pub(crate) mod output;
pub(crate) mod pixelbuffer;
pub(crate) mod sequencer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use config::{Config, OutputConfig};
use frametimer::FrameTimer;
use olaoutput::OlaOutput;
use output::{LogOutput, OutputSink};
use pixelbuffer::Strip;
use sequencer::Sequencer;

#[derive(Parser)]
struct Cli {
    /// TOML file with strip, output and show settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// Number of pixels on the strip
    #[arg(short, long, value_name = "COUNT")]
    pixel_count: Option<usize>,

    /// DMX universe to send to
    #[arg(short, long, value_name = "UNIVERSE")]
    universe: Option<u16>,

    /// Log frames instead of sending them to OLA
    #[arg(long)]
    dry_run: bool,
}

fn load_config(args: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(pixel_count) = args.pixel_count {
        config.pixel_count = pixel_count;
    }
    if args.dry_run {
        config.output = OutputConfig::Log;
    }
    if let Some(universe) = args.universe {
        config.set_universe(universe);
    }

    config.validate()?;
    Ok(config)
}

fn create_output(config: &OutputConfig) -> anyhow::Result<Box<dyn OutputSink>> {
    match *config {
        OutputConfig::Ola {
            addr,
            universe,
            brightness,
        } => {
            let ola = OlaOutput::new(addr, universe, brightness)
                .context("Cannot set up OLA output")?;
            Ok(Box::new(ola))
        }
        OutputConfig::Log => Ok(Box::new(LogOutput::new())),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let config = load_config(&args)?;

    let sink = create_output(&config.output)?;
    let timer = FrameTimer::new(config.measure_fps);
    let mut strip = Strip::new(config.pixel_count, sink, Box::new(timer));

    let show = if config.show.is_empty() {
        Sequencer::default_show(config.pixel_count)
    } else {
        config.show
    };
    let sequencer = Sequencer::new(show);
    log::info!(
        "Playing {} effects on {} pixels",
        sequencer.len(),
        config.pixel_count
    );

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        log::info!("Interrupted, finishing current effect");
        handler_stop.store(true, Ordering::SeqCst);
    })
    .context("Cannot install Ctrl-C handler")?;

    sequencer.run_until(&mut strip, &stop);

    strip.fill(color::OFF);
    strip.flush();
    Ok(())
}
