mod logging;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;
use clockface_core::svg::render_svg;
use clockface_core::{
    ClockState, FaceConfig, FaceRenderer, FixedClock, LocalClock, MonospaceMetrics, TimeSource,
};

use crate::logging::{LoggingConfig, init_logging};

const USAGE: &str = "Usage: clockface [--config <face.json>] [--light] [--log <file>] [--log-level <filter>]
       clockface --svg <out.svg> [--size <W>x<H>] [--at <HH:MM:SS>] [--config <face.json>] [--light]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_filter: Option<String>,
    svg: Option<PathBuf>,
    size: Option<(u32, u32)>,
    at: Option<NaiveTime>,
    light: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{flag} expects a value"))
        };
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--log" => parsed.log_file = Some(PathBuf::from(value("--log")?)),
            "--log-level" => parsed.log_filter = Some(value("--log-level")?),
            "--svg" => parsed.svg = Some(PathBuf::from(value("--svg")?)),
            "--size" => parsed.size = Some(parse_size(&value("--size")?)?),
            "--at" => {
                let raw = value("--at")?;
                let at = NaiveTime::parse_from_str(&raw, "%H:%M:%S")
                    .with_context(|| format!("invalid time {raw:?}, expected HH:MM:SS"))?;
                parsed.at = Some(at);
            }
            "--light" => parsed.light = true,
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(parsed)
}

fn parse_size(raw: &str) -> Result<(u32, u32)> {
    let (w, h) = raw
        .split_once('x')
        .with_context(|| format!("invalid size {raw:?}, expected <W>x<H>"))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

fn main() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(1);
        }
    };

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        file: args.log_file.clone(),
    })?;

    let config = match &args.config {
        Some(path) => FaceConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FaceConfig::default(),
    };
    let renderer = FaceRenderer::new(config)?;
    let clock: Box<dyn TimeSource> = match args.at {
        Some(at) => Box::new(FixedClock(at)),
        None => Box::new(LocalClock),
    };

    if let Some(out) = &args.svg {
        let (width, height) = args.size.unwrap_or((400, 400));
        let state = ClockState::new(width, height, clock.now().into());
        let commands = state.render(&renderer, &MonospaceMetrics::default())?;
        let svg = render_svg(&commands, f64::from(width), f64::from(height), !args.light);
        std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
        log::info!("wrote {} ({} commands)", out.display(), commands.len());
        return Ok(());
    }

    renderer::run_tui(&renderer, clock.as_ref(), !args.light)
}
