//! Forgedown - a streaming markup-to-HTML converter for static sites.
//!
//! This binary provides the CLI interface to the forgedown library,
//! feeding files or stdin through a [`Converter`] and writing HTML
//! fragments to stdout. Page templating, feeds, and archives belong to
//! the surrounding site build, not here.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use forgedown_config::Config;
use forgedown_core::Result;
use forgedown_render::Converter;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("Forgedown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.site.base_url.clone());
    let system_dir = cli
        .system_dir
        .clone()
        .unwrap_or_else(|| config.content.system_dir.clone());
    debug!("base_url={:?} system_dir={}", base_url, system_dir.display());

    let mut converter = Converter::with_system_dir(base_url, system_dir);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        convert(&mut converter, BufReader::new(io::stdin()), &mut out)?;
    } else {
        for path in &cli.files {
            debug!("converting {}", path.display());
            let file = File::open(path)?;
            convert(&mut converter, BufReader::new(file), &mut out)?;
            converter.reset();
        }
    }

    Ok(())
}

/// Load configuration with an optional override path.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Feed every line of `reader` through the converter, writing each
/// non-empty fragment, then flush the still-open blocks.
fn convert<R: BufRead, W: Write>(
    converter: &mut Converter,
    reader: R,
    out: &mut W,
) -> Result<()> {
    for line in reader.lines() {
        let fragment = converter.render(&line?);
        if !fragment.is_empty() {
            writeln!(out, "{}", fragment)?;
        }
    }
    let tail = converter.flush();
    if !tail.is_empty() {
        writeln!(out, "{}", tail)?;
    }
    Ok(())
}
