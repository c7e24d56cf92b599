//! Command-line interface for forgedown.

use clap::Parser;
use std::path::PathBuf;

/// Forgedown - a streaming markup-to-HTML converter for static sites.
///
/// Converts line-oriented plain-text markup into HTML fragments, one
/// line at a time, as the content-rendering core of a site build.
#[derive(Parser, Debug)]
#[command(
    name = "fgd",
    version,
    about = "Convert line-oriented markup into HTML fragments",
    after_help = "Examples:\n  \
                  cat post.txt | fgd\n  \
                  fgd --base-url https://example.com post.txt\n  \
                  fgd -c site.toml Content/*.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Base URL for permalink and asset rewriting
    #[arg(short = 'b', long = "base-url")]
    pub base_url: Option<String>,

    /// Use a custom config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Directory holding series-index files
    #[arg(long = "system-dir")]
    pub system_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}
