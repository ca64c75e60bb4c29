use crate::error::Result;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Plain-text layer for `--log-file`: no colors, with thread ids and targets.
fn file_layer<S>(file: File) -> fmt::Layer<S, DefaultFields, Format, File> {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

/// Installs the global subscriber: a compact stderr layer plus, when `log_file` is given,
/// a [`file_layer`] writing to that path.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let log_file = log_file.map(File::create).transpose()?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(log_file.map(file_layer))
        .init();

    Ok(())
}
