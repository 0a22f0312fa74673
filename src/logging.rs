//! Logger setup for the demonstration binary.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::PathBuf;

/// Environment variable whose filter directives override the verbosity flag.
pub const LOG_ENV: &str = "RECURSION_LOG";

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sets up the logger based on verbosity and optional log file path.
/// Reports go to stdout, so log lines never share it.
pub fn setup_logger(verbosity: u8, log_output: Option<PathBuf>) {
    let mut builder = Builder::new();
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .filter_level(level_for(verbosity))
        .parse_env(LOG_ENV);

    let target = match log_output {
        Some(path) => match File::create(&path) {
            Ok(file) => Target::Pipe(Box::new(file)),
            Err(e) => {
                eprintln!(
                    "Could not create log file at {}: {}. Defaulting to stderr.",
                    path.display(),
                    e
                );
                Target::Stderr
            }
        },
        None => Target::Stderr,
    };
    builder.target(target);

    if builder.try_init().is_err() {
        eprintln!("A logger was already installed; keeping it.");
    }
}
