//! This module defines the command line interface (CLI) for the demonstrations.

use crate::demo::{Demo, DemoConfig};
use crate::depth::{DEFAULT_DEPTH_LIMIT, MAX_DEPTH_LIMIT};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Csv,
}

#[derive(Parser, Debug)]
#[command(version, about = "Recursion, tail recursion and memoization side by side", long_about = None)]
pub struct Args {
    #[arg(value_enum, value_name = "DEMO", default_value = "all", help = "The demonstration to run")]
    pub demo: Demo,

    #[arg(
        short = 'n',
        long = "input",
        value_name = "N",
        help = "Input of the demonstration; each one has its own default"
    )]
    pub input: Option<u64>,

    #[arg(
        long = "max-depth",
        value_name = "FRAMES",
        default_value_t = DEFAULT_DEPTH_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_DEPTH_LIMIT as u64),
        help = "Recursion depth allowed to the naive (non-tail) forms"
    )]
    pub max_depth: usize,

    #[arg(
        value_enum,
        short = 't',
        long = "to",
        default_value = "plain",
        help = "The output format"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity level"
    )]
    pub verbosity: u8,

    #[arg(
        long,
        short = 'l',
        value_name = "LOG_FILE",
        help = "Optional path to the log file. Defaults to stderr if not specified."
    )]
    pub log_output: Option<PathBuf>,
}

impl Args {
    pub fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            input: self.input,
            max_depth: self.max_depth,
        }
    }
}
