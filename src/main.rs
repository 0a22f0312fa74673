use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::process;

use recursion_lessons::cli::{Args, OutputFormat};
use recursion_lessons::{demo, logging};

fn main() {
    // parse CLI arguments
    let args = Args::parse();

    // set up logging
    logging::setup_logger(args.verbosity, args.log_output.clone());

    let reports = demo::run(args.demo, &args.demo_config());
    info!("{} report(s) produced", reports.len());

    let output = demo::render(&reports, args.output_format == OutputFormat::Csv);

    // Write the reports to stdout
    let mut out = io::stdout().lock();
    if let Err(e) = out.write_all(output.as_bytes()).and_then(|_| out.flush()) {
        log::error!("could not write the report: {}", e);
        process::exit(1);
    }
}
