mod app;
mod cli;
mod effects;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;
use scan_logging::scan_error;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::initialize(args.log, args.log_level());

    match app::run(&args) {
        Ok(code) => code,
        Err(err) => {
            scan_error!("resume-scan failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
