use std::process::ExitCode;

use clap::Parser;
use spread_report::{Cli, run_report};

fn main() -> ExitCode {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build and print the report. Any failure aborts the whole run.
    match run_report(&args) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
