// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use text_stats::args::Args;
use text_stats::config::Config;
use text_stats::{app, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.log_level);
    log::debug!("text_stats v{} · format={:?}", text_stats::VERSION, config.format);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
