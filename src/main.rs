//! CLI entry point for cytology patch extraction

use cellcrop::io::cli::{Cli, report, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match report(run(&cli)) {
        Some(_summary) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}
