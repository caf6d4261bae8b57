// src/bin/calculator.rs
use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use tally::cli::{CalcArgs, EXIT_FAILURE, prepare, run_calculator};

fn main() -> ExitCode {
    let args = CalcArgs::parse();
    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &CalcArgs) -> Result<u8> {
    let config = prepare(&args.common)?;
    run_calculator(args, &config, &mut io::stdout().lock(), &mut io::stderr().lock())
}
