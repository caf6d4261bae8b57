// src/bin/textcount.rs
use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use tally::cli::{EXIT_FAILURE, TextArgs, prepare, run_textcount};

fn main() -> ExitCode {
    let args = TextArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &TextArgs) -> Result<()> {
    prepare(&args.common)?;
    run_textcount(args, io::stdin().lock(), &mut io::stdout().lock())
}
