// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Args, Parser};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{Config, load_config};
use crate::core::calculator::calculate;
use crate::core::text::count_alphabets_and_spaces;
use crate::error::CalcError;
use crate::logging::init_logging;
use crate::models::Operation;
use crate::utils::{format_result, read_all};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: division by zero is undefined.";

/// Flags shared by both tools.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read settings (log level, result precision) from this TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "calculator", author, version, long_about = None)]
#[command(about = "Perform simple arithmetic operations.")]
pub struct CalcArgs {
    /// The operation to perform
    #[arg(value_enum)]
    pub operation: Operation,

    /// The first operand
    #[arg(allow_negative_numbers = true)]
    pub lhs: f64,

    /// The second operand
    #[arg(allow_negative_numbers = true)]
    pub rhs: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "textcount", author, version, long_about = None)]
#[command(about = "Count alphabetic characters and spaces in a piece of text.")]
pub struct TextArgs {
    /// Text to analyse. If omitted, text is read from standard input.
    pub text: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Loads the `--config` file, if one was given, and installs logging.
///
/// # Errors
///
/// Returns an error if the named configuration file cannot be loaded.
pub fn prepare(common: &CommonArgs) -> Result<Config> {
    let config = load_config(common.config.as_deref())?;
    init_logging(common.verbose, &config);
    if let Some(source) = &config.source {
        info!(path = %source.display(), "loaded configuration");
    }
    Ok(config)
}

/// Runs the calculator and returns the process exit status.
///
/// Results go to `out`; arithmetic failures are reported on `err` and map to
/// [`EXIT_FAILURE`]. Only I/O failures on the writers surface as `Err`.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
pub fn run_calculator<W: Write, E: Write>(
    args: &CalcArgs,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<u8> {
    match calculate(args.operation.name(), args.lhs, args.rhs) {
        Ok(value) => {
            writeln!(out, "{}", format_result(value, config.calculator.precision))
                .context("Failed to write result")?;
            Ok(EXIT_SUCCESS)
        }
        Err(CalcError::DivisionByZero) => {
            debug!(lhs = args.lhs, "refusing to divide by zero");
            writeln!(err, "{DIVISION_BY_ZERO_MESSAGE}").context("Failed to write error")?;
            Ok(EXIT_FAILURE)
        }
        Err(unsupported @ CalcError::UnsupportedOperation(_)) => {
            writeln!(err, "{unsupported}").context("Failed to write error")?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Counts the text given on the command line, or all of `input` when no
/// text was given, and writes the two report lines to `out`.
///
/// # Errors
///
/// Returns an error if `input` cannot be read or `out` cannot be written.
pub fn run_textcount<R: Read, W: Write>(args: &TextArgs, input: R, out: &mut W) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_all(input)?,
    };

    let counts = count_alphabets_and_spaces(&text);
    writeln!(out, "{counts}").context("Failed to write counts")?;
    Ok(())
}
