// src/utils.rs
use anyhow::{Context as _, Result};
use std::io::Read;

/// Formats a calculator result. Without a precision the default `f64`
/// formatting is used, so `3.0` prints as `3`.
#[must_use]
pub fn format_result(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}

/// Buffers the whole of `input` as UTF-8 text.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn read_all<R: Read>(mut input: R) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Failed to read text from standard input")?;
    Ok(text)
}
