// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::{CalcArgs, CommonArgs, TextArgs, run_calculator, run_textcount};
pub use config::{Config, load_config};
pub use crate::core::calculator::calculate;
pub use crate::core::text::count_alphabets_and_spaces;
pub use error::CalcError;
pub use models::{Operation, TextCounts};
