// src/core.rs
pub mod calculator;
pub mod text;
