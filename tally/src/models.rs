// src/models.rs
mod operation;
mod text_counts;

pub use operation::Operation;
pub use text_counts::TextCounts;
