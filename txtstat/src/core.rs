// src/core.rs
pub mod analyzer;
pub mod validator;

pub use analyzer::TextAnalyzer;
pub use validator::{is_usable, validate_file};
