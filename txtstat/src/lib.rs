// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod menu;
pub mod models;
pub mod report;
pub mod session;

pub use cli::{Args, run};
pub use config::Config;
pub use crate::core::{TextAnalyzer, is_usable, validate_file};
pub use error::StatError;
pub use menu::{MenuChoice, parse_choice};
pub use models::{AnalysisTarget, FrequencyEntry, FrequencyTable, Selection, StatisticKind};
pub use report::{render, render_limited};
pub use session::Session;
