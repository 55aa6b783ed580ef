// src/models.rs
mod analysis_target;
mod frequency;
mod statistic_kind;

pub use analysis_target::AnalysisTarget;
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use statistic_kind::{Selection, StatisticKind};
