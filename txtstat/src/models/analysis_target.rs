// src/models/analysis_target.rs
use std::path::{Path, PathBuf};

use super::{FrequencyTable, StatisticKind};

/// The currently selected file plus whatever has been computed for it.
///
/// A slot left at `None` was never computed; `Some(0)` is a real result.
#[derive(Debug, Default)]
pub struct AnalysisTarget {
    path: Option<PathBuf>,
    pub line_count: Option<usize>,
    pub char_count: Option<usize>,
    pub empty_line_count: Option<usize>,
    pub frequency: Option<FrequencyTable>,
}

impl AnalysisTarget {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Points the target at another file. Results from the previous file
    /// are dropped.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        self.clear_results();
    }

    pub fn clear_results(&mut self) {
        self.line_count = None;
        self.char_count = None;
        self.empty_line_count = None;
        self.frequency = None;
    }

    #[inline]
    #[must_use]
    pub const fn has_result(&self, kind: StatisticKind) -> bool {
        match kind {
            StatisticKind::LineCount => self.line_count.is_some(),
            StatisticKind::CharCount => self.char_count.is_some(),
            StatisticKind::EmptyLineCount => self.empty_line_count.is_some(),
            StatisticKind::FrequencyTable => self.frequency.is_some(),
        }
    }
}
