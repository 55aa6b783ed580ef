// src/core/analyzer.rs
use log::debug;
use std::fs::File;
use std::io::{self, BufRead as _, BufReader};
use std::path::{Path, PathBuf};

use crate::error::StatError;
use crate::models::{AnalysisTarget, FrequencyTable, Selection, StatisticKind};

/// Computes statistics for one file at a time.
///
/// Every statistic opens and scans the file on its own; nothing read for
/// one statistic is reused by another.
#[derive(Debug, Default)]
pub struct TextAnalyzer {
    target: AnalysisTarget,
}

impl TextAnalyzer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the file to analyze and forgets every previous result.
    /// Does not touch the filesystem.
    pub fn set_target(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!("Analysis target set to {}", path.display());
        self.target.set_path(path);
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &AnalysisTarget {
        &self.target
    }

    /// Counts newline-delimited records. An unterminated final line counts
    /// as one record.
    ///
    /// # Errors
    ///
    /// Returns an error if no target is set or the file cannot be opened or
    /// decoded as UTF-8.
    pub fn count_lines(&self) -> Result<usize, StatError> {
        let mut lines: usize = 0;
        scan_lines(self.path()?, |_| lines = lines.saturating_add(1))?;
        Ok(lines)
    }

    /// Counts characters (not bytes), line terminators included.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TextAnalyzer::count_lines`].
    pub fn count_characters(&self) -> Result<usize, StatError> {
        let mut chars: usize = 0;
        scan_lines(self.path()?, |line| {
            chars = chars.saturating_add(line.chars().count());
        })?;
        Ok(chars)
    }

    /// Counts lines that are empty once surrounding whitespace is stripped.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TextAnalyzer::count_lines`].
    pub fn count_empty_lines(&self) -> Result<usize, StatError> {
        let mut empty: usize = 0;
        scan_lines(self.path()?, |line| {
            if is_blank(line) {
                empty = empty.saturating_add(1);
            }
        })?;
        Ok(empty)
    }

    /// Counts every character in the file, line terminators included.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TextAnalyzer::count_lines`].
    pub fn build_frequency_table(&self) -> Result<FrequencyTable, StatError> {
        let mut table = FrequencyTable::new();
        scan_lines(self.path()?, |line| table.record_str(line))?;
        Ok(table)
    }

    /// Computes each requested statistic and stores it on the target.
    ///
    /// A statistic that fails is stored as zero (or an empty table) and its
    /// error is returned; the remaining statistics are still computed.
    /// Kinds that were not requested keep whatever value they had.
    pub fn analyze(&mut self, kinds: &Selection) -> Vec<StatError> {
        let mut failures = Vec::new();

        for &kind in kinds {
            debug!("Computing {kind}");
            match kind {
                StatisticKind::LineCount => {
                    self.target.line_count = Some(recover(self.count_lines(), &mut failures));
                }
                StatisticKind::CharCount => {
                    self.target.char_count =
                        Some(recover(self.count_characters(), &mut failures));
                }
                StatisticKind::EmptyLineCount => {
                    self.target.empty_line_count =
                        Some(recover(self.count_empty_lines(), &mut failures));
                }
                StatisticKind::FrequencyTable => {
                    self.target.frequency =
                        Some(recover(self.build_frequency_table(), &mut failures));
                }
            }
        }

        failures
    }

    fn path(&self) -> Result<&Path, StatError> {
        self.target.path().ok_or(StatError::NoTarget)
    }
}

/// True when nothing but whitespace remains. Besides Unicode `White_Space`
/// this strips the ASCII information separators `\x1c`..=`\x1f`.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

fn recover<T: Default>(result: Result<T, StatError>, failures: &mut Vec<StatError>) -> T {
    result.unwrap_or_else(|err| {
        debug!("Statistic failed: {err}");
        failures.push(err);
        T::default()
    })
}

/// Feeds each line of `path`, terminator included, to `visit`.
///
/// The file handle is dropped on every exit path, including a decode error
/// halfway through the file.
fn scan_lines<F>(path: &Path, mut visit: F) -> Result<(), StatError>
where
    F: FnMut(&str),
{
    let file = File::open(path).map_err(|err| open_error(path, err))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|err| StatError::unreadable(path, err))?;
        if read == 0 {
            break;
        }
        visit(&line);
    }

    Ok(())
}

fn open_error(path: &Path, err: io::Error) -> StatError {
    if err.kind() == io::ErrorKind::NotFound {
        StatError::FileNotFound(path.to_path_buf())
    } else {
        StatError::unreadable(path, err)
    }
}
