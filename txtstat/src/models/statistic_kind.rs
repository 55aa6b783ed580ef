// src/models/statistic_kind.rs
use std::collections::BTreeSet;
use std::fmt;

/// One measurable property of a text file.
///
/// Variants are declared in canonical display order, so the derived `Ord`
/// is the order reports are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatisticKind {
    LineCount,
    CharCount,
    EmptyLineCount,
    FrequencyTable,
}

/// A set of requested statistics. Iterates in canonical order regardless of
/// the order the kinds were inserted in.
pub type Selection = BTreeSet<StatisticKind>;

impl StatisticKind {
    pub const ALL: [Self; 4] = [
        Self::LineCount,
        Self::CharCount,
        Self::EmptyLineCount,
        Self::FrequencyTable,
    ];

    /// Menu code for this kind (`"1"` to `"4"`).
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::LineCount => "1",
            Self::CharCount => "2",
            Self::EmptyLineCount => "3",
            Self::FrequencyTable => "4",
        }
    }

    #[inline]
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LineCount => "Line count",
            Self::CharCount => "Character count",
            Self::EmptyLineCount => "Empty line count",
            Self::FrequencyTable => "Character frequency",
        }
    }

    #[inline]
    #[must_use]
    pub fn all() -> Selection {
        Self::ALL.into_iter().collect()
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
