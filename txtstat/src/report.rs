// src/report.rs
use crate::models::{AnalysisTarget, FrequencyTable, Selection, StatisticKind};

/// Renders every selected statistic that has been computed, in canonical
/// order. Kinds whose slot is still unset produce no output.
#[must_use]
pub fn render(target: &AnalysisTarget, kinds: &Selection) -> Vec<String> {
    render_limited(target, kinds, None)
}

/// Like [`render`], but shows at most `frequency_limit` rows of the
/// frequency table.
#[must_use]
pub fn render_limited(
    target: &AnalysisTarget,
    kinds: &Selection,
    frequency_limit: Option<usize>,
) -> Vec<String> {
    let mut lines = Vec::new();

    for &kind in kinds {
        match kind {
            StatisticKind::LineCount => push_count(&mut lines, kind, target.line_count),
            StatisticKind::CharCount => push_count(&mut lines, kind, target.char_count),
            StatisticKind::EmptyLineCount => {
                push_count(&mut lines, kind, target.empty_line_count);
            }
            StatisticKind::FrequencyTable => {
                if let Some(table) = &target.frequency {
                    push_frequency(&mut lines, table, frequency_limit);
                }
            }
        }
    }

    lines
}

fn push_count(lines: &mut Vec<String>, kind: StatisticKind, value: Option<usize>) {
    if let Some(value) = value {
        lines.push(format!("{kind}: {value}"));
    }
}

fn push_frequency(lines: &mut Vec<String>, table: &FrequencyTable, limit: Option<usize>) {
    lines.push(format!("{}:", StatisticKind::FrequencyTable));
    let limit = limit.unwrap_or(usize::MAX);
    for entry in table.sorted().into_iter().take(limit) {
        lines.push(format!("  '{}': {}", display_char(entry.character), entry.count));
    }
}

/// Makes a character visible in a report: control characters are shown
/// escaped (`\n`, `\t`, `\u{1b}`), everything else, space included, as is.
#[must_use]
pub fn display_char(character: char) -> String {
    if character.is_control() {
        character.escape_default().to_string()
    } else {
        character.to_string()
    }
}
