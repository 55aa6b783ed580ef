// src/menu.rs
use crate::error::StatError;
use crate::models::{Selection, StatisticKind};

pub const ALL_CODE: &str = "5";
pub const QUIT_CODE: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    Analyze(Selection),
}

/// Banner and option list shown before the selection prompt.
#[must_use]
pub fn menu_lines() -> Vec<String> {
    let rule = "=".repeat(50);
    let mut lines = vec![
        rule.clone(),
        String::from("TEXT FILE ANALYZER"),
        rule,
        String::new(),
        String::from("Choose statistics to compute:"),
    ];
    for kind in StatisticKind::ALL {
        lines.push(format!("  {}. {kind}", kind.code()));
    }
    lines.push(format!("  {ALL_CODE}. All statistics"));
    lines.push(format!("  {QUIT_CODE}. Quit"));
    lines
}

/// Parses a comma-separated list of option codes.
///
/// `0` and `5` are only accepted on their own. Whitespace around codes is
/// ignored and repeated codes collapse.
///
/// # Errors
///
/// Returns [`StatError::InvalidMenuSelection`] for unknown codes, empty
/// entries, or `0`/`5` combined with anything else.
pub fn parse_choice(input: &str) -> Result<MenuChoice, StatError> {
    let input = input.trim();
    match input {
        QUIT_CODE => return Ok(MenuChoice::Quit),
        ALL_CODE => return Ok(MenuChoice::Analyze(StatisticKind::all())),
        _ => {}
    }

    input
        .split(',')
        .map(|code| StatisticKind::from_code(code.trim()))
        .collect::<Option<Selection>>()
        .map(MenuChoice::Analyze)
        .ok_or_else(|| StatError::InvalidMenuSelection(input.to_owned()))
}
