// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Session settings, optionally read from a TOML file.
///
/// ```toml
/// affirmatives = ["yes", "y", "sure"]
/// exit_word = "quit"
/// frequency_limit = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Answers to "Continue?" that keep the session going.
    pub affirmatives: Vec<String>,
    /// Typed at the file prompt to leave.
    pub exit_word: String,
    /// Maximum rows shown in the frequency table.
    pub frequency_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            affirmatives: vec![String::from("yes"), String::from("y")],
            exit_word: String::from("exit"),
            frequency_limit: None,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config
    /// TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or a blank
    /// `exit_word`.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.exit_word.trim().is_empty() {
            bail!("exit_word must not be empty");
        }
        Ok(config)
    }

    #[must_use]
    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim();
        self.affirmatives
            .iter()
            .any(|yes| yes.eq_ignore_ascii_case(answer))
    }

    #[must_use]
    pub fn is_exit(&self, input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(&self.exit_word)
    }
}
