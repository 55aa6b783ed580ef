// src/session.rs
use anyhow::{Context as _, Result};
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{TextAnalyzer, validate_file};
use crate::menu::{MenuChoice, menu_lines, parse_choice};
use crate::models::Selection;
use crate::report::render_limited;

/// The interactive read-eval loop: pick a file, pick statistics, show
/// them, repeat.
///
/// Input and output are injected so the whole loop can run against
/// in-memory buffers.
pub struct Session<R, W> {
    input: R,
    output: W,
    analyzer: TextAnalyzer,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            analyzer: TextAnalyzer::new(),
            config,
        }
    }

    /// Runs until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Only fails when the terminal itself cannot be read or written.
    /// Problems with the chosen file or the menu input are reported and
    /// the user is asked again.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");

        loop {
            let Some(path) = self.prompt_file()? else {
                return self.say("Exiting.");
            };
            self.analyzer.set_target(path);

            let kinds = match self.prompt_menu()? {
                Some(MenuChoice::Analyze(kinds)) => kinds,
                Some(MenuChoice::Quit) | None => return self.say("Exiting."),
            };
            self.report(&kinds)?;

            if !self.prompt_continue()? {
                return self.say("Goodbye!");
            }
        }
    }

    /// Asks for a file until a usable one is given. `None` means the user
    /// typed the exit word or input ended.
    fn prompt_file(&mut self) -> Result<Option<PathBuf>> {
        loop {
            let prompt = format!(
                "Enter filename to analyze (or '{}' to quit): ",
                self.config.exit_word
            );
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if self.config.is_exit(&answer) {
                return Ok(None);
            }

            let path = PathBuf::from(answer.trim());
            match validate_file(&path) {
                Ok(()) => {
                    info!("Selected {}", path.display());
                    return Ok(Some(path));
                }
                Err(err) => self.say(&format!("Error: {err}"))?,
            }
        }
    }

    fn prompt_menu(&mut self) -> Result<Option<MenuChoice>> {
        self.say("")?;
        for line in menu_lines() {
            self.say(&line)?;
        }
        self.say("")?;

        loop {
            let Some(answer) = self.ask("Enter option numbers (comma-separated): ")? else {
                return Ok(None);
            };
            match parse_choice(&answer) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => self.say(&format!("Error: {err}. Please try again."))?,
            }
        }
    }

    fn report(&mut self, kinds: &Selection) -> Result<()> {
        let failures = self.analyzer.analyze(kinds);
        for err in &failures {
            self.say(&format!("Error: {err}"))?;
        }

        let lines = render_limited(self.analyzer.target(), kinds, self.config.frequency_limit);
        for line in &lines {
            self.say(line)?;
        }
        self.say("")
    }

    fn prompt_continue(&mut self) -> Result<bool> {
        Ok(self
            .ask("Continue? (yes/no): ")?
            .is_some_and(|answer| self.config.is_affirmative(&answer)))
    }

    /// Writes `prompt` and reads one line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output).context("Failed to write output")?;
            return Ok(None);
        }
        Ok(Some(answer.trim().to_owned()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write output")
    }
}
