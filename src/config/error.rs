//! Configuration errors and validation reporting.
//!
//! Validation walks every section and collects problems instead of
//! stopping at the first one, so a broken `altmap.toml` is reported in
//! full on a single run.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Dotted key of a config setting, e.g. `build.content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPath(&'static str);

impl KeyPath {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Errors raised while loading `altmap.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    // Deliberately no #[from]: the report Display already carries
    // everything, a source() chain would print it twice
    #[error("{0}")]
    Invalid(ValidationReport),
}

/// One validation problem, tied to the setting that caused it.
#[derive(Debug, Clone)]
pub struct Problem {
    pub key: KeyPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = "→".red();
        writeln!(f, "[{}]", self.key.as_str().cyan())?;
        write!(f, "{arrow} {}", self.message)?;
        match &self.hint {
            Some(hint) => write!(f, "\n  {} {hint}", "hint:".yellow()),
            None => Ok(()),
        }
    }
}

/// Problems collected across all config sections.
#[derive(Debug, Default)]
pub struct ValidationReport {
    problems: Vec<Problem>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: KeyPath, message: impl Into<String>) {
        self.problems.push(Problem {
            key,
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(
        &mut self,
        key: KeyPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.problems.push(Problem {
            key,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.problems.is_empty()
    }

    /// `Err(self)` when anything was collected, so validation reads as
    /// `report.finish()?` at the call site.
    pub fn finish(self) -> Result<(), Self> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "invalid configuration:".red().bold())?;
        for problem in &self.problems {
            write!(f, "\n\n{problem}")?;
        }
        if self.problems.len() > 1 {
            let tally = format!("{} problems in total", self.problems.len());
            write!(f, "\n\n{}", tally.dimmed())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
