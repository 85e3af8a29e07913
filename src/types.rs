// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for pgd-sweep

use serde::{Deserialize, Serialize};
use std::fmt;

/// One attack configuration, identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigEntry(String);

impl ConfigEntry {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self(file_name.into())
    }

    pub fn file_name(&self) -> &str {
        &self.0
    }

    /// Step-count label shown in the progress line.
    ///
    /// Takes the three characters that end five characters before the end
    /// of the name (`..._n100.json` gives `100`, `..._n50.json` gives `n50`).
    /// Offsets are counted in characters and clamp at the start of the
    /// name, so short names yield a shorter or empty label. Names with a
    /// four-digit step count are cut off; the slice is positional, not parsed.
    pub fn step_label(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let start = chars.len().saturating_sub(8);
        let end = chars.len().saturating_sub(5);
        if start >= end {
            return String::new();
        }
        chars[start..end].iter().collect()
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConfigEntry {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A fully resolved external command for one configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// The last argument, which is always the config path.
    pub fn config_path(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    /// Shell-style rendering for progress and dry-run output.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
