//! Configuration entity
//!
//! A configuration file is a flat list of feature names, one per line.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One configuration file, read once and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    source: PathBuf,
    lines: Vec<String>,
}

impl Configuration {
    /// Builds a configuration from raw file content. Lines are trimmed.
    pub fn from_content(source: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            source: source.into(),
            lines: content.lines().map(|l| l.trim().to_string()).collect(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Trimmed lines in file order, blank lines included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the file (used for sizing the SVG)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Distinct non-blank lines
    pub fn features(&self) -> BTreeSet<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| !l.is_empty())
            .collect()
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.lines.iter().any(|l| l == feature)
    }
}
