//! Settings warning value object.

use std::path::PathBuf;

/// Non-fatal settings warning surfaced to CLI users (e.g. an unknown key in
/// `fmview.toml`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The settings file the key was found in
    pub file: PathBuf,
    /// 1-indexed line number, if the key could be located
    pub line: Option<usize>,
    /// Closest known key, if any
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "font_sise".to_string(),
            file: PathBuf::from("fmview.toml"),
            line: Some(3),
            suggestion: Some("font_size".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown key 'font_sise' in fmview.toml:3 (did you mean 'font_size'?)"
        );
    }
}
