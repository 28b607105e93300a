//! Error types for fmview
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fmview operations
pub type FmResult<T> = Result<T, FmError>;

/// Main error type for fmview operations
#[derive(Error, Debug)]
pub enum FmError {
    /// The feature model path does not resolve to a file
    #[error("feature model not found: {path}")]
    MissingModelFile { path: PathBuf },

    /// The configuration path does not resolve to a file
    #[error("configuration file not found: {path}")]
    MissingConfigFile { path: PathBuf },

    /// The model document has no `struct` container
    #[error("no <struct> element in feature model {path}")]
    MissingStructElement { path: PathBuf },

    /// The XML reader rejected the document
    #[error("invalid XML in {path}: {message}")]
    InvalidXml { path: PathBuf, message: String },

    /// A configuration line is not of the form `<prefix>_<integer>`
    #[error("cannot parse '{content}' as <prefix>_<integer> in {file}:{line}")]
    InvalidConfigLine {
        file: PathBuf,
        line: usize,
        content: String,
    },

    /// Structural nesting exceeds the supported depth
    #[error("feature model nests deeper than {depth} levels")]
    ModelTooDeep { depth: usize },

    /// Malformed settings file
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FmError {
    /// The file an error points at, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            FmError::MissingModelFile { path }
            | FmError::MissingConfigFile { path }
            | FmError::MissingStructElement { path }
            | FmError::InvalidXml { path, .. } => Some(path),
            FmError::InvalidConfigLine { file, .. } | FmError::InvalidSettings { file, .. } => {
                Some(file)
            }
            FmError::ModelTooDeep { .. } | FmError::Io(_) => None,
        }
    }
}
