//! Minimal Use Case
//!
//! Scans a corpus directory and mines the features shared by (nearly) all of
//! its configurations.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::domain::services::{mine_minimal_features, sum_of_config};
use crate::error::FmResult;
use crate::infrastructure::{collect_configs, read_corpus, DEFAULT_MAX_DEPTH};

/// Options for mining a corpus
#[derive(Debug, Clone)]
pub struct MinimalOptions {
    /// Corpus directory, or a single `.config` file
    pub dir: PathBuf,
    /// Directory levels descended below `dir`
    pub max_depth: usize,
    /// Files a feature may be missing from and still qualify
    pub diff_tolerance: usize,
    /// Compute the `<prefix>_<integer>` sum of every file
    pub report_sums: bool,
}

impl MinimalOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            diff_tolerance: 0,
            report_sums: false,
        }
    }
}

/// Diagnostic sum of one corpus file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSum {
    pub file: PathBuf,
    pub sum: i64,
}

/// Result of mining a corpus
#[derive(Debug, Clone, Default, Serialize)]
pub struct MinimalResult {
    /// Configuration files in scan order
    pub files: Vec<PathBuf>,
    /// The minimal model
    pub features: BTreeSet<String>,
    /// Per-file sums, empty unless requested
    pub sums: Vec<ConfigSum>,
}

/// Collects, reads and mines the corpus described by `options`
pub fn mine_corpus(options: &MinimalOptions) -> FmResult<MinimalResult> {
    let files = collect_configs(&options.dir, options.max_depth)?;
    let corpus = read_corpus(&files)?;

    let mut sums = Vec::new();
    if options.report_sums {
        for config in &corpus {
            let sum = sum_of_config(config)?;
            info!(file = %config.source().display(), sum, "Configuration sum");
            sums.push(ConfigSum {
                file: config.source().to_path_buf(),
                sum,
            });
        }
    }

    let features = mine_minimal_features(&corpus, options.diff_tolerance);
    info!(
        dir = %options.dir.display(),
        files = corpus.len(),
        features = features.len(),
        diff_tolerance = options.diff_tolerance,
        "Mined minimal model"
    );

    Ok(MinimalResult {
        files,
        features,
        sums,
    })
}

/// Default corpus: the directory holding the active configuration
pub fn default_corpus_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
