//! Minimal-model mining
//!
//! The minimal model of a corpus is the set of feature lines that occur in
//! all configurations, or all but `diff_tolerance` of them.

use std::collections::{BTreeSet, HashMap};

use crate::domain::entities::Configuration;
use crate::error::{FmError, FmResult};

/// Features contained in at least `corpus.len() - diff_tolerance` files.
///
/// Frequencies count files, not occurrences: a line repeated inside one file
/// counts once. An empty corpus yields an empty set.
pub fn mine_minimal_features(corpus: &[Configuration], diff_tolerance: usize) -> BTreeSet<String> {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for config in corpus {
        for feature in config.features() {
            *frequency.entry(feature).or_default() += 1;
        }
    }

    let num_configs = corpus.len();
    frequency
        .into_iter()
        .filter(|(_, count)| num_configs - count <= diff_tolerance)
        .map(|(feature, _)| feature.to_string())
        .collect()
}

/// Sums the integer of every `<prefix>_<integer>` line.
///
/// The integer is the token right after the first `_`, so `F_12_extra` adds
/// 12. Every line must carry one, blank lines included. Purely diagnostic.
pub fn sum_of_config(config: &Configuration) -> FmResult<i64> {
    let mut sum = 0i64;
    for (idx, line) in config.lines().iter().enumerate() {
        let value = parse_feature_number(line).ok_or_else(|| FmError::InvalidConfigLine {
            file: config.source().to_path_buf(),
            line: idx + 1,
            content: line.clone(),
        })?;
        sum += value;
    }
    Ok(sum)
}

fn parse_feature_number(line: &str) -> Option<i64> {
    let (_, rest) = line.split_once('_')?;
    let token = rest.split('_').next()?;
    token.trim().parse().ok()
}
