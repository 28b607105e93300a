//! Settings loading
//!
//! Resolution order, highest first:
//! 1. CLI flags (applied by the caller)
//! 2. Environment variables (`FMVIEW_*`)
//! 3. Explicit `--settings` file, else `./fmview.toml`
//! 4. User settings (`<config dir>/fmview/config.toml`)
//! 5. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FmError, FmResult};

use super::types::{ColorMode, Config};
use super::ConfigWarning;

/// Project-local settings file name
pub const SETTINGS_FILE: &str = "fmview.toml";

impl Config {
    /// Load settings from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> FmResult<Self> {
        load_with_warnings(path).map(|(config, _)| config)
    }
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys)
pub fn load_with_warnings(path: &Path) -> FmResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FmError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve settings from the explicit file, the working directory, the user
/// directory or defaults, then apply environment overrides.
///
/// A file named explicitly must exist and parse; implicit locations that
/// fail to parse are skipped with a warning.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> FmResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [Some(cwd.join(SETTINGS_FILE)), user_settings_path()];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                debug!(path = %candidate.display(), "Loaded settings");
                return Ok((with_env_overrides(config), warnings));
            }
            Err(e) => warn!(path = %candidate.display(), error = %e, "Ignoring unreadable settings"),
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (`FMVIEW_*` prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(model) = get_env("FMVIEW_MODEL") {
        config.model.path = PathBuf::from(model);
    }

    if let Some(corpus) = get_env("FMVIEW_CORPUS") {
        config.minimal.corpus = Some(PathBuf::from(corpus));
    }

    if let Some(size) = get_env("FMVIEW_FONT_SIZE").and_then(|v| v.trim().parse().ok()) {
        config.render.font_size = size;
    }

    if let Some(depth) = get_env("FMVIEW_MAX_DEPTH").and_then(|v| v.trim().parse().ok()) {
        config.minimal.max_depth = depth;
    }

    if let Some(diff) = get_env("FMVIEW_DIFF_TOLERANCE").and_then(|v| v.trim().parse().ok()) {
        config.minimal.diff_tolerance = diff;
    }

    if let Some(color) = get_env("FMVIEW_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

/// `<config dir>/fmview/config.toml`; `FMVIEW_USER_CONFIG_PATH` overrides it
fn user_settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("FMVIEW_USER_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("fmview/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "model",
        "path",
        "render",
        "font_size",
        "width",
        "indent_chars",
        "space_char",
        "connect_char",
        "strip_prefix_console",
        "strip_prefix_svg",
        "minimal",
        "corpus",
        "max_depth",
        "diff_tolerance",
        "report_sums",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
