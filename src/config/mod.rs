//! Settings for fmview
//!
//! `fmview.toml` tunes rendering and mining defaults; CLI flags still win.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load_with_warnings, resolve, with_env_overrides, SETTINGS_FILE};
pub use types::{ColorMode, Config, MinimalConfig, ModelConfig, OutputConfig, RenderConfig};
