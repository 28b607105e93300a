//! Settings types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::services::ProjectionOptions;
use crate::infrastructure::svg::{SvgOptions, DEFAULT_FONT_SIZE, DEFAULT_WIDTH};
use crate::infrastructure::DEFAULT_MAX_DEPTH;

/// Feature model location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model.xml")
}

/// Console and image rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_indent_chars")]
    pub indent_chars: usize,

    #[serde(default = "default_space_char")]
    pub space_char: char,

    #[serde(default = "default_connect_char")]
    pub connect_char: char,

    #[serde(default)]
    pub strip_prefix_console: bool,

    #[serde(default = "default_true")]
    pub strip_prefix_svg: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            width: default_width(),
            indent_chars: default_indent_chars(),
            space_char: default_space_char(),
            connect_char: default_connect_char(),
            strip_prefix_console: false,
            strip_prefix_svg: true,
        }
    }
}

impl RenderConfig {
    pub fn console_projection(&self) -> ProjectionOptions {
        self.projection(self.strip_prefix_console)
    }

    pub fn svg_projection(&self) -> ProjectionOptions {
        self.projection(self.strip_prefix_svg)
    }

    fn projection(&self, strip_prefix: bool) -> ProjectionOptions {
        ProjectionOptions {
            chars: self.indent_chars,
            space: self.space_char,
            connect: self.connect_char,
            strip_prefix,
        }
    }

    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            font_size: self.font_size,
            width: self.width,
        }
    }
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_indent_chars() -> usize {
    4
}

fn default_space_char() -> char {
    ' '
}

fn default_connect_char() -> char {
    '-'
}

fn default_true() -> bool {
    true
}

/// Minimal-model mining
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimalConfig {
    /// Corpus directory; defaults to the active configuration's directory
    #[serde(default)]
    pub corpus: Option<PathBuf>,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub diff_tolerance: usize,

    /// Log the `<prefix>_<integer>` sum of every corpus file
    #[serde(default)]
    pub report_sums: bool,
}

impl Default for MinimalConfig {
    fn default() -> Self {
        Self {
            corpus: None,
            max_depth: default_max_depth(),
            diff_tolerance: 0,
            report_sums: false,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Main settings structure (`fmview.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub minimal: MinimalConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
