//! SVG rendering of projected tree lines

use std::path::{Path, PathBuf};

use crate::domain::services::TreeLine;
use crate::domain::value_objects::Tag;

pub const DEFAULT_FONT_SIZE: u32 = 15;
pub const DEFAULT_WIDTH: u32 = 350;

const TEXT_X: u32 = 5;

/// Image geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    pub font_size: u32,
    pub width: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            width: DEFAULT_WIDTH,
        }
    }
}

impl SvgOptions {
    /// Distance between two baselines
    pub fn line_height(&self) -> u32 {
        self.font_size + 1
    }

    /// Height sized from the active configuration's line count
    pub fn height_for(&self, configured_lines: usize) -> u64 {
        (f64::from(self.line_height()) * configured_lines as f64 * 1.3).round() as u64
    }
}

/// Fill color: minimal wins over mandatory
pub fn fill_for(line: &TreeLine) -> &'static str {
    if line.has(Tag::Minimal) {
        "green"
    } else if line.has(Tag::Mandatory) {
        "black"
    } else {
        "blue"
    }
}

/// Renders `lines` as a standalone SVG document.
///
/// `configured_lines` is the number of lines in the active configuration
/// and only drives the image height.
pub fn render_svg(lines: &[TreeLine], configured_lines: usize, options: &SvgOptions) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" baseProfile=\"full\" width=\"{}\" height=\"{}\" xml:space=\"preserve\">\n",
        options.width,
        options.height_for(configured_lines)
    ));
    for (idx, line) in lines.iter().enumerate() {
        let y = (idx as u64 + 1) * u64::from(options.line_height());
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" fill=\"{}\" style=\"font-size: {}px;\">{}</text>\n",
            TEXT_X,
            y,
            fill_for(line),
            options.font_size,
            escape_text(&line.text())
        ));
    }
    out.push_str("</svg>\n");
    out
}

/// Image path for a configuration: the part of its file name before the
/// first `.`, next to it, with `.svg` appended. An explicit output name is
/// treated the same way.
pub fn svg_output_path(config_path: &Path, explicit: Option<&Path>) -> PathBuf {
    let base = explicit.unwrap_or(config_path);
    let file_name = base.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let stem = file_name.split('.').next().filter(|s| !s.is_empty()).unwrap_or("tree");
    base.with_file_name(format!("{stem}.svg"))
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{TagSet, TagValue};

    fn line(label: &str, depth: usize, tags: &[Tag]) -> TreeLine {
        let mut set = TagSet::default();
        for t in tags {
            set.set(*t, TagValue::True);
        }
        TreeLine {
            depth,
            indent: crate::domain::services::indent(depth, &Default::default()),
            label: label.to_string(),
            tags: set,
            mandatory_declared: false,
        }
    }

    #[test]
    fn height_uses_configured_line_count() {
        let opts = SvgOptions::default();
        // 16 * 3 * 1.3 = 62.4
        assert_eq!(opts.height_for(3), 62);
        // 16 * 5 * 1.3 = 104
        assert_eq!(opts.height_for(5), 104);
        assert_eq!(opts.height_for(0), 0);
    }

    #[test]
    fn fill_precedence() {
        assert_eq!(fill_for(&line("a", 0, &[Tag::Selected, Tag::Minimal, Tag::Mandatory])), "green");
        assert_eq!(fill_for(&line("a", 0, &[Tag::Selected, Tag::Mandatory])), "black");
        assert_eq!(fill_for(&line("a", 0, &[Tag::Selected])), "blue");
    }

    #[test]
    fn one_text_element_per_line() {
        let lines = vec![line("Root", 0, &[Tag::Selected]), line("A&B", 1, &[Tag::Selected, Tag::Minimal])];
        let svg = render_svg(&lines, 2, &SvgOptions::default());

        assert!(svg.contains("width=\"350\""));
        assert!(svg.contains("height=\"42\""));
        assert_eq!(svg.matches("<text ").count(), 2);
        assert!(svg.contains("y=\"16\" fill=\"blue\""));
        assert!(svg.contains("y=\"32\" fill=\"green\""));
        assert!(svg.contains(">|---A&amp;B</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn output_path_follows_configuration_name() {
        assert_eq!(
            svg_output_path(Path::new("configs/product.v2.config"), None),
            PathBuf::from("configs/product.svg")
        );
        assert_eq!(
            svg_output_path(Path::new("a.config"), Some(Path::new("out/picture.png"))),
            PathBuf::from("out/picture.svg")
        );
    }
}
