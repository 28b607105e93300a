use std::path::{Path, PathBuf};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// (line number, text, is the offending line)
type ContextLine = (usize, String, bool);

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    line: Option<usize>,
    message: String,
    context: Vec<ContextLine>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            message: message.into(),
            context: Vec::new(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Quotes `before`/`after` lines around the offending line of the file
    pub fn with_file_context(mut self, before: usize, after: usize) -> Self {
        if let (Some(file), Some(line)) = (&self.file, self.line) {
            self.context = read_context(file, line, before, after).unwrap_or_default();
        }
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!("{} ERROR", Icon::Error.colored(supports_color, supports_unicode));
        let mut panel = Panel::with_title(title).style(PanelStyle::Error);

        match (&self.file, self.line) {
            (Some(file), Some(line)) => panel.add_line(format!("{}:{}", file.display(), line)),
            (Some(file), None) => panel.add_line(file.display().to_string()),
            _ => {}
        }
        panel.add_empty();
        panel.add_line(self.message.clone());

        if !self.context.is_empty() {
            panel.add_empty();
            for (no, text, offending) in &self.context {
                let marker = if *offending {
                    Icon::Pointer.render(supports_unicode)
                } else {
                    " "
                };
                let text = if *offending {
                    ColoredText::error(text.clone()).render(supports_color)
                } else {
                    text.clone()
                };
                panel.add_line(format!("{marker} {no:>4} | {text}"));
            }
        }

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {fix}"));
        }

        panel.render(supports_color, supports_unicode)
    }
}

fn read_context(file: &Path, line: usize, before: usize, after: usize) -> Option<Vec<ContextLine>> {
    let content = std::fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let first = line.saturating_sub(before).max(1);
    let last = (line + after).min(lines.len());
    Some(
        (first..=last)
            .map(|no| (no, lines[no - 1].to_string(), no == line))
            .collect(),
    )
}
