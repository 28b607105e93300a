//! Bordered panel used by error and warning blocks

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::Frame;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    rows: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Adds one row per line of `text`
    pub fn add_line(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.rows.extend(text.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.rows.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .chain(self.rows.iter())
            .map(String::as_str)
            .collect();
        let inner = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;

        let frame = Frame::for_terminal(supports_unicode);
        let v = self.paint(frame.vertical, supports_color);

        let mut out = self.paint(&frame.top(inner), supports_color);
        out.push('\n');
        for row in rows {
            let pad = inner - 1 - visible_width(row);
            out.push_str(&format!("{v} {row}{}{v}\n", " ".repeat(pad)));
        }
        out.push_str(&self.paint(&frame.bottom(inner), supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Warning => theme::colors::WARNING,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

/// Display width ignoring ANSI CSI sequences
fn visible_width(s: &str) -> usize {
    if !s.contains('\u{1b}') {
        return s.width();
    }

    let mut plain = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain.width()
}
