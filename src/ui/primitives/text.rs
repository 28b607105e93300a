//! Colored text for the feature tree and status lines

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Error)
    }

    pub fn with_color(mut self, color: SemanticColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        let Some(color) = self.color.filter(|_| supports_color) else {
            return self.text.clone();
        };

        let styled = match color {
            SemanticColor::Success => self.text.as_str().with(theme::colors::SUCCESS),
            SemanticColor::Error => self.text.as_str().with(theme::colors::ERROR),
        };
        format!("{}", styled)
    }
}
