use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Status glyphs used in panel titles, status lines and error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pointer,
}

impl Icon {
    /// (unicode glyph, ascii fallback, color)
    fn glyphs(self) -> (&'static str, &'static str, Color) {
        match self {
            Icon::Success => (theme::icons::SUCCESS, theme::icons_ascii::SUCCESS, theme::colors::SUCCESS),
            Icon::Error => (theme::icons::ERROR, theme::icons_ascii::ERROR, theme::colors::ERROR),
            Icon::Warning => (theme::icons::WARNING, theme::icons_ascii::WARNING, theme::colors::WARNING),
            Icon::Pointer => (theme::icons::POINTER, theme::icons_ascii::POINTER, theme::colors::ERROR),
        }
    }

    pub fn render(self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii, _) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.glyphs().2).to_string()
        } else {
            glyph.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallbacks() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Pointer.render(false), "^");
    }

    #[test]
    fn uncolored_icon_is_the_bare_glyph() {
        assert_eq!(Icon::Warning.colored(false, true), "⚠");
        assert!(Icon::Error.colored(true, true).contains("\u{1b}["));
    }
}
