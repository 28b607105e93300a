//! Design tokens for the fmview terminal UI.
//!
//! Icons and borders are sourced from here only; every glyph has an ASCII
//! fallback for terminals without Unicode.

pub mod colors {
    use crossterm::style::Color;

    /// Selected features, success icons
    pub const SUCCESS: Color = Color::Green;
    /// Declared-mandatory features, errors
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "↑";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = "^";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const CORNER: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
