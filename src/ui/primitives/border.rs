use crate::ui::theme;

/// The six glyphs a panel frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl Frame {
    /// Rounded box drawing glyphs, or `+-|` when Unicode is unavailable
    pub fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::CORNER,
                top_right: theme::borders_ascii::CORNER,
                bottom_left: theme::borders_ascii::CORNER,
                bottom_right: theme::borders_ascii::CORNER,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }

    pub fn top(&self, width: usize) -> String {
        format!("{}{}{}", self.top_left, self.horizontal.repeat(width), self.top_right)
    }

    pub fn bottom(&self, width: usize) -> String {
        format!("{}{}{}", self.bottom_left, self.horizontal.repeat(width), self.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_frame_uses_plus_corners() {
        let frame = Frame::for_terminal(false);
        assert_eq!(frame.top(3), "+---+");
        assert_eq!(frame.vertical, "|");
    }

    #[test]
    fn unicode_frame_is_rounded() {
        assert_eq!(Frame::for_terminal(true).bottom(1), "╰─╯");
    }
}
