//! Console rendering of the projected feature tree

use fmview::{Tag, TreeLine};

use crate::ui::primitives::text::{ColoredText, SemanticColor};

/// Selected wins over declared-mandatory; everything else stays plain
pub fn line_color(selected: bool, mandatory_declared: bool) -> Option<SemanticColor> {
    if selected {
        Some(SemanticColor::Success)
    } else if mandatory_declared {
        Some(SemanticColor::Error)
    } else {
        None
    }
}

pub fn render_tree(lines: &[TreeLine], supports_color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        let text = ColoredText::plain(line.text());
        let text = match line_color(line.has(Tag::Selected), line.mandatory_declared) {
            Some(color) => text.with_color(color),
            None => text,
        };
        out.push_str(&text.render(supports_color));
        out.push('\n');
    }
    out
}
