//! Diagnostic listing of every model node

use fmview::application::DumpEntry;
use fmview::Tag;

use crate::ui::primitives::text::ColoredText;
use crate::ui::views::tree::line_color;

pub fn render_dump(entries: &[DumpEntry], supports_color: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        let mut text = format!("{}{}", "  ".repeat(entry.depth), entry.tag_name);
        if !entry.name.is_empty() {
            text.push(' ');
            text.push_str(&entry.name);
        }
        let tags: Vec<&str> = entry.tags.present().iter().map(Tag::as_str).collect();
        if !tags.is_empty() {
            text.push_str(&format!(" [{}]", tags.join(", ")));
        }

        let colored = ColoredText::plain(text);
        let colored = match line_color(entry.tags.has(Tag::Selected), entry.mandatory_declared) {
            Some(color) => colored.with_color(color),
            None => colored,
        };
        out.push_str(&colored.render(supports_color));
        out.push('\n');
    }
    out
}
