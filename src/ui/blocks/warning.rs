use fmview::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Unknown-key warnings from a settings file
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = format!(
        "{} Unknown settings keys",
        Icon::Warning.colored(supports_color, supports_unicode)
    );
    let mut panel = Panel::with_title(title).style(PanelStyle::Warning);
    for warning in warnings {
        panel.add_line(warning.to_string());
    }
    panel.render(supports_color, supports_unicode)
}
