use std::path::PathBuf;

use anyhow::Result;
use fmview::application::{dump_model, DumpOptions};
use fmview::config::Config;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::dump::render_dump;

pub fn cmd_dump(ui: &UiContext, settings: &Config, model: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let options = DumpOptions {
        model: model.unwrap_or_else(|| settings.model.path.clone()),
        config,
    };

    if ui.json {
        emit_event(&StartEvent::new("dump"))?;
    }

    let entries = dump_model(&options)?;

    if ui.json {
        emit_event(&CompleteEvent::new("dump", &entries))?;
    } else {
        print!("{}", render_dump(&entries, ui.color));
    }
    Ok(())
}
