use std::path::PathBuf;

use anyhow::Result;
use fmview::application::{mine_corpus, MinimalOptions};
use fmview::config::Config;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::minimal::{render_minimal, render_summary};

pub fn cmd_minimal(
    ui: &UiContext,
    settings: &Config,
    dir: PathBuf,
    max_depth: Option<usize>,
    diff_tolerance: Option<usize>,
    sums: bool,
) -> Result<()> {
    let options = MinimalOptions {
        dir,
        max_depth: max_depth.unwrap_or(settings.minimal.max_depth),
        diff_tolerance: diff_tolerance.unwrap_or(settings.minimal.diff_tolerance),
        report_sums: sums || settings.minimal.report_sums,
    };

    if ui.json {
        emit_event(&StartEvent::new("minimal"))?;
    }

    let result = mine_corpus(&options)?;

    if ui.json {
        emit_event(&CompleteEvent::new("minimal", &result))?;
        return Ok(());
    }

    print!("{}", render_minimal(&result));
    if ui.verbose > 0 {
        eprintln!("{}", render_summary(&result, options.diff_tolerance));
    }
    Ok(())
}
