use std::path::PathBuf;

use anyhow::Result;
use fmview::application::{RenderOptions, RenderUseCase};
use fmview::config::Config;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::tree::render_tree;

/// `fmview render` arguments as parsed from the command line
#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub config: PathBuf,
    pub output: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub corpus: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub diff_tolerance: Option<usize>,
    pub font_size: Option<u32>,
    pub no_svg: bool,
    pub sums: bool,
}

pub fn cmd_render(ui: &UiContext, settings: &Config, args: RenderArgs) -> Result<()> {
    let mut render = settings.render.clone();
    if let Some(size) = args.font_size {
        render.font_size = size;
    }

    let options = RenderOptions {
        model: args.model.unwrap_or_else(|| settings.model.path.clone()),
        config: args.config,
        output: args.output,
        corpus: args.corpus.or_else(|| settings.minimal.corpus.clone()),
        max_depth: args.max_depth.unwrap_or(settings.minimal.max_depth),
        diff_tolerance: args.diff_tolerance.unwrap_or(settings.minimal.diff_tolerance),
        report_sums: args.sums || settings.minimal.report_sums,
        write_svg: !args.no_svg,
    };

    if ui.json {
        emit_event(&StartEvent::new("render"))?;
    }

    let result = RenderUseCase::new(render).execute(&options)?;

    if ui.json {
        emit_event(&CompleteEvent::new("render", &result))?;
        return Ok(());
    }

    print!("{}", render_tree(&result.lines, ui.color));
    if let Some(svg) = &result.svg {
        eprintln!(
            "{} Wrote {}",
            Icon::Success.colored(ui.color, ui.unicode),
            svg.display()
        );
    }
    Ok(())
}
