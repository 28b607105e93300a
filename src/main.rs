//! fmview CLI - feature model viewer
//!
//! Usage: fmview <COMMAND>
//!
//! Commands:
//!   render   Print the selected features as a tree and write the SVG image
//!   minimal  Print the minimal model of a corpus
//!   dump     List every model node with its evaluated tags

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use fmview::presentation::{Cli, Commands};

use crate::ui::blocks::warning::render_config_warnings;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::WarningEvent;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (settings, warnings) = fmview::config::resolve(cli.settings.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &settings);

    if !warnings.is_empty() {
        if ui.json {
            for warning in &warnings {
                emit_event(&WarningEvent::new(&warning.key, warning.to_string()))?;
            }
        } else {
            eprint!("{}", render_config_warnings(&warnings, ui.color, ui.unicode));
        }
    }

    match cli.command {
        Commands::Render {
            config,
            output,
            model,
            corpus,
            max_depth,
            diff_tolerance,
            font_size,
            no_svg,
            sums,
        } => commands::render::cmd_render(
            &ui,
            &settings,
            commands::render::RenderArgs {
                config,
                output,
                model,
                corpus,
                max_depth,
                diff_tolerance,
                font_size,
                no_svg,
                sums,
            },
        ),
        Commands::Minimal {
            dir,
            max_depth,
            diff_tolerance,
            sums,
        } => commands::minimal::cmd_minimal(&ui, &settings, dir, max_depth, diff_tolerance, sums),
        Commands::Dump { model, config } => commands::dump::cmd_dump(&ui, &settings, model, config),
    }
}
