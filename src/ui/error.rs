use fmview::FmError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err.downcast_ref::<FmError>() {
        Some(fm) => error_block(fm),
        None => ErrorBlock::new(format!("{err:#}")),
    };
    block.render(supports_color, supports_unicode)
}

fn error_block(err: &FmError) -> ErrorBlock {
    let block = ErrorBlock::new(err.to_string());
    let block = match err.file() {
        Some(file) => block.with_file(file),
        None => block,
    };

    match err {
        FmError::MissingModelFile { .. } => {
            block.with_fix("Pass the model with --model <PATH> or set [model] path in fmview.toml.")
        }
        FmError::MissingConfigFile { .. } => {
            block.with_fix("Check the configuration path; it must name an existing file.")
        }
        FmError::MissingStructElement { .. } => {
            block.with_fix("Feature models declare their features inside a <struct> element.")
        }
        FmError::InvalidXml { .. } => block.with_fix("Fix the XML syntax and try again."),
        FmError::InvalidConfigLine { line, .. } => block
            .with_line(*line)
            .with_file_context(1, 1)
            .with_fix("Sums need every line to look like <prefix>_<integer> (e.g. F_12). Drop --sums to skip them."),
        FmError::ModelTooDeep { .. } => block,
        FmError::InvalidSettings { .. } => {
            block.with_fix("Fix the settings file or point --settings at another one.")
        }
        FmError::Io(_) => block,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut event = ErrorEvent::new(format!("{err:#}"));
        if let Some(file) = err.downcast_ref::<FmError>().and_then(FmError::file) {
            event = event.with_file(file.display().to_string());
        }
        let _ = emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}
