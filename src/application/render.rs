//! Render Use Case
//!
//! The full pipeline: load the model, tag it against the active
//! configuration and the corpus' minimal model, then project it for the
//! console and the SVG image.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::config::RenderConfig;
use crate::domain::entities::FeatureNode;
use crate::domain::policies::{MandatoryByDeclaration, MinimalByMembership, SelectedByName};
use crate::domain::services::{project_lines, propagate, PropagationPass, TreeLine};
use crate::domain::value_objects::Tag;
use crate::error::FmResult;
use crate::infrastructure::{
    atomic_write, load_feature_tree, read_configuration, render_svg, svg_output_path,
};

use super::minimal::{default_corpus_dir, mine_corpus, MinimalOptions, MinimalResult};

/// Options for one render run
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub model: PathBuf,
    /// Active configuration
    pub config: PathBuf,
    /// Explicit image location; the extension is replaced by `.svg`
    pub output: Option<PathBuf>,
    /// Corpus directory; `None` uses the configuration's directory
    pub corpus: Option<PathBuf>,
    pub max_depth: usize,
    pub diff_tolerance: usize,
    pub report_sums: bool,
    pub write_svg: bool,
}

/// Everything a render run produced
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    pub config: PathBuf,
    /// Line count of the active configuration
    pub configured_lines: usize,
    /// Console projection
    pub lines: Vec<TreeLine>,
    pub minimal: MinimalResult,
    /// Written image, if any
    pub svg: Option<PathBuf>,
}

/// Render Use Case
pub struct RenderUseCase {
    render: RenderConfig,
}

impl RenderUseCase {
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Execute the pipeline
    pub fn execute(&self, options: &RenderOptions) -> FmResult<RenderResult> {
        let mut tree = load_feature_tree(&options.model)?;
        let configuration = read_configuration(&options.config)?;

        let selected = SelectedByName::from_configuration(&configuration);
        propagate(&mut tree, &selected, PropagationPass::new(SelectedByName::TAG));
        propagate(&mut tree, &MandatoryByDeclaration, PropagationPass::new(MandatoryByDeclaration::TAG));

        let corpus_dir = options
            .corpus
            .clone()
            .unwrap_or_else(|| default_corpus_dir(&options.config));
        let minimal = mine_corpus(&MinimalOptions {
            dir: corpus_dir,
            max_depth: options.max_depth,
            diff_tolerance: options.diff_tolerance,
            report_sums: options.report_sums,
        })?;
        let membership = MinimalByMembership::new(minimal.features.clone());
        propagate(&mut tree, &membership, PropagationPass::new(MinimalByMembership::TAG));

        log_tag_counts(&tree);

        let lines = project_lines(&tree, &self.render.console_projection());
        let configured_lines = configuration.line_count();

        let svg = if options.write_svg {
            let svg_lines = project_lines(&tree, &self.render.svg_projection());
            let document = render_svg(&svg_lines, configured_lines, &self.render.svg_options());
            let path = svg_output_path(&options.config, options.output.as_deref());
            atomic_write(&path, document.as_bytes())?;
            info!(path = %path.display(), lines = svg_lines.len(), "Wrote SVG");
            Some(path)
        } else {
            None
        };

        Ok(RenderResult {
            config: options.config.clone(),
            configured_lines,
            lines,
            minimal,
            svg,
        })
    }
}

fn log_tag_counts(tree: &FeatureNode) {
    info!(
        selected = tree.count_tagged(Tag::Selected),
        mandatory = tree.count_tagged(Tag::Mandatory),
        minimal = tree.count_tagged(Tag::Minimal),
        "Tagged feature tree"
    );
}
