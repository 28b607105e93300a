//! Dump Use Case
//!
//! Lists every node of the model with its element name and evaluated tags.
//! Unlike the projection, unselected nodes and the `struct` container are
//! included.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::FeatureNode;
use crate::domain::policies::{MandatoryByDeclaration, SelectedByName};
use crate::domain::services::{propagate, PropagationPass};
use crate::domain::value_objects::TagSet;
use crate::error::FmResult;
use crate::infrastructure::{load_feature_tree, read_configuration};

#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub model: PathBuf,
    /// Configuration to evaluate `selected` against
    pub config: Option<PathBuf>,
}

/// One node of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpEntry {
    pub depth: usize,
    pub tag_name: String,
    pub name: String,
    pub mandatory_declared: bool,
    pub leaf: bool,
    pub tags: TagSet,
}

pub fn dump_model(options: &DumpOptions) -> FmResult<Vec<DumpEntry>> {
    let mut tree = load_feature_tree(&options.model)?;

    if let Some(path) = &options.config {
        let configuration = read_configuration(path)?;
        let selected = SelectedByName::from_configuration(&configuration);
        propagate(&mut tree, &selected, PropagationPass::new(SelectedByName::TAG));
    }
    propagate(&mut tree, &MandatoryByDeclaration, PropagationPass::new(MandatoryByDeclaration::TAG));

    let mut entries = Vec::new();
    flatten(&tree, 0, &mut entries);
    Ok(entries)
}

fn flatten(node: &FeatureNode, depth: usize, out: &mut Vec<DumpEntry>) {
    out.push(DumpEntry {
        depth,
        tag_name: node.tag_name.clone(),
        name: node.name.clone(),
        mandatory_declared: node.mandatory_declared,
        leaf: node.is_leaf(),
        tags: node.tags,
    });
    for child in node.child_nodes() {
        flatten(child, depth + 1, out);
    }
}
