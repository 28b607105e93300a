//! Line-sequence projection
//!
//! Flattens a tagged tree into the ordered lines renderers consume. Renderers
//! never see the tree itself.

use serde::Serialize;

use crate::domain::entities::FeatureNode;
use crate::domain::value_objects::{Tag, TagSet};

/// Indentation and naming options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Width of one indentation level
    pub chars: usize,
    /// Filler inside vertical guides
    pub space: char,
    /// Connector drawn in front of a node
    pub connect: char,
    /// Strip structural name prefixes (`A_1_foo` -> `foo`)
    pub strip_prefix: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            chars: 4,
            space: ' ',
            connect: '-',
            strip_prefix: false,
        }
    }
}

/// One rendered feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub depth: usize,
    pub indent: String,
    pub label: String,
    pub tags: TagSet,
    pub mandatory_declared: bool,
}

impl TreeLine {
    /// Indentation followed by the label
    pub fn text(&self) -> String {
        format!("{}{}", self.indent, self.label)
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.tags.has(tag)
    }
}

/// Projects every selected node below the `struct` container.
///
/// The container's children are the feature roots and sit at depth 0.
/// Unselected nodes emit nothing, but their subtrees are still walked.
pub fn project_lines(tree: &FeatureNode, options: &ProjectionOptions) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    for root in tree.child_nodes() {
        project_into(root, 0, options, &mut lines);
    }
    lines
}

/// Projects `node` and its subtree, `node` at depth 0
pub fn project_subtree(node: &FeatureNode, options: &ProjectionOptions) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    project_into(node, 0, options, &mut lines);
    lines
}

fn project_into(node: &FeatureNode, depth: usize, options: &ProjectionOptions, out: &mut Vec<TreeLine>) {
    if node.has(Tag::Selected) {
        let label = if options.strip_prefix {
            strip_prefix(&node.name)
        } else {
            node.name.clone()
        };
        out.push(TreeLine {
            depth,
            indent: indent(depth, options),
            label,
            tags: node.tags,
            mandatory_declared: node.mandatory_declared,
        });
    }
    for child in node.child_nodes() {
        project_into(child, depth + 1, options, out);
    }
}

/// `"|   " * (depth - 1) + "|---"` for the default options
pub fn indent(depth: usize, options: &ProjectionOptions) -> String {
    if depth == 0 {
        return String::new();
    }
    let fill = options.chars.saturating_sub(1);
    let guide: String = std::iter::once('|')
        .chain(std::iter::repeat(options.space).take(fill))
        .collect();
    let connector: String = std::iter::once('|')
        .chain(std::iter::repeat(options.connect).take(fill))
        .collect();
    format!("{}{}", guide.repeat(depth - 1), connector)
}

/// Removes a leading single-uppercase-letter token, then a leading token
/// starting with digits, from an `_`-separated name. A name that would
/// become empty is returned unchanged.
pub fn strip_prefix(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split('_').collect();
    if tokens.first().is_some_and(|t| is_letter_token(t)) {
        tokens.remove(0);
    }
    if tokens.first().is_some_and(|t| starts_with_digit(t)) {
        tokens.remove(0);
    }
    let stripped = tokens.join("_");
    if stripped.is_empty() {
        name.to_string()
    } else {
        stripped
    }
}

fn is_letter_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

fn starts_with_digit(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}
