//! Tree builder
//!
//! Projects a parsed model document onto a `FeatureNode` tree. Purely
//! structural: text and `description` elements are dropped, everything else
//! becomes a node. An element with surviving sub-elements is a branch, any
//! other element a leaf.

use crate::domain::entities::{FeatureNode, XmlDocument, XmlElement, XmlNode};
use crate::domain::value_objects::TagSet;

/// Element holding the feature tree
pub const STRUCT_TAG: &str = "struct";

/// Elements carrying prose only
pub const DESCRIPTION_TAG: &str = "description";

/// Deepest nesting accepted before the document is rejected
pub const MAX_TREE_DEPTH: usize = 512;

/// Why a document could not be turned into a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeBuildError {
    /// No `struct` element anywhere in the document
    MissingStruct,
    /// Nesting exceeds [`MAX_TREE_DEPTH`]
    TooDeep,
}

/// Builds the feature tree rooted at the first `struct` element.
///
/// The root always has a `children` field, even when empty.
pub fn build_tree(document: &XmlDocument) -> Result<FeatureNode, TreeBuildError> {
    let structure = document
        .root
        .find_first(STRUCT_TAG)
        .ok_or(TreeBuildError::MissingStruct)?;

    let children = build_children(structure, 1)?;
    Ok(node_from(structure, Some(children)))
}

fn build_children(element: &XmlElement, depth: usize) -> Result<Vec<FeatureNode>, TreeBuildError> {
    if depth > MAX_TREE_DEPTH {
        return Err(TreeBuildError::TooDeep);
    }

    let mut children = Vec::new();
    for child in structural_children(element) {
        if structural_children(child).next().is_some() {
            let grandchildren = build_children(child, depth + 1)?;
            children.push(node_from(child, Some(grandchildren)));
        } else {
            children.push(node_from(child, None));
        }
    }
    Ok(children)
}

/// Child elements that survive the skip filter, in document order
fn structural_children(element: &XmlElement) -> impl Iterator<Item = &XmlElement> {
    element.children.iter().filter_map(|node| match node {
        XmlNode::Element(e) if e.tag != DESCRIPTION_TAG => Some(e),
        _ => None,
    })
}

fn node_from(element: &XmlElement, children: Option<Vec<FeatureNode>>) -> FeatureNode {
    FeatureNode {
        name: element.attr("name").to_string(),
        tag_name: element.tag.clone(),
        mandatory_declared: element.attr("mandatory") == "true",
        children,
        tags: TagSet::default(),
    }
}
