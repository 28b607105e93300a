//! Feature node entity
//!
//! One structural element of a feature model. Nodes are built once per run
//! by the tree builder and then tagged in place by propagation passes.

use serde::Serialize;

use crate::domain::value_objects::{Tag, TagSet, TagValue};

/// A feature (or feature group) of the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureNode {
    /// Value of the `name` attribute; empty for wrapper elements
    pub name: String,
    /// XML element name (`struct`, `and`, `alt`, `feature`, ...)
    pub tag_name: String,
    /// The model's own `mandatory="true"` declaration
    pub mandatory_declared: bool,
    /// `None` for leaves. A leaf never acts as a branch during propagation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FeatureNode>>,
    pub tags: TagSet,
}

impl FeatureNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_name: "feature".to_string(),
            mandatory_declared: false,
            children: None,
            tags: TagSet::default(),
        }
    }

    pub fn branch(name: impl Into<String>, children: Vec<FeatureNode>) -> Self {
        Self {
            children: Some(children),
            tag_name: "and".to_string(),
            ..Self::leaf(name)
        }
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory_declared = true;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Children as a slice; empty for leaves
    pub fn child_nodes(&self) -> &[FeatureNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn tag(&self, tag: Tag) -> TagValue {
        self.tags.get(tag)
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.tags.has(tag)
    }

    /// Every node in pre-order (self first, then children depth-first)
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Visits every node mutably in pre-order
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut FeatureNode)) {
        f(self);
        if let Some(children) = self.children.as_mut() {
            for child in children {
                child.for_each_mut(f);
            }
        }
    }

    /// Number of nodes with `tag == True`
    pub fn count_tagged(&self, tag: Tag) -> usize {
        self.iter().filter(|n| n.has(tag)).count()
    }

    /// Finds the first node with the given name in pre-order
    pub fn find(&self, name: &str) -> Option<&FeatureNode> {
        self.iter().find(|n| n.name == name)
    }
}

/// Pre-order iterator over a feature tree
pub struct PreOrder<'a> {
    stack: Vec<&'a FeatureNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a FeatureNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureNode {
        FeatureNode::branch(
            "",
            vec![
                FeatureNode::branch("Root", vec![FeatureNode::leaf("A"), FeatureNode::leaf("B")]),
                FeatureNode::leaf("C"),
            ],
        )
        .with_tag_name("struct")
    }

    #[test]
    fn iter_is_pre_order() {
        let tree = sample();
        let names: Vec<&str> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["", "Root", "A", "B", "C"]);
    }

    #[test]
    fn leaf_has_no_children_field() {
        let leaf = FeatureNode::leaf("A");
        assert!(leaf.is_leaf());
        assert!(leaf.child_nodes().is_empty());

        let empty_branch = FeatureNode::branch("B", vec![]);
        assert!(!empty_branch.is_leaf());
    }

    #[test]
    fn for_each_mut_visits_every_node() {
        let mut tree = sample();
        tree.for_each_mut(&mut |n| n.tags.set(Tag::Minimal, TagValue::False));
        assert!(tree.iter().all(|n| n.tag(Tag::Minimal) == TagValue::False));
    }

    #[test]
    fn find_by_name() {
        let tree = sample();
        assert!(tree.find("B").unwrap().is_leaf());
        assert!(tree.find("missing").is_none());
    }
}
