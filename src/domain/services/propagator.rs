//! Attribute propagation engine
//!
//! A pass tags every node that satisfies a predicate, then (when transitive)
//! lifts the tag from children to all their ancestors. One engine serves all
//! three tags; only the predicate differs.

use tracing::debug;

use crate::domain::entities::FeatureNode;
use crate::domain::ports::FeaturePredicate;
use crate::domain::value_objects::{Tag, TagValue};

/// Parameters of one propagation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationPass {
    pub tag: Tag,
    /// Value written when the predicate (or a descendant) says yes
    pub yes: TagValue,
    /// Value written when it says no; `None` leaves the node untouched
    pub no: Option<TagValue>,
    /// Lift yes-values from children to ancestors
    pub transitive: bool,
}

impl PropagationPass {
    /// Transitive pass writing `True` and leaving non-matching nodes unset
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            yes: TagValue::True,
            no: None,
            transitive: true,
        }
    }

    pub fn with_no(mut self, no: TagValue) -> Self {
        self.no = Some(no);
        self
    }

    pub fn non_transitive(mut self) -> Self {
        self.transitive = false;
        self
    }
}

/// Runs one pass over `tree`. Returns whether the root ended up tagged `yes`.
pub fn propagate(tree: &mut FeatureNode, predicate: &dyn FeaturePredicate, pass: PropagationPass) -> bool {
    let mut matched = 0usize;
    tree.for_each_mut(&mut |node| {
        if predicate.evaluate(node) {
            node.tags.set(pass.tag, pass.yes);
            matched += 1;
        } else if let Some(no) = pass.no {
            node.tags.set(pass.tag, no);
        }
    });

    if pass.transitive {
        lift(tree, &pass);
    }

    let root_yes = tree.tag(pass.tag) == pass.yes;
    debug!(
        tag = %pass.tag,
        matched,
        tagged = tree.iter().filter(|n| n.tag(pass.tag) == pass.yes).count(),
        root_yes,
        "propagation pass finished"
    );
    root_yes
}

/// Bottom-up OR. Every child is visited; a branch whose children are all
/// negative falls back to `pass.no` when one is given, otherwise keeps the
/// value its own predicate produced. A branch reports its own final tag
/// rather than its children's OR, so every ancestor of a tagged node is
/// tagged too.
fn lift(node: &mut FeatureNode, pass: &PropagationPass) -> bool {
    let Some(children) = node.children.as_mut() else {
        return node.tags.get(pass.tag) == pass.yes;
    };

    let mut any_child = false;
    for child in children.iter_mut() {
        if lift(child, pass) {
            any_child = true;
        }
    }

    if any_child {
        node.tags.set(pass.tag, pass.yes);
    } else if let Some(no) = pass.no {
        node.tags.set(pass.tag, no);
    }

    node.tags.get(pass.tag) == pass.yes
}
