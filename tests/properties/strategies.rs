//! Generators shared by the property modules

use proptest::prelude::*;

use fmview::FeatureNode;

/// Short names so that generated configurations hit real nodes
pub fn feature_name() -> impl Strategy<Value = String> {
    "[A-F]"
}

fn node(name: String, mandatory: bool, children: Option<Vec<FeatureNode>>) -> FeatureNode {
    let node = match children {
        Some(children) => FeatureNode::branch(name, children),
        None => FeatureNode::leaf(name),
    };
    if mandatory {
        node.mandatory()
    } else {
        node
    }
}

pub fn feature_subtree() -> impl Strategy<Value = FeatureNode> {
    let leaf = (feature_name(), any::<bool>()).prop_map(|(name, m)| node(name, m, None));
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            feature_name(),
            any::<bool>(),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(name, m, children)| node(name, m, Some(children)))
    })
}

/// A `struct` container over 0..4 feature roots
pub fn feature_tree() -> impl Strategy<Value = FeatureNode> {
    prop::collection::vec(feature_subtree(), 0..4)
        .prop_map(|roots| FeatureNode::branch("", roots).with_tag_name("struct"))
}

pub fn selection() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(feature_name(), 0..4)
}
