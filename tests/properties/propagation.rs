//! Property tests for the propagation engine.

use proptest::prelude::*;

use fmview::domain::policies::{MandatoryByDeclaration, SelectedByName};
use fmview::{propagate, FeatureNode, PropagationPass, Tag};

use crate::strategies::{feature_tree, selection};

/// Every branch with a tagged child is tagged itself
fn ancestors_cover_descendants(node: &FeatureNode, tag: Tag) -> bool {
    node.child_nodes().iter().all(|child| {
        (!child.has(tag) || node.has(tag)) && ancestors_cover_descendants(child, tag)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any descendant tagged yes implies every ancestor is tagged yes.
    #[test]
    fn property_selected_is_monotonic(
        mut tree in feature_tree(),
        names in selection()
    ) {
        propagate(&mut tree, &SelectedByName::new(names), PropagationPass::new(Tag::Selected));
        prop_assert!(ancestors_cover_descendants(&tree, Tag::Selected));
    }

    /// PROPERTY: declared-mandatory lifting is monotonic too.
    #[test]
    fn property_mandatory_is_monotonic(mut tree in feature_tree()) {
        propagate(&mut tree, &MandatoryByDeclaration, PropagationPass::new(Tag::Mandatory));
        prop_assert!(ancestors_cover_descendants(&tree, Tag::Mandatory));
    }

    /// PROPERTY: a repeated pass changes nothing.
    #[test]
    fn property_pass_is_idempotent(
        mut tree in feature_tree(),
        names in selection()
    ) {
        let predicate = SelectedByName::new(names);
        let first = propagate(&mut tree, &predicate, PropagationPass::new(Tag::Selected));
        let once = tree.clone();
        let second = propagate(&mut tree, &predicate, PropagationPass::new(Tag::Selected));

        prop_assert_eq!(first, second);
        prop_assert_eq!(once, tree);
    }

    /// PROPERTY: the return value reports the root's final tag.
    #[test]
    fn property_return_matches_root(
        mut tree in feature_tree(),
        names in selection()
    ) {
        let root_yes = propagate(&mut tree, &SelectedByName::new(names), PropagationPass::new(Tag::Selected));
        prop_assert_eq!(root_yes, tree.has(Tag::Selected));
    }

    /// PROPERTY: passes on different tags never touch each other.
    #[test]
    fn property_passes_are_independent(
        mut tree in feature_tree(),
        names in selection()
    ) {
        let mut mandatory_only = tree.clone();
        propagate(&mut mandatory_only, &MandatoryByDeclaration, PropagationPass::new(Tag::Mandatory));

        propagate(&mut tree, &SelectedByName::new(names), PropagationPass::new(Tag::Selected));
        propagate(&mut tree, &MandatoryByDeclaration, PropagationPass::new(Tag::Mandatory));

        let both: Vec<_> = tree.iter().map(|n| n.tag(Tag::Mandatory)).collect();
        let alone: Vec<_> = mandatory_only.iter().map(|n| n.tag(Tag::Mandatory)).collect();
        prop_assert_eq!(both, alone);
    }
}
