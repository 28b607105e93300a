//! FeaturePredicate port - the per-node test of a propagation pass
//!
//! The propagation engine is generic; what a pass tags is decided entirely
//! by the predicate it is given. Implementations live in `domain::policies`.

use crate::domain::entities::FeatureNode;

/// Decides whether a single node satisfies a pass, ignoring its subtree
pub trait FeaturePredicate {
    fn evaluate(&self, node: &FeatureNode) -> bool;
}

impl<F> FeaturePredicate for F
where
    F: Fn(&FeatureNode) -> bool,
{
    fn evaluate(&self, node: &FeatureNode) -> bool {
        self(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_predicate_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn FeaturePredicate) {}
    }

    #[test]
    fn closures_are_predicates() {
        let p = |n: &FeatureNode| n.name.starts_with('A');
        assert!(p.evaluate(&FeatureNode::leaf("Alpha")));
        assert!(!p.evaluate(&FeatureNode::leaf("Beta")));
    }
}
