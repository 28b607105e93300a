//! Tagging predicates
//!
//! The three strategies used by a render run, one per tag.

use std::collections::{BTreeSet, HashSet};

use crate::domain::entities::{Configuration, FeatureNode};
use crate::domain::ports::FeaturePredicate;
use crate::domain::value_objects::Tag;

/// A node is selected when its name appears in the active configuration
#[derive(Debug, Clone, Default)]
pub struct SelectedByName {
    names: HashSet<String>,
}

impl SelectedByName {
    pub const TAG: Tag = Tag::Selected;

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Blank lines are not feature names and never select unnamed wrappers
    pub fn from_configuration(config: &Configuration) -> Self {
        Self::new(config.features())
    }
}

impl FeaturePredicate for SelectedByName {
    fn evaluate(&self, node: &FeatureNode) -> bool {
        self.names.contains(&node.name)
    }
}

/// A node is mandatory when the model declares `mandatory="true"` on it.
///
/// Driven by the model alone; the active configuration plays no part.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatoryByDeclaration;

impl MandatoryByDeclaration {
    pub const TAG: Tag = Tag::Mandatory;
}

impl FeaturePredicate for MandatoryByDeclaration {
    fn evaluate(&self, node: &FeatureNode) -> bool {
        node.mandatory_declared
    }
}

/// A node is minimal when its name is part of the mined minimal model
#[derive(Debug, Clone, Default)]
pub struct MinimalByMembership {
    features: BTreeSet<String>,
}

impl MinimalByMembership {
    pub const TAG: Tag = Tag::Minimal;

    pub fn new(features: BTreeSet<String>) -> Self {
        Self { features }
    }
}

impl FeaturePredicate for MinimalByMembership {
    fn evaluate(&self, node: &FeatureNode) -> bool {
        self.features.contains(&node.name)
    }
}
