//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.

pub mod feature_predicate;

pub use feature_predicate::FeaturePredicate;
