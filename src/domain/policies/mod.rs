//! Domain Policies
//!
//! Business rules deciding which nodes a propagation pass tags.

mod predicates;

pub use predicates::{MandatoryByDeclaration, MinimalByMembership, SelectedByName};
