//! Domain Services
//!
//! Pure logic over feature trees and configurations. No I/O.

mod minimal_model;
mod projection;
mod propagator;
mod tree_builder;

pub use minimal_model::{mine_minimal_features, sum_of_config};
pub use projection::{indent, project_lines, project_subtree, strip_prefix, ProjectionOptions, TreeLine};
pub use propagator::{propagate, PropagationPass};
pub use tree_builder::{build_tree, TreeBuildError, DESCRIPTION_TAG, MAX_TREE_DEPTH, STRUCT_TAG};
