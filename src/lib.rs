//! fmview - feature model viewer
//!
//! Renders a feature model (FeatureIDE-style XML) annotated with a concrete
//! configuration, and mines the *minimal model* of a corpus of
//! configurations: the features present in (nearly) all of them.
//!
//! Layers:
//! - `domain` - feature tree, propagation engine, miner, projection
//! - `infrastructure` - XML reader, corpus scanning, SVG writer
//! - `application` - render / minimal / dump use cases
//! - `config` - `fmview.toml` settings
//! - `presentation` - CLI definition

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Configuration, FeatureNode};
pub use domain::services::{project_lines, propagate, ProjectionOptions, PropagationPass, TreeLine};
pub use domain::value_objects::{Tag, TagSet, TagValue};
pub use error::{FmError, FmResult};
