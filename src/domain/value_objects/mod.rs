//! Domain Value Objects
//!
//! Immutable value types with no identity.
//! - `Tag`, `TagValue`, `TagSet` - evaluated node attributes
//! - `ConfigWarning` - non-fatal settings diagnostics

mod config_warning;
mod tag;

pub use config_warning::ConfigWarning;
pub use tag::{Tag, TagSet, TagValue};
