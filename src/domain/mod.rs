//! Domain Layer
//!
//! The core of fmview - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Feature tree, parsed document, configuration
//! - `value_objects/` - Tags and settings warnings
//! - `services/` - Tree builder, propagation engine, miner, projection
//! - `policies/` - The predicates deciding what each pass tags
//! - `ports/` - Interface definitions

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
