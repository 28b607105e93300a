//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on the Domain layer (entities, services, policies)
//! - Does NOT contain tagging or mining rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RenderUseCase` - load, tag (selected, mandatory, minimal), project, write SVG
//! - `mine_corpus` - scan a corpus and mine its minimal model
//! - `dump_model` - diagnostic listing of every model node

pub mod dump;
pub mod minimal;
pub mod render;

pub use dump::{dump_model, DumpEntry, DumpOptions};
pub use minimal::{default_corpus_dir, mine_corpus, ConfigSum, MinimalOptions, MinimalResult};
pub use render::{RenderOptions, RenderResult, RenderUseCase};
