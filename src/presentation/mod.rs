//! Presentation Layer
//!
//! CLI argument parsing (via clap). Rendering to the terminal lives in the
//! binary's `ui` module.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
