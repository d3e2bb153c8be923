//! Specimen Core
//!
//! Shared plumbing for the specimen crates: logging bootstrap and preview configuration.

pub mod config;
pub mod logging;

pub use config::PreviewConfig;
