//! Testing infrastructure for stockroom tests.
//!
//! - `fixtures`: product builders and the reference catalog
//! - `TestWorld`: isolated config/catalog directory for running the CLI

pub mod fixtures;
pub mod world;

pub use fixtures::{ProductBuilder, sample_catalog};
pub use world::{CliResult, TestWorld};
