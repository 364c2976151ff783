// NOTE: stockroom data flow
//
// - AppState owns the product store; every mutation goes through
//   AppState::dispatch
// - Views get a fresh view model each frame and never hold store references
// - A Snapshot taken before a mutation keeps seeing the old collection
// - The catalog is read once at start-up and never written back

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, ListFormat, LogLevel, OutputFormat};
pub use commands::run;
