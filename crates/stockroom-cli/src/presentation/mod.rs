//! Presentation layer.
//!
//! runtime state -> presenters -> view models -> views -> renderers

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use formatters::CurrencyFormatter;
pub use renderers::{ConsoleRenderer, TuiCommand, TuiRenderer};
