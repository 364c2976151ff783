mod context;

pub mod config;
pub mod list;
pub mod summary;
pub mod tui;

pub use context::HandlerContext;
