//! Presenters turn runtime state into view models.
//!
//! They are pure functions: no I/O, no terminal access, no mutation of the
//! state they read.

mod dashboard;
mod editor;
mod products;
mod screen;

pub use dashboard::present_dashboard;
pub use editor::present_editor;
pub use products::{present_product_row, present_product_table};
pub use screen::{ScreenContext, build_screen_view_model, present_status};
