//! Plain-text console views.
//!
//! Each view wraps a view model and implements `Display`. Colour is opt-in
//! so piped output stays free of escape codes.

mod product_list;
mod summary;

pub use product_list::ProductListView;
pub use summary::SummaryView;

use owo_colors::OwoColorize;

use crate::presentation::view_models::StatusLevel;

pub(crate) fn paint(text: &str, level: StatusLevel, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match level {
        StatusLevel::Success => text.green().to_string(),
        StatusLevel::Info => text.cyan().to_string(),
        StatusLevel::Warning => text.yellow().to_string(),
        StatusLevel::Error => text.red().to_string(),
    }
}

pub(crate) fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
