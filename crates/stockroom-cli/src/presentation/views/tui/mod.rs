//! Ratatui widgets for the interactive screen.
//!
//! Views borrow a view model and only map it onto widgets; the only logic
//! here is layout and colour.

pub mod dashboard;
pub mod editor;
pub mod header;
pub mod product_table;
pub mod sidebar;
pub mod status_bar;

pub use dashboard::DashboardView;
pub use editor::EditorView;
pub use header::HeaderView;
pub use product_table::ProductTableView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Rectangle of at most `width` x `height` centred in `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
