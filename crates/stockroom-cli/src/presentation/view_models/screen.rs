use super::common::StatusLevel;
use super::dashboard::DashboardViewModel;
use super::editor::EditorViewModel;
use super::products::ProductTableViewModel;

/// Everything the TUI draws in one frame
#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    pub nav: Vec<NavItemViewModel>,
    pub header: HeaderViewModel,
    pub body: ScreenBody,
    pub editor: Option<EditorViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone)]
pub enum ScreenBody {
    Dashboard(DashboardViewModel),
    Products(ProductTableViewModel),
}

#[derive(Debug, Clone)]
pub struct NavItemViewModel {
    pub key: char,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    pub title: String,
    /// Shown only on the products view
    pub search: Option<String>,
    pub search_focused: bool,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub hints: Vec<(String, String)>,
}
