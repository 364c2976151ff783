pub mod common;
pub mod dashboard;
pub mod editor;
pub mod products;
pub mod screen;

pub use common::{StatusLevel, StatusMessage};
pub use dashboard::{CategoryBarViewModel, DashboardViewModel, MetricCardViewModel};
pub use editor::{EditorFieldViewModel, EditorViewModel};
pub use products::{ProductRowViewModel, ProductTableViewModel};
pub use screen::{
    HeaderViewModel, NavItemViewModel, ScreenBody, ScreenViewModel, StatusBarViewModel,
};
