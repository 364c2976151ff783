use stockroom_engine::StockLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl From<StockLevel> for StatusLevel {
    fn from(level: StockLevel) -> Self {
        match level {
            StockLevel::Low => StatusLevel::Error,
            StockLevel::Medium => StatusLevel::Warning,
            StockLevel::Healthy => StatusLevel::Success,
        }
    }
}

/// One-line message shown in the status bar after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, StatusLevel::Info)
    }
}
