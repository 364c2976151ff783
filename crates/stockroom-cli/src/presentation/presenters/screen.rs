use stockroom_engine::summarize;
use stockroom_runtime::{ActionOutcome, AppState, View};

use super::{present_dashboard, present_editor, present_product_table};
use crate::presentation::formatters::CurrencyFormatter;
use crate::presentation::view_models::{
    HeaderViewModel, NavItemViewModel, ScreenBody, ScreenViewModel, StatusBarViewModel,
    StatusLevel, StatusMessage,
};

/// UI-only state the renderer keeps between frames
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    pub selected: usize,
    pub search_focused: bool,
    pub status: &'a StatusMessage,
}

pub fn build_screen_view_model(
    state: &AppState,
    ctx: &ScreenContext<'_>,
    currency: &CurrencyFormatter,
) -> ScreenViewModel {
    let view = state.view();

    let nav = View::ALL
        .iter()
        .enumerate()
        .map(|(i, &item)| NavItemViewModel {
            key: char::from(b'1' + i as u8),
            label: item.title().to_string(),
            is_active: item == view,
        })
        .collect();

    let header = HeaderViewModel {
        title: view.title().to_string(),
        search: (view == View::Products).then(|| state.search().to_string()),
        search_focused: view == View::Products && ctx.search_focused,
    };

    // dashboard metrics always cover the whole collection, never the filtered rows
    let body = match view {
        View::Dashboard => {
            let metrics = summarize(state.store().products());
            ScreenBody::Dashboard(present_dashboard(&metrics, currency))
        }
        View::Products => {
            let rows = state.filtered();
            ScreenBody::Products(present_product_table(
                &rows,
                state.store().len(),
                state.search(),
                ctx.selected,
                currency,
            ))
        }
    };

    let editor = state.editor().map(present_editor);

    let status_bar = StatusBarViewModel {
        message: ctx.status.text.clone(),
        level: ctx.status.level,
        hints: key_hints(state, ctx),
    };

    ScreenViewModel {
        nav,
        header,
        body,
        editor,
        status_bar,
    }
}

fn key_hints(state: &AppState, ctx: &ScreenContext<'_>) -> Vec<(String, String)> {
    let hints: &[(&str, &str)] = if state.is_editing() {
        &[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ]
    } else if state.view() == View::Products && ctx.search_focused {
        &[("Enter", "done"), ("Backspace", "erase")]
    } else if state.view() == View::Products {
        &[
            ("/", "search"),
            ("e", "edit"),
            ("d", "delete"),
            ("n", "new"),
            ("Tab", "dashboard"),
            ("q", "quit"),
        ]
    } else {
        &[("n", "new"), ("Tab", "products"), ("q", "quit")]
    };

    hints
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

/// Status line for an action outcome; `None` keeps the previous message
pub fn present_status(outcome: &ActionOutcome) -> Option<StatusMessage> {
    let message = match outcome {
        ActionOutcome::Applied | ActionOutcome::Ignored | ActionOutcome::EditorOpened => {
            return None;
        }
        ActionOutcome::Created(product) => {
            StatusMessage::new(format!("Added {}", product.name), StatusLevel::Success)
        }
        ActionOutcome::Updated(id) => {
            StatusMessage::new(format!("Saved changes to #{}", id), StatusLevel::Success)
        }
        ActionOutcome::Deleted(product) => {
            StatusMessage::new(format!("Deleted {}", product.name), StatusLevel::Warning)
        }
        ActionOutcome::Rejected(errors) => {
            StatusMessage::new(format!("Cannot save: {}", errors), StatusLevel::Error)
        }
        ActionOutcome::Cancelled => StatusMessage::info("Edit cancelled"),
        ActionOutcome::NotFound(id) => StatusMessage::new(
            format!("Product #{} no longer exists", id),
            StatusLevel::Error,
        ),
        ActionOutcome::IdsExhausted => {
            StatusMessage::new("No product ids left to assign", StatusLevel::Error)
        }
    };
    Some(message)
}
