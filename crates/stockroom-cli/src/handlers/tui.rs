use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io;
use stockroom_runtime::AppState;
use tracing::{debug, info};

use crate::presentation::CurrencyFormatter;
use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::renderers::{InputContext, TerminalSession, TuiCommand, TuiRenderer};

/// Run the interactive screen until the user quits.
///
/// Everything happens on this thread: read a key, dispatch the resulting
/// action, rebuild the view model, draw.
pub fn handle(mut state: AppState, currency: CurrencyFormatter) -> Result<()> {
    let mut session = TerminalSession::enter()?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    info!(products = state.store().len(), "interactive session started");

    let mut renderer = TuiRenderer::new();

    loop {
        let screen = build_screen_view_model(&state, &renderer.context(), &currency);
        session.terminal().draw(|f| renderer.draw(f, &screen))?;

        let Event::Key(key) = event::read()? else {
            // resize and focus events only need a redraw
            continue;
        };

        let input = input_context(&state, renderer.selected());
        match renderer.handle_key(key, &input) {
            Some(TuiCommand::Quit) => break,
            Some(TuiCommand::Dispatch(action)) => {
                let outcome = state.dispatch(action);
                debug!(?outcome, "action applied");
                renderer.record_outcome(&outcome, state.filtered().len());
            }
            None => {}
        }
    }

    info!(products = state.store().len(), "interactive session ended");
    Ok(())
}

fn input_context(state: &AppState, selected: usize) -> InputContext {
    let rows = state.filtered();
    InputContext {
        view: state.view(),
        editing: state.is_editing(),
        selected_product: rows.get(selected).map(|p| p.id),
        row_count: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_runtime::{AppAction, ProductStore, View};
    use stockroom_testing::sample_catalog;
    use stockroom_types::ProductId;

    #[test]
    fn test_input_context_tracks_filtered_rows() {
        let mut state = AppState::new(ProductStore::new(sample_catalog()));
        state.dispatch(AppAction::Navigate(View::Products));
        state.dispatch(AppAction::SetSearch("accessories".to_string()));

        let input = input_context(&state, 1);
        assert_eq!(input.view, View::Products);
        assert_eq!(input.row_count, 2);
        assert_eq!(input.selected_product, Some(ProductId::new(4)));

        let input = input_context(&state, 5);
        assert_eq!(input.selected_product, None);
    }
}
