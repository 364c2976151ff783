//! TUI renderer for the interactive inventory screen.
//!
//! ## Design:
//! - Renderer owns UI state (selected row, search focus, status message)
//! - Renderer does NOT own data: the handler owns `AppState` and hands the
//!   renderer a fresh `ScreenViewModel` each frame
//! - Key presses become `TuiCommand`s; only the handler mutates app state

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use stockroom_runtime::{ActionOutcome, AppAction, View};
use stockroom_types::ProductId;

use crate::presentation::presenters::{ScreenContext, present_status};
use crate::presentation::view_models::{ScreenBody, ScreenViewModel, StatusMessage};
use crate::presentation::views::tui::{
    DashboardView, EditorView, HeaderView, ProductTableView, SidebarView, StatusBarView,
};

/// What the handler should do in response to a key
#[derive(Debug, Clone, PartialEq)]
pub enum TuiCommand {
    Quit,
    Dispatch(AppAction),
}

/// Facts about app state the key mapping depends on
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    pub view: View,
    pub editing: bool,
    /// Product under the cursor in the filtered table
    pub selected_product: Option<ProductId>,
    pub row_count: usize,
}

pub struct TuiRenderer {
    /// UI State: cursor row in the filtered product table
    selected: usize,

    /// UI State: keystrokes go to the search box
    search_focused: bool,

    /// UI State: outcome of the last action
    status: StatusMessage,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            selected: 0,
            search_focused: false,
            status: StatusMessage::info("Ready"),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn context(&self) -> ScreenContext<'_> {
        ScreenContext {
            selected: self.selected,
            search_focused: self.search_focused,
            status: &self.status,
        }
    }

    /// Map a key press to a command, updating UI-only state on the way
    pub fn handle_key(&mut self, key: KeyEvent, input: &InputContext) -> Option<TuiCommand> {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // raw mode swallows SIGINT, so Ctrl-C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(TuiCommand::Quit);
        }

        if input.editing {
            return self.handle_editor_key(key);
        }

        if self.search_focused && input.view == View::Products {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(TuiCommand::Quit),
            KeyCode::Tab => Some(self.navigate(input.view.next())),
            KeyCode::Char('1') => Some(self.navigate(View::Dashboard)),
            KeyCode::Char('2') => Some(self.navigate(View::Products)),
            KeyCode::Char('n') => Some(TuiCommand::Dispatch(AppAction::OpenCreate)),
            _ if input.view == View::Products => self.handle_table_key(key, input),
            _ => None,
        }
    }

    fn navigate(&mut self, view: View) -> TuiCommand {
        self.search_focused = false;
        TuiCommand::Dispatch(AppAction::Navigate(view))
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Option<TuiCommand> {
        let action = match key.code {
            KeyCode::Esc => AppAction::Cancel,
            KeyCode::Enter => AppAction::Submit,
            KeyCode::Tab | KeyCode::Down => AppAction::FocusNextField,
            KeyCode::BackTab | KeyCode::Up => AppAction::FocusPrevField,
            KeyCode::Backspace => AppAction::FormBackspace,
            KeyCode::Char(c) => AppAction::FormInput(c),
            _ => return None,
        };
        Some(TuiCommand::Dispatch(action))
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<TuiCommand> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.search_focused = false;
                None
            }
            KeyCode::Backspace => {
                self.selected = 0;
                Some(TuiCommand::Dispatch(AppAction::PopSearchChar))
            }
            KeyCode::Char(c) => {
                self.selected = 0;
                Some(TuiCommand::Dispatch(AppAction::PushSearchChar(c)))
            }
            _ => None,
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent, input: &InputContext) -> Option<TuiCommand> {
        match key.code {
            KeyCode::Char('/') => {
                self.search_focused = true;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < input.row_count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.selected = input.row_count.saturating_sub(1);
                None
            }
            KeyCode::Char('e') | KeyCode::Enter => input
                .selected_product
                .map(|id| TuiCommand::Dispatch(AppAction::OpenEdit(id))),
            KeyCode::Char('d') | KeyCode::Delete => input
                .selected_product
                .map(|id| TuiCommand::Dispatch(AppAction::Delete(id))),
            _ => None,
        }
    }

    /// Update the status line and keep the cursor inside the table
    pub fn record_outcome(&mut self, outcome: &ActionOutcome, row_count: usize) {
        if let Some(status) = present_status(outcome) {
            self.status = status;
        }
        self.clamp_selection(row_count);
    }

    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    /// Render the screen using Views
    pub fn draw(&self, f: &mut Frame, screen: &ScreenViewModel) {
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(18), Constraint::Min(40)]).areas(f.area());

        f.render_widget(SidebarView::new(&screen.nav), sidebar_area);

        // Main layout: [Header | Body | Status Bar]
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .areas(main_area);

        f.render_widget(HeaderView::new(&screen.header), header_area);

        match &screen.body {
            ScreenBody::Dashboard(dashboard) => {
                f.render_widget(DashboardView::new(dashboard), body_area);
            }
            ScreenBody::Products(table) => {
                f.render_widget(ProductTableView::new(table), body_area);
            }
        }

        f.render_widget(StatusBarView::new(&screen.status_bar), status_area);

        if let Some(editor) = &screen.editor {
            f.render_widget(EditorView::new(editor), f.area());
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw mode plus alternate screen for as long as the value lives
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::formatters::CurrencyFormatter;
    use crate::presentation::presenters::build_screen_view_model;
    use crate::presentation::view_models::StatusLevel;
    use crate::presentation::views::tui::test_support::buffer_text;
    use ratatui::backend::TestBackend;
    use stockroom_runtime::{AppState, FormField, ProductStore};
    use stockroom_testing::sample_catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn products_input(row_count: usize, selected: Option<u64>) -> InputContext {
        InputContext {
            view: View::Products,
            editing: false,
            selected_product: selected.map(ProductId::new),
            row_count,
        }
    }

    #[test]
    fn test_global_keys() {
        let mut renderer = TuiRenderer::new();
        let input = InputContext {
            view: View::Dashboard,
            editing: false,
            selected_product: None,
            row_count: 0,
        };

        assert_eq!(
            renderer.handle_key(key(KeyCode::Tab), &input),
            Some(TuiCommand::Dispatch(AppAction::Navigate(View::Products)))
        );
        assert_eq!(
            renderer.handle_key(key(KeyCode::Char('n')), &input),
            Some(TuiCommand::Dispatch(AppAction::OpenCreate))
        );
        assert_eq!(
            renderer.handle_key(key(KeyCode::Char('q')), &input),
            Some(TuiCommand::Quit)
        );
        assert_eq!(
            renderer.handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &input
            ),
            Some(TuiCommand::Quit)
        );
        // table keys do nothing on the dashboard
        assert_eq!(renderer.handle_key(key(KeyCode::Char('d')), &input), None);
    }

    #[test]
    fn test_selection_moves_within_rows() {
        let mut renderer = TuiRenderer::new();
        let input = products_input(2, Some(1));

        renderer.handle_key(key(KeyCode::Down), &input);
        renderer.handle_key(key(KeyCode::Char('j')), &input);
        assert_eq!(renderer.selected(), 1);

        renderer.handle_key(key(KeyCode::Up), &input);
        renderer.handle_key(key(KeyCode::Char('k')), &input);
        assert_eq!(renderer.selected(), 0);
    }

    #[test]
    fn test_edit_and_delete_target_selected_row() {
        let mut renderer = TuiRenderer::new();
        let input = products_input(4, Some(3));

        assert_eq!(
            renderer.handle_key(key(KeyCode::Char('e')), &input),
            Some(TuiCommand::Dispatch(AppAction::OpenEdit(ProductId::new(3))))
        );
        assert_eq!(
            renderer.handle_key(key(KeyCode::Delete), &input),
            Some(TuiCommand::Dispatch(AppAction::Delete(ProductId::new(3))))
        );
        assert_eq!(
            renderer.handle_key(key(KeyCode::Char('d')), &products_input(0, None)),
            None
        );
    }

    #[test]
    fn test_search_focus_captures_typing() {
        let mut renderer = TuiRenderer::new();
        let input = products_input(4, Some(1));

        assert_eq!(renderer.handle_key(key(KeyCode::Char('/')), &input), None);
        assert!(renderer.search_focused());
        assert_eq!(
            renderer.handle_key(key(KeyCode::Char('q')), &input),
            Some(TuiCommand::Dispatch(AppAction::PushSearchChar('q')))
        );
        assert_eq!(
            renderer.handle_key(key(KeyCode::Backspace), &input),
            Some(TuiCommand::Dispatch(AppAction::PopSearchChar))
        );

        assert_eq!(renderer.handle_key(key(KeyCode::Esc), &input), None);
        assert!(!renderer.search_focused());
        assert_eq!(
            renderer.handle_key(key(KeyCode::Esc), &input),
            Some(TuiCommand::Quit)
        );
    }

    #[test]
    fn test_editor_keys() {
        let mut renderer = TuiRenderer::new();
        let input = InputContext {
            editing: true,
            ..products_input(4, Some(1))
        };

        let mut dispatched = |code: KeyCode| match renderer.handle_key(key(code), &input) {
            Some(TuiCommand::Dispatch(action)) => Some(action),
            _ => None,
        };

        assert_eq!(dispatched(KeyCode::Char('q')), Some(AppAction::FormInput('q')));
        assert_eq!(dispatched(KeyCode::Tab), Some(AppAction::FocusNextField));
        assert_eq!(dispatched(KeyCode::BackTab), Some(AppAction::FocusPrevField));
        assert_eq!(dispatched(KeyCode::Backspace), Some(AppAction::FormBackspace));
        assert_eq!(dispatched(KeyCode::Enter), Some(AppAction::Submit));
        assert_eq!(dispatched(KeyCode::Esc), Some(AppAction::Cancel));
    }

    #[test]
    fn test_record_outcome_updates_status_and_clamps() {
        let mut state = AppState::new(ProductStore::new(sample_catalog()));
        let mut renderer = TuiRenderer::new();
        renderer.selected = 3;

        let outcome = state.dispatch(AppAction::Delete(ProductId::new(4)));
        renderer.record_outcome(&outcome, state.filtered().len());

        assert_eq!(renderer.selected(), 2);
        assert_eq!(renderer.status().text, "Deleted USB-C Hub");
        assert_eq!(renderer.status().level, StatusLevel::Warning);

        let outcome = state.dispatch(AppAction::Navigate(View::Products));
        renderer.record_outcome(&outcome, state.filtered().len());
        assert_eq!(renderer.status().text, "Deleted USB-C Hub");
    }

    #[test]
    fn test_full_frame_with_editor() {
        let mut state = AppState::new(ProductStore::new(sample_catalog()));
        state.dispatch(AppAction::Navigate(View::Products));
        state.dispatch(AppAction::OpenCreate);
        state.dispatch(AppAction::EditField(FormField::Name, "Webcam".to_string()));

        let renderer = TuiRenderer::new();
        let screen =
            build_screen_view_model(&state, &renderer.context(), &CurrencyFormatter::default());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| renderer.draw(f, &screen)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(" Stockroom "));
        assert!(text.contains(" Products (4 of 4) "));
        assert!(text.contains(" Add product "));
        assert!(text.contains("Webcam█"));
        assert!(text.contains("Ready"));
    }
}
