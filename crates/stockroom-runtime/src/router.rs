//! Application state and action dispatch.
//!
//! `AppState` is the single owner of the product store. Every user action
//! arrives as an [`AppAction`] and is applied synchronously by
//! [`AppState::dispatch`], which reports what happened as an
//! [`ActionOutcome`]. Rendering code only ever reads.

use std::cell::RefCell;
use stockroom_engine::filter_products;
use stockroom_types::{Product, ProductId};
use tracing::{debug, info, warn};

use crate::form::{EditForm, FormField, SaveIntent, ValidationErrors};
use crate::store::ProductStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Products,
}

impl View {
    pub const ALL: [View; 2] = [View::Dashboard, View::Products];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Products => "Products",
        }
    }

    /// The other view; navigation is symmetric
    pub fn next(self) -> Self {
        match self {
            View::Dashboard => View::Products,
            View::Products => View::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Navigate(View),
    SetSearch(String),
    PushSearchChar(char),
    PopSearchChar,
    ClearSearch,
    OpenCreate,
    OpenEdit(ProductId),
    EditField(FormField, String),
    FormInput(char),
    FormBackspace,
    FocusNextField,
    FocusPrevField,
    Submit,
    Cancel,
    Delete(ProductId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// State changed with nothing worth reporting
    Applied,
    /// Action did not apply in the current state (e.g. form input with no editor open)
    Ignored,
    EditorOpened,
    Created(Product),
    Updated(ProductId),
    Deleted(Product),
    Rejected(ValidationErrors),
    Cancelled,
    /// The referenced product is not in the store; nothing changed
    NotFound(ProductId),
    /// Every product id has been issued; the editor stays open
    IdsExhausted,
}

/// Rows matching the criterion, cached per (store revision, criterion)
#[derive(Debug, Clone)]
struct FilteredView {
    revision: u64,
    criterion: String,
    ids: Vec<ProductId>,
}

#[derive(Debug)]
pub struct AppState {
    store: ProductStore,
    view: View,
    search: String,
    editor: Option<EditForm>,
    filtered: RefCell<Option<FilteredView>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store,
            view: View::default(),
            search: String::new(),
            editor: None,
            filtered: RefCell::new(None),
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn editor(&self) -> Option<&EditForm> {
        self.editor.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Products matching the current criterion, in collection order.
    ///
    /// The match is recomputed only when the store revision or the criterion
    /// changed since the last call.
    pub fn filtered(&self) -> Vec<&Product> {
        let mut cache = self.filtered.borrow_mut();
        let stale = cache.as_ref().is_none_or(|view| {
            view.revision != self.store.revision() || view.criterion != self.search
        });

        if stale {
            let ids = filter_products(self.store.products(), &self.search)
                .into_iter()
                .map(|p| p.id)
                .collect();
            debug!(criterion = %self.search, revision = self.store.revision(), "recomputed product filter");
            *cache = Some(FilteredView {
                revision: self.store.revision(),
                criterion: self.search.clone(),
                ids,
            });
        }

        let ids = cache.as_ref().map(|view| view.ids.as_slice()).unwrap_or(&[]);
        // ids are in collection order, so one forward pass lines them up
        let mut wanted = ids.iter().peekable();
        self.store
            .products()
            .iter()
            .filter(|p| {
                if wanted.peek() == Some(&&p.id) {
                    wanted.next();
                    true
                } else {
                    false
                }
            })
            .collect()
    }

    pub fn dispatch(&mut self, action: AppAction) -> ActionOutcome {
        debug!(?action, "dispatch");

        match action {
            AppAction::Navigate(view) => {
                self.view = view;
                ActionOutcome::Applied
            }
            AppAction::SetSearch(text) => {
                self.search = text;
                ActionOutcome::Applied
            }
            AppAction::PushSearchChar(c) => {
                self.search.push(c);
                ActionOutcome::Applied
            }
            AppAction::PopSearchChar => {
                self.search.pop();
                ActionOutcome::Applied
            }
            AppAction::ClearSearch => {
                self.search.clear();
                ActionOutcome::Applied
            }
            AppAction::OpenCreate => {
                self.editor = Some(EditForm::create());
                ActionOutcome::EditorOpened
            }
            AppAction::OpenEdit(id) => match self.store.get(id) {
                Some(product) => {
                    self.editor = Some(EditForm::edit(product));
                    ActionOutcome::EditorOpened
                }
                None => {
                    warn!(%id, "edit requested for unknown product");
                    ActionOutcome::NotFound(id)
                }
            },
            AppAction::EditField(field, text) => {
                self.with_editor(|form| form.set_field(field, text))
            }
            AppAction::FormInput(c) => self.with_editor(|form| form.push_char(form.focused(), c)),
            AppAction::FormBackspace => self.with_editor(|form| form.pop_char(form.focused())),
            AppAction::FocusNextField => self.with_editor(EditForm::focus_next),
            AppAction::FocusPrevField => self.with_editor(EditForm::focus_prev),
            AppAction::Submit => self.submit(),
            AppAction::Cancel => match self.editor.take() {
                Some(_) => ActionOutcome::Cancelled,
                None => ActionOutcome::Ignored,
            },
            AppAction::Delete(id) => match self.store.remove(id) {
                Some(product) => {
                    info!(%id, sku = %product.sku, "deleted product");
                    ActionOutcome::Deleted(product)
                }
                None => {
                    warn!(%id, "delete requested for unknown product");
                    ActionOutcome::NotFound(id)
                }
            },
        }
    }

    fn with_editor(&mut self, apply: impl FnOnce(&mut EditForm)) -> ActionOutcome {
        match self.editor.as_mut() {
            Some(form) => {
                apply(form);
                ActionOutcome::Applied
            }
            None => ActionOutcome::Ignored,
        }
    }

    fn submit(&mut self) -> ActionOutcome {
        let Some(form) = self.editor.as_mut() else {
            return ActionOutcome::Ignored;
        };

        let intent = match form.submit() {
            Ok(intent) => intent,
            Err(errors) => {
                debug!(%errors, "editor submit rejected");
                return ActionOutcome::Rejected(errors);
            }
        };

        match intent {
            SaveIntent::Create(draft) => match self.store.add(draft) {
                Some(product) => {
                    self.editor = None;
                    info!(id = %product.id, sku = %product.sku, "created product");
                    ActionOutcome::Created(product)
                }
                None => {
                    warn!("no product ids left, create refused");
                    ActionOutcome::IdsExhausted
                }
            },
            SaveIntent::Update(product) => {
                self.editor = None;
                let id = product.id;
                if self.store.update(product) {
                    info!(%id, "updated product");
                    ActionOutcome::Updated(id)
                } else {
                    warn!(%id, "update target no longer exists");
                    ActionOutcome::NotFound(id)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_testing::sample_catalog;

    fn app() -> AppState {
        AppState::new(ProductStore::new(sample_catalog()))
    }

    fn filtered_ids(app: &AppState) -> Vec<u64> {
        app.filtered().iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.view(), View::Dashboard);
        assert_eq!(app.search(), "");
        assert!(app.editor().is_none());
    }

    #[test]
    fn test_navigation_preserves_search_and_editor() {
        let mut app = app();
        app.dispatch(AppAction::Navigate(View::Products));
        app.dispatch(AppAction::SetSearch("desk".to_string()));
        app.dispatch(AppAction::OpenCreate);
        app.dispatch(AppAction::Navigate(View::Dashboard));

        assert_eq!(app.view(), View::Dashboard);
        assert_eq!(app.search(), "desk");
        assert!(app.is_editing());

        app.dispatch(AppAction::Navigate(View::Dashboard.next()));
        assert_eq!(app.view(), View::Products);
    }

    #[test]
    fn test_search_editing() {
        let mut app = app();
        for c in "hubx".chars() {
            app.dispatch(AppAction::PushSearchChar(c));
        }
        app.dispatch(AppAction::PopSearchChar);
        assert_eq!(app.search(), "hub");
        assert_eq!(filtered_ids(&app), vec![4]);

        app.dispatch(AppAction::ClearSearch);
        assert_eq!(filtered_ids(&app), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filtered_follows_mutations() {
        let mut app = app();
        app.dispatch(AppAction::SetSearch("accessories".to_string()));
        assert_eq!(filtered_ids(&app), vec![2, 4]);

        app.dispatch(AppAction::Delete(ProductId::new(2)));
        assert_eq!(filtered_ids(&app), vec![4]);

        app.dispatch(AppAction::OpenCreate);
        for (field, value) in [
            (FormField::Name, "Cable"),
            (FormField::Sku, "CB-1"),
            (FormField::Category, "Accessories"),
            (FormField::Quantity, "3"),
            (FormField::Price, "1.5"),
        ] {
            app.dispatch(AppAction::EditField(field, value.to_string()));
        }
        app.dispatch(AppAction::Submit);
        assert_eq!(filtered_ids(&app), vec![4, 5]);
    }

    #[test]
    fn test_create_flow() {
        let mut app = app();
        assert_eq!(app.dispatch(AppAction::OpenCreate), ActionOutcome::EditorOpened);

        for (field, value) in [
            (FormField::Name, "X"),
            (FormField::Sku, "X1"),
            (FormField::Category, "Y"),
            (FormField::Quantity, "3"),
            (FormField::Price, "1"),
            (FormField::ImageUrl, "u"),
        ] {
            app.dispatch(AppAction::EditField(field, value.to_string()));
        }

        let outcome = app.dispatch(AppAction::Submit);
        let ActionOutcome::Created(product) = outcome else {
            panic!("expected creation, got {:?}", outcome);
        };
        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.quantity, 3);
        assert_eq!(app.store().len(), 5);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_create_with_exhausted_ids_keeps_editor_open() {
        let seed = vec![stockroom_testing::ProductBuilder::new(u64::MAX).build()];
        let mut app = AppState::new(ProductStore::new(seed));
        app.dispatch(AppAction::OpenCreate);
        for (field, value) in [
            (FormField::Name, "X"),
            (FormField::Sku, "X1"),
            (FormField::Category, "Y"),
        ] {
            app.dispatch(AppAction::EditField(field, value.to_string()));
        }

        assert_eq!(app.dispatch(AppAction::Submit), ActionOutcome::IdsExhausted);
        assert!(app.is_editing());
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn test_typed_input_goes_to_focused_field() {
        let mut app = app();
        app.dispatch(AppAction::OpenCreate);
        app.dispatch(AppAction::FormInput('A'));
        app.dispatch(AppAction::FocusNextField);
        app.dispatch(AppAction::FormInput('B'));
        app.dispatch(AppAction::FormInput('C'));
        app.dispatch(AppAction::FormBackspace);
        app.dispatch(AppAction::FocusPrevField);

        let form = app.editor().unwrap();
        assert_eq!(form.value(FormField::Name), "A");
        assert_eq!(form.value(FormField::Sku), "B");
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    fn test_rejected_submit_keeps_editor_open() {
        let mut app = app();
        app.dispatch(AppAction::OpenCreate);

        let outcome = app.dispatch(AppAction::Submit);
        assert!(matches!(outcome, ActionOutcome::Rejected(ref e) if e.errors.len() == 3));
        assert!(app.is_editing());
        assert_eq!(app.store().len(), 4);
    }

    #[test]
    fn test_edit_flow_replaces_record() {
        let mut app = app();
        app.dispatch(AppAction::OpenEdit(ProductId::new(3)));
        app.dispatch(AppAction::EditField(FormField::Quantity, "12".to_string()));

        assert_eq!(
            app.dispatch(AppAction::Submit),
            ActionOutcome::Updated(ProductId::new(3))
        );
        let desk = app.store().get(ProductId::new(3)).unwrap();
        assert_eq!(desk.quantity, 12);
        assert_eq!(desk.name, "Standing Desk");
    }

    #[test]
    fn test_edit_of_deleted_record_reports_not_found() {
        let mut app = app();
        app.dispatch(AppAction::OpenEdit(ProductId::new(3)));
        // store changes underneath the open editor
        app.store.remove(ProductId::new(3));

        assert_eq!(
            app.dispatch(AppAction::Submit),
            ActionOutcome::NotFound(ProductId::new(3))
        );
        assert!(!app.is_editing());
        assert_eq!(app.store().len(), 3);
    }

    #[test]
    fn test_open_edit_unknown_id() {
        let mut app = app();
        assert_eq!(
            app.dispatch(AppAction::OpenEdit(ProductId::new(999))),
            ActionOutcome::NotFound(ProductId::new(999))
        );
        assert!(!app.is_editing());
    }

    #[test]
    fn test_cancel_discards_form() {
        let mut app = app();
        app.dispatch(AppAction::OpenEdit(ProductId::new(1)));
        app.dispatch(AppAction::EditField(FormField::Name, "Changed".to_string()));

        assert_eq!(app.dispatch(AppAction::Cancel), ActionOutcome::Cancelled);
        assert_eq!(app.store().get(ProductId::new(1)).unwrap().name, "Laptop Pro 15\"");
        assert_eq!(app.dispatch(AppAction::Cancel), ActionOutcome::Ignored);
    }

    #[test]
    fn test_form_actions_without_editor_are_ignored() {
        let mut app = app();
        assert_eq!(app.dispatch(AppAction::FormInput('x')), ActionOutcome::Ignored);
        assert_eq!(app.dispatch(AppAction::Submit), ActionOutcome::Ignored);
    }

    #[test]
    fn test_delete_unknown_id_leaves_store_unchanged() {
        let mut app = app();
        let before = app.store().all();

        assert_eq!(
            app.dispatch(AppAction::Delete(ProductId::new(999))),
            ActionOutcome::NotFound(ProductId::new(999))
        );
        assert_eq!(*app.store().all(), *before);
    }

    #[test]
    fn test_filter_cache_reuses_result_until_inputs_change() {
        let mut app = app();
        app.dispatch(AppAction::SetSearch("a".to_string()));
        let first = filtered_ids(&app);
        let cached_revision = app.filtered.borrow().as_ref().map(|v| v.revision);
        assert_eq!(cached_revision, Some(0));
        assert_eq!(filtered_ids(&app), first);

        app.dispatch(AppAction::Delete(ProductId::new(1)));
        filtered_ids(&app);
        let cached_revision = app.filtered.borrow().as_ref().map(|v| v.revision);
        assert_eq!(cached_revision, Some(1));
    }
}
