pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod router;
pub mod store;

pub use catalog::{builtin_catalog, load_catalog};
pub use config::{
    CatalogConfig, Config, DEFAULT_CURRENCY_RATE, DisplayConfig, LogConfig, resolve_config_path,
    resolve_data_dir,
};
pub use error::{Error, Result};
pub use form::{
    DEFAULT_IMAGE_URL, EditForm, FieldError, FieldErrorKind, FormField, FormMode, SaveIntent,
    ValidationErrors,
};
pub use router::{ActionOutcome, AppAction, AppState, View};
pub use store::{IdGenerator, ProductStore, Snapshot};
