pub mod error;
pub mod product;

pub use error::{Error, Result};
pub use product::*;
