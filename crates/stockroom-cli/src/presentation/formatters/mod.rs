pub mod currency;
pub mod number;
pub mod text;

pub use currency::CurrencyFormatter;
pub use number::group_thousands;
pub use text::truncate;
