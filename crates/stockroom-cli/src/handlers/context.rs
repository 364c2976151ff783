use crate::presentation::{ConsoleRenderer, CurrencyFormatter};

/// Presentation settings shared by the console handlers
pub struct HandlerContext {
    pub renderer: ConsoleRenderer,
    pub currency: CurrencyFormatter,
}

impl HandlerContext {
    pub fn new(currency_rate: f64) -> Self {
        Self {
            renderer: ConsoleRenderer::detect(),
            currency: CurrencyFormatter::new(currency_rate),
        }
    }
}
