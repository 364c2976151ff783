//! Dong-style currency display.
//!
//! Stored prices are in the original unit; the formatter scales them by a
//! fixed rate and prints whole dong with `.` grouping, e.g. `37.499.750 ₫`.

use stockroom_runtime::DEFAULT_CURRENCY_RATE;

use super::number::group_thousands;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyFormatter {
    rate: f64,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_RATE)
    }
}

impl CurrencyFormatter {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn format(&self, value: f64) -> String {
        let scaled = (value * self.rate).round();
        let sign = if scaled < 0.0 { "-" } else { "" };
        let magnitude = scaled.abs();

        // grouping goes through u64; anything wider is printed as is
        if magnitude < u64::MAX as f64 {
            format!("{}{} ₫", sign, group_thousands(magnitude as u64, '.'))
        } else {
            format!("{}{:.0} ₫", sign, magnitude)
        }
    }
}
