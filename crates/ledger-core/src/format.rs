use chrono::NaiveDate;
use ledger_domain::Transaction;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Prefixes amounts with a currency symbol and two decimals, e.g. `₹50.00`.
#[derive(Debug, Clone)]
pub struct SymbolFormatter {
    symbol: String,
}

impl SymbolFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for SymbolFormatter {
    fn default() -> Self {
        Self::new("₹")
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.symbol, amount)
        }
    }
}

/// Renders dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// One list line: `name - ₹amount`, followed by category and date when present.
pub fn format_row(
    transaction: &Transaction,
    currency: &dyn CurrencyFormatter,
    dates: &dyn DateFormatter,
) -> String {
    let mut line = format!(
        "{} - {} ({})",
        transaction.name,
        currency.format_amount(transaction.amount),
        transaction.category
    );
    if let Some(date) = transaction.date {
        line.push_str(" on ");
        line.push_str(&dates.format_date(date));
    }
    line
}
