#![doc(test(attr(deny(warnings))))]

//! Expense Ledger records spending events and keeps running totals, per-category
//! breakdowns and month filters for a single in-memory session.

pub mod cli;
pub mod errors;
pub mod session;
pub mod utils;

pub use ledger_config;
pub use ledger_core;
pub use ledger_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
