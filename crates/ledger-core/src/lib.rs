//! ledger-core
//!
//! Ledger storage, aggregation and the draft/edit workflow for the expense ledger.
//! Depends on ledger-domain. No CLI, no terminal I/O, no persistence.

pub mod aggregate;
pub mod chart;
pub mod edit_coordinator;
pub mod error;
pub mod format;
pub mod ledger;

pub use aggregate::*;
pub use chart::*;
pub use edit_coordinator::*;
pub use error::CoreError;
pub use format::*;
pub use ledger::Ledger;

#[cfg(test)]
mod tests;
