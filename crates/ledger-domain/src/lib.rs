//! ledger-domain
//!
//! Pure domain models for the expense ledger (Transaction, Category, Month, Draft).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod draft;
pub mod month;
pub mod transaction;

pub use category::*;
pub use draft::*;
pub use month::*;
pub use transaction::*;
