use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Position {index} is out of range for a ledger of {len} transaction(s)")]
    OutOfRange { index: usize, len: usize },
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
}
