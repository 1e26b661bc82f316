//! Ordered, in-memory store of committed transactions.

use ledger_domain::Transaction;
use tracing::debug;
use uuid::Uuid;

use crate::CoreError;

/// Owns the committed transactions in insertion order.
///
/// Positions are display indices and shift on delete; ids stay with a record
/// for its whole lifetime, including in-place edits.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` and returns its position.
    pub fn insert(&mut self, record: Transaction) -> usize {
        debug!(
            id = %record.id,
            name = %record.name,
            amount = record.amount,
            "inserting transaction"
        );
        self.transactions.push(record);
        self.transactions.len() - 1
    }

    /// Overwrites the record at `index`, keeping its position and id.
    ///
    /// Returns the record that was replaced.
    pub fn replace_at(
        &mut self,
        index: usize,
        mut record: Transaction,
    ) -> Result<Transaction, CoreError> {
        let len = self.transactions.len();
        let slot = self
            .transactions
            .get_mut(index)
            .ok_or(CoreError::OutOfRange { index, len })?;
        record.id = slot.id;
        debug!(id = %record.id, index, "replacing transaction");
        Ok(std::mem::replace(slot, record))
    }

    /// Removes the record at `index`; later records move down one position.
    pub fn delete_at(&mut self, index: usize) -> Result<Transaction, CoreError> {
        let len = self.transactions.len();
        if index >= len {
            return Err(CoreError::OutOfRange { index, len });
        }
        let removed = self.transactions.remove(index);
        debug!(id = %removed.id, index, "deleted transaction");
        Ok(removed)
    }

    /// Read-only view of every record in order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.transactions.iter().position(|txn| txn.id == id)
    }

    /// Overwrites the record identified by `id`, wherever it currently sits.
    pub fn replace(&mut self, id: Uuid, record: Transaction) -> Result<Transaction, CoreError> {
        let index = self
            .position_of(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        self.replace_at(index, record)
    }

    /// Removes the record identified by `id`.
    pub fn remove(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let index = self
            .position_of(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        self.delete_at(index)
    }
}
