//! The in-progress record behind the input form.

use serde::{Deserialize, Serialize};

use crate::{category::Category, transaction::Transaction};

/// Raw form contents awaiting validation.
///
/// `amount` and `date` hold text exactly as entered; they are only parsed when
/// the draft is committed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub amount: String,
    pub category: Category,
    pub date: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
            date: date.into(),
        }
    }

    /// Copies a committed record back into editable form.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            name: transaction.name.clone(),
            amount: transaction.amount.to_string(),
            category: transaction.category,
            date: transaction
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Returns `true` when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.amount.is_empty() && self.date.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}
