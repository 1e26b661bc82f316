//! Domain model for a single recorded expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{category::Category, month::Month};

/// A committed spending event.
///
/// The month is never stored; it is derived from `date` on demand so it always
/// agrees with the date's year-month prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: Category,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            category,
            date,
        }
    }

    /// Year-month of `date`, when the transaction is dated.
    pub fn month(&self) -> Option<Month> {
        self.date.map(Month::of)
    }

    /// Returns `true` when every user-visible field matches `other`, ignoring ids.
    pub fn same_contents(&self, other: &Transaction) -> bool {
        self.name == other.name
            && self.amount == other.amount
            && self.category == other.category
            && self.date == other.date
    }
}
