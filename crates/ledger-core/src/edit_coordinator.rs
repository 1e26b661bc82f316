//! Add-or-update workflow between raw form input and the [`Ledger`].
//!
//! A single draft slot is either composing a new record or editing an existing
//! one. Committing an invalid draft is a silent no-op: the reason is returned as
//! data in [`CommitOutcome::Rejected`], never as an error, and nothing changes.

use chrono::NaiveDate;
use ledger_domain::{Category, Draft, Transaction};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::{CoreError, Ledger};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a draft could not be committed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidSubmission {
    #[error("name is empty")]
    EmptyName,
    #[error("amount is empty")]
    EmptyAmount,
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("`{0}` is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Which state the coordinator is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatorState {
    /// The next successful commit appends a new record.
    #[default]
    Inserting,
    /// The next successful commit replaces this record in place.
    Editing(Uuid),
}

/// Result of a commit attempt that did not hit a contract violation.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Inserted { id: Uuid, position: usize },
    Updated { id: Uuid, position: usize },
    Rejected(InvalidSubmission),
}

impl CommitOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, CommitOutcome::Rejected(_))
    }
}

/// Owns the draft and the edit target.
#[derive(Debug, Clone)]
pub struct EditCoordinator {
    draft: Draft,
    state: CoordinatorState,
    track_dates: bool,
}

impl Default for EditCoordinator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl EditCoordinator {
    /// `track_dates` controls whether date text is parsed or ignored.
    pub fn new(track_dates: bool) -> Self {
        Self {
            draft: Draft::default(),
            state: CoordinatorState::Inserting,
            track_dates,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, CoordinatorState::Editing(_))
    }

    pub fn tracks_dates(&self) -> bool {
        self.track_dates
    }

    /// Label for the form's submit action.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    /// Overwrites the draft with freshly submitted form values.
    pub fn fill(
        &mut self,
        name: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        date: impl Into<String>,
    ) {
        self.draft = Draft::new(name, amount, category, date);
    }

    /// Loads the record at `index` into the draft and targets it for the next commit.
    ///
    /// Any edit already in flight is abandoned.
    pub fn start_edit(&mut self, ledger: &Ledger, index: usize) -> Result<(), CoreError> {
        let record = ledger.all().get(index).ok_or(CoreError::OutOfRange {
            index,
            len: ledger.len(),
        })?;
        self.draft = Draft::from_transaction(record);
        self.state = CoordinatorState::Editing(record.id);
        debug!(id = %record.id, index, "editing transaction");
        Ok(())
    }

    /// Validates the draft and inserts or replaces accordingly.
    ///
    /// On success the draft is cleared and the coordinator returns to
    /// [`CoordinatorState::Inserting`]. A rejected draft leaves everything as it was.
    pub fn commit(&mut self, ledger: &mut Ledger) -> Result<CommitOutcome, CoreError> {
        let record = match self.validate() {
            Ok(record) => record,
            Err(reason) => {
                debug!(%reason, "ignoring invalid submission");
                return Ok(CommitOutcome::Rejected(reason));
            }
        };

        let outcome = match self.state {
            CoordinatorState::Inserting => {
                let id = record.id;
                let position = ledger.insert(record);
                CommitOutcome::Inserted { id, position }
            }
            CoordinatorState::Editing(id) => {
                let position = ledger
                    .position_of(id)
                    .ok_or(CoreError::TransactionNotFound(id))?;
                ledger.replace_at(position, record)?;
                CommitOutcome::Updated { id, position }
            }
        };

        self.draft.clear();
        self.state = CoordinatorState::Inserting;
        Ok(outcome)
    }

    /// Drops the edit target if it points at `id`, keeping the draft text.
    ///
    /// Call after deleting a record so the next commit inserts instead of
    /// targeting a record that no longer exists.
    pub fn forget(&mut self, id: Uuid) {
        if self.state == CoordinatorState::Editing(id) {
            debug!(%id, "edited transaction was deleted; switching back to insert");
            self.state = CoordinatorState::Inserting;
        }
    }

    /// Abandons any edit in flight and clears the draft.
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.state = CoordinatorState::Inserting;
    }

    /// Builds the transaction the current draft describes.
    pub fn validate(&self) -> Result<Transaction, InvalidSubmission> {
        let name = self.draft.name.trim();
        if name.is_empty() {
            return Err(InvalidSubmission::EmptyName);
        }
        let amount = parse_amount(&self.draft.amount)?;
        let date = if self.track_dates {
            parse_date(&self.draft.date)?
        } else {
            None
        };
        Ok(Transaction::new(name, amount, self.draft.category, date))
    }
}

fn parse_amount(raw: &str) -> Result<f64, InvalidSubmission> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InvalidSubmission::EmptyAmount);
    }
    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| InvalidSubmission::InvalidAmount(text.to_string()))
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, InvalidSubmission> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let invalid = || InvalidSubmission::InvalidDate(text.to_string());
    // chrono accepts unpadded fields; only `YYYY-MM-DD` is allowed here.
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| invalid())
}
