//! Single-user session tying the ledger, the edit workflow and the view state together.
//!
//! Domain state (ledger, draft, month filter) and presentation state (theme) are
//! kept in separate structures; the presentation layer feeds [`Event`]s in and
//! pulls a [`LedgerView`] out after each one.

use ledger_config::{ColorAssignment, Config, Theme};
use ledger_core::{
    Aggregator, ColorMode, CommitOutcome, CoordinatorState, CoreError, EditCoordinator, Ledger,
    Palette, Summary,
};
use ledger_domain::{Category, Draft, MonthFilter, Transaction};
use tracing::{debug, info, warn};

/// Input events accepted from a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SubmitInput {
        name: String,
        amount: String,
        category: Category,
        date: Option<String>,
    },
    RequestEdit(usize),
    RequestDelete(usize),
    CancelEdit,
    SelectMonthFilter(MonthFilter),
    ToggleTheme,
}

/// What handling an [`Event`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Committed(CommitOutcome),
    EditStarted { position: usize },
    Deleted { position: usize, transaction: Transaction },
    EditCancelled,
    FilterSelected(MonthFilter),
    ThemeChanged(Theme),
}

/// Snapshot pulled by the presentation layer after every event.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    pub draft: Draft,
    /// `"Add"` or `"Update"`.
    pub submit_label: &'static str,
    pub editing: bool,
    pub theme: Theme,
    pub summary: Summary,
}

#[derive(Debug)]
struct DomainState {
    ledger: Ledger,
    coordinator: EditCoordinator,
    month_filter: MonthFilter,
}

#[derive(Debug)]
struct PresentationState {
    theme: Theme,
}

#[derive(Debug)]
pub struct Session {
    domain: DomainState,
    presentation: PresentationState,
    palette: Palette,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        info!(
            track_dates = config.track_dates,
            theme = %config.theme,
            "starting expense ledger session"
        );
        Self {
            domain: DomainState {
                ledger: Ledger::new(),
                coordinator: EditCoordinator::new(config.track_dates),
                month_filter: MonthFilter::All,
            },
            presentation: PresentationState {
                theme: config.theme,
            },
            palette: palette_from_config(config),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.domain.ledger
    }

    pub fn draft(&self) -> &Draft {
        self.domain.coordinator.draft()
    }

    pub fn state(&self) -> CoordinatorState {
        self.domain.coordinator.state()
    }

    pub fn month_filter(&self) -> MonthFilter {
        self.domain.month_filter
    }

    pub fn theme(&self) -> Theme {
        self.presentation.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Applies one input event.
    ///
    /// Invalid submissions come back as `Ok(Committed(Rejected(..)))`; only
    /// contract violations such as stale positions are errors.
    pub fn handle(&mut self, event: Event) -> Result<EventOutcome, CoreError> {
        debug!(?event, "handling event");
        let result = match event {
            Event::SubmitInput {
                name,
                amount,
                category,
                date,
            } => self
                .submit_input(name, amount, category, date.unwrap_or_default())
                .map(EventOutcome::Committed),
            Event::RequestEdit(position) => self
                .request_edit(position)
                .map(|_| EventOutcome::EditStarted { position }),
            Event::RequestDelete(position) => self
                .request_delete(position)
                .map(|transaction| EventOutcome::Deleted {
                    position,
                    transaction,
                }),
            Event::CancelEdit => {
                self.cancel_edit();
                Ok(EventOutcome::EditCancelled)
            }
            Event::SelectMonthFilter(filter) => {
                self.select_month_filter(filter);
                Ok(EventOutcome::FilterSelected(filter))
            }
            Event::ToggleTheme => Ok(EventOutcome::ThemeChanged(self.toggle_theme())),
        };
        if let Err(err) = &result {
            warn!(%err, "event rejected");
        }
        result
    }

    /// Fills the draft from form values and commits it as an insert or update.
    pub fn submit_input(
        &mut self,
        name: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        date: impl Into<String>,
    ) -> Result<CommitOutcome, CoreError> {
        let domain = &mut self.domain;
        domain.coordinator.fill(name, amount, category, date);
        domain.coordinator.commit(&mut domain.ledger)
    }

    pub fn request_edit(&mut self, position: usize) -> Result<(), CoreError> {
        let domain = &mut self.domain;
        domain.coordinator.start_edit(&domain.ledger, position)
    }

    pub fn request_delete(&mut self, position: usize) -> Result<Transaction, CoreError> {
        let removed = self.domain.ledger.delete_at(position)?;
        self.domain.coordinator.forget(removed.id);
        Ok(removed)
    }

    pub fn cancel_edit(&mut self) {
        self.domain.coordinator.cancel();
    }

    pub fn select_month_filter(&mut self, filter: MonthFilter) {
        self.domain.month_filter = filter;
    }

    /// Flips between light and dark; returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.presentation.theme = self.presentation.theme.toggled();
        self.presentation.theme
    }

    pub fn summary(&self) -> Summary {
        Aggregator::summarize(
            self.domain.ledger.all(),
            self.domain.month_filter,
            &self.palette,
        )
    }

    pub fn view(&self) -> LedgerView {
        let coordinator = &self.domain.coordinator;
        LedgerView {
            draft: coordinator.draft().clone(),
            submit_label: coordinator.submit_label(),
            editing: coordinator.is_editing(),
            theme: self.presentation.theme,
            summary: self.summary(),
        }
    }
}

fn palette_from_config(config: &Config) -> Palette {
    let mode = match config.color_assignment {
        ColorAssignment::Positional => ColorMode::Positional,
        ColorAssignment::ByCategory => ColorMode::ByCategory,
    };
    let mut palette = Palette::new(config.palette.iter().cloned(), mode);
    for (label, color) in &config.category_colors {
        match label.parse::<Category>() {
            Ok(category) => palette = palette.with_override(category, color.clone()),
            Err(err) => warn!(%err, "ignoring color override"),
        }
    }
    palette
}
