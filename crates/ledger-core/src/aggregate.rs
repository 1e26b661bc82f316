//! Stateless derivations over a ledger snapshot.
//!
//! Nothing here mutates its input, so these functions can be re-run after every
//! ledger change to refresh the derived views.

use ledger_domain::{Category, Month, MonthFilter, Transaction};

use crate::chart::{ChartSeries, Palette};

/// Per-category sums ordered by each category's first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(Category, f64)>,
}

impl CategoryTotals {
    fn add(&mut self, category: Category, amount: f64) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, sum)) => *sum += amount,
            None => self.entries.push((category, amount)),
        }
    }

    /// Sum for `category`, or `None` when no record of it was seen.
    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, sum)| *sum)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One ledger row as it appears in a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    /// Position in the full ledger, usable for edit and delete requests.
    pub position: usize,
    pub transaction: Transaction,
}

/// Everything a presentation layer needs after a ledger change.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub filter: MonthFilter,
    pub rows: Vec<LedgerRow>,
    pub total: f64,
    pub category_totals: CategoryTotals,
    pub months: Vec<Month>,
    /// `None` when the filtered view has no rows.
    pub chart: Option<ChartSeries>,
}

pub struct Aggregator;

impl Aggregator {
    /// Records in `month`, or all of them for [`MonthFilter::All`].
    pub fn filter_by_month<'a>(
        records: &'a [Transaction],
        filter: &MonthFilter,
    ) -> Vec<&'a Transaction> {
        records
            .iter()
            .filter(|txn| filter.matches(txn.month()))
            .collect()
    }

    /// Sum of amounts; zero for no records.
    pub fn total<'a, I>(records: I) -> f64
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        records.into_iter().map(|txn| txn.amount).sum()
    }

    pub fn category_totals<'a, I>(records: I) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = CategoryTotals::default();
        for txn in records {
            totals.add(txn.category, txn.amount);
        }
        totals
    }

    /// Unique months in order of first appearance. Pass the unfiltered ledger
    /// so a month selector keeps offering every month ever used.
    pub fn distinct_months<'a, I>(records: I) -> Vec<Month>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut months: Vec<Month> = Vec::new();
        for month in records.into_iter().filter_map(Transaction::month) {
            if !months.contains(&month) {
                months.push(month);
            }
        }
        months
    }

    pub fn chart_series(totals: &CategoryTotals, palette: &Palette) -> ChartSeries {
        ChartSeries::from_totals(totals, palette)
    }

    /// Computes every derived view for `records` under `filter`.
    pub fn summarize(records: &[Transaction], filter: MonthFilter, palette: &Palette) -> Summary {
        let rows: Vec<LedgerRow> = records
            .iter()
            .enumerate()
            .filter(|(_, txn)| filter.matches(txn.month()))
            .map(|(position, txn)| LedgerRow {
                position,
                transaction: txn.clone(),
            })
            .collect();
        let visible = || rows.iter().map(|row| &row.transaction);
        let total = Self::total(visible());
        let category_totals = Self::category_totals(visible());
        let chart = (!rows.is_empty()).then(|| Self::chart_series(&category_totals, palette));

        Summary {
            filter,
            total,
            category_totals,
            months: Self::distinct_months(records),
            chart,
            rows,
        }
    }
}
