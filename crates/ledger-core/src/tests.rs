use ledger_domain::{Category, Month, MonthFilter, Transaction};

use crate::{
    aggregate::Aggregator,
    chart::{ColorMode, Palette},
    edit_coordinator::{CommitOutcome, CoordinatorState, EditCoordinator},
    ledger::Ledger,
    CoreError,
};

fn coffee_and_bus() -> (Ledger, EditCoordinator) {
    let mut ledger = Ledger::new();
    let mut coordinator = EditCoordinator::new(false);
    coordinator.fill("Coffee", "50", Category::Food, "");
    coordinator.commit(&mut ledger).expect("insert coffee");
    coordinator.fill("Bus", "20", Category::Travel, "");
    coordinator.commit(&mut ledger).expect("insert bus");
    (ledger, coordinator)
}

#[test]
fn inserts_produce_expected_totals() {
    let (ledger, _) = coffee_and_bus();

    assert_eq!(Aggregator::total(ledger.all()), 70.0);
    let totals = Aggregator::category_totals(ledger.all());
    assert_eq!(totals.get(Category::Food), Some(50.0));
    assert_eq!(totals.get(Category::Travel), Some(20.0));
    assert_eq!(totals.len(), 2);
}

#[test]
fn editing_amount_updates_totals_in_place() {
    let (mut ledger, mut coordinator) = coffee_and_bus();

    coordinator.start_edit(&ledger, 0).expect("start edit");
    let draft = coordinator.draft().clone();
    coordinator.fill(draft.name, "80", draft.category, draft.date);
    coordinator.commit(&mut ledger).expect("commit edit");

    assert_eq!(ledger.all()[0].amount, 80.0);
    assert_eq!(Aggregator::total(ledger.all()), 100.0);
    assert_eq!(ledger.len(), 2);
    assert_eq!(coordinator.state(), CoordinatorState::Inserting);
}

#[test]
fn empty_name_commit_is_a_no_op() {
    let (mut ledger, mut coordinator) = coffee_and_bus();
    coordinator.fill("", "15", Category::Food, "");

    let outcome = coordinator.commit(&mut ledger).expect("rejection is not an error");

    assert!(outcome.is_rejected());
    assert_eq!(ledger.len(), 2);
    assert_eq!(coordinator.state(), CoordinatorState::Inserting);
}

#[test]
fn delete_first_of_two_leaves_second_at_front() {
    let (mut ledger, _) = coffee_and_bus();
    let bus_id = ledger.all()[1].id;

    ledger.delete_at(0).expect("delete");

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.all()[0].id, bus_id);
    assert_eq!(ledger.all()[0].name, "Bus");
}

#[test]
fn total_matches_sum_of_inserted_amounts() {
    let amounts = [12.5, -3.0, 0.0, 1_000.25, 7.75, 42.0];
    let mut ledger = Ledger::new();
    let mut coordinator = EditCoordinator::new(false);
    for (idx, amount) in amounts.iter().enumerate() {
        coordinator.fill(format!("item {idx}"), amount.to_string(), Category::Other, "");
        let outcome = coordinator.commit(&mut ledger).expect("commit");
        assert!(matches!(outcome, CommitOutcome::Inserted { .. }));
    }

    assert_eq!(Aggregator::total(ledger.all()), amounts.iter().sum::<f64>());
}

#[test]
fn committed_months_always_match_date_prefix() {
    let mut ledger = Ledger::new();
    let mut coordinator = EditCoordinator::new(true);
    for date in ["2023-12-31", "2024-01-01", "2024-02-29"] {
        coordinator.fill("Snack", "4", Category::Food, date);
        coordinator.commit(&mut ledger).expect("commit");
    }
    coordinator.start_edit(&ledger, 0).expect("edit");
    coordinator.fill("Snack", "4", Category::Food, "2025-06-15");
    coordinator.commit(&mut ledger).expect("commit edit");

    for txn in ledger.all() {
        let iso = txn.date.expect("dated").format("%Y-%m-%d").to_string();
        assert_eq!(txn.month().expect("month").to_string(), iso[..7]);
    }
    assert_eq!(ledger.all()[0].month(), Month::new(2025, 6));
}

#[test]
fn replace_at_then_all_reflects_record_with_same_length() {
    let (mut ledger, _) = coffee_and_bus();
    let replacement = Transaction::new("Taxi", 33.0, Category::Travel, None);

    ledger.replace_at(1, replacement.clone()).expect("replace");

    assert_eq!(ledger.len(), 2);
    assert!(ledger.all()[1].same_contents(&replacement));
    assert_eq!(
        ledger.replace_at(5, replacement).unwrap_err(),
        CoreError::OutOfRange { index: 5, len: 2 }
    );
}

#[test]
fn color_mode_by_category_keeps_colors_stable_across_recomputes() {
    let palette = Palette::new(["a", "b", "c", "d", "e"], ColorMode::ByCategory);
    let (mut ledger, _) = coffee_and_bus();

    let before = Aggregator::summarize(ledger.all(), MonthFilter::All, &palette);
    ledger.delete_at(0).expect("delete coffee");
    let after = Aggregator::summarize(ledger.all(), MonthFilter::All, &palette);

    let travel_before = before.chart.expect("chart").colors[1].clone();
    let travel_after = after.chart.expect("chart").colors[0].clone();
    assert_eq!(travel_before, travel_after);
}

#[test]
fn positional_colors_drift_when_categories_change() {
    let palette = Palette::default();
    let (mut ledger, _) = coffee_and_bus();

    let before = Aggregator::summarize(ledger.all(), MonthFilter::All, &palette);
    ledger.delete_at(0).expect("delete coffee");
    let after = Aggregator::summarize(ledger.all(), MonthFilter::All, &palette);

    let travel_before = before.chart.expect("chart").colors[1].clone();
    let travel_after = after.chart.expect("chart").colors[0].clone();
    assert_ne!(travel_before, travel_after);
}
