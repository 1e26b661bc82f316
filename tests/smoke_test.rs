mod common;

use expense_ledger::ledger_config::Theme;
use expense_ledger::ledger_domain::Category;
use expense_ledger::session::{Event, Session};

#[test]
fn smoke_session_roundtrip() {
    expense_ledger::init();
    let manager = common::setup_config_manager();
    let config = manager.load().expect("load defaults");
    let mut session = common::session_with(&config);

    common::submit(&mut session, "Coffee", "50", Category::Food);
    session.handle(Event::ToggleTheme).expect("toggle");

    let view = session.view();
    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.summary.total, 50.0);
}

#[test]
fn total_matches_sum_of_inserted_amounts() {
    let mut session = Session::default();
    let amounts = ["12.5", "7.25", "100", "-3"];
    for (idx, amount) in amounts.iter().enumerate() {
        let category = Category::ALL[idx % Category::ALL.len()];
        common::submit(&mut session, &format!("item {idx}"), amount, category);
    }

    let expected: f64 = amounts.iter().map(|a| a.parse::<f64>().unwrap()).sum();
    assert!((session.summary().total - expected).abs() < 1e-9);
}
