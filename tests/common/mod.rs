#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use expense_ledger::ledger_config::{Config, ConfigManager};
use expense_ledger::ledger_domain::Category;
use expense_ledger::session::{Event, EventOutcome, Session};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory usable as `EXPENSE_LEDGER_HOME`.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Config manager rooted in an isolated temporary directory.
pub fn setup_config_manager() -> ConfigManager {
    ConfigManager::with_base_dir(temp_home()).expect("create config manager for temp dir")
}

pub fn session_with(config: &Config) -> Session {
    Session::new(config)
}

pub fn submit(session: &mut Session, name: &str, amount: &str, category: Category) -> EventOutcome {
    submit_dated(session, name, amount, category, None)
}

pub fn submit_dated(
    session: &mut Session,
    name: &str,
    amount: &str,
    category: Category,
    date: Option<&str>,
) -> EventOutcome {
    session
        .handle(Event::SubmitInput {
            name: name.to_string(),
            amount: amount.to_string(),
            category,
            date: date.map(str::to_string),
        })
        .expect("submit input")
}
