#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use weekly_budget::{
    core::{BudgetStore, FixedClock},
    storage::JsonStorage,
};

/// Opens a store over `dir` with "today" pinned to the given date.
pub fn store_at(dir: &Path, year: i32, month: u32, day: u32) -> BudgetStore<JsonStorage> {
    let storage = JsonStorage::new(dir).expect("create json storage");
    let clock = FixedClock::from_ymd(year, month, day).expect("valid date");
    BudgetStore::new(storage, &clock, 200.0).expect("open budget store")
}

/// Script-mode CLI invocation isolated to `home`, booking against `today`.
pub fn script_cmd(home: &Path, today: &str) -> Command {
    let mut cmd = Command::cargo_bin("weekly_budget_cli").expect("binary built");
    cmd.env("WEEKLY_BUDGET_CLI_SCRIPT", "1")
        .env("WEEKLY_BUDGET_HOME", home)
        .env("WEEKLY_BUDGET_TODAY", today)
        .env_remove("WEEKLY_BUDGET_AMOUNT")
        .env_remove("RUST_LOG");
    cmd
}
