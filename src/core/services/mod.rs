pub mod budget_store;

pub use budget_store::{AddSummary, BudgetStore, DEFAULT_WEEKLY_BUDGET};
