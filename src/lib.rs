#![doc(test(attr(deny(warnings))))]

//! Weekly Budget tracks spending against a fixed weekly allowance. Costs live in
//! two append-only JSON ledgers: main costs, which count against the budget, and
//! other costs (bills and the like), which are tracked but never counted.

pub mod cli;
pub mod config;
pub mod core;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("weekly_budget tracing initialized");
    });
}
