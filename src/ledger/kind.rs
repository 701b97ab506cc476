use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects one of the two independent ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    /// Costs that count against the weekly budget.
    Main,
    /// Bills and irregular spend, tracked outside the budget.
    Other,
}

impl LedgerKind {
    /// Only the main ledger is capped by the weekly budget.
    pub fn counts_against_budget(self) -> bool {
        matches!(self, LedgerKind::Main)
    }

    /// Heading used by menus, e.g. "Main costs".
    pub fn label(self) -> &'static str {
        match self {
            LedgerKind::Main => "Main costs",
            LedgerKind::Other => "Other costs",
        }
    }

    /// Singular form used in prompts, e.g. "Main cost".
    pub fn singular(self) -> &'static str {
        match self {
            LedgerKind::Main => "Main cost",
            LedgerKind::Other => "Other cost",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            LedgerKind::Main => "budget_per_week.json",
            LedgerKind::Other => "budget_per_week_other_costs.json",
        }
    }
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerKind::Main => f.write_str("main"),
            LedgerKind::Other => f.write_str("other"),
        }
    }
}
