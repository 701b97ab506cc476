//! Weekly budget bookkeeping over the main and other ledgers.

use chrono::NaiveDate;

use crate::{
    core::{
        clock::Clock,
        errors::{BudgetError, Result},
    },
    ledger::{
        calendar::{day_key, days_left_in_week, month_name, normalize_day, round_currency, week_id},
        CostEntry, Ledger, LedgerKind,
    },
    storage::LedgerBackend,
};

/// Ceiling applied to the main ledger when the configuration does not set one.
pub const DEFAULT_WEEKLY_BUDGET: f64 = 200.0;

/// Totals reported back to the user after a cost is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddSummary {
    /// Main ledger: today's spend and what is left of the weekly budget.
    Main { today: f64, remaining: f64 },
    /// Other ledger: today's spend and the week's running total.
    Other { today: f64, week_total: f64 },
}

/// Owns both ledgers for one run. The date is captured once at construction so
/// every operation agrees on the current week and day.
pub struct BudgetStore<B: LedgerBackend> {
    backend: B,
    weekly_budget: f64,
    today: NaiveDate,
    current_week: String,
    current_day: String,
    current_month: String,
    main: Ledger,
    other: Ledger,
}

impl<B: LedgerBackend> BudgetStore<B> {
    pub fn new(backend: B, clock: &dyn Clock, weekly_budget: f64) -> Result<Self> {
        let today = clock.today();
        let main = backend.load(LedgerKind::Main)?;
        let other = backend.load(LedgerKind::Other)?;
        tracing::debug!(
            week = %week_id(today),
            main_entries = main.entry_count(),
            other_entries = other.entry_count(),
            "budget store ready"
        );
        Ok(Self {
            backend,
            weekly_budget,
            today,
            current_week: week_id(today),
            current_day: day_key(today),
            current_month: month_name(today),
            main,
            other,
        })
    }

    pub fn weekly_budget(&self) -> f64 {
        self.weekly_budget
    }

    pub fn current_week(&self) -> &str {
        &self.current_week
    }

    pub fn current_day(&self) -> &str {
        &self.current_day
    }

    pub fn current_month(&self) -> &str {
        &self.current_month
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read-only view of the selected ledger.
    pub fn records(&self, kind: LedgerKind) -> &Ledger {
        match kind {
            LedgerKind::Main => &self.main,
            LedgerKind::Other => &self.other,
        }
    }

    /// Sum of every cost in `week` (default: current week), rounded to cents.
    pub fn total_for_week(&self, week: Option<&str>, kind: LedgerKind) -> f64 {
        let week = week.unwrap_or(&self.current_week);
        round_currency(self.records(kind).week_total(week))
    }

    /// Sum of one day's costs (defaults: today, current week), rounded to cents.
    pub fn total_for_day(&self, day: Option<&str>, week: Option<&str>, kind: LedgerKind) -> f64 {
        let week = week.unwrap_or(&self.current_week);
        let day = day.unwrap_or(&self.current_day);
        round_currency(self.records(kind).day_total(week, day))
    }

    /// Weekly budget minus the main ledger's week total. The other ledger has no
    /// ceiling, so there is no selector here.
    pub fn remaining_for_week(&self, week: Option<&str>) -> f64 {
        round_currency(self.weekly_budget - self.total_for_week(week, LedgerKind::Main))
    }

    /// Days left in the current ISO week after today.
    pub fn days_left_in_week(&self) -> u32 {
        days_left_in_week(self.today)
    }

    /// Appends a cost to the current week under today, or under `day_override`
    /// when given, then rewrites the selected ledger on disk. If the write fails
    /// the in-memory ledger is left as it was.
    ///
    /// A non-finite `price` is refused with [`BudgetError::InvalidInput`] and
    /// nothing is written.
    pub fn add_cost(
        &mut self,
        name: &str,
        price: f64,
        kind: LedgerKind,
        day_override: Option<&str>,
    ) -> Result<&Ledger> {
        if !price.is_finite() {
            return Err(BudgetError::InvalidInput(format!(
                "cost for `{}` must be a finite number, got {}",
                name, price
            )));
        }
        let day = day_override
            .map(normalize_day)
            .unwrap_or_else(|| self.current_day.clone());
        let week = self.current_week.clone();

        // Persist a copy first so memory never runs ahead of what is on disk.
        let mut updated = self.records(kind).clone();
        updated.append(&week, &day, CostEntry::new(name, price));
        self.backend.save(&updated, kind)?;
        match kind {
            LedgerKind::Main => self.main = updated,
            LedgerKind::Other => self.other = updated,
        }

        tracing::info!(%kind, %week, %day, name, price, "cost recorded");
        Ok(self.records(kind))
    }

    /// Today's figures for the message shown after an add.
    pub fn add_summary(&self, kind: LedgerKind) -> AddSummary {
        let today = self.total_for_day(None, None, kind);
        match kind {
            LedgerKind::Main => AddSummary::Main {
                today,
                remaining: self.remaining_for_week(None),
            },
            LedgerKind::Other => AddSummary::Other {
                today,
                week_total: self.total_for_week(None, LedgerKind::Other),
            },
        }
    }
}
