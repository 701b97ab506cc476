//! Ledger domain models and persistence-friendly types.

pub mod calendar;
pub mod cost;
pub mod kind;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use calendar::{day_key, days_left_in_week, month_name, normalize_day, round_currency, week_id};
pub use cost::CostEntry;
pub use kind::LedgerKind;
pub use ledger::{Ledger, WeekRecord};
