//! Budget bookkeeping: the store, its clock, and shared error/path helpers.

pub mod clock;
pub mod errors;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{BudgetError, Result};
pub use services::{AddSummary, BudgetStore};
