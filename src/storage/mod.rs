pub mod json_backend;

use std::path::PathBuf;

use crate::{
    core::errors::Result,
    ledger::{Ledger, LedgerKind},
};

/// Abstraction over persistence backends holding the two ledgers.
pub trait LedgerBackend {
    /// Loads the selected ledger; a ledger that was never saved loads as empty.
    fn load(&self, kind: LedgerKind) -> Result<Ledger>;

    /// Replaces the stored copy of the selected ledger as a whole.
    fn save(&self, ledger: &Ledger, kind: LedgerKind) -> Result<()>;

    fn ledger_path(&self, kind: LedgerKind) -> PathBuf;
}

pub use json_backend::JsonStorage;
