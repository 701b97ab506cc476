use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    core::{errors::BudgetError, utils::ensure_dir},
    ledger::{Ledger, LedgerKind},
};

use super::{LedgerBackend, Result};

const TMP_SUFFIX: &str = "tmp";

/// Stores each ledger as a pretty-printed JSON document inside `root`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    main_file: String,
    other_file: String,
}

impl JsonStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self {
            root,
            main_file: LedgerKind::Main.default_file_name().to_string(),
            other_file: LedgerKind::Other.default_file_name().to_string(),
        })
    }

    /// Overrides the file names used for the two ledgers. Both must differ so the
    /// ledgers never share a document.
    pub fn with_file_names(
        mut self,
        main_file: impl Into<String>,
        other_file: impl Into<String>,
    ) -> Result<Self> {
        let main_file = main_file.into();
        let other_file = other_file.into();
        if main_file.trim().is_empty() || other_file.trim().is_empty() {
            return Err(BudgetError::ConfigError(
                "ledger file names must not be empty".into(),
            ));
        }
        if main_file == other_file {
            return Err(BudgetError::ConfigError(format!(
                "main and other ledgers cannot share the file `{}`",
                main_file
            )));
        }
        self.main_file = main_file;
        self.other_file = other_file;
        Ok(self)
    }

    fn file_name(&self, kind: LedgerKind) -> &str {
        match kind {
            LedgerKind::Main => &self.main_file,
            LedgerKind::Other => &self.other_file,
        }
    }
}

impl LedgerBackend for JsonStorage {
    fn load(&self, kind: LedgerKind) -> Result<Ledger> {
        let path = self.ledger_path(kind);
        match load_ledger_from_path(&path)? {
            Some(ledger) => {
                tracing::debug!(%kind, path = %path.display(), "loaded ledger");
                Ok(ledger)
            }
            None => {
                tracing::debug!(%kind, path = %path.display(), "no ledger on disk, starting empty");
                Ok(Ledger::new())
            }
        }
    }

    fn save(&self, ledger: &Ledger, kind: LedgerKind) -> Result<()> {
        let path = self.ledger_path(kind);
        save_ledger_to_path(ledger, &path)?;
        tracing::debug!(%kind, path = %path.display(), "saved ledger");
        Ok(())
    }

    fn ledger_path(&self, kind: LedgerKind) -> PathBuf {
        self.root.join(self.file_name(kind))
    }
}

/// Writes the whole ledger next to `path` and renames it into place, so a crash
/// mid-write leaves the previous document intact.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads a ledger document; `Ok(None)` when the file does not exist.
pub fn load_ledger_from_path(path: &Path) -> Result<Option<Ledger>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let ledger = serde_json::from_str(&data).map_err(|err| {
        BudgetError::StorageError(format!("{} is not a valid ledger: {}", path.display(), err))
    })?;
    Ok(Some(ledger))
}

pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
