use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        errors::BudgetError,
        services::DEFAULT_WEEKLY_BUDGET,
        utils::{app_data_dir, config_file_in, ensure_dir},
    },
    ledger::LedgerKind,
};

const TMP_SUFFIX: &str = "tmp";

/// Environment variable overriding the configured weekly budget for one run.
pub const BUDGET_ENV: &str = "WEEKLY_BUDGET_AMOUNT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_weekly_budget")]
    pub weekly_budget: f64,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_main_file")]
    pub main_file: String,
    #[serde(default = "Config::default_other_file")]
    pub other_file: String,
    /// Directory holding the ledger files. Defaults to the application directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekly_budget: Self::default_weekly_budget(),
            currency_symbol: Self::default_currency_symbol(),
            main_file: Self::default_main_file(),
            other_file: Self::default_other_file(),
            data_dir: None,
        }
    }
}

impl Config {
    fn default_weekly_budget() -> f64 {
        DEFAULT_WEEKLY_BUDGET
    }

    fn default_currency_symbol() -> String {
        "£".into()
    }

    fn default_main_file() -> String {
        LedgerKind::Main.default_file_name().into()
    }

    fn default_other_file() -> String {
        LedgerKind::Other.default_file_name().into()
    }

    /// Where the ledgers live, given the application directory `base`.
    pub fn ledger_dir(&self, base: &Path) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| base.to_path_buf())
    }

    /// Applies `WEEKLY_BUDGET_AMOUNT` when it holds a finite number.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = env::var(BUDGET_ENV) {
            self.apply_budget_override(&raw);
        }
    }

    fn apply_budget_override(&mut self, raw: &str) {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => self.weekly_budget = value,
            _ => tracing::warn!(value = raw, "ignoring invalid {}", BUDGET_ENV),
        }
    }
}

/// Handles persistence of [`Config`] under the application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                BudgetError::ConfigError(format!("{}: {}", self.path.display(), err))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BudgetError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
