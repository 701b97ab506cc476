use std::{env, io};

use chrono::NaiveDate;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    cli::{
        input::{parse_price, parse_week, parse_weekday},
        output,
    },
    config::{Config, ConfigManager},
    core::{
        clock::{FixedClock, SystemClock},
        errors::BudgetError,
        services::{AddSummary, BudgetStore},
    },
    ledger::LedgerKind,
    storage::JsonStorage,
    utils::build_info,
};

/// Pins the date the shell books against, as `YYYY-MM-DD`.
pub const TODAY_ENV: &str = "WEEKLY_BUDGET_TODAY";

/// Name, usage, and description of every script command.
pub(crate) const COMMANDS: &[(&str, &str, &str)] = &[
    (
        "add",
        "add <name> <price> [--other] [--day <weekday>]",
        "Record a cost for today (or the given day) in the current week",
    ),
    (
        "remaining",
        "remaining [--week <n>]",
        "Show what is left of the weekly budget",
    ),
    (
        "total",
        "total [--other] [--week <n>]",
        "Show the week's total spend",
    ),
    (
        "day-total",
        "day-total [--other] [--day <weekday>] [--week <n>]",
        "Show one day's total spend",
    ),
    ("records", "records [--other]", "Print every recorded cost as JSON"),
    ("status", "status", "Show budget, remaining amount and days left"),
    ("help", "help", "Show available commands"),
    ("version", "version", "Show build metadata"),
    ("exit", "exit", "Leave the shell"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures that abort the shell as a whole.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures of a single command; reported and then the shell carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Flags shared by the script commands.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CommandArgs {
    pub positional: Vec<String>,
    pub other: bool,
    pub day: Option<&'static str>,
    pub week: Option<String>,
}

impl CommandArgs {
    pub(crate) fn parse(args: &[&str]) -> Result<Self, CommandError> {
        let mut parsed = CommandArgs::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match *arg {
                "--other" => parsed.other = true,
                "--day" => {
                    let value = iter.next().ok_or_else(|| missing_value("--day"))?;
                    parsed.day = Some(parse_weekday(value)?);
                }
                "--week" => {
                    let value = iter.next().ok_or_else(|| missing_value("--week"))?;
                    parsed.week = Some(parse_week(value)?);
                }
                flag if flag.starts_with("--") => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown option `{}`",
                        flag
                    )))
                }
                value => parsed.positional.push(value.to_string()),
            }
        }
        Ok(parsed)
    }

    pub(crate) fn kind(&self) -> LedgerKind {
        if self.other {
            LedgerKind::Other
        } else {
            LedgerKind::Main
        }
    }

    fn expect_positional(&self, count: usize, usage: &str) -> Result<(), CommandError> {
        if self.positional.len() == count {
            Ok(())
        } else {
            Err(CommandError::InvalidArguments(format!("usage: {}", usage)))
        }
    }
}

fn missing_value(flag: &str) -> CommandError {
    CommandError::InvalidArguments(format!("`{}` expects a value", flag))
}

fn usage_of(command: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|(name, _, _)| *name == command)
        .map(|(_, usage, _)| *usage)
        .unwrap_or("")
}

/// Session state shared by the interactive menus and the script shell.
pub struct ShellContext {
    pub running: bool,
    pub(crate) config: Config,
    pub(crate) store: BudgetStore<JsonStorage>,
}

impl ShellContext {
    pub fn new() -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let mut config = manager.load()?;
        if !manager.path().exists() {
            // First run: leave an editable config behind, before any env override.
            manager.save(&config)?;
            tracing::debug!(path = %manager.path().display(), "wrote default config");
        }
        config.apply_env_overrides();

        let storage = JsonStorage::new(config.ledger_dir(manager.base_dir()))?
            .with_file_names(config.main_file.clone(), config.other_file.clone())?;

        let store = match pinned_date()? {
            Some(date) => BudgetStore::new(storage, &FixedClock::new(date), config.weekly_budget)?,
            None => BudgetStore::new(storage, &SystemClock, config.weekly_budget)?,
        };
        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Config, store: BudgetStore<JsonStorage>) -> Self {
        Self {
            running: true,
            config,
            store,
        }
    }

    pub fn store(&self) -> &BudgetStore<JsonStorage> {
        &self.store
    }

    pub(crate) fn money(&self, value: f64) -> String {
        output::money(&self.config.currency_symbol, value)
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let parsed = CommandArgs::parse(args)?;
        match command {
            "add" => {
                parsed.expect_positional(2, usage_of("add"))?;
                let price = parse_price(&parsed.positional[1])?;
                self.add_cost(&parsed.positional[0], price, parsed.kind(), parsed.day)?;
            }
            "remaining" => {
                if parsed.other {
                    output::warning(self.remaining_not_applicable());
                } else {
                    output::info(self.remaining_line(parsed.week.as_deref()));
                }
            }
            "total" => output::info(self.week_total_line(parsed.kind(), parsed.week.as_deref())),
            "day-total" => output::info(self.day_total_line(
                parsed.kind(),
                parsed.day,
                parsed.week.as_deref(),
            )),
            "records" => output::info(self.records_json(parsed.kind())?),
            "status" => output::info(self.banner()),
            "help" => self.print_help(),
            "version" => output::info(build_info::current().summary()),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        }
        Ok(LoopControl::Continue)
    }

    /// Records a cost and prints the running figures for its ledger.
    pub fn add_cost(
        &mut self,
        name: &str,
        price: f64,
        kind: LedgerKind,
        day: Option<&str>,
    ) -> Result<(), CommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::InvalidArguments(
                "a cost needs a name".to_string(),
            ));
        }
        self.store.add_cost(name, price, kind, day)?;
        output::success(format!("Added {} ({})", name, self.money(price)));
        output::info(self.add_summary_line(kind));
        Ok(())
    }

    pub(crate) fn banner(&self) -> String {
        format!(
            "Your current weekly budget is {}, you have {} left. There are {} day(s) left",
            self.money(self.store.weekly_budget()),
            self.money(self.store.remaining_for_week(None)),
            self.store.days_left_in_week()
        )
    }

    pub(crate) fn add_summary_line(&self, kind: LedgerKind) -> String {
        match self.store.add_summary(kind) {
            AddSummary::Main { today, remaining } => format!(
                "Your total spend for today is {}, your remaining spend for the week is {}",
                self.money(today),
                self.money(remaining)
            ),
            AddSummary::Other { today, week_total } => format!(
                "Your total other spend for today is {}, your total other spend for the week is {}",
                self.money(today),
                self.money(week_total)
            ),
        }
    }

    pub(crate) fn remaining_line(&self, week: Option<&str>) -> String {
        format!(
            "Remaining budget: {}",
            self.money(self.store.remaining_for_week(week))
        )
    }

    pub(crate) fn remaining_not_applicable(&self) -> &'static str {
        "Remaining budget not applicable for other costs."
    }

    pub(crate) fn week_total_line(&self, kind: LedgerKind, week: Option<&str>) -> String {
        let week_label = week.unwrap_or(self.store.current_week());
        format!(
            "Total {} in week {}: {}",
            kind.label().to_lowercase(),
            week_label,
            self.money(self.store.total_for_week(week, kind))
        )
    }

    pub(crate) fn day_total_line(
        &self,
        kind: LedgerKind,
        day: Option<&str>,
        week: Option<&str>,
    ) -> String {
        let day_label = day.unwrap_or(self.store.current_day());
        let week_label = week.unwrap_or(self.store.current_week());
        format!(
            "Total {} on {} of week {}: {}",
            kind.label().to_lowercase(),
            day_label,
            week_label,
            self.money(self.store.total_for_day(day, week, kind))
        )
    }

    pub(crate) fn records_json(&self, kind: LedgerKind) -> Result<String, CommandError> {
        serde_json::to_string_pretty(self.store.records(kind))
            .map_err(|err| CommandError::Budget(err.into()))
    }

    pub(crate) fn print_help(&self) {
        output::section("Commands");
        for (_, usage, description) in COMMANDS {
            output::info(format!("  {:<52} {}", usage, description));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::UnknownCommand(input) => {
                output::error(format!("Unknown command `{}`", input));
                if let Some(best) = suggest_command(&input) {
                    output::info(format!("Suggestion: `{}`?", best));
                }
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                output::error(other);
            }
        }
    }
}

/// Closest known command within an edit distance of 3.
pub(crate) fn suggest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|(name, _, _)| (levenshtein(name, input), *name))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

fn pinned_date() -> Result<Option<NaiveDate>, BudgetError> {
    match env::var(TODAY_ENV) {
        Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|err| {
                BudgetError::ConfigError(format!("{} must be YYYY-MM-DD: {}", TODAY_ENV, err))
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // 2024-03-01 is the Friday of ISO week 9.
    fn context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().unwrap();
        let storage = JsonStorage::new(temp.path()).unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 1).unwrap();
        let store = BudgetStore::new(storage, &clock, 200.0).unwrap();
        let ctx = ShellContext::from_parts(Config::default(), store);
        (ctx, temp)
    }

    #[test]
    fn parses_flags_and_positionals() {
        let parsed =
            CommandArgs::parse(&["Lunch", "12", "--other", "--day", "Mon", "--week", "9"]).unwrap();
        assert_eq!(parsed.positional, vec!["Lunch", "12"]);
        assert_eq!(parsed.kind(), LedgerKind::Other);
        assert_eq!(parsed.day, Some("monday"));
        assert_eq!(parsed.week.as_deref(), Some("9"));
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(matches!(
            CommandArgs::parse(&["--verbose"]),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            CommandArgs::parse(&["--day"]),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            CommandArgs::parse(&["--day", "someday"]),
            Err(CommandError::Budget(BudgetError::InvalidInput(_)))
        ));
    }

    #[test]
    fn add_rejects_non_numeric_price_before_touching_the_ledger() {
        let (mut ctx, _guard) = context();
        let err = ctx.dispatch("add", &["Coffee", "four"]).unwrap_err();
        assert!(matches!(err, CommandError::Budget(BudgetError::InvalidInput(_))));
        assert!(ctx.store().records(LedgerKind::Main).is_empty());
    }

    #[test]
    fn add_then_report_lines() {
        let (mut ctx, _guard) = context();
        ctx.dispatch("add", &["Lunch", "12", "--day", "monday"]).unwrap();
        ctx.dispatch("add", &["Coffee", "4"]).unwrap();

        assert_eq!(ctx.remaining_line(None), "Remaining budget: £184.00");
        assert_eq!(
            ctx.week_total_line(LedgerKind::Main, None),
            "Total main costs in week 9: £16.00"
        );
        assert_eq!(
            ctx.add_summary_line(LedgerKind::Main),
            "Your total spend for today is £4.00, your remaining spend for the week is £184.00"
        );
        assert_eq!(
            ctx.banner(),
            "Your current weekly budget is £200.00, you have £184.00 left. There are 2 day(s) left"
        );
    }

    #[test]
    fn records_json_matches_storage_layout() {
        let (mut ctx, _guard) = context();
        ctx.dispatch("add", &["Gas", "40.1", "--other"]).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&ctx.records_json(LedgerKind::Other).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "9": { "friday": [ { "name": "Gas", "cost": 40.1 } ] } })
        );
        assert_eq!(ctx.records_json(LedgerKind::Main).unwrap(), "{}");
    }

    #[test]
    fn exit_and_unknown_commands() {
        let (mut ctx, _guard) = context();
        assert_eq!(ctx.dispatch("exit", &[]).unwrap(), LoopControl::Exit);
        assert!(matches!(
            ctx.dispatch("totl", &[]),
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn suggestions_need_a_close_match() {
        assert_eq!(suggest_command("totl"), Some("total"));
        assert_eq!(suggest_command("recrds"), Some("records"));
        assert_eq!(suggest_command("completely-different"), None);
    }
}
