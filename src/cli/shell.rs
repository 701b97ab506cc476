use std::io::{self, BufRead};

use dialoguer::theme::ColorfulTheme;
use shell_words::split;

use crate::cli::{
    core::{CliError, CliMode, LoopControl, ShellContext},
    menus::{
        ledger_menu,
        main_menu::{self, MainChoice},
    },
    output,
};

/// Environment variable switching the shell to line-oriented script mode.
pub const SCRIPT_ENV: &str = "WEEKLY_BUDGET_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new()?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    output::info(context.banner());

    while context.running {
        match main_menu::show(&theme)? {
            MainChoice::Track(kind) => {
                if let Err(err) = ledger_menu::run(context, kind, &theme) {
                    context.report_error(err);
                }
            }
            MainChoice::Quit => context.running = false,
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        if handle_line(context, &line) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Executes one script line. Failures are reported and never end the script.
pub(crate) fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return LoopControl::Continue;
    }

    let tokens = match split(trimmed) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse `{}`: {}", trimmed, err));
            return LoopControl::Continue;
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return LoopControl::Continue;
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    match context.dispatch(&command, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            LoopControl::Exit
        }
        Ok(LoopControl::Continue) => LoopControl::Continue,
        Err(err) => {
            context.report_error(err);
            LoopControl::Continue
        }
    }
}
