use dialoguer::{theme::ColorfulTheme, Input};

use crate::{
    cli::{
        core::{CommandError, ShellContext},
        input::parse_price,
        output,
    },
    ledger::LedgerKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    Add,
    Remaining,
    WeekTotal,
    Records,
    Back,
}

pub(crate) fn items(kind: LedgerKind) -> Vec<String> {
    let label = kind.label().to_lowercase();
    let remaining = if kind.counts_against_budget() {
        "Show remaining budget".to_string()
    } else {
        format!("Show remaining budget (not applicable for {})", label)
    };
    vec![
        match kind {
            LedgerKind::Main => "Add a main cost".to_string(),
            LedgerKind::Other => "Add an other cost".to_string(),
        },
        remaining,
        format!("Show total {} this week", label),
        format!("Show all {} records", label),
        "Back to cost type selection".to_string(),
    ]
}

pub(crate) fn action_for(index: Option<usize>) -> LedgerAction {
    match index {
        Some(0) => LedgerAction::Add,
        Some(1) => LedgerAction::Remaining,
        Some(2) => LedgerAction::WeekTotal,
        Some(3) => LedgerAction::Records,
        _ => LedgerAction::Back,
    }
}

/// Runs the per-ledger menu until the user goes back.
pub fn run(
    context: &mut ShellContext,
    kind: LedgerKind,
    theme: &ColorfulTheme,
) -> Result<(), CommandError> {
    let items = items(kind);
    loop {
        output::section(format!("Currently tracking: {}", kind.label()));
        let action = action_for(super::select(theme, "Choose an action", &items)?);
        let outcome = match action {
            LedgerAction::Add => prompt_and_add(context, kind, theme),
            LedgerAction::Remaining => {
                if kind.counts_against_budget() {
                    output::info(context.remaining_line(None));
                } else {
                    output::warning(context.remaining_not_applicable());
                }
                Ok(())
            }
            LedgerAction::WeekTotal => {
                output::info(context.week_total_line(kind, None));
                Ok(())
            }
            LedgerAction::Records => context.records_json(kind).map(|json| output::info(json)),
            LedgerAction::Back => return Ok(()),
        };
        if let Err(err) = outcome {
            context.report_error(err);
        }
    }
}

fn prompt_and_add(
    context: &mut ShellContext,
    kind: LedgerKind,
    theme: &ColorfulTheme,
) -> Result<(), CommandError> {
    let name: String = Input::with_theme(theme)
        .with_prompt(format!("{} name", kind.singular()))
        .interact_text()?;

    // Re-prompts until the text parses; the store only ever sees a number.
    let raw_price: String = Input::with_theme(theme)
        .with_prompt(format!("{} price", kind.singular()))
        .validate_with(|input: &String| -> Result<(), &'static str> {
            parse_price(input)
                .map(|_| ())
                .map_err(|_| "Please enter a valid number")
        })
        .interact_text()?;
    let price = parse_price(&raw_price)?;

    context.add_cost(&name, price, kind, None)
}
