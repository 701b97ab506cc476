use dialoguer::theme::ColorfulTheme;

use crate::ledger::LedgerKind;

/// Top-level choice: which ledger to work on, or quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Track(LedgerKind),
    Quit,
}

pub(crate) fn items() -> Vec<String> {
    vec![
        "Track main costs (affects weekly budget)".to_string(),
        "Track other costs (bills, etc. - does not affect weekly budget)".to_string(),
        "Quit".to_string(),
    ]
}

pub(crate) fn choice_for(index: Option<usize>) -> MainChoice {
    match index {
        Some(0) => MainChoice::Track(LedgerKind::Main),
        Some(1) => MainChoice::Track(LedgerKind::Other),
        _ => MainChoice::Quit,
    }
}

pub fn show(theme: &ColorfulTheme) -> Result<MainChoice, dialoguer::Error> {
    let index = super::select(theme, "What would you like to track?", &items())?;
    Ok(choice_for(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_last_item_quit() {
        assert_eq!(choice_for(None), MainChoice::Quit);
        assert_eq!(choice_for(Some(items().len() - 1)), MainChoice::Quit);
        assert_eq!(choice_for(Some(1)), MainChoice::Track(LedgerKind::Other));
    }
}
