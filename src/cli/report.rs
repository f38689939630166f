//! CLI commands for totals and summaries

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_card_total, format_summary, format_type_total};
use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseType;
use crate::storage::LedgerStore;

/// Total subcommands
#[derive(Subcommand, Debug)]
pub enum TotalCommands {
    /// Total spent by payment type
    Type {
        /// Payment type (cash or card)
        expense_type: String,
    },
    /// Total spent on one card
    Card {
        /// Card name (case-insensitive)
        name: String,
    },
}

/// Handle a total command
pub fn handle_total_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: TotalCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TotalCommands::Type { expense_type } => {
            let expense_type = expense_type.trim().to_lowercase();
            if ExpenseType::parse(&expense_type).is_none() {
                return Err(LedgerError::Validation(
                    "Please enter 'cash' or 'card'".into(),
                ));
            }
            let total = store.total_by_type(&expense_type)?;
            println!("{}", format_type_total(&expense_type, total, currency));
        }
        TotalCommands::Card { name } => {
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                return Err(LedgerError::Validation("Please enter a card name".into()));
            }
            let total = store.total_by_card(&name)?;
            println!("{}", format_card_total(&name, total, currency));
        }
    }

    Ok(())
}

/// Handle `summary`
pub fn handle_summary(store: &LedgerStore, settings: &Settings) -> LedgerResult<()> {
    let summary = store.summary()?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}
