//! Expense CLI commands
//!
//! Adding, listing and deleting ledger lines.

use std::collections::BTreeSet;

use clap::Args;

use crate::display::format_line_list;
use crate::error::LedgerResult;
use crate::models::{date_field, AddOutcome, ExpenseInput, DATE_FORMAT};
use crate::storage::LedgerStore;

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense type (cash or card)
    pub expense_type: String,
    /// Amount (e.g., "12.5"; negative for refunds)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// What the money was spent on
    pub explanation: String,
    /// Card name for card expenses
    #[arg(short, long, default_value = "")]
    pub card: String,
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

impl From<AddArgs> for ExpenseInput {
    fn from(args: AddArgs) -> Self {
        ExpenseInput {
            expense_type: args.expense_type,
            amount: args.amount,
            explanation: args.explanation,
            card_name: args.card,
            date: args.date,
        }
    }
}

/// Arguments for listing expenses
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only today's expenses
    #[arg(short, long, conflicts_with = "date")]
    pub today: bool,
    /// Only expenses on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for deleting expenses
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DeleteArgs {
    /// Exact line text, as shown by `list`
    pub line: Option<String>,
    /// Line number, as shown by `list`
    #[arg(short, long)]
    pub number: Option<usize>,
}

/// Handle `add`, printing the outcome message
pub fn handle_add(store: &LedgerStore, args: AddArgs) -> LedgerResult<AddOutcome> {
    let outcome = store.add(&args.into())?;

    match &outcome {
        AddOutcome::Recorded(record) => {
            println!("{}", outcome.message());
            println!("  {}", record);
        }
        AddOutcome::Rejected(_) => eprintln!("{}", outcome.message()),
    }

    Ok(outcome)
}

/// Handle `list`
pub fn handle_list(store: &LedgerStore, args: ListArgs) -> LedgerResult<()> {
    let date = if args.today {
        Some(store.today().format(DATE_FORMAT).to_string())
    } else {
        args.date
    };

    let lines = numbered_lines(store, date.as_deref())?;
    print!("{}", format_line_list(&lines));
    Ok(())
}

/// Lines paired with their 1-based position in the whole file
///
/// With a date, only lines whose first field equals it are kept, using the
/// same comparison as [`LedgerStore::list_for_date`].
fn numbered_lines(store: &LedgerStore, date: Option<&str>) -> LedgerResult<Vec<(usize, String)>> {
    Ok(store
        .list_all()?
        .into_iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| date.map_or(true, |date| date_field(line) == date))
        .collect())
}

/// Handle `delete`, returning the number of lines removed
pub fn handle_delete(store: &LedgerStore, args: DeleteArgs) -> LedgerResult<usize> {
    if let Some(number) = args.number {
        let removed = store.remove_at(number)?;
        println!("Deleted: {}", removed.trim_end_matches(['\r', '\n']));
        return Ok(1);
    }

    let text = args.line.unwrap_or_default();
    let removed = delete_matching_text(store, &text)?;

    if removed == 0 {
        println!("No matching expense found.");
    } else {
        println!("Deleted {} line(s): {}", removed, text);
    }

    Ok(removed)
}

/// Delete every line whose text, without its line ending, equals `text`
///
/// Typed input never carries the newline, so each stored variant of the
/// line (with or without a line ending) is matched and deleted exactly.
fn delete_matching_text(store: &LedgerStore, text: &str) -> LedgerResult<usize> {
    let variants: BTreeSet<String> = store
        .list_all()?
        .into_iter()
        .filter(|line| line.trim_end_matches(['\r', '\n']) == text)
        .collect();

    let mut removed = 0;
    for line in &variants {
        removed += store.delete(line)?;
    }

    Ok(removed)
}
