//! Ledger line and total formatting
//!
//! Lines are shown as stored (minus the newline) with their 1-based position
//! in the whole file, which is the number `delete --number` accepts even when
//! the listing is filtered.

use crate::models::Amount;
use crate::storage::LedgerSummary;

/// Format `(position, line)` pairs as a numbered list
pub fn format_line_list(lines: &[(usize, String)]) -> String {
    if lines.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let width = lines
        .iter()
        .map(|(position, _)| position.to_string().len())
        .max()
        .unwrap_or(1);
    let mut output = String::new();

    for (position, line) in lines {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            position,
            strip_newline(line),
            width = width
        ));
    }

    output
}

/// Format the total for a payment type
pub fn format_type_total(expense_type: &str, total: f64, currency: &str) -> String {
    format!(
        "Total expenses for '{}': {}",
        expense_type,
        format_amount(Amount::new(total), currency)
    )
}

/// Format the total for a card
pub fn format_card_total(card_name: &str, total: f64, currency: &str) -> String {
    format!(
        "Total expenses for card '{}': {}",
        card_name,
        format_amount(Amount::new(total), currency)
    )
}

/// Format a ledger summary as a small table
pub fn format_summary(summary: &LedgerSummary, currency: &str) -> String {
    if summary.record_count == 0 && summary.malformed_count == 0 {
        return "No expenses found.\n".to_string();
    }

    let label_width = summary
        .per_card
        .keys()
        .map(|name| name.chars().count() + 4)
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut output = String::new();
    let mut row = |label: &str, amount: Amount| {
        output.push_str(&format!(
            "{:<label_width$}  {:>14}\n",
            label,
            format_amount(amount, currency),
            label_width = label_width
        ));
    };

    row("Cash", summary.cash_total);
    row("Card", summary.card_total);
    for (name, amount) in &summary.per_card {
        let label = if name.is_empty() {
            "  (unnamed)".to_string()
        } else {
            format!("  {}", name)
        };
        row(&label, *amount);
    }
    row("Total", summary.grand_total());

    output.push_str(&format!("\n{} expense(s)", summary.record_count));
    if summary.malformed_count > 0 {
        output.push_str(&format!(
            ", {} unreadable line(s) skipped",
            summary.malformed_count
        ));
    }
    output.push('\n');

    output
}

fn format_amount(amount: Amount, currency: &str) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{}{}", currency, amount)
    }
}

fn strip_newline(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
