//! CSV Export functionality

use std::io::Write;

use crate::error::LedgerResult;
use crate::storage::LedgerStore;

/// Export all readable records to CSV, returning how many were written
///
/// Columns: date, amount, explanation, payment (`cash`/`card`), card.
pub fn export_records_csv<W: Write>(store: &LedgerStore, writer: W) -> LedgerResult<usize> {
    let records = store.records()?;
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(["date", "amount", "explanation", "payment", "card"])?;

    for record in &records {
        let payment = if record.payment.is_cash() { "cash" } else { "card" };
        let amount = record.amount.to_string();

        csv_writer.write_record([
            record.date.as_str(),
            amount.as_str(),
            record.explanation.as_str(),
            payment,
            record.payment.card_name().unwrap_or(""),
        ])?;
    }

    csv_writer.flush()?;
    Ok(records.len())
}
