//! CLI command for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_records_csv, export_records_json};
use crate::storage::LedgerStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense
    Csv,
    /// Snapshot with metadata
    Json,
}

/// Arguments for exporting the ledger
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`, returning how many records were written
pub fn handle_export(store: &LedgerStore, args: ExportArgs) -> LedgerResult<usize> {
    let file = File::create(&args.output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let count = match args.format {
        ExportFormat::Csv => export_records_csv(store, &mut writer)?,
        ExportFormat::Json => export_records_json(store, &mut writer, args.pretty)?,
    };

    println!("Exported {} expense(s) to: {}", count, args.output.display());
    Ok(count)
}
