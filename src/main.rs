use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::audit::AuditLogger;
use expense_ledger::cli::{
    handle_add, handle_delete, handle_export, handle_history, handle_list, handle_summary,
    handle_total_command, AddArgs, DeleteArgs, ExportArgs, ListArgs, TotalCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::storage::open_ledger;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Flat-file personal expense ledger",
    long_about = "Records cash and card expenses as one line each in a plain text \
                  file and reports totals by payment type, card, or date."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses (all, today's, or one date's)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete an expense by its exact text or its number in `list`
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show totals by payment type or card
    #[command(subcommand)]
    Total(TotalCommands),

    /// Show cash, card and per-card totals
    Summary,

    /// Export expenses to CSV or JSON
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("ledger - flat-file personal expense ledger");
        println!();
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::History { limit } => {
            handle_history(&AuditLogger::new(paths.audit_log()), limit)?;
        }
        Commands::Config => {
            let ledger_file = cli
                .file
                .clone()
                .unwrap_or_else(|| settings.ledger_path(&paths));

            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", ledger_file.display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Time zone:     {}", settings.timezone);
            println!("  Audit enabled: {}", settings.audit_enabled);
        }
        Commands::Add(args) => {
            let store = open_ledger(&paths, &settings, cli.file)?;
            if !handle_add(&store, args)?.is_success() {
                std::process::exit(1);
            }
        }
        Commands::List(args) => {
            let store = open_ledger(&paths, &settings, cli.file)?;
            handle_list(&store, args)?;
        }
        Commands::Delete(args) => {
            let store = open_ledger(&paths, &settings, cli.file)?;
            handle_delete(&store, args)?;
        }
        Commands::Total(cmd) => {
            let store = open_ledger(&paths, &settings, cli.file)?;
            handle_total_command(&store, &settings, cmd)?;
        }
        Commands::Summary => {
            let store = open_ledger(&paths, &settings, cli.file)?;
            handle_summary(&store, &settings)?;
        }
        Commands::Export(args) => {
            let store = open_ledger(&paths, &settings, cli.file)?;
            handle_export(&store, args)?;
        }
    }

    Ok(())
}
