use bdo_convert::cli;
use bdo_convert::error::ConvertResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bdo-convert")]
#[command(about = "Convert BDO bank statement .xlsx exports into a clean transaction workbook")]
#[command(long_about = "bdo-convert - BDO statement normalizer

Reads the transaction-history .xlsx a BDO online banking export produces,
extracts the account header and every transaction row, and writes a clean
two-sheet workbook (Transactions + Account Information).

COMMANDS:
  convert - Statement .xlsx to normalized .xlsx
  show    - Parse a statement and print the ledger

EXAMPLES:
  bdo-convert convert raw/sample.xlsx raw/output.xlsx
  bdo-convert show raw/sample.xlsx --json
  bdo-convert convert raw/sample.xlsx out.xlsx --layout layouts/bdo.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a statement export into a normalized two-sheet workbook
    Convert {
        /// Path to the bank's .xlsx statement export
        input: PathBuf,

        /// Output workbook path (.xlsx)
        output: PathBuf,

        /// Statement layout YAML; defaults to the built-in BDO table
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Print every extracted transaction
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a statement and print the extracted ledger
    Show {
        /// Path to the bank's .xlsx statement export
        input: PathBuf,

        /// Statement layout YAML; defaults to the built-in BDO table
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Print the full transaction history as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ConvertResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bdo_convert=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            layout,
            verbose,
        } => cli::convert(input, output, layout, verbose),

        Commands::Show {
            input,
            layout,
            json,
        } => cli::show(input, layout, json),
    }
}
