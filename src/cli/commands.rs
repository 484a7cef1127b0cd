use crate::error::{ConvertError, ConvertResult};
use crate::excel;
use crate::extract;
use crate::layout::StatementLayout;
use crate::types::TransactionHistory;
use colored::Colorize;
use std::path::{Path, PathBuf};

fn load_layout(path: Option<&Path>) -> ConvertResult<StatementLayout> {
    match path {
        Some(path) => StatementLayout::from_path(path),
        None => Ok(StatementLayout::bdo()),
    }
}

fn load_history(input: &Path, layout: Option<&Path>) -> ConvertResult<TransactionHistory> {
    let layout = load_layout(layout)?;
    let grid = excel::read_statement(input)?;
    extract::extract(&grid, &layout)
}

fn print_summary(history: &TransactionHistory) {
    println!("{}", "✅ Statement parsed:".bold().green());
    println!(
        "   Account: {} ({})",
        history.header.account_number.bright_blue(),
        history.header.currency
    );
    println!("   Period:  {}", history.header.period_covered);
    println!(
        "   Transactions: {}",
        history.transactions.len().to_string().bold()
    );
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    layout: Option<PathBuf>,
    verbose: bool,
) -> ConvertResult<()> {
    println!("{}", "🏦 BDO statement converter".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());
    if let Some(ref layout) = layout {
        println!("   Layout: {}", layout.display());
    }
    println!();

    let history = load_history(&input, layout.as_deref())?;
    print_summary(&history);

    if verbose {
        for txn in &history.transactions {
            println!("    - {txn}");
        }
    }

    excel::write_report(&output, &history)?;

    println!();
    println!(
        "{} {}",
        "📄 Report written to".bold().green(),
        output.display()
    );
    Ok(())
}

/// Execute the show command - parse a statement and print the ledger
pub fn show(input: PathBuf, layout: Option<PathBuf>, json: bool) -> ConvertResult<()> {
    let history = load_history(&input, layout.as_deref())?;

    if json {
        let rendered = serde_json::to_string_pretty(&history)
            .map_err(|e| ConvertError::Export(format!("failed to render JSON: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    print_summary(&history);
    println!();
    for txn in &history.transactions {
        println!(" - {txn}");
    }
    Ok(())
}
