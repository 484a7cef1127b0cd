//! Row classification and extraction: raw cell grid → transaction history.
//!
//! Header fields are read once from fixed coordinates; failure there aborts
//! the run. The row scan is a single sequential pass from the layout's start
//! row to the end of sheet 0, and every failure inside it is contained to
//! the row that caused it.

use crate::amount::parse_amount;
use crate::error::{ConvertError, ConvertResult};
use crate::grid::Grid;
use crate::layout::StatementLayout;
use crate::types::{StatementHeader, Transaction, TransactionHistory};
use bigdecimal::{BigDecimal, Zero};
use tracing::{debug, warn};

/// Run the full extraction pass over a materialized grid.
pub fn extract(grid: &Grid, layout: &StatementLayout) -> ConvertResult<TransactionHistory> {
    let header = load_header(grid, layout)?;
    let transactions = scan_rows(grid, layout)?;
    Ok(TransactionHistory {
        header,
        transactions,
    })
}

/// Read the seven fixed header fields. Any missing layout entry or
/// out-of-grid coordinate is a structure error and fatal for the run.
pub fn load_header(grid: &Grid, layout: &StatementLayout) -> ConvertResult<StatementHeader> {
    Ok(StatementHeader {
        corporation: header_value(grid, layout, "Corporation")?,
        requested_date: header_value(grid, layout, "Requested Date")?,
        period_covered: header_value(grid, layout, "Period Covered")?,
        account_alias: header_value(grid, layout, "Account Alias")?,
        account_number: header_value(grid, layout, "Account Number")?,
        currency: header_value(grid, layout, "Currency")?,
        account_name: header_value(grid, layout, "Account Name")?,
    })
}

fn header_value(grid: &Grid, layout: &StatementLayout, field: &str) -> ConvertResult<String> {
    let coord = layout
        .header_cell(field)
        .ok_or_else(|| ConvertError::Structure(format!("layout has no {field:?} entry")))?;
    grid.try_value(coord)
        .map(str::to_string)
        .ok_or_else(|| {
            ConvertError::Structure(format!(
                "{field:?} cell ({}, {}, {}) outside statement grid",
                coord.sheet, coord.row, coord.col
            ))
        })
}

/// Walk candidate rows in source order. Rows that fail amount parsing are
/// logged and dropped; the scan itself never aborts.
fn scan_rows(grid: &Grid, layout: &StatementLayout) -> ConvertResult<Vec<Transaction>> {
    let start = layout.start_row()?;
    let mut transactions = Vec::new();

    for row in start..grid.row_count(layout.sheet) {
        match extract_row(grid, layout, row) {
            Ok(Some(txn)) => transactions.push(txn),
            Ok(None) => {}
            Err(err) => warn!(row, %err, "dropping unparseable row"),
        }
    }

    Ok(transactions)
}

fn extract_row(
    grid: &Grid,
    layout: &StatementLayout,
    row: usize,
) -> ConvertResult<Option<Transaction>> {
    let debit = amount_at(grid, layout, row, "debit")?;
    let credit = amount_at(grid, layout, row, "credit")?;
    let running_balance = amount_at(grid, layout, row, "running_balance")?;

    let posting_date = grid
        .value(layout.transaction_cell(row, "posting_date"))
        .to_string();

    // Section totals and carry-forward markers reuse the transaction area.
    // A dated row whose running balance is exactly zero is one of those.
    // The check really is "balance equals zero" (see DESIGN.md).
    if !posting_date.is_empty() && running_balance.is_zero() {
        debug!(row, "dated row with zero running balance; not a transaction");
        return Ok(None);
    }

    let description =
        collapse_double_spaces(grid.value(layout.transaction_cell(row, "description")));

    let txn = Transaction {
        posting_date,
        branch: grid
            .value(layout.transaction_cell(row, "branch"))
            .to_string(),
        description,
        debit,
        credit,
        running_balance,
        check_number: grid
            .value(layout.transaction_cell(row, "check_number"))
            .to_string(),
    };

    if txn.is_valid() {
        Ok(Some(txn))
    } else {
        debug!(row, "row failed the non-empty-field check; excluded");
        Ok(None)
    }
}

fn amount_at(
    grid: &Grid,
    layout: &StatementLayout,
    row: usize,
    field: &'static str,
) -> ConvertResult<BigDecimal> {
    let raw = grid.value(layout.transaction_cell(row, field));
    parse_amount(raw).map_err(|_| ConvertError::NumericParse {
        row,
        field,
        value: raw.to_string(),
    })
}

/// Exactly two passes of double-space collapsing. Runs of three or more
/// spaces come out only partially collapsed; this is not full whitespace
/// normalization and must stay that way.
fn collapse_double_spaces(text: &str) -> String {
    text.replace("  ", " ").replace("  ", " ")
}
