//! Report writer: transaction history → clean two-sheet .xlsx workbook.

use crate::amount::round_up_cents;
use crate::error::{ConvertError, ConvertResult};
use crate::types::{Transaction, TransactionHistory};
use bigdecimal::{BigDecimal, ToPrimitive};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

const MONEY_NUM_FORMAT: &str = "#,##0.00";

const TRANSACTION_TITLES: [&str; 7] = [
    "Posting Date",
    "Branch",
    "Description",
    "Debit",
    "Credit",
    "Running Balance",
    "Check Number",
];

/// Write the normalized workbook: a `Transactions` sheet followed by an
/// `Account Information` sheet.
pub fn write_report(path: &Path, history: &TransactionHistory) -> ConvertResult<()> {
    let mut workbook = Workbook::new();

    let body = Format::new().set_font_name("Arial").set_font_size(11);
    let header = Format::new()
        .set_font_name("Arial")
        .set_font_size(11)
        .set_bold();
    let money = body.clone().set_num_format(MONEY_NUM_FORMAT);

    let transactions = workbook.add_worksheet();
    transactions.set_name("Transactions").map_err(export_err)?;
    write_transactions(transactions, &history.transactions, &header, &body, &money)?;

    let info = workbook.add_worksheet();
    info.set_name("Account Information").map_err(export_err)?;
    write_account_information(info, history, &body)?;

    workbook
        .save(path)
        .map_err(|e| ConvertError::Export(format!("failed to save {}: {}", path.display(), e)))?;

    Ok(())
}

fn write_transactions(
    sheet: &mut Worksheet,
    transactions: &[Transaction],
    header: &Format,
    body: &Format,
    money: &Format,
) -> ConvertResult<()> {
    sheet.set_column_width(0, 16).map_err(export_err)?;
    sheet.set_column_width(1, 36).map_err(export_err)?;
    sheet.set_column_width(2, 64).map_err(export_err)?;
    for col in 3..=6 {
        sheet.set_column_width(col, 16).map_err(export_err)?;
    }

    for (col, title) in TRANSACTION_TITLES.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, header)
            .map_err(export_err)?;
    }

    for (idx, txn) in transactions.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string_with_format(row, 0, &txn.posting_date, body)
            .map_err(export_err)?;
        sheet
            .write_string_with_format(row, 1, &txn.branch, body)
            .map_err(export_err)?;
        sheet
            .write_string_with_format(row, 2, &txn.description, body)
            .map_err(export_err)?;
        sheet
            .write_number_with_format(row, 3, display_amount(&txn.debit)?, money)
            .map_err(export_err)?;
        sheet
            .write_number_with_format(row, 4, display_amount(&txn.credit)?, money)
            .map_err(export_err)?;
        sheet
            .write_number_with_format(row, 5, display_amount(&txn.running_balance)?, money)
            .map_err(export_err)?;

        // The all-zero check number means "no check involved"; the cell is
        // left blank in the report.
        if txn.has_check_number() {
            sheet
                .write_string_with_format(row, 6, &txn.check_number, body)
                .map_err(export_err)?;
        }
    }

    Ok(())
}

fn write_account_information(
    sheet: &mut Worksheet,
    history: &TransactionHistory,
    body: &Format,
) -> ConvertResult<()> {
    let rows = [
        ("Corporation:", &history.header.corporation),
        ("Requested Date:", &history.header.requested_date),
        ("Period Covered:", &history.header.period_covered),
        ("Account Alias:", &history.header.account_alias),
        ("Account Number:", &history.header.account_number),
        ("Currency:", &history.header.currency),
        ("Account Name:", &history.header.account_name),
    ];

    for (idx, (label, value)) in rows.iter().enumerate() {
        sheet
            .write_string_with_format(idx as u32, 0, *label, body)
            .map_err(export_err)?;
        sheet
            .write_string_with_format(idx as u32, 1, value.as_str(), body)
            .map_err(export_err)?;
    }

    Ok(())
}

/// Rounded display value handed to the spreadsheet library. The only place
/// where an amount leaves exact decimal representation.
fn display_amount(value: &BigDecimal) -> ConvertResult<f64> {
    round_up_cents(value)
        .to_f64()
        .ok_or_else(|| ConvertError::Export(format!("amount {value} not representable as f64")))
}

fn export_err(err: XlsxError) -> ConvertError {
    ConvertError::Export(err.to_string())
}
