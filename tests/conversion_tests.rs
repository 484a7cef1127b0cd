//! End-to-end extraction tests over in-memory grids.

use bdo_convert::extract::extract;
use bdo_convert::layout::{Coordinate, StatementLayout};
use bdo_convert::{Grid, NO_CHECK_NUMBER};
use bigdecimal::BigDecimal;
use pretty_assertions::assert_eq;
use std::str::FromStr;

const WIDTH: usize = 12;

fn header_sheet() -> Vec<Vec<String>> {
    let mut sheet = vec![vec![String::new(); WIDTH]; 15];
    sheet[6][4] = "01/31/2024".to_string();
    sheet[8][4] = "  ACME CORP  ".to_string();
    sheet[9][4] = "01/01/2024 - 01/31/2024".to_string();
    sheet[10][4] = "PAYROLL".to_string();
    sheet[11][4] = "001234567890".to_string();
    sheet[12][4] = "PHP".to_string();
    sheet[13][4] = "ACME PAYROLL ACCT".to_string();
    sheet
}

fn txn_row(
    date: &str,
    branch: &str,
    description: &str,
    debit: &str,
    credit: &str,
    balance: &str,
    check: &str,
) -> Vec<String> {
    let mut row = vec![String::new(); WIDTH];
    row[1] = date.to_string();
    row[3] = branch.to_string();
    row[6] = description.to_string();
    row[7] = debit.to_string();
    row[8] = credit.to_string();
    row[9] = balance.to_string();
    row[11] = check.to_string();
    row
}

fn grid_with_rows(rows: Vec<Vec<String>>) -> Grid {
    let mut sheet = header_sheet();
    sheet.extend(rows);
    Grid::new(vec![sheet])
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER EXTRACTION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_header_equals_trimmed_source_cells() {
    let history = extract(&grid_with_rows(vec![]), &StatementLayout::bdo()).unwrap();
    assert_eq!(history.header.corporation, "ACME CORP");
    assert_eq!(history.header.requested_date, "01/31/2024");
    assert_eq!(history.header.account_number, "001234567890");
    assert_eq!(history.header.currency, "PHP");
    assert!(history.transactions.is_empty());
}

#[test]
fn test_truncated_header_area_aborts_run() {
    let grid = Grid::new(vec![vec![vec![String::new(); WIDTH]; 4]]);
    assert!(extract(&grid, &StatementLayout::bdo()).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// ROW CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_three_rows_two_valid_one_blank() {
    let grid = grid_with_rows(vec![
        txn_row("01/02", "MAKATI", "SALARY", "", "100.00", "1,100.00", NO_CHECK_NUMBER),
        vec![String::new(); WIDTH],
        txn_row("01/03", "ORTIGAS", "WITHDRAWAL", "50.00", "", "1,050.00", NO_CHECK_NUMBER),
    ]);
    let history = extract(&grid, &StatementLayout::bdo()).unwrap();

    assert_eq!(history.transactions.len(), 2);
    assert_eq!(history.transactions[0].description, "SALARY");
    assert_eq!(history.transactions[1].description, "WITHDRAWAL");
}

#[test]
fn test_dated_zero_balance_row_never_appears() {
    let grid = grid_with_rows(vec![txn_row(
        "01/31",
        "MAKATI",
        "ENDING BALANCE",
        "1.00",
        "2.00",
        "0.00",
        NO_CHECK_NUMBER,
    )]);
    let history = extract(&grid, &StatementLayout::bdo()).unwrap();
    assert!(history.transactions.is_empty());
}

#[test]
fn test_malformed_balance_contains_failure_to_one_row() {
    let grid = grid_with_rows(vec![
        txn_row("01/02", "MAKATI", "BROKEN", "", "1.00", "12.3.4", NO_CHECK_NUMBER),
        txn_row("01/03", "MAKATI", "FINE", "", "1.00", "13.00", NO_CHECK_NUMBER),
    ]);
    let history = extract(&grid, &StatementLayout::bdo()).unwrap();

    assert_eq!(history.transactions.len(), 1);
    assert_eq!(history.transactions[0].description, "FINE");
}

#[test]
fn test_amounts_are_exact_decimals() {
    let grid = grid_with_rows(vec![txn_row(
        "01/02",
        "MAKATI",
        "BIG DEPOSIT",
        "",
        "9,007,199,254,740,993.01",
        "9,007,199,254,740,993.01",
        NO_CHECK_NUMBER,
    )]);
    let history = extract(&grid, &StatementLayout::bdo()).unwrap();
    assert_eq!(
        history.transactions[0].credit,
        BigDecimal::from_str("9007199254740993.01").unwrap()
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SWAPPABLE LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_custom_layout_moves_field_reads() {
    let mut layout = StatementLayout::bdo();
    // Pretend a revised export moved the account number down one row.
    layout
        .fields
        .insert("Account Number".to_string(), Coordinate::new(0, 12, 4));

    let history = extract(&grid_with_rows(vec![]), &layout).unwrap();
    assert_eq!(history.header.account_number, "PHP");
}

#[test]
fn test_layout_loaded_from_yaml_behaves_like_builtin() {
    let yaml = serde_yaml::to_string(&StatementLayout::bdo()).unwrap();
    let layout: StatementLayout = serde_yaml::from_str(&yaml).unwrap();

    let grid = grid_with_rows(vec![txn_row(
        "01/02",
        "MAKATI",
        "SALARY",
        "",
        "100.00",
        "1,100.00",
        NO_CHECK_NUMBER,
    )]);
    let history = extract(&grid, &layout).unwrap();
    assert_eq!(history.transactions.len(), 1);
}
