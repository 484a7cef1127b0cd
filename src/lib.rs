//! bdo-convert - BDO bank statement .xlsx exports → normalized ledger
//!
//! This library reads a BDO transaction-history workbook, maps its fixed
//! cell layout to named fields, and produces a normalized transaction
//! history suitable for re-export as a clean workbook.
//!
//! # Example
//!
//! ```no_run
//! use bdo_convert::excel::read_statement;
//! use bdo_convert::extract::extract;
//! use bdo_convert::layout::StatementLayout;
//! use std::path::Path;
//!
//! let grid = read_statement(Path::new("raw/sample.xlsx"))?;
//! let history = extract(&grid, &StatementLayout::bdo())?;
//!
//! println!("Account: {}", history.header.account_number);
//! println!("Transactions: {}", history.transactions.len());
//! # Ok::<(), bdo_convert::ConvertError>(())
//! ```

pub mod amount;
pub mod cli;
pub mod error;
pub mod excel;
pub mod extract;
pub mod grid;
pub mod layout;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use grid::Grid;
pub use layout::{Coordinate, StatementLayout};
pub use types::{StatementHeader, Transaction, TransactionHistory, NO_CHECK_NUMBER};
