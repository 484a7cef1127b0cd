//! Domain types for a parsed BDO statement.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check number the bank prints when no check is involved. The value is kept
/// on the `Transaction` as-is; only the report writer suppresses it.
pub const NO_CHECK_NUMBER: &str = "000000000";

/// Account-level fields read once from fixed coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementHeader {
    pub corporation: String,
    pub requested_date: String,
    pub period_covered: String,
    pub account_alias: String,
    pub account_number: String,
    pub currency: String,
    pub account_name: String,
}

/// One statement line item. Posting date stays in the statement's native
/// format; it is never parsed as a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub posting_date: String,
    pub branch: String,
    pub description: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
    pub running_balance: BigDecimal,
    pub check_number: String,
}

impl Transaction {
    /// A row only enters the ledger when all of its text fields are filled
    /// in. The amounts do not gate validity.
    pub fn is_valid(&self) -> bool {
        !self.posting_date.is_empty()
            && !self.branch.is_empty()
            && !self.description.is_empty()
            && !self.check_number.is_empty()
    }

    pub fn has_check_number(&self) -> bool {
        self.check_number != NO_CHECK_NUMBER
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "posting date: {}; branch: {}; description: {}; debit: {}; credit: {}; running balance: {}; check number: {}",
            self.posting_date,
            self.branch,
            self.description,
            self.debit,
            self.credit,
            self.running_balance,
            self.check_number,
        )
    }
}

/// Result of one conversion run: the header plus every accepted transaction
/// in source row order. Immutable once the extraction pass completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionHistory {
    pub header: StatementHeader,
    pub transactions: Vec<Transaction>,
}
