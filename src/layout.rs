//! Statement layout: where each field lives in the source workbook.
//!
//! The coordinate table is data, not code, so a future statement format is a
//! new `StatementLayout` value (or YAML file), not a change to the extraction
//! logic. The built-in table matches the BDO transaction history export.

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A (sheet, row, column) locator for one grid cell. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub sheet: usize,
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(sheet: usize, row: usize, col: usize) -> Self {
        Self { sheet, row, col }
    }
}

/// Header field names understood by `StatementLayout::header_cell`.
pub const HEADER_FIELDS: [&str; 7] = [
    "Requested Date",
    "Corporation",
    "Period Covered",
    "Account Alias",
    "Account Number",
    "Currency",
    "Account Name",
];

/// Marker entry whose row component is the first candidate transaction row.
pub const START_DATA: &str = "StartData";

/// Coordinate table for one statement format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLayout {
    /// Sheet holding the transaction area. BDO exports use sheet 0 only.
    pub sheet: usize,
    /// Fixed header cells, including the `StartData` marker.
    pub fields: HashMap<String, Coordinate>,
    /// Column index per transaction field, applied to every data row.
    pub columns: HashMap<String, usize>,
    /// Column used when a transaction field name is not in `columns`.
    /// Inherited quirk: this aliases the posting-date column, so a typo in a
    /// field name silently reads dates. Kept verbatim; see DESIGN.md.
    pub fallback_column: usize,
}

impl StatementLayout {
    /// The BDO transaction history layout.
    pub fn bdo() -> Self {
        let fields = HashMap::from([
            ("Requested Date".to_string(), Coordinate::new(0, 6, 4)),
            ("Corporation".to_string(), Coordinate::new(0, 8, 4)),
            ("Period Covered".to_string(), Coordinate::new(0, 9, 4)),
            ("Account Alias".to_string(), Coordinate::new(0, 10, 4)),
            ("Account Number".to_string(), Coordinate::new(0, 11, 4)),
            ("Currency".to_string(), Coordinate::new(0, 12, 4)),
            ("Account Name".to_string(), Coordinate::new(0, 13, 4)),
            (START_DATA.to_string(), Coordinate::new(0, 15, 1)),
        ]);

        let columns = HashMap::from([
            ("posting_date".to_string(), 1),
            ("branch".to_string(), 3),
            ("description".to_string(), 6),
            ("debit".to_string(), 7),
            ("credit".to_string(), 8),
            ("running_balance".to_string(), 9),
            ("check_number".to_string(), 11),
        ]);

        Self {
            sheet: 0,
            fields,
            columns,
            fallback_column: 1,
        }
    }

    /// Load a layout from a YAML file.
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        let content = fs::read_to_string(path)?;
        let layout: StatementLayout = serde_yaml::from_str(&content)?;
        Ok(layout)
    }

    /// Fixed coordinate of a header field, if the layout knows it.
    pub fn header_cell(&self, field: &str) -> Option<Coordinate> {
        self.fields.get(field).copied()
    }

    /// First candidate transaction row, from the `StartData` marker.
    pub fn start_row(&self) -> ConvertResult<usize> {
        self.fields
            .get(START_DATA)
            .map(|coord| coord.row)
            .ok_or_else(|| {
                ConvertError::Structure(format!("layout has no {START_DATA} entry"))
            })
    }

    /// Coordinate of a transaction field on the given data row. Unknown
    /// field names resolve to `fallback_column`.
    pub fn transaction_cell(&self, row: usize, field: &str) -> Coordinate {
        let col = self
            .columns
            .get(field)
            .copied()
            .unwrap_or(self.fallback_column);
        Coordinate::new(self.sheet, row, col)
    }
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self::bdo()
    }
}
