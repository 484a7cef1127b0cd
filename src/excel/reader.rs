//! Statement reader: .xlsx file → unmerged string grid.

use crate::error::{ConvertError, ConvertResult};
use crate::grid::Grid;
use calamine::{open_workbook, Data, Dimensions, Range, Reader, Xlsx};
use std::path::Path;

/// Open a statement export and materialize its cell grid.
///
/// BDO exports carry exactly one worksheet; anything else means the file is
/// not a statement and the run stops. Merged cells are unmerged so that
/// every covered coordinate sees the merge's value, which is what the fixed
/// coordinate table relies on.
pub fn read_statement(path: &Path) -> ConvertResult<Grid> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        ConvertError::Workbook(format!("failed to open {}: {}", path.display(), e))
    })?;

    workbook
        .load_merged_regions()
        .map_err(|e| ConvertError::Workbook(format!("failed to load merged regions: {e}")))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.len() != 1 {
        return Err(ConvertError::Structure(format!(
            "expected exactly one worksheet, got {}",
            sheet_names.len()
        )));
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let range = workbook.worksheet_range(name).map_err(|e| {
            ConvertError::Workbook(format!("failed to read worksheet {name:?}: {e}"))
        })?;

        let mut rows = materialize(&range);
        let regions: Vec<Dimensions> = workbook
            .merged_regions()
            .iter()
            .filter(|(sheet, _, _)| sheet == name)
            .map(|(_, _, dims)| dims.clone())
            .collect();
        unmerge(&mut rows, &regions);

        sheets.push(rows);
    }

    Ok(Grid::new(sheets))
}

/// Expand the worksheet range into a rectangle anchored at (0, 0), so grid
/// coordinates match the positions printed on the statement.
fn materialize(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((last_row, last_col)) = range.end() else {
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(last_row as usize + 1);
    for row in 0..=last_row {
        let mut cells = Vec::with_capacity(last_col as usize + 1);
        for col in 0..=last_col {
            let text = range
                .get_value((row, col))
                .map(cell_text)
                .unwrap_or_default();
            cells.push(text);
        }
        rows.push(cells);
    }
    rows
}

/// Duplicate each merged region's anchor value across the whole span.
fn unmerge(rows: &mut [Vec<String>], regions: &[Dimensions]) {
    for region in regions {
        let anchor = rows
            .get(region.start.0 as usize)
            .and_then(|row| row.get(region.start.1 as usize))
            .cloned();
        let Some(anchor) = anchor else { continue };

        for row in region.start.0..=region.end.0 {
            for col in region.start.1..=region.end.1 {
                if let Some(cell) = rows
                    .get_mut(row as usize)
                    .and_then(|cells| cells.get_mut(col as usize))
                {
                    *cell = anchor.clone();
                }
            }
        }
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
