//! Workbook reading.
//!
//! Extraction itself only sees `Vec<Vec<String>>`; this is the collaborator
//! that produces it. The first worksheet is read, every cell is stringified
//! (so date cells become their serial text, which the normalizer knows how to
//! handle), and fully blank rows are dropped.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use tracing::debug;

use super::ExtractError;

/// Read the first worksheet of an `.xlsx`/`.xls` file into stringified rows.
///
/// Returns `ExtractError::Malformed` when the file cannot be decoded as a
/// spreadsheet. A workbook with no sheets yields an empty row set, which the
/// extractor reports as the empty-file condition.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, ExtractError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut rows = Vec::new();
    if let Some(first) = sheet_names.first() {
        match workbook.worksheet_range(first) {
            Some(Ok(range)) => {
                for row in range.rows() {
                    let cells: Vec<String> =
                        row.iter().map(|cell| cell.to_string().trim().to_string()).collect();
                    if cells.iter().all(|cell| cell.is_empty()) {
                        continue;
                    }
                    rows.push(cells);
                }
                debug!(sheet = %first, rows = rows.len(), "worksheet read");
            }
            Some(Err(e)) => return Err(e.into()),
            None => {}
        }
    }

    Ok(rows)
}
