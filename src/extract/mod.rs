//! Spreadsheet-to-itinerary extraction.
//!
//! A trip template sheet is a flat two-column grid: a label in the first cell,
//! a value in the second. Extraction runs in three parts:
//!
//! - `sheet` reads the first worksheet into stringified rows
//! - `extractor` maps labeled rows onto document fields (exact dictionary
//!   first, keyword heuristics as fallback)
//! - `groups` folds indexed `골프장N_*` / `일정N_*` rows into the tee-time
//!   and schedule lists
//!
//! Unrecognized rows never fail extraction; only an undecodable file or a
//! sheet with no rows at all is an error.

pub mod dates;
pub mod error;
pub mod extractor;
pub mod groups;
pub mod sheet;

pub use dates::normalize_date;
pub use error::ExtractError;
pub use extractor::extract;
pub use sheet::read_rows;

/// Split a row into trimmed `(key, value)`, applying the shared skip rules:
/// fewer than two cells, an empty key or value, or a `===` separator key all
/// disqualify the row.
pub(crate) fn row_key_value(row: &[String]) -> Option<(&str, &str)> {
    if row.len() < 2 {
        return None;
    }
    let key = row[0].trim();
    let value = row[1].trim();
    if key.is_empty() || value.is_empty() || key.starts_with("===") {
        return None;
    }
    Some((key, value))
}
