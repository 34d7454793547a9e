use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The workbook decoded fine but held no usable rows. Reported before any
    /// field extraction is attempted; no partial document is produced.
    #[error("spreadsheet has no usable rows")]
    EmptySheet,

    /// The file could not be decoded as a spreadsheet at all.
    #[error("could not decode spreadsheet: {0}")]
    Malformed(#[from] calamine::Error),
}
