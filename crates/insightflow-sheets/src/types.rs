//! Wire types for the Sheets v4 values endpoint.

use serde::Deserialize;

/// The `ValueRange` envelope returned by `GET .../values/{range}`.
///
/// `values` is omitted entirely when the range is empty, and individual
/// cells arrive as strings or numbers depending on the sheet's formatting,
/// so rows are kept as raw JSON values until [`crate::parse`] coerces them.
#[derive(Debug, Deserialize)]
pub(crate) struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}
