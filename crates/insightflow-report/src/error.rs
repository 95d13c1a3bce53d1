use thiserror::Error;

/// Errors raised on the way to a report.
///
/// None of these cross [`crate::ReportGenerator::generate`]; they are
/// absorbed into [`crate::ReportOutcome`], but the fallible internals
/// (client, retry, fallback template) speak in these terms.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion service answered with a non-2xx status.
    #[error("completion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response parsed but carried no extractable completion text.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// The record has no metric fields at all, so not even the
    /// deterministic template can be assembled.
    #[error("record has no metric fields to report on")]
    EmptyRecord,
}
