use thiserror::Error;

/// Errors returned by the Sheets API client.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Sheets API rejected the request (bad key, unknown sheet, etc.).
    #[error("Sheets API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
