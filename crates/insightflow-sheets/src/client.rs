//! HTTP client for the Google Sheets v4 values endpoint.
//!
//! Wraps `reqwest` with Sheets-specific error handling, API key management,
//! and typed response deserialization. Error bodies from the API carry a
//! `{"error": {"message": ...}}` envelope which is surfaced as
//! [`SheetsError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use insightflow_core::WeeklyMetricRecord;

use crate::error::SheetsError;
use crate::parse::records_from_values;
use crate::types::ValueRange;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/";

/// Client for the Google Sheets v4 REST API.
///
/// Manages the HTTP client, API key, spreadsheet id, and base URL. Use
/// [`SheetsClient::new`] for production or [`SheetsClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SheetsClient {
    client: Client,
    api_key: String,
    spreadsheet_id: String,
    base_url: Url,
}

impl SheetsClient {
    /// Creates a new client pointed at the production Sheets API.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        spreadsheet_id: &str,
        timeout_secs: u64,
    ) -> Result<Self, SheetsError> {
        Self::with_base_url(api_key, spreadsheet_id, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SheetsError::ApiError`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        spreadsheet_id: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("insightflow/0.1 (weekly-reporting)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // path_segments_mut appends below the root rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| SheetsError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            spreadsheet_id: spreadsheet_id.to_owned(),
            base_url,
        })
    }

    /// Fetches every row of `worksheet` and validates them into records.
    ///
    /// The first row is treated as the header row. An empty worksheet (or a
    /// worksheet with only headers) yields an empty vec; whether that is
    /// terminal is the caller's decision.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::ApiError`] if the API rejects the request.
    /// - [`SheetsError::Http`] on network failure.
    /// - [`SheetsError::Deserialize`] if the response does not match the
    ///   `ValueRange` shape.
    pub async fn fetch_records(
        &self,
        worksheet: &str,
    ) -> Result<Vec<WeeklyMetricRecord>, SheetsError> {
        let url = self.values_url(worksheet)?;
        let body = self.request_json(&url).await?;

        let range: ValueRange =
            serde_json::from_value(body).map_err(|e| SheetsError::Deserialize {
                context: format!("values({worksheet})"),
                source: e,
            })?;

        let records = records_from_values(&range.values);
        tracing::debug!(
            worksheet,
            rows = range.values.len(),
            records = records.len(),
            "fetched worksheet"
        );
        Ok(records)
    }

    /// Builds the values-endpoint URL for a worksheet, percent-encoding the
    /// worksheet name (sheet titles routinely contain spaces) and appending
    /// the API key as a query parameter.
    fn values_url(&self, worksheet: &str) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SheetsError::ApiError("base URL cannot be a base".to_string()))?
            .extend([
                "v4",
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                worksheet,
            ]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Sends a GET request and parses the response body as JSON.
    ///
    /// Non-2xx responses are mapped to [`SheetsError::ApiError`], carrying
    /// the API's own error message when one can be extracted from the body.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SheetsError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(serde_json::Value::as_str)
                        .map(ToString::to_string)
                })
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(SheetsError::ApiError(message));
        }

        // Context is the path only; the full URL would leak the API key into logs.
        serde_json::from_str(&body).map_err(|e| SheetsError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}
