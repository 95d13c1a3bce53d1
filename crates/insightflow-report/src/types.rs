use insightflow_core::AppConfig;

/// Configuration for the report generator.
///
/// Constructed explicitly by the application shell; there is no
/// process-wide default and no credential baked into source.
#[derive(Clone)]
pub struct ReportConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub temperature: f64,
    /// Total attempts against the completion service, including the first.
    pub max_attempts: u32,
    pub backoff_min_secs: u64,
    pub backoff_max_secs: u64,
}

impl std::fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportConfig")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_attempts", &self.max_attempts)
            .field("backoff_min_secs", &self.backoff_min_secs)
            .field("backoff_max_secs", &self.backoff_max_secs)
            .finish()
    }
}

impl ReportConfig {
    /// Extracts the generator's slice of the application configuration.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.openrouter_api_key.clone(),
            model: config.llm_model.clone(),
            base_url: config.llm_base_url.clone(),
            timeout_secs: config.llm_timeout_secs,
            temperature: config.llm_temperature,
            max_attempts: config.llm_max_attempts,
            backoff_min_secs: config.llm_backoff_min_secs,
            backoff_max_secs: config.llm_backoff_max_secs,
        }
    }
}

/// The result of one report-generation request.
///
/// Callers distinguish the generated and fallback paths structurally
/// instead of pattern-matching on substrings of the text. The contained
/// string is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Prose from the completion service, sanitized.
    Generated(String),
    /// The deterministic template assembled from the record's fields.
    Fallback(String),
    /// A short error string; even the template could not be built.
    Failed(String),
}

impl ReportOutcome {
    /// The report text, whichever path produced it.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Fallback(text) | Self::Failed(text) => text,
        }
    }

    /// Consumes the outcome, returning the report text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) | Self::Fallback(text) | Self::Failed(text) => text,
        }
    }

    /// `true` when the deterministic template was used.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
