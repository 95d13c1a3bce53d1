/// Application configuration, loaded from environment variables.
///
/// Credentials are only ever supplied through the environment; nothing in
/// this workspace carries a baked-in key or model default beyond the values
/// documented in [`crate::config`].
#[derive(Clone)]
pub struct AppConfig {
    pub sheets_api_key: String,
    pub spreadsheet_id: String,
    pub worksheet: String,
    pub sheets_timeout_secs: u64,
    pub openrouter_api_key: String,
    pub llm_model: String,
    pub llm_base_url: String,
    pub llm_timeout_secs: u64,
    pub llm_temperature: f64,
    pub llm_max_attempts: u32,
    pub llm_backoff_min_secs: u64,
    pub llm_backoff_max_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("sheets_api_key", &"[redacted]")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("worksheet", &self.worksheet)
            .field("sheets_timeout_secs", &self.sheets_timeout_secs)
            .field("openrouter_api_key", &"[redacted]")
            .field("llm_model", &self.llm_model)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("llm_temperature", &self.llm_temperature)
            .field("llm_max_attempts", &self.llm_max_attempts)
            .field("llm_backoff_min_secs", &self.llm_backoff_min_secs)
            .field("llm_backoff_max_secs", &self.llm_backoff_max_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secrets() {
        let config = AppConfig {
            sheets_api_key: "sheet-secret".to_string(),
            spreadsheet_id: "sheet-id".to_string(),
            worksheet: "Weekly Data".to_string(),
            sheets_timeout_secs: 30,
            openrouter_api_key: "llm-secret".to_string(),
            llm_model: "mistralai/mistral-7b-instruct".to_string(),
            llm_base_url: "https://openrouter.ai/api/v1".to_string(),
            llm_timeout_secs: 90,
            llm_temperature: 0.7,
            llm_max_attempts: 3,
            llm_backoff_min_secs: 4,
            llm_backoff_max_secs: 10,
            log_level: "info".to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sheet-secret"));
        assert!(!rendered.contains("llm-secret"));
        assert!(rendered.contains("[redacted]"));
        assert!(rendered.contains("sheet-id"));
    }
}
