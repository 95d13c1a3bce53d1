use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let sheets_api_key = require("GOOGLE_SHEETS_API_KEY")?;
    let spreadsheet_id = require("INSIGHTFLOW_SPREADSHEET_ID")?;
    let openrouter_api_key = require("OPENROUTER_API_KEY")?;

    let worksheet = or_default("INSIGHTFLOW_WORKSHEET", "Weekly Data");
    let sheets_timeout_secs = parse_u64("INSIGHTFLOW_SHEETS_TIMEOUT_SECS", "30")?;

    let llm_model = or_default("INSIGHTFLOW_LLM_MODEL", "mistralai/mistral-7b-instruct");
    let llm_base_url = or_default("INSIGHTFLOW_LLM_BASE_URL", "https://openrouter.ai/api/v1");
    let llm_timeout_secs = parse_u64("INSIGHTFLOW_LLM_TIMEOUT_SECS", "90")?;
    let llm_temperature = parse_f64("INSIGHTFLOW_LLM_TEMPERATURE", "0.7")?;
    let llm_max_attempts = parse_u32("INSIGHTFLOW_LLM_MAX_ATTEMPTS", "3")?;
    let llm_backoff_min_secs = parse_u64("INSIGHTFLOW_LLM_BACKOFF_MIN_SECS", "4")?;
    let llm_backoff_max_secs = parse_u64("INSIGHTFLOW_LLM_BACKOFF_MAX_SECS", "10")?;

    let log_level = or_default("INSIGHTFLOW_LOG_LEVEL", "info");

    Ok(AppConfig {
        sheets_api_key,
        spreadsheet_id,
        worksheet,
        sheets_timeout_secs,
        openrouter_api_key,
        llm_model,
        llm_base_url,
        llm_timeout_secs,
        llm_temperature,
        llm_max_attempts,
        llm_backoff_min_secs,
        llm_backoff_max_secs,
        log_level,
    })
}
