//! Runtime configuration loaded from the process environment.

use std::env;

pub const DEFAULT_API_BASE: &str = "https://open.bigmodel.cn/api/paas/v4/";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key. `None` is not a startup failure: every completion
    /// call will fail with `CompletionError::MissingApiKey` instead.
    pub api_key: Option<String>,
    pub api_base: String,
    pub port: u16,
    /// When true, provider failures are embedded as document text instead of
    /// re-rendering the form with an error notice.
    pub embed_provider_errors: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = env::var("AI_API_KEY").ok().filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            log::warn!("AI_API_KEY is not set; completion calls will fail until it is provided");
        }

        let api_base = env::var("AI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let embed_provider_errors = env::var("EMBED_PROVIDER_ERRORS")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Config {
            api_key,
            api_base,
            port,
            embed_provider_errors,
        }
    }
}
