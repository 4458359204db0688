use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required: without a database or an API key the service runs on the
/// dictionary alone.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub gemini_api_key: Option<String>,
    /// Overrides the Gemini `.../models` endpoint (proxies, local stubs).
    pub gemini_api_base: Option<String>,
    pub enable_llm_enrichment: bool,
    pub llm_timeout_secs: u64,
    pub min_text_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            gemini_api_key: None,
            gemini_api_base: None,
            enable_llm_enrichment: true,
            llm_timeout_secs: 30,
            min_text_chars: 50,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            database_url: get("DATABASE_URL"),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_api_base: get("GEMINI_API_BASE"),
            enable_llm_enrichment: match get("ENABLE_LLM_ENRICHMENT") {
                Some(v) => parse_bool(&v)
                    .with_context(|| format!("ENABLE_LLM_ENRICHMENT must be true/false, got '{v}'"))?,
                None => defaults.enable_llm_enrichment,
            },
            llm_timeout_secs: match get("LLM_TIMEOUT_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => defaults.llm_timeout_secs,
            },
            min_text_chars: match get("MIN_TEXT_CHARS") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MIN_TEXT_CHARS must be a non-negative integer")?,
                None => defaults.min_text_chars,
            },
            port: match get("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
