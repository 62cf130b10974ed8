use std::net::IpAddr;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: String,
    pub max_body_size: usize,
    pub log_level: String,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// No key means the chat proxy is disabled.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://database.db");

        let host: IpAddr = env_or("APEXCORE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid APEXCORE_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let static_dir = env_or("APEXCORE_STATIC_DIR", "static");

        let max_body_size: usize = env_or("APEXCORE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid APEXCORE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("APEXCORE_LOG_LEVEL", "info");

        // The lowercase name is what older deployments put in their .env
        let api_key = env_optional("GEMINI_API_KEY").or_else(|| env_optional("gemini_api_key"));

        let gemini = GeminiConfig {
            api_key,
            model: env_or("APEXCORE_GEMINI_MODEL", "gemini-pro"),
            api_base: env_or("APEXCORE_GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        };

        Ok(Config {
            database_url,
            host,
            port,
            static_dir,
            max_body_size,
            log_level,
            gemini,
        })
    }
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
