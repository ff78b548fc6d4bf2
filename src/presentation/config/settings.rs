use crate::infrastructure::llm::{
    DEFAULT_DEEPSEEK_MODEL, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL,
    DEFAULT_OPENROUTER_BASE_URL,
};

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub gemini: ProviderEndpointSettings,
    pub openai: ProviderEndpointSettings,
    pub deepseek: ProviderEndpointSettings,
    /// Bound on each outbound provider call; a timeout is classified as a
    /// network failure and triggers the normal fallback policy.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ProviderEndpointSettings {
    /// Empty when the provider is not configured; adapters fail fast with
    /// `NotConfigured` without a network call.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed_or("SERVER_PORT", 5000),
            },
            database: DatabaseSettings {
                url: env_or("DATABASE_URL", "postgres://localhost:5432/parley"),
                max_connections: env_parsed_or("DATABASE_MAX_CONNECTIONS", 5),
            },
            providers: ProviderSettings {
                gemini: ProviderEndpointSettings {
                    api_key: env_or("GEMINI_API_KEY", ""),
                    base_url: env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                    model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                },
                openai: ProviderEndpointSettings {
                    api_key: env_or("OPENAI_API_KEY", ""),
                    base_url: env_or("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL),
                    model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                },
                deepseek: ProviderEndpointSettings {
                    api_key: env_or("DEEPSEEK_API_KEY", ""),
                    base_url: env_or("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL),
                    model: env_or("DEEPSEEK_MODEL", DEFAULT_DEEPSEEK_MODEL),
                },
                request_timeout_secs: env_parsed_or("PROVIDER_TIMEOUT_SECS", 30),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
