//! Application Configuration
//!
//! Values are baked in at build time (`PV_API_BASE`, `PV_TOKEN_KEY`,
//! `PV_LOG_LEVEL`), falling back to local development defaults.

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the site manager API, without trailing slash
    pub api_base: String,
    /// localStorage key holding the bearer token
    pub token_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PV_API_BASE"),
            option_env!("PV_TOKEN_KEY"),
            option_env!("PV_LOG_LEVEL"),
        )
    }

    fn from_values(api_base: Option<&str>, token_key: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: normalize_base(api_base.unwrap_or(&defaults.api_base)),
            token_key: token_key
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_key),
            log_level: log_level
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        rolling_logger::parse_level(&self.log_level)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
