//! Application Configuration
//!
//! Resolved at build time; a static SPA has no runtime config file.

/// Backend used when `TASKBOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Auto-logoff minutes used when the settings fetch fails
pub const FALLBACK_IDLE_MINUTES: u32 = 10;

/// Bounds of the auto-logoff slider
pub const MIN_IDLE_MINUTES: u32 = 1;
pub const MAX_IDLE_MINUTES: u32 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub fallback_idle_minutes: u32,
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::with_base_url(option_env!("TASKBOARD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim();
        let base_url = if base_url.is_empty() { DEFAULT_API_URL } else { base_url };
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            fallback_idle_minutes: FALLBACK_IDLE_MINUTES,
            log_level: if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::with_base_url("https://api.example.com/v1/");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = AppConfig::with_base_url("   ");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.fallback_idle_minutes, FALLBACK_IDLE_MINUTES);
    }
}
