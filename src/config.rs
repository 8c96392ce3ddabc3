//! App Configuration
//!
//! Endpoint settings, resolved once at start-up.

/// Endpoint used when `LISTS_API_URL` is not set at build time
pub const DEFAULT_LISTS_URL: &str = "https://apis.ccbp.in/list-creation/lists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the two lists are fetched from
    pub lists_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lists_url: DEFAULT_LISTS_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Read overrides baked in by the build (`LISTS_API_URL=... trunk build`)
    pub fn from_build_env() -> Self {
        Self::with_lists_url(option_env!("LISTS_API_URL"))
    }

    fn with_lists_url(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(url) if !url.is_empty() => Self {
                lists_url: url.to_string(),
            },
            _ => Self::default(),
        }
    }
}
