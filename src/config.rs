//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in through `option_env!` and parsed by the same pure function the
//! tests exercise.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 8;
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,

    #[error("invalid {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Settings shared by every page through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root; endpoint paths are appended to it.
    pub api_base_url: String,
    /// Posts requested per dashboard page.
    pub page_size: u32,
    /// Characters of post content shown before "Read More".
    pub preview_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `POSTBOARD_API_BASE_URL`: default `http://localhost:3000/api`
    /// - `POSTBOARD_PAGE_SIZE`: default 8
    /// - `POSTBOARD_PREVIEW_CHARS`: default 100
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is present but unusable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("POSTBOARD_API_BASE_URL"),
            option_env!("POSTBOARD_PAGE_SIZE"),
            option_env!("POSTBOARD_PREVIEW_CHARS"),
        )
    }

    /// Same as [`Self::from_build_env`], falling back to defaults on error.
    pub fn from_build_env_or_default() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            log::warn!("ignoring build-time config overrides: {e}");
            Self::default()
        })
    }

    /// Parse raw override values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty base URL, or a page size / preview
    /// length that is not a positive integer.
    pub fn from_values(
        base_url: Option<&str>,
        page_size: Option<&str>,
        preview_chars: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = base_url
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if api_base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let page_size = parse_positive("POSTBOARD_PAGE_SIZE", page_size, DEFAULT_PAGE_SIZE)?;
        let preview_chars = parse_positive("POSTBOARD_PREVIEW_CHARS", preview_chars, DEFAULT_PREVIEW_CHARS)?;

        Ok(Self { api_base_url, page_size, preview_chars })
    }
}

fn parse_positive<T>(key: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(v) if v != T::default() => Ok(v),
        _ => Err(ConfigError::InvalidNumber { key, value: raw.to_owned() }),
    }
}
