//! Configuration types and loading
//!
//! Holds the defaults a client applies when composing queries: where the API
//! lives and how it names its pagination parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main query configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Base URL of the API (e.g. `https://api.example.com/v1/`)
    pub base_url: Option<String>,

    /// Pagination defaults
    pub pagination: PaginationConfig,
}

/// Pagination strategy selected by configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
    /// `page[number]` / `page[size]`
    #[default]
    Page,
    /// `page[offset]` / `page[limit]`
    Offset,
    /// `page[cursor]` / `page[size]`
    Cursor,
}

impl FromStr for PaginationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" | "page_based" | "number" => Ok(Self::Page),
            "offset" | "offset_based" | "limit" => Ok(Self::Offset),
            "cursor" | "cursor_based" => Ok(Self::Cursor),
            _ => Err(format!("unknown pagination style '{}'", s)),
        }
    }
}

impl PaginationStyle {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Offset => "offset",
            Self::Cursor => "cursor",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    pub style: PaginationStyle,
    /// Items per page (page size, limit or cursor size)
    pub page_size: u32,
    pub number_param: String,
    pub size_param: String,
    pub offset_param: String,
    pub limit_param: String,
    pub cursor_param: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            style: PaginationStyle::Page,
            page_size: 20,
            number_param: "page[number]".to_string(),
            size_param: "page[size]".to_string(),
            offset_param: "page[offset]".to_string(),
            limit_param: "page[limit]".to_string(),
            cursor_param: "page[cursor]".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl QueryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, overlaying the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("JSONAPI_BASE_URL") {
            config.base_url = Some(url);
        }

        // Pagination
        if let Some(style) = lookup("JSONAPI_PAGINATION_STYLE") {
            config.pagination.style = style.parse().map_err(|message| ConfigError::InvalidValue {
                key: "JSONAPI_PAGINATION_STYLE".to_string(),
                message,
            })?;
        }
        if let Some(size) = lookup("JSONAPI_PAGE_SIZE") {
            config.pagination.page_size = match size.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "JSONAPI_PAGE_SIZE".to_string(),
                        message: format!("expected a positive integer, got '{}'", size),
                    })
                }
            };
        }

        let names = [
            ("JSONAPI_PAGE_NUMBER_PARAM", &mut config.pagination.number_param),
            ("JSONAPI_PAGE_SIZE_PARAM", &mut config.pagination.size_param),
            ("JSONAPI_PAGE_OFFSET_PARAM", &mut config.pagination.offset_param),
            ("JSONAPI_PAGE_LIMIT_PARAM", &mut config.pagination.limit_param),
            ("JSONAPI_PAGE_CURSOR_PARAM", &mut config.pagination.cursor_param),
        ];
        for (key, slot) in names {
            if let Some(name) = lookup(key) {
                if name.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "parameter name must not be empty".to_string(),
                    });
                }
                *slot = name;
            }
        }

        tracing::debug!(
            base_url = ?config.base_url,
            style = config.pagination.style.as_str(),
            page_size = config.pagination.page_size,
            "Loaded query configuration"
        );

        Ok(config)
    }
}
