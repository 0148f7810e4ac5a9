//! Core error types for JSON:API Query RS
//!
//! Serializing a query never fails. These errors come from the checked
//! constructors, base URL joining, descriptor decoding and configuration.

use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for all query operations
#[derive(Error, Debug)]
pub enum JsonApiError {
    #[error("Resource type must not be empty")]
    EmptyResourceType,

    #[error("Invalid argument {argument}: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid query descriptor: {0}")]
    Descriptor(String),
}

impl JsonApiError {
    /// Shorthand for an [`JsonApiError::InvalidArgument`]
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            JsonApiError::EmptyResourceType => "empty_resource_type",
            JsonApiError::InvalidArgument { .. } => "invalid_argument",
            JsonApiError::InvalidUrl(_) => "invalid_url",
            JsonApiError::Config(_) => "configuration_error",
            JsonApiError::Descriptor(_) => "invalid_descriptor",
        }
    }
}
