//! Result type alias

use crate::error::JsonApiError;

/// Standard Result type for query construction operations
pub type JsonApiResult<T> = Result<T, JsonApiError>;
