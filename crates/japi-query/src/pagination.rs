//! Pagination Specifications
//!
//! Pagination is pluggable: a query holds at most one [`PaginationSpec`] and
//! asks it for its parameters once per serialization. The strategies below
//! cover the common JSON:API styles; callers can implement the trait for
//! anything else.

use japi_core::config::{PaginationConfig, PaginationStyle};
use japi_core::{JsonApiError, JsonApiResult};

use crate::params::Parameter;

/// A strategy producing the parameters for one page of results.
///
/// The returned order is emitted as-is. An empty list means no pagination.
#[cfg_attr(test, mockall::automock)]
pub trait PaginationSpec {
    fn pagination_parameters(&self) -> Vec<Parameter>;
}

/// Page number / page size pagination (`page[number]`, `page[size]`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBasedPaginationSpec {
    number_param: String,
    size_param: String,
    page_number: u32,
    page_size: u32,
}

impl PageBasedPaginationSpec {
    /// Create with default parameter names. Zero values are raised to 1.
    pub fn new(page_number: u32, page_size: u32) -> Self {
        let defaults = PaginationConfig::default();
        Self {
            number_param: defaults.number_param,
            size_param: defaults.size_param,
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Checked constructor; zero page numbers and sizes are rejected
    pub fn try_new(page_number: u32, page_size: u32) -> JsonApiResult<Self> {
        if page_number == 0 {
            return Err(JsonApiError::invalid_argument("page_number", "pages are numbered from 1"));
        }
        if page_size == 0 {
            return Err(JsonApiError::invalid_argument("page_size", "must be positive"));
        }
        Ok(Self::new(page_number, page_size))
    }

    pub fn with_param_names(mut self, number: impl Into<String>, size: impl Into<String>) -> Self {
        self.number_param = number.into();
        self.size_param = size.into();
        self
    }

    pub fn set_page(&mut self, page_number: u32) {
        self.page_number = page_number.max(1);
    }

    pub fn page(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl PaginationSpec for PageBasedPaginationSpec {
    fn pagination_parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::new(&self.number_param, self.page_number.to_string()),
            Parameter::new(&self.size_param, self.page_size.to_string()),
        ]
    }
}

/// Offset / limit pagination (`page[offset]`, `page[limit]`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetBasedPaginationSpec {
    offset_param: String,
    limit_param: String,
    offset: u64,
    limit: u32,
}

impl OffsetBasedPaginationSpec {
    /// Create with default parameter names. A zero limit is raised to 1.
    pub fn new(offset: u64, limit: u32) -> Self {
        let defaults = PaginationConfig::default();
        Self {
            offset_param: defaults.offset_param,
            limit_param: defaults.limit_param,
            offset,
            limit: limit.max(1),
        }
    }

    /// Checked constructor; a zero limit is rejected
    pub fn try_new(offset: u64, limit: u32) -> JsonApiResult<Self> {
        if limit == 0 {
            return Err(JsonApiError::invalid_argument("limit", "must be positive"));
        }
        Ok(Self::new(offset, limit))
    }

    pub fn with_param_names(mut self, offset: impl Into<String>, limit: impl Into<String>) -> Self {
        self.offset_param = offset.into();
        self.limit_param = limit.into();
        self
    }

    /// Move to a 1-based page number
    pub fn set_page(&mut self, page_number: u32) {
        self.offset = u64::from(page_number.max(1) - 1) * u64::from(self.limit);
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl PaginationSpec for OffsetBasedPaginationSpec {
    fn pagination_parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::new(&self.offset_param, self.offset.to_string()),
            Parameter::new(&self.limit_param, self.limit.to_string()),
        ]
    }
}

/// Cursor pagination (`page[cursor]`, `page[size]`)
///
/// Both parts are optional; with neither set nothing is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorBasedPaginationSpec {
    cursor_param: String,
    size_param: String,
    cursor: Option<String>,
    size: Option<u32>,
}

impl Default for CursorBasedPaginationSpec {
    fn default() -> Self {
        let defaults = PaginationConfig::default();
        Self {
            cursor_param: defaults.cursor_param,
            size_param: defaults.size_param,
            cursor: None,
            size: None,
        }
    }
}

impl CursorBasedPaginationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size.max(1));
        self
    }

    pub fn with_param_names(mut self, cursor: impl Into<String>, size: impl Into<String>) -> Self {
        self.cursor_param = cursor.into();
        self.size_param = size.into();
        self
    }

    /// Advance to the cursor returned by the previous page
    pub fn set_cursor(&mut self, cursor: Option<String>) {
        self.cursor = cursor;
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }
}

impl PaginationSpec for CursorBasedPaginationSpec {
    fn pagination_parameters(&self) -> Vec<Parameter> {
        let mut parameters = Vec::with_capacity(2);
        if let Some(cursor) = &self.cursor {
            parameters.push(Parameter::new(&self.cursor_param, cursor));
        }
        if let Some(size) = self.size {
            parameters.push(Parameter::new(&self.size_param, size.to_string()));
        }
        parameters
    }
}

/// Build the configured strategy positioned at a 1-based page.
///
/// `page_size` overrides the configured size. Cursor pagination has no page
/// numbers: it only accepts the first page and carries over the size.
pub fn pagination_from_config(
    config: &PaginationConfig,
    page_number: u32,
    page_size: Option<u32>,
) -> JsonApiResult<Box<dyn PaginationSpec>> {
    let size = page_size.unwrap_or(config.page_size);
    let spec: Box<dyn PaginationSpec> = match config.style {
        PaginationStyle::Page => Box::new(
            PageBasedPaginationSpec::try_new(page_number, size)?
                .with_param_names(&config.number_param, &config.size_param),
        ),
        PaginationStyle::Offset => {
            if page_number == 0 {
                return Err(JsonApiError::invalid_argument(
                    "page_number",
                    "pages are numbered from 1",
                ));
            }
            let mut spec = OffsetBasedPaginationSpec::try_new(0, size)?
                .with_param_names(&config.offset_param, &config.limit_param);
            spec.set_page(page_number);
            Box::new(spec)
        }
        PaginationStyle::Cursor => {
            if page_number > 1 {
                return Err(JsonApiError::invalid_argument(
                    "page_number",
                    "cursor pagination has no page numbers",
                ));
            }
            if size == 0 {
                return Err(JsonApiError::invalid_argument("page_size", "must be positive"));
            }
            Box::new(
                CursorBasedPaginationSpec::new()
                    .with_size(size)
                    .with_param_names(&config.cursor_param, &config.size_param),
            )
        }
    };
    Ok(spec)
}
