//! Query Descriptors
//!
//! A serde representation of a whole query, for callers that keep query
//! definitions in JSON rather than code:
//!
//! ```json
//! {
//!   "type": "articles",
//!   "filters": [{"attribute": "title", "value": "Hello"}],
//!   "include": ["author"],
//!   "sort": [{"attribute": "createdAt", "positive_direction": false}],
//!   "page": {"style": "page", "number": 2, "size": 10}
//! }
//! ```

use japi_core::config::PaginationConfig;
use japi_core::{Id, JsonApiError, JsonApiResult};
use serde::{Deserialize, Serialize};

use crate::filters::FilterSpec;
use crate::options::QueryOption;
use crate::pagination::{
    CursorBasedPaginationSpec, OffsetBasedPaginationSpec, PageBasedPaginationSpec, PaginationSpec,
};
use crate::query::Query;
use crate::sorts::SortSpec;

/// Pagination section of a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum PageDescriptor {
    Page {
        number: u32,
        size: u32,
    },
    Offset {
        #[serde(default)]
        offset: u64,
        limit: u32,
    },
    Cursor {
        #[serde(default)]
        cursor: Option<String>,
        #[serde(default)]
        size: Option<u32>,
    },
}

impl PageDescriptor {
    /// Build the strategy, taking parameter names from `config`
    pub fn to_spec(&self, config: &PaginationConfig) -> JsonApiResult<Box<dyn PaginationSpec>> {
        let spec: Box<dyn PaginationSpec> = match self {
            Self::Page { number, size } => Box::new(
                PageBasedPaginationSpec::try_new(*number, *size)?
                    .with_param_names(&config.number_param, &config.size_param),
            ),
            Self::Offset { offset, limit } => Box::new(
                OffsetBasedPaginationSpec::try_new(*offset, *limit)?
                    .with_param_names(&config.offset_param, &config.limit_param),
            ),
            Self::Cursor { cursor, size } => {
                let mut spec = CursorBasedPaginationSpec::new()
                    .with_param_names(&config.cursor_param, &config.size_param);
                if let Some(size) = size {
                    if *size == 0 {
                        return Err(JsonApiError::invalid_argument("size", "must be positive"));
                    }
                    spec = spec.with_size(*size);
                }
                spec.set_cursor(cursor.clone());
                Box::new(spec)
            }
        };
        Ok(spec)
    }
}

/// Serializable description of a [`Query`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub sort: Vec<SortSpec>,
    #[serde(default)]
    pub options: Vec<QueryOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageDescriptor>,
}

impl QueryDescriptor {
    /// Decode a descriptor from JSON
    pub fn from_json(json: &str) -> JsonApiResult<Self> {
        serde_json::from_str(json).map_err(|e| JsonApiError::Descriptor(e.to_string()))
    }

    pub fn to_json(&self) -> JsonApiResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| JsonApiError::Descriptor(e.to_string()))
    }

    /// Build a query using the default pagination parameter names
    pub fn into_query(self) -> JsonApiResult<Query> {
        self.into_query_with(&PaginationConfig::default())
    }

    /// Build a query, taking pagination parameter names from `config`
    pub fn into_query_with(self, config: &PaginationConfig) -> JsonApiResult<Query> {
        let mut query = Query::try_new(self.resource_type)?;
        if let Some(id) = self.id {
            query.set_id_to_find(id);
        }
        for filter in self.filters {
            query.add_filter(filter);
        }
        for include in self.include {
            query.add_include(include);
        }
        for sort in self.sort {
            query.add_sort(sort);
        }
        for option in self.options {
            query.add_option(option);
        }
        if let Some(page) = &self.page {
            query.set_boxed_pagination_spec(page.to_spec(config)?);
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLES: &str = r#"{
        "type": "articles",
        "filters": [
            {"attribute": "title", "value": "Hello"},
            {"class": "comments", "attribute": "approved", "value": "true"}
        ],
        "include": ["author"],
        "sort": [
            {"attribute": "createdAt", "positive_direction": false},
            {"attribute": "id", "positive_direction": true}
        ],
        "options": [{"parameter": "fields[articles]", "value": "title"}],
        "page": {"style": "page", "number": 2, "size": 10}
    }"#;

    #[test]
    fn test_descriptor_to_query() {
        let query = QueryDescriptor::from_json(ARTICLES).unwrap().into_query().unwrap();
        assert_eq!(
            query.serialize(),
            "articles?filter%5Btitle%5D=Hello&filter%5Bcomments%5D%5Bapproved%5D=true\
             &include=author&fields%5Barticles%5D=title\
             &page%5Bnumber%5D=2&page%5Bsize%5D=10&sort=-createdAt%2Cid"
        );
    }

    #[test]
    fn test_minimal_descriptor() {
        let query = QueryDescriptor::from_json(r#"{"type": "people", "id": 9}"#)
            .unwrap()
            .into_query()
            .unwrap();
        assert_eq!(query.serialize(), "people/9");
    }

    #[test]
    fn test_descriptor_custom_page_names() {
        let config = PaginationConfig {
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
            ..Default::default()
        };
        let query = QueryDescriptor::from_json(
            r#"{"type": "people", "page": {"style": "offset", "limit": 5}}"#,
        )
        .unwrap()
        .into_query_with(&config)
        .unwrap();
        assert_eq!(query.serialize(), "people?offset=0&limit=5");
    }

    #[test]
    fn test_cursor_descriptor() {
        let query = QueryDescriptor::from_json(
            r#"{"type": "events", "page": {"style": "cursor", "cursor": "eyJpZCI6MX0="}}"#,
        )
        .unwrap()
        .into_query()
        .unwrap();
        assert_eq!(query.serialize(), "events?page%5Bcursor%5D=eyJpZCI6MX0%3D");
    }

    #[test]
    fn test_descriptor_errors() {
        let err = QueryDescriptor::from_json("{").unwrap_err();
        assert_eq!(err.error_code(), "invalid_descriptor");

        let err = QueryDescriptor::from_json(r#"{"type": ""}"#)
            .unwrap()
            .into_query()
            .unwrap_err();
        assert!(matches!(err, JsonApiError::EmptyResourceType));

        let err = QueryDescriptor::from_json(
            r#"{"type": "people", "page": {"style": "page", "number": 0, "size": 10}}"#,
        )
        .unwrap()
        .into_query()
        .unwrap_err();
        assert_eq!(err.error_code(), "invalid_argument");
    }

    #[test]
    fn test_descriptor_json_roundtrip() {
        let descriptor = QueryDescriptor::from_json(ARTICLES).unwrap();
        let reparsed = QueryDescriptor::from_json(&descriptor.to_json().unwrap()).unwrap();
        assert_eq!(descriptor, reparsed);
    }
}
