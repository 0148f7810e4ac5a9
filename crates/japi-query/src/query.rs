//! Query Model
//!
//! A [`Query`] accumulates everything needed to request a JSON:API resource
//! collection (or a single resource) and renders it as a request target.
//! The query is plain state; rendering lives in [`crate::serializer`].

use std::fmt;

use japi_core::{Id, JsonApiError, JsonApiResult};
use url::Url;

use crate::filters::FilterSpec;
use crate::options::QueryOption;
use crate::pagination::PaginationSpec;
use crate::params::{to_query_string, Parameter};
use crate::serializer;
use crate::sorts::SortSpec;

/// A query against one resource type
pub struct Query {
    /// JSON:API resource type (first path segment)
    resource_type: String,
    /// Single resource to fetch (second path segment)
    id_to_find: Option<Id>,
    /// Relationship paths to side-load, in insertion order
    includes: Vec<String>,
    filters: Vec<FilterSpec>,
    sorts: Vec<SortSpec>,
    options: Vec<QueryOption>,
    pagination: Option<Box<dyn PaginationSpec>>,
}

impl Query {
    /// Create a new query for the given resource type.
    ///
    /// The name is not validated; see [`Query::try_new`].
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id_to_find: None,
            includes: vec![],
            filters: vec![],
            sorts: vec![],
            options: vec![],
            pagination: None,
        }
    }

    /// Create a new query, rejecting an empty resource type
    pub fn try_new(resource_type: impl Into<String>) -> JsonApiResult<Self> {
        let resource_type = resource_type.into();
        if resource_type.is_empty() {
            return Err(JsonApiError::EmptyResourceType);
        }
        Ok(Self::new(resource_type))
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn id_to_find(&self) -> Option<Id> {
        self.id_to_find
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    pub fn sorts(&self) -> &[SortSpec] {
        &self.sorts
    }

    pub fn options(&self) -> &[QueryOption] {
        &self.options
    }

    pub fn pagination_spec(&self) -> Option<&dyn PaginationSpec> {
        self.pagination.as_deref()
    }

    /// Fetch a single resource by id
    pub fn set_id_to_find(&mut self, id: Id) {
        self.id_to_find = Some(id);
    }

    /// Go back to fetching the collection
    pub fn clear_id_to_find(&mut self) {
        self.id_to_find = None;
    }

    /// Set the pagination strategy, replacing any previous one
    pub fn set_pagination_spec(&mut self, spec: impl PaginationSpec + 'static) {
        self.pagination = Some(Box::new(spec));
    }

    /// Set an already boxed pagination strategy
    pub fn set_boxed_pagination_spec(&mut self, spec: Box<dyn PaginationSpec>) {
        self.pagination = Some(spec);
    }

    /// Remove the pagination strategy
    pub fn clear_pagination_spec(&mut self) {
        self.pagination = None;
    }

    pub fn add_include(&mut self, include: impl Into<String>) {
        let include = include.into();
        tracing::trace!(resource_type = %self.resource_type, %include, "Adding include");
        self.includes.push(include);
    }

    pub fn add_filter(&mut self, filter: FilterSpec) {
        tracing::trace!(resource_type = %self.resource_type, ?filter, "Adding filter");
        self.filters.push(filter);
    }

    pub fn add_sort(&mut self, sort: SortSpec) {
        tracing::trace!(resource_type = %self.resource_type, ?sort, "Adding sort");
        self.sorts.push(sort);
    }

    pub fn add_option(&mut self, option: QueryOption) {
        tracing::trace!(resource_type = %self.resource_type, ?option, "Adding option");
        self.options.push(option);
    }

    // Builder-style variants

    pub fn with_id(mut self, id: Id) -> Self {
        self.set_id_to_find(id);
        self
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.add_include(include);
        self
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.add_filter(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.add_sort(sort);
        self
    }

    pub fn with_option(mut self, option: QueryOption) -> Self {
        self.add_option(option);
        self
    }

    pub fn with_pagination(mut self, spec: impl PaginationSpec + 'static) -> Self {
        self.set_pagination_spec(spec);
        self
    }

    /// Parameters in canonical order, unencoded
    pub fn parameters(&self) -> Vec<Parameter> {
        serializer::parameters(self)
    }

    /// Render as `<type>[/<id>][?<query string>]`
    pub fn serialize(&self) -> String {
        serializer::serialize(self)
    }

    /// Resolve the request target against an API base URL.
    ///
    /// The base is treated as a directory, so `https://host/v1` and
    /// `https://host/v1/` both yield `https://host/v1/<type>...`. The type
    /// and id are appended as path segments and never change the host or
    /// scheme of the base. The query component goes through the `url`
    /// serializer, which also escapes `'`; [`Query::serialize`] leaves it
    /// as is.
    pub fn to_url(&self, base: &Url) -> JsonApiResult<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                JsonApiError::InvalidUrl(format!("{} cannot be used as a base URL", base))
            })?;
            segments.pop_if_empty().push(&self.resource_type);
            if let Some(id) = self.id_to_find {
                segments.push(&id.to_string());
            }
        }

        let query = to_query_string(&self.parameters());
        url.set_query(query.strip_prefix('?'));
        url.set_fragment(None);
        Ok(url)
    }

    /// Same as [`Query::to_url`], parsing the base first
    pub fn to_url_str(&self, base: &str) -> JsonApiResult<Url> {
        let base = Url::parse(base).map_err(|e| JsonApiError::InvalidUrl(format!("{}: {}", base, e)))?;
        self.to_url(&base)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("resource_type", &self.resource_type)
            .field("id_to_find", &self.id_to_find)
            .field("includes", &self.includes)
            .field("filters", &self.filters)
            .field("sorts", &self.sorts)
            .field("options", &self.options)
            .field("pagination", &self.pagination.is_some())
            .finish()
    }
}
