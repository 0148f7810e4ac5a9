//! Query Serializer
//!
//! Turns the accumulated state of a [`Query`] into its canonical request
//! target: `<type>[/<id>][?<name>=<value>[&...]]`.
//!
//! Parameters are always emitted in category order (filters, include,
//! options, pagination, sort) no matter how the query was assembled.

use japi_core::types::{params, LIST_SEPARATOR};

use crate::filters::FilterSpec;
use crate::options::QueryOption;
use crate::pagination::PaginationSpec;
use crate::params::{to_query_string, Parameter};
use crate::query::Query;
use crate::sorts::SortSpec;

/// Serialize a query into its request target
pub fn serialize(query: &Query) -> String {
    let parameters = parameters(query);
    tracing::debug!(
        resource_type = query.resource_type(),
        id = ?query.id_to_find(),
        parameters = parameters.len(),
        "Serializing query"
    );
    format!("{}{}", path(query), to_query_string(&parameters))
}

/// The path prefix: resource type, then `/<id>` when an id is set
pub fn path(query: &Query) -> String {
    match query.id_to_find() {
        Some(id) => format!("{}/{}", query.resource_type(), id),
        None => query.resource_type().to_string(),
    }
}

/// All parameters of a query, in canonical order
pub fn parameters(query: &Query) -> Vec<Parameter> {
    let mut out = filter_parameters(query.filters());
    out.extend(include_parameter(query.includes()));
    out.extend(option_parameters(query.options()));
    out.extend(pagination_parameters(query.pagination_spec()));
    out.extend(sort_parameter(query.sorts()));
    out
}

/// One `filter[...]` parameter per filter, in insertion order
pub fn filter_parameters(filters: &[FilterSpec]) -> Vec<Parameter> {
    filters.iter().map(FilterSpec::to_parameter).collect()
}

/// A single comma-joined `include` parameter, or nothing
pub fn include_parameter(includes: &[String]) -> Option<Parameter> {
    if includes.is_empty() {
        return None;
    }
    Some(Parameter::new(
        params::INCLUDE,
        includes.join(LIST_SEPARATOR),
    ))
}

pub fn option_parameters(options: &[QueryOption]) -> Vec<Parameter> {
    options.iter().map(QueryOption::to_parameter).collect()
}

/// Whatever the strategy produces, in its own order. Unset means nothing.
pub fn pagination_parameters(spec: Option<&dyn PaginationSpec>) -> Vec<Parameter> {
    spec.map(|spec| spec.pagination_parameters())
        .unwrap_or_default()
}

/// A single comma-joined `sort` parameter, or nothing
pub fn sort_parameter(sorts: &[SortSpec]) -> Option<Parameter> {
    if sorts.is_empty() {
        return None;
    }
    let value = sorts
        .iter()
        .map(SortSpec::to_field)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    Some(Parameter::new(params::SORT, value))
}
