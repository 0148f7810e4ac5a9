//! # japi-query
//!
//! Query builder for JSON:API style HTTP APIs.
//!
//! A [`Query`] collects filters, includes, options, pagination and sort
//! clauses for one resource type and serializes them into a canonical,
//! percent-encoded request target.
//!
//! ## Structure
//!
//! - `params` - Name/value parameters and URI component encoding
//! - `filters` - Simple and class-scoped attribute filters
//! - `sorts` - Sort clauses
//! - `options` - Raw passthrough parameters
//! - `pagination` - Pagination strategy trait and the stock strategies
//! - `query` - The Query model
//! - `serializer` - Canonical rendering of a Query
//! - `descriptor` - JSON descriptions of queries
//!
//! ## Example
//!
//! ```
//! use japi_query::{FilterSpec, PageBasedPaginationSpec, Query, SortSpec};
//!
//! let mut query = Query::new("articles");
//! query.add_filter(FilterSpec::new("title", "Hello"));
//! query.add_include("author");
//! query.add_sort(SortSpec::desc("createdAt"));
//! query.add_sort(SortSpec::asc("id"));
//! query.set_pagination_spec(PageBasedPaginationSpec::new(2, 10));
//!
//! assert_eq!(
//!     query.serialize(),
//!     "articles?filter%5Btitle%5D=Hello&include=author&page%5Bnumber%5D=2&page%5Bsize%5D=10&sort=-createdAt%2Cid"
//! );
//! ```

pub mod params;
pub mod filters;
pub mod sorts;
pub mod options;
pub mod pagination;
pub mod query;
pub mod serializer;
pub mod descriptor;

// Re-exports for convenience
pub use params::{encode_component, Parameter};
pub use filters::FilterSpec;
pub use sorts::SortSpec;
pub use options::QueryOption;
pub use pagination::{
    pagination_from_config, CursorBasedPaginationSpec, OffsetBasedPaginationSpec,
    PageBasedPaginationSpec, PaginationSpec,
};
pub use query::Query;
pub use descriptor::{PageDescriptor, QueryDescriptor};
