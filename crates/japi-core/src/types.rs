//! Common type aliases

/// Resource identifier (the `/<id>` path segment)
pub type Id = i64;

/// Top-level JSON:API query parameter families
pub mod params {
    pub const FILTER: &str = "filter";
    pub const INCLUDE: &str = "include";
    pub const SORT: &str = "sort";
    pub const FIELDS: &str = "fields";
}

/// Separator used when joining multi-valued parameters (`include`, `sort`)
pub const LIST_SEPARATOR: &str = ",";

/// Prefix marking a descending sort field
pub const DESCENDING_PREFIX: char = '-';
