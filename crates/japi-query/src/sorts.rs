//! Sort Specifications
//!
//! Sort clauses are joined into a single `sort` parameter, descending fields
//! carrying a `-` prefix.

use japi_core::types::DESCENDING_PREFIX;
use serde::{Deserialize, Serialize};

/// A single sort clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The attribute to sort by
    pub attribute: String,
    /// `true` for ascending, `false` for descending
    pub positive_direction: bool,
}

impl SortSpec {
    pub fn new(attribute: impl Into<String>, positive_direction: bool) -> Self {
        Self {
            attribute: attribute.into(),
            positive_direction,
        }
    }

    /// Create ascending sort
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, true)
    }

    /// Create descending sort
    pub fn desc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, false)
    }

    /// Parse a sort field as written in a `sort` parameter (`-created` is descending)
    pub fn parse(field: &str) -> Self {
        match field.strip_prefix(DESCENDING_PREFIX) {
            Some(attribute) => Self::desc(attribute),
            None => Self::asc(field),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn positive_direction(&self) -> bool {
        self.positive_direction
    }

    /// Reverse the sort direction
    pub fn reversed(mut self) -> Self {
        self.positive_direction = !self.positive_direction;
        self
    }

    /// Render as a `sort` list entry
    pub fn to_field(&self) -> String {
        if self.positive_direction {
            self.attribute.clone()
        } else {
            format!("{}{}", DESCENDING_PREFIX, self.attribute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec() {
        let sort = SortSpec::asc("title");
        assert_eq!(sort.attribute(), "title");
        assert!(sort.positive_direction());
        assert_eq!(sort.to_field(), "title");

        let reversed = sort.reversed();
        assert!(!reversed.positive_direction());
        assert_eq!(reversed.to_field(), "-title");
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(SortSpec::parse("-createdAt"), SortSpec::desc("createdAt"));
        assert_eq!(SortSpec::parse("id"), SortSpec::asc("id"));
        assert_eq!(SortSpec::parse("-"), SortSpec::desc(""));
    }

    #[test]
    fn test_sort_requires_direction() {
        let err = serde_json::from_str::<SortSpec>(r#"{"attribute":"id"}"#);
        assert!(err.is_err());
    }
}
