//! Filter Specifications
//!
//! A filter constrains one resource attribute and renders as a single
//! `filter[...]` parameter. Attribute names and values are opaque: nothing is
//! validated here and escaping happens only at serialization time.

use japi_core::types::params;
use serde::{Deserialize, Serialize};

use crate::params::Parameter;

/// A filter on a resource attribute
///
/// Deserializes from `{"attribute", "value"}` or, with a `class` key, from
/// `{"class", "attribute", "value"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSpec {
    /// `filter[<class>][<attribute>]=<value>`
    ClassScoped {
        class: String,
        attribute: String,
        value: String,
    },
    /// `filter[<attribute>]=<value>`
    Simple { attribute: String, value: String },
}

impl FilterSpec {
    /// Create a filter on an attribute of the queried resource
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Simple {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Create a filter scoped to a related resource type
    pub fn for_class(
        class: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::ClassScoped {
            class: class.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        match self {
            Self::Simple { attribute, .. } | Self::ClassScoped { attribute, .. } => attribute,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Simple { value, .. } | Self::ClassScoped { value, .. } => value,
        }
    }

    /// The resource type qualifier, if this filter is class-scoped
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Simple { .. } => None,
            Self::ClassScoped { class, .. } => Some(class),
        }
    }

    pub fn is_class_scoped(&self) -> bool {
        matches!(self, Self::ClassScoped { .. })
    }

    /// Unencoded parameter name
    pub fn parameter_name(&self) -> String {
        match self {
            Self::Simple { attribute, .. } => format!("{}[{}]", params::FILTER, attribute),
            Self::ClassScoped {
                class, attribute, ..
            } => format!("{}[{}][{}]", params::FILTER, class, attribute),
        }
    }

    pub fn to_parameter(&self) -> Parameter {
        Parameter::new(self.parameter_name(), self.value())
    }
}
