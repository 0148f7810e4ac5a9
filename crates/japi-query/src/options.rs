//! Raw passthrough options for API features the builder does not model
//! (sparse fieldsets, search terms, vendor extensions).

use serde::{Deserialize, Serialize};

use crate::params::Parameter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOption {
    pub parameter: String,
    pub value: String,
}

impl QueryOption {
    pub fn new(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Sparse fieldset option, `fields[<resource_type>]=<a,b,...>`
    pub fn fields<I, S>(resource_type: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(japi_core::types::LIST_SEPARATOR);
        Self::new(
            format!("{}[{}]", japi_core::types::params::FIELDS, resource_type),
            joined,
        )
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn to_parameter(&self) -> Parameter {
        Parameter::new(&self.parameter, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_passthrough() {
        let option = QueryOption::new("search", "a&b");
        assert_eq!(option.parameter(), "search");
        assert_eq!(option.to_parameter(), Parameter::new("search", "a&b"));
    }

    #[test]
    fn test_fields_option() {
        let option = QueryOption::fields("articles", ["title", "body"]);
        assert_eq!(option.parameter(), "fields[articles]");
        assert_eq!(option.value(), "title,body");
    }
}
