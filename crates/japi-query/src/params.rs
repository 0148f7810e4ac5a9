//! Query Parameters
//!
//! A [`Parameter`] is the normalized name/value pair every query category is
//! reduced to before the final join.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left unescaped in a URI component: alphanumerics plus
/// `- _ . ! ~ * ' ( )`. Everything else, including `[` and `]`, is escaped.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URI component
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// A single query string parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render as `encode(name)=encode(value)`
    pub fn encode(&self) -> String {
        format!(
            "{}={}",
            encode_component(&self.name),
            encode_component(&self.value)
        )
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Parameter {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Join parameters into a query string.
///
/// Empty input yields an empty string; otherwise the first pair is prefixed
/// with `?` and the rest with `&`.
pub fn to_query_string(parameters: &[Parameter]) -> String {
    let mut out = String::new();
    for parameter in parameters {
        out.push(if out.is_empty() { '?' } else { '&' });
        out.push_str(&parameter.encode());
    }
    out
}
