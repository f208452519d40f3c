/// Normalized metadata model shared by all format handlers
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalized metadata: field name to value.
///
/// Field names stay format-native (`title`/`creator`, `title`/`author`,
/// `/Title`/`/Author`); the pipeline treats them as opaque strings. The
/// ordered map gives the deterministic lexicographic key order used as the
/// field-order fallback when a filename spec supplies none.
pub type Metadata = BTreeMap<String, FieldValue>;

/// The value of one normalized metadata field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single scalar value
    Single(String),

    /// Ordered list of values (e.g., multiple authors)
    List(Vec<String>),
}

impl FieldValue {
    /// True when the field holds no data: an empty string, or a list with no
    /// entries. A list of blank strings still counts as data; the sanitizer
    /// decides what becomes of it.
    #[must_use = "checks whether the field holds any data"]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_empty(),
            Self::List(values) => values.is_empty(),
        }
    }

    /// Coerce to a single string: list entries are joined with a plain space,
    /// a scalar is returned as-is.
    #[must_use = "joins the field's entries into one string"]
    pub fn joined(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::List(values) => values.join(" "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}
