/// Raw metadata shapes and the flatten/filter steps shared by handlers
///
/// Each format parser emits values in its own shape: scalars, repeated
/// annotated entries, or several names packed into one delimited string.
/// Flattening collapses all of them into the normalized `Metadata` map the
/// core pipeline consumes; the raw shapes are discarded afterwards.
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use shelfmark_core::{FieldValue, Metadata};

// Separators between author names inside one string: the characters
// , & ; and the standalone word "and".
static RE_NAME_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,&;]|\band\b").expect("valid name delimiter pattern"));

/// Format-specific field shape as emitted by an external parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    /// Single scalar value (PDF information dictionary entries)
    Scalar(String),

    /// Repeated entries where individual sub-values may be absent
    /// (EPUB package metadata, FB2 author lists)
    Entries(Vec<Option<String>>),

    /// Several names packed into one delimited string (PDF author lists)
    Delimited(String),
}

/// Raw metadata as handed over by a format parser, keyed by the format's
/// native field names
pub type RawMetadata = BTreeMap<String, RawField>;

impl From<FieldValue> for RawField {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Single(value) => Self::Scalar(value),
            FieldValue::List(values) => Self::Entries(values.into_iter().map(Some).collect()),
        }
    }
}

/// Collapse raw field shapes into the normalized metadata map.
///
/// Absent sub-values are dropped, trailing whitespace is trimmed, and
/// delimited author strings are split into one name per entry. Flattening an
/// already-flat map (every entry a plain string) returns the same map.
#[must_use = "returns the normalized metadata map"]
pub fn flatten(raw: RawMetadata) -> Metadata {
    raw.into_iter()
        .map(|(key, field)| {
            let value = match field {
                RawField::Scalar(value) => FieldValue::Single(value.trim_end().to_string()),
                RawField::Entries(entries) => FieldValue::List(
                    entries
                        .into_iter()
                        .flatten()
                        .map(|entry| entry.trim_end().to_string())
                        .collect(),
                ),
                RawField::Delimited(value) => FieldValue::List(split_delimited_names(&value)),
            };
            (key, value)
        })
        .collect()
}

/// Retain only the fields a format builds its filename from
#[must_use = "returns the filtered metadata map"]
pub fn filter_fields(metadata: Metadata, keep: &[&str]) -> Metadata {
    metadata
        .into_iter()
        .filter(|(key, _)| keep.contains(&key.as_str()))
        .collect()
}

/// Split a delimited author string into individual names, dropping blank
/// segments left behind by the separators
fn split_delimited_names(raw: &str) -> Vec<String> {
    RE_NAME_DELIMITERS
        .split(raw)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
