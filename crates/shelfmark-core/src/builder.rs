/// Filename composition from validated metadata
use serde::{Deserialize, Serialize};

use crate::metadata::{FieldValue, Metadata};
use crate::name::simplify_name;
use crate::sanitize::{clean_text, CaseTransform};

/// Configuration for one filename build: field order, separators, case
/// policy, and which field holds author names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameSpec {
    /// Explicit field order. When absent, metadata keys are used in
    /// lexicographic order — a fallback kept for compatibility, unreliable
    /// in combination with `author_field` for arbitrary key sets.
    pub order: Option<Vec<String>>,

    /// Separator between tokens inside one field (e.g., words of a title)
    pub field_sep: String,

    /// Separator between fields (e.g., title and author block)
    pub metadata_sep: String,

    /// Case policy applied to each field before token joining
    pub case: CaseTransform,

    /// Field whose entries are personal names to simplify before building
    pub author_field: Option<String>,
}

impl Default for FilenameSpec {
    fn default() -> Self {
        Self {
            order: None,
            field_sep: "_".to_string(),
            metadata_sep: "-".to_string(),
            case: CaseTransform::Title,
            author_field: None,
        }
    }
}

/// Compose a filename string (without extension) from normalized metadata.
///
/// The caller's map is never mutated; author-name simplification happens on
/// a private copy. For each field in order, list entries are joined with a
/// plain space, the text is cleaned down to the portable alphabet, the case
/// policy is applied, and the remaining whitespace tokens are joined with
/// the field separator. Fields named by the order but absent from the map
/// are skipped. A field that cleans down to nothing stays in the output as
/// an empty segment.
///
/// Deterministic for a given metadata/spec pair, and total for metadata that
/// passed validation.
#[must_use = "returns the composed filename string"]
pub fn build_filename(metadata: &Metadata, spec: &FilenameSpec) -> String {
    let mut metadata = metadata.clone();

    if let Some(author_field) = &spec.author_field {
        if let Some(value) = metadata.get_mut(author_field) {
            *value = simplify_names(value);
        }
    }

    let order: Vec<String> = spec
        .order
        .clone()
        .unwrap_or_else(|| metadata.keys().cloned().collect());

    let mut fields = Vec::with_capacity(order.len());
    for field in &order {
        let Some(value) = metadata.get(field) else {
            continue;
        };

        let cleaned = clean_text(&value.joined());
        let cased = spec.case.apply(&cleaned);
        fields.push(
            cased
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(&spec.field_sep),
        );
    }

    fields.join(&spec.metadata_sep)
}

/// Apply name simplification to every entry of an author field
fn simplify_names(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Single(name) => FieldValue::Single(simplify_name(name)),
        FieldValue::List(names) => {
            FieldValue::List(names.iter().map(|name| simplify_name(name)).collect())
        }
    }
}
