/// EPUB (Electronic Publication) format handler
///
/// Uses the `epub` crate for package metadata access. EPUB package metadata
/// carries Dublin Core elements; the filename is built from `title` and
/// `creator`, with the creator treated as the author field.
use std::path::Path;

use epub::doc::EpubDoc;
use shelfmark_core::{build_filename, validate, FieldValue, FilenameSpec, RenameError, Result};

use crate::dispatch::with_original_extension;
use crate::raw::{filter_fields, flatten, RawField, RawMetadata};

/// Fields the EPUB filename is built from
const SAVED_FIELDS: [&str; 2] = ["title", "creator"];

/// Package metadata keys probed before filtering
const PACKAGE_KEYS: [&str; 10] = [
    "title",
    "creator",
    "language",
    "identifier",
    "publisher",
    "date",
    "description",
    "subject",
    "rights",
    "contributor",
];

/// Create the new filename for an EPUB file from its package metadata.
///
/// # Errors
///
/// Returns an error if the EPUB cannot be opened, or if title/creator
/// metadata is missing or empty.
pub fn handle(path: &Path) -> Result<String> {
    let raw = extract_metadata(path)?;
    let mut metadata = filter_fields(flatten(raw), &SAVED_FIELDS);
    validate(&metadata, &SAVED_FIELDS)?;

    // Multiple titles collapse to the first one.
    if let Some(FieldValue::List(titles)) = metadata.get_mut("title") {
        titles.truncate(1);
    }

    let spec = FilenameSpec {
        order: Some(vec!["title".to_string(), "creator".to_string()]),
        author_field: Some("creator".to_string()),
        ..FilenameSpec::default()
    };
    Ok(with_original_extension(
        build_filename(&metadata, &spec),
        path,
    ))
}

/// Read the package metadata entries the filename can be built from
fn extract_metadata(path: &Path) -> Result<RawMetadata> {
    let doc = EpubDoc::new(path)
        .map_err(|e| RenameError::Extraction(format!("failed to open EPUB: {e}")))?;

    let mut raw = RawMetadata::new();
    for key in PACKAGE_KEYS {
        if let Some(value) = doc.mdata(key).map(|m| m.value.clone()) {
            raw.insert(key.to_string(), RawField::Entries(vec![Some(value)]));
        }
    }
    Ok(raw)
}
