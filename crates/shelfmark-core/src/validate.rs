/// Required-field validation for normalized metadata
use crate::error::IntegrityError;
use crate::metadata::{FieldValue, Metadata};

/// Check a metadata map against a required-field set.
///
/// Three conditions are checked in order, and the first failing one is the
/// only one reported: the map being empty, required fields being absent, and
/// required fields being present but holding no data. The offending field
/// names are listed in required-set order.
///
/// # Errors
///
/// Returns an [`IntegrityError`] describing the first failing condition.
pub fn validate(metadata: &Metadata, required: &[&str]) -> Result<(), IntegrityError> {
    if metadata.is_empty() {
        return Err(IntegrityError::Empty);
    }

    let missing: Vec<String> = required
        .iter()
        .filter(|field| !metadata.contains_key(**field))
        .map(|field| (*field).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IntegrityError::Missing(missing));
    }

    let empty: Vec<String> = required
        .iter()
        .filter(|field| metadata.get(**field).is_some_and(FieldValue::is_empty))
        .map(|field| (*field).to_string())
        .collect();
    if !empty.is_empty() {
        return Err(IntegrityError::NoData(empty));
    }

    Ok(())
}
