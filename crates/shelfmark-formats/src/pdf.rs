/// PDF format handler
///
/// Reads the document information dictionary via `lopdf`. The dictionary
/// stores scalar text strings; the author entry routinely packs several
/// names into one string, so it is flattened through the delimited-name
/// split. Field names keep the PDF-native `/Title` / `/Author` form.
use std::path::Path;

use lopdf::{Dictionary, Document, Object};
use shelfmark_core::{build_filename, validate, FilenameSpec, RenameError, Result};

use crate::dispatch::with_original_extension;
use crate::raw::{filter_fields, flatten, RawField, RawMetadata};

/// Fields the PDF filename is built from
const SAVED_FIELDS: [&str; 2] = ["/Title", "/Author"];

/// Create the new filename for a PDF file from its information dictionary.
///
/// # Errors
///
/// Returns an error if the PDF cannot be parsed, or if `/Title`/`/Author`
/// entries are missing or empty.
pub fn handle(path: &Path) -> Result<String> {
    let raw = extract_metadata(path)?;
    let metadata = filter_fields(flatten(raw), &SAVED_FIELDS);
    validate(&metadata, &SAVED_FIELDS)?;

    let spec = FilenameSpec {
        order: Some(vec!["/Title".to_string(), "/Author".to_string()]),
        author_field: Some("/Author".to_string()),
        ..FilenameSpec::default()
    };
    Ok(with_original_extension(
        build_filename(&metadata, &spec),
        path,
    ))
}

/// Read `/Title` and `/Author` from the trailer's Info dictionary
fn extract_metadata(path: &Path) -> Result<RawMetadata> {
    let doc = Document::load(path)
        .map_err(|e| RenameError::Extraction(format!("failed to parse PDF: {e}")))?;

    let mut raw = RawMetadata::new();
    if let Some(info) = info_dictionary(&doc) {
        if let Some(title) = text_entry(info, b"Title") {
            raw.insert("/Title".to_string(), RawField::Scalar(title));
        }
        if let Some(author) = text_entry(info, b"Author") {
            raw.insert("/Author".to_string(), RawField::Delimited(author));
        }
    }
    Ok(raw)
}

/// Resolve the trailer's Info entry to its dictionary, following one
/// indirect reference if needed
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    let info = match info {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    info.as_dict().ok()
}

/// Read one text-string entry from the Info dictionary
fn text_entry(info: &Dictionary, key: &[u8]) -> Option<String> {
    match info.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        other => {
            log::warn!(
                "Info entry {} is not a text string: {other:?}",
                String::from_utf8_lossy(key)
            );
            None
        }
    }
}

/// Decode a PDF text string: UTF-16BE when the byte-order mark is present,
/// otherwise one byte per character (covers the printable range of
/// PDFDocEncoding)
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&utf16)
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}
