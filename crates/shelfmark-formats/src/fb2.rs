/// `FictionBook` (FB2) format handler
///
/// FB2 is a single-file XML format; the metadata the filename is built from
/// lives in `<description><title-info>`: one `<book-title>` and any number
/// of `<author>` elements whose name parts are joined into display names.
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use shelfmark_core::{build_filename, validate, FilenameSpec, RenameError, Result};

use crate::dispatch::with_original_extension;
use crate::raw::{filter_fields, flatten, RawField, RawMetadata};

/// Fields the FB2 filename is built from
const SAVED_FIELDS: [&str; 2] = ["title", "author"];

/// Author name parts as given by `<author>` child elements
#[derive(Debug, Clone, Default)]
struct Fb2Name {
    first: Option<String>,
    middle: Option<String>,
    last: Option<String>,
}

impl Fb2Name {
    /// Join the present parts with single spaces; `None` when no part was given
    fn display(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first, &self.middle, &self.last]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Create the new filename for an FB2 file from its title-info metadata.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the XML is malformed, or
/// title/author metadata is missing or empty.
pub fn handle(path: &Path) -> Result<String> {
    let raw = extract_metadata(path)?;
    let metadata = filter_fields(flatten(raw), &SAVED_FIELDS);
    validate(&metadata, &SAVED_FIELDS)?;

    let spec = FilenameSpec {
        order: Some(vec!["title".to_string(), "author".to_string()]),
        author_field: Some("author".to_string()),
        ..FilenameSpec::default()
    };
    Ok(with_original_extension(
        build_filename(&metadata, &spec),
        path,
    ))
}

/// Read title and authors from the `<title-info>` block
fn extract_metadata(path: &Path) -> Result<RawMetadata> {
    // Real-world FB2 files are not always clean UTF-8; decode lossily rather
    // than refusing the file outright.
    let bytes = std::fs::read(path)
        .map_err(|e| RenameError::Extraction(format!("failed to read FB2 file: {e}")))?;
    let xml = String::from_utf8_lossy(&bytes);
    parse_title_info(&xml)
}

/// Stream the XML and collect book-title and author names from title-info
fn parse_title_info(xml: &str) -> Result<RawMetadata> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut in_title_info = false;
    let mut in_author = false;
    let mut current_name = Fb2Name::default();
    let mut authors: Vec<Option<String>> = Vec::new();
    let mut title: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref()).unwrap_or("");

                match tag_name {
                    "title-info" => in_title_info = true,
                    "author" if in_title_info => {
                        in_author = true;
                        current_name = Fb2Name::default();
                    }
                    "first-name" if in_author => {
                        current_name.first = read_text_content(&mut reader, "first-name")?;
                    }
                    "middle-name" if in_author => {
                        current_name.middle = read_text_content(&mut reader, "middle-name")?;
                    }
                    "last-name" if in_author => {
                        current_name.last = read_text_content(&mut reader, "last-name")?;
                    }
                    "book-title" if in_title_info => {
                        title = read_text_content(&mut reader, "book-title")?;
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref()).unwrap_or("");

                if tag_name == "author" && in_title_info {
                    in_author = false;
                    authors.push(current_name.display());
                } else if tag_name == "title-info" {
                    // Nothing the filename needs appears after title-info.
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RenameError::Extraction(format!(
                    "failed to parse FB2 XML: {e}"
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    let mut raw = RawMetadata::new();
    if let Some(title) = title {
        raw.insert("title".to_string(), RawField::Entries(vec![Some(title)]));
    }
    if !authors.is_empty() {
        raw.insert("author".to_string(), RawField::Entries(authors));
    }
    Ok(raw)
}

/// Read the text content of an element up to its closing tag
fn read_text_content(reader: &mut Reader<&[u8]>, tag_name: &str) -> Result<Option<String>> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                if let Ok(content) = e.unescape() {
                    text.push_str(&content);
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                let end_tag = std::str::from_utf8(name.as_ref()).unwrap_or("");
                if end_tag == tag_name {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RenameError::Extraction(format!(
                    "failed to read FB2 element text: {e}"
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_core::{FieldValue, IntegrityError};

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<FictionBook xmlns="http://www.gribuser.ru/xml/fictionbook/2.0">
  <description>
    <title-info>
      <genre>prose_classic</genre>
      <author>
        <first-name>Ivan</first-name>
        <middle-name>Ivanovich</middle-name>
        <last-name>Petrov</last-name>
      </author>
      <book-title>War and Peace (Annotated)</book-title>
      <lang>en</lang>
    </title-info>
    <document-info>
      <author><nickname>scanner42</nickname></author>
    </document-info>
  </description>
  <body><section><p>text</p></section></body>
</FictionBook>"#;

    #[test]
    fn test_parse_title_info_collects_title_and_author() {
        let raw = parse_title_info(SAMPLE).unwrap();
        let metadata = flatten(raw);
        assert_eq!(
            metadata["title"],
            FieldValue::List(vec!["War and Peace (Annotated)".to_string()])
        );
        assert_eq!(
            metadata["author"],
            FieldValue::List(vec!["Ivan Ivanovich Petrov".to_string()])
        );
    }

    #[test]
    fn test_document_info_authors_are_not_book_authors() {
        let raw = parse_title_info(SAMPLE).unwrap();
        let metadata = flatten(raw);
        let FieldValue::List(authors) = &metadata["author"] else {
            panic!("author field should be a list");
        };
        assert_eq!(authors.len(), 1);
    }

    #[test]
    fn test_missing_title_is_an_integrity_error() {
        let xml = r#"<FictionBook><description><title-info>
            <author><first-name>Jane</first-name><last-name>Doe</last-name></author>
        </title-info></description></FictionBook>"#;
        let raw = parse_title_info(xml).unwrap();
        let metadata = filter_fields(flatten(raw), &SAVED_FIELDS);
        assert_eq!(
            validate(&metadata, &SAVED_FIELDS),
            Err(IntegrityError::Missing(vec!["title".to_string()]))
        );
    }

    #[test]
    fn test_two_authors() {
        let xml = r#"<FictionBook><description><title-info>
            <author><first-name>Arkady</first-name><last-name>Strugatsky</last-name></author>
            <author><first-name>Boris</first-name><last-name>Strugatsky</last-name></author>
            <book-title>Roadside Picnic</book-title>
        </title-info></description></FictionBook>"#;
        let metadata = flatten(parse_title_info(xml).unwrap());
        assert_eq!(
            metadata["author"],
            FieldValue::List(vec![
                "Arkady Strugatsky".to_string(),
                "Boris Strugatsky".to_string(),
            ])
        );
    }
}
