/// Maps file extensions to format handlers
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

use shelfmark_core::{RenameError, Result};

/// Registered extensions, with their leading dot
static HANDLERS: LazyLock<HashMap<&'static str, FormatHandler>> = LazyLock::new(|| {
    HashMap::from([
        (".epub", FormatHandler::Epub),
        (".fb2", FormatHandler::Fb2),
        (".pdf", FormatHandler::Pdf),
    ])
});

/// One handler per supported container format, plus the fallback for
/// everything else. Closed set; dispatch never invents new variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatHandler {
    /// Electronic Publication (`.epub`)
    Epub,
    /// `FictionBook` (`.fb2`)
    Fb2,
    /// Portable Document Format (`.pdf`)
    Pdf,
    /// Fallback for an unregistered extension; always fails
    Unsupported(String),
}

impl FormatHandler {
    /// Run the full pipeline for one file and return its new filename,
    /// extension included.
    ///
    /// # Errors
    ///
    /// Extraction and metadata failures are format-specific; the
    /// [`FormatHandler::Unsupported`] variant always fails, naming the
    /// extension it was resolved from.
    pub fn handle(&self, path: &Path) -> Result<String> {
        match self {
            Self::Epub => crate::epub::handle(path),
            Self::Fb2 => crate::fb2::handle(path),
            Self::Pdf => crate::pdf::handle(path),
            Self::Unsupported(extension) => {
                Err(RenameError::UnsupportedFormat(extension.clone()))
            }
        }
    }
}

/// Resolve an extension (leading dot included) to its handler. Matching is
/// exact; unknown extensions resolve to the always-failing fallback.
#[must_use = "returns the handler responsible for the extension"]
pub fn handler_for(extension: &str) -> FormatHandler {
    HANDLERS
        .get(extension)
        .cloned()
        .unwrap_or_else(|| FormatHandler::Unsupported(extension.to_string()))
}

/// The file's extension with its leading dot, or an empty string when the
/// path has none
#[must_use = "returns the dotted extension"]
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|extension| format!(".{extension}"))
        .unwrap_or_default()
}

/// Dispatch a file to its handler and return the suggested new filename.
///
/// # Errors
///
/// Propagates the handler's failure; unregistered extensions yield
/// [`RenameError::UnsupportedFormat`].
pub fn suggest_filename(path: &Path) -> Result<String> {
    handler_for(&dotted_extension(path)).handle(path)
}

/// Append the original file's extension to a built filename stem
pub(crate) fn with_original_extension(stem: String, path: &Path) -> String {
    match path.extension().and_then(OsStr::to_str) {
        Some(extension) => format!("{stem}.{extension}"),
        None => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_extensions() {
        assert_eq!(handler_for(".epub"), FormatHandler::Epub);
        assert_eq!(handler_for(".fb2"), FormatHandler::Fb2);
        assert_eq!(handler_for(".pdf"), FormatHandler::Pdf);
    }

    #[test]
    fn test_unknown_extension_resolves_to_fallback() {
        assert_eq!(
            handler_for(".txt"),
            FormatHandler::Unsupported(".txt".to_string())
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            handler_for(".EPUB"),
            FormatHandler::Unsupported(".EPUB".to_string())
        );
    }

    #[test]
    fn test_unsupported_handle_names_the_extension() {
        let err = handler_for(".txt")
            .handle(Path::new("notes.txt"))
            .unwrap_err();
        match err {
            RenameError::UnsupportedFormat(extension) => assert_eq!(extension, ".txt"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(handler_for(".txt")
            .handle(Path::new("anything.txt"))
            .is_err());
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("a/b/book.epub")), ".epub");
        assert_eq!(dotted_extension(Path::new("README")), "");
    }

    #[test]
    fn test_with_original_extension() {
        assert_eq!(
            with_original_extension("My_Book".to_string(), Path::new("x/old name.fb2")),
            "My_Book.fb2"
        );
        assert_eq!(
            with_original_extension("My_Book".to_string(), Path::new("noext")),
            "My_Book"
        );
    }
}
