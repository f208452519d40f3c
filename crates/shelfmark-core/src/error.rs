/// Error types for the renaming pipeline
/// Result type alias for renaming operations
pub type Result<T> = std::result::Result<T, RenameError>;

/// Errors that can abort a single file's renaming pipeline
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The external format parser could not read or parse the file;
    /// carries the parser's own message unchanged
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// Required metadata is missing or empty
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// No handler registered for the file's extension
    #[error("no handler registered for extension '{0}'")]
    UnsupportedFormat(String),
}

/// Validation failures for a normalized metadata map
///
/// Each variant carries exactly the offending field names, in the order the
/// required-field list gave them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    /// The metadata map has no fields at all
    #[error("metadata is empty")]
    Empty,

    /// One or more required fields are absent from the map
    #[error("only part of required metadata was retrieved, missing: [{}]", .0.join(", "))]
    Missing(Vec<String>),

    /// Required fields are present but hold no data
    #[error("no data in required fields: [{}]", .0.join(", "))]
    NoData(Vec<String>),
}
