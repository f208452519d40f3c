//! # shelfmark-core
//!
//! Metadata normalization and filename building for shelfmark.
//!
//! This crate holds the format-independent half of the renaming pipeline:
//! turning a validated metadata map into a filesystem-safe filename. Format
//! handlers (see `shelfmark-formats`) extract and flatten raw container
//! metadata, then hand the normalized map to the validator and builder here.
//!
//! ## Pipeline
//!
//! | Stage | Entry point | Role |
//! |-------|-------------|------|
//! | Validate | [`validate`] | required fields present and non-empty |
//! | Simplify | [`simplify_name`] | drop middle/patronymic name tokens |
//! | Sanitize | [`clean_text`] | parentheticals, transliteration, allowlist |
//! | Build | [`build_filename`] | case policy, separators, field order |
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfmark_core::{build_filename, validate, FilenameSpec, Metadata};
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("title".to_string(), vec!["My Book".to_string()].into());
//! metadata.insert(
//!     "creator".to_string(),
//!     vec!["Jane A. Smith".to_string()].into(),
//! );
//! validate(&metadata, &["title", "creator"])?;
//!
//! let spec = FilenameSpec {
//!     order: Some(vec!["title".to_string(), "creator".to_string()]),
//!     author_field: Some("creator".to_string()),
//!     ..FilenameSpec::default()
//! };
//! assert_eq!(build_filename(&metadata, &spec), "My_Book-Jane_Smith");
//! # Ok::<(), shelfmark_core::IntegrityError>(())
//! ```
//!
//! ## Guarantees
//!
//! For metadata that passed [`validate`], [`build_filename`] is total and
//! deterministic, and its output contains only ASCII letters, digits, and
//! the configured separators. A field that sanitizes to nothing is kept as
//! an empty segment rather than treated as an error.

/// Filename composition from validated metadata
pub mod builder;
/// Error taxonomy for the renaming pipeline
pub mod error;
/// Normalized metadata model
pub mod metadata;
/// Personal-name simplification
pub mod name;
/// Text sanitization and case policy
pub mod sanitize;
/// Required-field validation
pub mod validate;

// Re-export commonly used items
pub use builder::{build_filename, FilenameSpec};
pub use error::{IntegrityError, RenameError, Result};
pub use metadata::{FieldValue, Metadata};
pub use name::simplify_name;
pub use sanitize::{clean_text, strip_parentheticals, to_portable_ascii, CaseTransform};
pub use validate::validate;
