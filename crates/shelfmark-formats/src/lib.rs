//! # shelfmark-formats
//!
//! Format handlers for shelfmark.
//!
//! One handler per supported container format, each composing the same
//! pipeline: external extraction, flatten/filter into the normalized
//! metadata map, validation, and filename building with a format-specific
//! spec. The handler appends the file's original extension.
//!
//! ## Supported Formats
//!
//! | Format | Extension | Extraction | Filename fields |
//! |--------|-----------|------------|-----------------|
//! | EPUB | `.epub` | `epub` crate, package metadata | `title`, `creator` |
//! | FB2 | `.fb2` | `quick-xml` over `<title-info>` | `title`, `author` |
//! | PDF | `.pdf` | `lopdf`, Info dictionary | `/Title`, `/Author` |
//!
//! Any other extension resolves to a fallback handler that always fails
//! with an unsupported-format error naming the extension.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use shelfmark_formats::suggest_filename;
//!
//! let new_name = suggest_filename(Path::new("library/old name.fb2"))?;
//! println!("{new_name}"); // e.g. "War_And_Peace-Ivan_Petrov.fb2"
//! # Ok::<(), shelfmark_core::RenameError>(())
//! ```

/// Extension dispatch and the handler contract
pub mod dispatch;
/// EPUB handler
pub mod epub;
/// FB2 handler
pub mod fb2;
/// PDF handler
pub mod pdf;
/// Raw metadata shapes and flattening
pub mod raw;

// Re-export commonly used items
pub use dispatch::{dotted_extension, handler_for, suggest_filename, FormatHandler};
pub use raw::{filter_fields, flatten, RawField, RawMetadata};
