//! Doc-number extraction from patent XML.
//!
//! Patent bibliographic XML lists the same publication or application under
//! several `<document-id>` elements, each tagged with a numbering `format`
//! and a `load-source`. This crate collects every `<doc-number>` and orders
//! them so the most authoritative identifiers come first:
//!
//! 1. `format="epo"` and `load-source="patent-office"`
//! 2. `format="epo"` only
//! 3. `load-source="patent-office"` only
//! 4. everything else
//!
//! Within a tier, document order is preserved.
//!
//! # Example
//!
//! ```
//! use docnum_extractor::extract_doc_numbers;
//!
//! let xml = r#"<root>
//!     <document-id><doc-number>P4</doc-number></document-id>
//!     <document-id format="epo" load-source="patent-office"><doc-number>P1</doc-number></document-id>
//! </root>"#;
//!
//! assert_eq!(extract_doc_numbers(xml).unwrap(), vec!["P1", "P4"]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Element/attribute names and XML parsing options
//! - [`error`]: Error types and Result alias
//! - [`types`]: Priority tiers and extracted records
//! - [`xml`]: XML parsing and DOM helpers
//! - [`source`]: File-path vs. XML-content resolution
//! - [`scan`]: Finding and classifying `document-id` elements
//! - [`extract`]: Priority sorting and the public entry points
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod scan;
pub mod source;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extract::{
    extract_doc_numbers, extract_from_path, extract_from_xml, extract_records, sort_by_priority,
};

// Re-export commonly used items
pub use error::{ExtractError, FileReadReason, Result};
pub use source::Source;
pub use types::{DocNumber, Priority};
