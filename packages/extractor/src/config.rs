//! Configuration constants for doc-number extraction.
//!
//! Element and attribute names follow the EPO/WIPO bibliographic XML
//! vocabulary (`<document-id format="epo" load-source="patent-office">`).

use roxmltree::ParsingOptions;

/// Element whose attributes decide the priority of the enclosed number.
pub const DOCUMENT_ID_TAG: &str = "document-id";

/// Direct child of `document-id` carrying the identifier text.
pub const DOC_NUMBER_TAG: &str = "doc-number";

/// Attribute naming the numbering format (e.g., "epo", "docdb", "original").
pub const FORMAT_ATTR: &str = "format";

/// Attribute naming where the record was loaded from.
pub const LOAD_SOURCE_ATTR: &str = "load-source";

/// Lower-cased `format` value that raises priority.
pub const EPO_FORMAT: &str = "epo";

/// Lower-cased `load-source` value that raises priority.
pub const PATENT_OFFICE_SOURCE: &str = "patent-office";

/// Log filter used by the CLI when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// XML parsing options used for every document.
///
/// Patent full-text files usually start with a `<!DOCTYPE ...>` declaration
/// pointing at an external DTD, which roxmltree rejects by default. The DTD
/// is accepted but never fetched.
///
/// # Examples
/// ```
/// use docnum_extractor::config::parsing_options;
///
/// let xml = r#"<!DOCTYPE ep-patent-document SYSTEM "ep-patent-document-v1-5.dtd"><ep-patent-document/>"#;
/// assert!(roxmltree::Document::parse_with_options(xml, parsing_options()).is_ok());
/// ```
#[must_use]
pub fn parsing_options<'input>() -> ParsingOptions<'input> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_values_are_lowercase() {
        assert_eq!(EPO_FORMAT, EPO_FORMAT.to_lowercase());
        assert_eq!(PATENT_OFFICE_SOURCE, PATENT_OFFICE_SOURCE.to_lowercase());
    }

    #[test]
    fn test_parsing_options_allow_dtd() {
        assert!(parsing_options().allow_dtd);
    }
}
