//! Scanning a parsed document for `document-id` elements.

use roxmltree::{Document, Node};

use crate::config::{DOCUMENT_ID_TAG, DOC_NUMBER_TAG, FORMAT_ATTR, LOAD_SOURCE_ATTR};
use crate::error::Result;
use crate::types::{DocNumber, Priority};
use crate::xml::{elements_named, find_child, parse_document, trimmed_text};

/// Parse XML text and collect its doc-numbers in document order.
///
/// # Errors
/// Returns [`crate::ExtractError::XmlParse`] if the text is not well-formed.
pub fn scan_xml(xml: &str) -> Result<Vec<DocNumber>> {
    let doc = parse_document(xml)?;
    Ok(scan_document(&doc))
}

/// Collect doc-numbers from every `document-id` at any depth, in document order.
///
/// Elements without a usable `doc-number` child are skipped.
pub fn scan_document(doc: &Document<'_>) -> Vec<DocNumber> {
    elements_named(doc, DOCUMENT_ID_TAG)
        .filter_map(classify_document_id)
        .collect()
}

/// Turn a single `document-id` element into a record.
///
/// Returns `None` when the element has no direct `doc-number` child or its
/// text is empty after trimming.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnum_extractor::scan::classify_document_id;
/// use docnum_extractor::Priority;
///
/// let xml = r#"<document-id format="epo"><doc-number> 1000000 </doc-number></document-id>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let record = classify_document_id(doc.root_element()).unwrap();
/// assert_eq!(record.priority, Priority::Epo);
/// assert_eq!(record.value, "1000000");
/// ```
pub fn classify_document_id(node: Node<'_, '_>) -> Option<DocNumber> {
    let Some(value) = find_child(node, DOC_NUMBER_TAG).and_then(trimmed_text) else {
        tracing::debug!(
            position = node.range().start,
            "Skipping document-id without doc-number text"
        );
        return None;
    };

    let priority = Priority::from_attributes(
        node.attribute(FORMAT_ATTR),
        node.attribute(LOAD_SOURCE_ATTR),
    );
    tracing::trace!(%priority, value = %value, "Classified document-id");
    Some(DocNumber::new(priority, value))
}
