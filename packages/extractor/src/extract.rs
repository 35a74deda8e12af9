//! Extraction entry points that tie resolving, scanning and sorting together.

use std::path::Path;

use crate::error::Result;
use crate::scan::scan_xml;
use crate::source::{read_xml_file, Source};
use crate::types::DocNumber;

/// Extract doc-numbers from a file path or XML string, in priority order.
///
/// Values that start with `<` (after trimming) are parsed as XML; anything
/// else is read as a file path.
///
/// # Examples
/// ```
/// use docnum_extractor::extract_doc_numbers;
///
/// let xml = r#"<root>
///     <document-id format="original" load-source="patent-office"><doc-number>66667777</doc-number></document-id>
///     <document-id format="epo" load-source="docdb"><doc-number>999000888</doc-number></document-id>
/// </root>"#;
///
/// assert_eq!(extract_doc_numbers(xml).unwrap(), vec!["999000888", "66667777"]);
/// ```
///
/// # Errors
/// Returns [`crate::ExtractError::FileRead`], [`crate::ExtractError::XmlParse`]
/// or [`crate::ExtractError::InvalidInput`] unchanged from the stage that failed.
pub fn extract_doc_numbers(source: &str) -> Result<Vec<String>> {
    extract_records(source).map(into_values)
}

/// Extract doc-numbers from XML content, in priority order.
///
/// # Errors
/// Returns [`crate::ExtractError::XmlParse`] if the XML is not well-formed.
pub fn extract_from_xml(xml: &str) -> Result<Vec<String>> {
    Ok(sort_by_priority(scan_xml(xml)?))
}

/// Extract doc-numbers from an XML file, in priority order.
///
/// # Errors
/// Returns [`crate::ExtractError::FileRead`] if the file cannot be read, or
/// [`crate::ExtractError::XmlParse`] if its content is not well-formed.
pub fn extract_from_path(path: &Path) -> Result<Vec<String>> {
    let xml = read_xml_file(path)?;
    extract_from_xml(&xml)
}

/// Like [`extract_doc_numbers`], but keeps the priority of each record.
///
/// # Errors
/// Same as [`extract_doc_numbers`].
pub fn extract_records(source: &str) -> Result<Vec<DocNumber>> {
    let xml = Source::detect(source)?.read()?;
    let mut records = scan_xml(&xml)?;
    sort_records(&mut records);

    tracing::debug!(count = records.len(), "Extracted doc-numbers");
    Ok(records)
}

/// Order records by priority and drop the priority.
///
/// The sort is stable: records with equal priority keep their input order.
#[must_use]
pub fn sort_by_priority(mut records: Vec<DocNumber>) -> Vec<String> {
    sort_records(&mut records);
    into_values(records)
}

fn sort_records(records: &mut [DocNumber]) {
    records.sort_by_key(|record| record.priority);
}

fn into_values(records: Vec<DocNumber>) -> Vec<String> {
    records.into_iter().map(|record| record.value).collect()
}
