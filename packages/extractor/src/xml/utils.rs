//! Utility functions for parsing XML and navigating the resulting DOM.

use roxmltree::{Document, Node};

use crate::config::parsing_options;
use crate::error::Result;

/// Parse XML text into a document tree.
///
/// DOCTYPE declarations are accepted (see [`parsing_options`]).
///
/// # Errors
/// Returns [`crate::ExtractError::XmlParse`] if the text is not well-formed.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    Ok(Document::parse_with_options(xml, parsing_options())?)
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnum_extractor::xml::get_tag_name;
///
/// let xml = r#"<exch:document-id xmlns:exch="http://www.epo.org/exchange"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "document-id");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first direct child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnum_extractor::xml::find_child;
///
/// let xml = r#"<document-id><country>EP</country><doc-number>1000000</doc-number></document-id>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "doc-number").is_some());
/// assert!(find_child(root, "kind").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// All elements with the given tag name, at any depth, in document order.
///
/// The walk is pre-order: an element is yielded before its descendants, and
/// a subtree is exhausted before the next sibling is visited.
pub fn elements_named<'a, 'input: 'a>(
    doc: &'a Document<'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    doc.descendants().filter(move |node| has_tag(*node, tag))
}

/// Get the trimmed text of a node, or `None` if it is absent or blank.
///
/// Text nodes up to the first child element are joined; comments and
/// processing instructions between them are skipped.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use docnum_extractor::xml::trimmed_text;
///
/// let doc = Document::parse("<doc-number> 12<!-- check digit -->34 </doc-number>").unwrap();
/// assert_eq!(trimmed_text(doc.root_element()).as_deref(), Some("1234"));
/// ```
pub fn trimmed_text(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .take_while(|child| !child.is_element())
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect();

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_malformed() {
        assert!(parse_document("<root><unclosed></root>").is_err());
    }

    #[test]
    fn test_parse_document_with_doctype() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE us-patent-grant SYSTEM "us-patent-grant-v45-2014-04-03.dtd">
<us-patent-grant/>"#;
        let doc = parse_document(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "us-patent-grant");
    }

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_has_tag() {
        let xml = r#"<document-id>text</document-id>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(has_tag(root, "document-id"));
        assert!(!has_tag(root, "doc-number"));
        let text = root.first_child().unwrap();
        assert!(!has_tag(text, "document-id"));
    }

    #[test]
    fn test_find_child_direct_only() {
        let xml = r#"<document-id><wrapper><doc-number>1</doc-number></wrapper></document-id>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(find_child(doc.root_element(), "doc-number").is_none());
    }

    #[test]
    fn test_find_child_first_match() {
        let xml = r#"<document-id><doc-number>1</doc-number><doc-number>2</doc-number></document-id>"#;
        let doc = Document::parse(xml).unwrap();
        let child = find_child(doc.root_element(), "doc-number").unwrap();
        assert_eq!(child.text(), Some("1"));
    }

    #[test]
    fn test_elements_named_document_order() {
        let xml = r#"<root>
            <a id="1"><a id="2"/></a>
            <b><a id="3"><c><a id="4"/></c></a></b>
            <a id="5"/>
        </root>"#;
        let doc = Document::parse(xml).unwrap();

        let ids: Vec<_> = elements_named(&doc, "a")
            .filter_map(|n| n.attribute("id"))
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_elements_named_includes_root() {
        let xml = r#"<a><a/></a>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(elements_named(&doc, "a").count(), 2);
    }

    #[test]
    fn test_trimmed_text() {
        let xml = r#"<root><a>  12345  </a><b>   </b><c/><d><e>x</e></d></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(
            trimmed_text(find_child(root, "a").unwrap()).as_deref(),
            Some("12345")
        );
        assert_eq!(trimmed_text(find_child(root, "b").unwrap()), None);
        assert_eq!(trimmed_text(find_child(root, "c").unwrap()), None);
        assert_eq!(trimmed_text(find_child(root, "d").unwrap()), None);
    }

    #[test]
    fn test_trimmed_text_skips_comments_and_pis() {
        let xml = r#"<root>
            <a><!-- c -->123</a>
            <b>12<!-- c -->34</b>
            <c> 5<?pi data?>6 </c>
            <d>78<e>x</e>9</d>
            <f><!-- only a comment --></f>
        </root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();
        let text = |tag: &str| trimmed_text(find_child(root, tag).unwrap());

        assert_eq!(text("a").as_deref(), Some("123"));
        assert_eq!(text("b").as_deref(), Some("1234"));
        assert_eq!(text("c").as_deref(), Some("56"));
        assert_eq!(text("d").as_deref(), Some("78"));
        assert_eq!(text("f"), None);
    }
}
