//! XML utility functions for navigating parsed documents.

use roxmltree::Node;

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xccdf::xml::get_tag_name;
///
/// let xml = r#"<Benchmark xmlns="http://checklists.nist.gov/xccdf/1.1"><status/></Benchmark>"#;
/// let doc = Document::parse(xml).unwrap();
/// let status = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(status), "status");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all element children of a node.
///
/// Text nodes, comments and processing instructions are skipped.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Raw serialized content between an element's start and end tags.
///
/// The slice is taken from the source text, so leading text, child elements
/// and the text between them come back exactly as written, entity references
/// included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xccdf::xml::inner_markup;
///
/// let xml = r#"<description>Use <b>care</b> &amp; test</description>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(inner_markup(doc.root_element()), "Use <b>care</b> &amp; test");
/// ```
pub fn inner_markup<'input>(node: Node<'_, 'input>) -> &'input str {
    let (Some(first), Some(last)) = (node.first_child(), node.last_child()) else {
        return "";
    };
    let input = node.document().input_text();
    input
        .get(first.range().start..last.range().end)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<cdf:Rule xmlns:cdf="http://checklists.nist.gov/xccdf/1.1"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "Rule");
    }

    #[test]
    fn test_element_children() {
        let xml = r#"<Group>text<title/><!-- note --><Rule/>tail</Group>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(element_children(doc.root_element()).count(), 2);
    }

    #[test]
    fn test_inner_markup_empty_element() {
        let xml = r#"<description/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(inner_markup(doc.root_element()), "");
    }

    #[test]
    fn test_inner_markup_keeps_tails() {
        let xml = r#"<d>lead<html:p xmlns:html="urn:h">x</html:p> mid <br/>end</d>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            inner_markup(doc.root_element()),
            r#"lead<html:p xmlns:html="urn:h">x</html:p> mid <br/>end"#
        );
    }

    #[test]
    fn test_inner_markup_nested_element() {
        let xml = r#"<root><d>only text</d></root>"#;
        let doc = Document::parse(xml).unwrap();
        let d = element_children(doc.root_element()).next().unwrap();
        assert_eq!(inner_markup(d), "only text");
    }
}
