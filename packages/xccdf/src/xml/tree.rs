//! Owned, mutable XML element tree.
//!
//! The parser hands out borrowed, read-only nodes. Every binding node keeps
//! its own `XmlElement` instead, so the wire representation can be refreshed
//! on export without touching the source document.

use roxmltree::Node;

use super::qname::{clark_name, namespace_and_tag};
use crate::config::{NSMAP, XML_NAMESPACE};

/// A single attribute with its resolved namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Namespace URI, `None` for unqualified attributes.
    pub namespace: Option<String>,
    /// Local name.
    pub name: String,
    /// Attribute value, unescaped.
    pub value: String,
}

impl Attribute {
    /// Create an attribute.
    pub fn new(namespace: Option<&str>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(String::from),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix, `None` for the default namespace.
    pub prefix: Option<String>,
    /// Namespace URI.
    pub uri: String,
}

/// Text payload of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlText {
    /// Character data, escaped by the writer.
    Plain(String),
    /// Serialized markup written verbatim. `prefix` is the namespace prefix
    /// the markup uses for its tags and must be declared on output, as must
    /// every binding in `namespaces`.
    Markup {
        prefix: String,
        content: String,
        namespaces: Vec<Namespace>,
    },
}

impl XmlText {
    /// Text as stored, without escaping.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Markup { content, .. } => content,
        }
    }
}

/// An owned XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// Namespace URI of the element.
    pub namespace: Option<String>,
    /// Local name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<Attribute>,
    /// Leading text content.
    pub text: Option<XmlText>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
    /// Namespace declarations in scope for this element.
    pub namespaces: Vec<Namespace>,
}

impl XmlElement {
    /// Create an empty element without namespace declarations.
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(String::from),
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
            namespaces: Vec::new(),
        }
    }

    /// Create an empty element carrying the fixed namespace map.
    pub fn fresh(namespace: Option<&str>, name: impl Into<String>) -> Self {
        let mut element = Self::new(namespace, name);
        element.namespaces = NSMAP
            .iter()
            .map(|(prefix, uri)| Namespace {
                prefix: prefix.map(String::from),
                uri: (*uri).to_string(),
            })
            .collect();
        element
    }

    /// Copy a parsed element without its children.
    ///
    /// Attribute names go through the qualified name resolver; attributes
    /// that do not resolve to a local name are skipped.
    #[must_use]
    pub fn shell_from(node: Node<'_, '_>) -> Self {
        let tag = node.tag_name();
        let mut element = Self::new(tag.namespace(), tag.name());

        for attr in node.attributes() {
            let qualified = clark_name(attr.namespace(), attr.name());
            let (namespace, name) = namespace_and_tag(qualified.as_str());
            if let Some(name) = name {
                element
                    .attributes
                    .push(Attribute::new(namespace, name, attr.value()));
            }
        }

        element.text = node.text().map(|t| XmlText::Plain(t.to_string()));
        element.namespaces = node
            .namespaces()
            .filter(|ns| ns.uri() != XML_NAMESPACE)
            .map(|ns| Namespace {
                prefix: ns.name().map(String::from),
                uri: ns.uri().to_string(),
            })
            .collect();

        element
    }

    /// Look up an attribute value by local name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any attribute with the same local name.
    pub fn set_attribute(&mut self, namespace: Option<&str>, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => {
                existing.namespace = namespace.map(String::from);
                existing.value = value;
            }
            None => self.attributes.push(Attribute::new(namespace, name, value)),
        }
    }

    /// Text content without escaping, if any.
    #[must_use]
    pub fn text_str(&self) -> Option<&str> {
        self.text.as_ref().map(XmlText::as_str)
    }

    /// Clark name of this element.
    #[must_use]
    pub fn clark_name(&self) -> String {
        clark_name(self.namespace.as_deref(), &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_shell_from_copies_attributes_and_text() {
        let xml = r#"<title xmlns="urn:x" xml:lang="en" override="true">Hello<b/></title>"#;
        let doc = Document::parse(xml).unwrap();
        let element = XmlElement::shell_from(doc.root_element());

        assert_eq!(element.namespace.as_deref(), Some("urn:x"));
        assert_eq!(element.name, "title");
        assert_eq!(element.attribute("lang"), Some("en"));
        assert_eq!(element.attribute("override"), Some("true"));
        assert_eq!(element.text_str(), Some("Hello"));
        assert!(element.children.is_empty());
        assert_eq!(
            element.attributes.first().and_then(|a| a.namespace.as_deref()),
            Some(XML_NAMESPACE)
        );
    }

    #[test]
    fn test_shell_from_records_namespaces_without_xml() {
        let xml = r#"<a xmlns="urn:x" xmlns:h="urn:h"/>"#;
        let doc = Document::parse(xml).unwrap();
        let element = XmlElement::shell_from(doc.root_element());

        assert!(element.namespaces.iter().any(|ns| ns.prefix.is_none() && ns.uri == "urn:x"));
        assert!(element.namespaces.iter().any(|ns| ns.prefix.as_deref() == Some("h")));
        assert!(element.namespaces.iter().all(|ns| ns.uri != XML_NAMESPACE));
    }

    #[test]
    fn test_fresh_carries_nsmap() {
        let element = XmlElement::fresh(None, "Benchmark");
        assert_eq!(element.namespaces.len(), NSMAP.len());
        assert!(element.attributes.is_empty());
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut element = XmlElement::new(None, "select");
        element.set_attribute(None, "idref", "a");
        element.set_attribute(None, "selected", "true");
        element.set_attribute(None, "idref", "b");

        assert_eq!(element.attributes.len(), 2);
        assert_eq!(element.attribute("idref"), Some("b"));
        assert_eq!(element.attributes.first().map(|a| a.name.as_str()), Some("idref"));
    }
}
