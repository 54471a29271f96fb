//! Rendering of `XmlElement` trees to indented XML text.
//!
//! Namespace declarations are resolved while writing. The root element
//! declares the namespaces its binding carries; any namespace used further
//! down that is not in scope is declared on the element that needs it. That
//! includes the prefixes referenced by verbatim markup.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::tree::{XmlElement, XmlText};
use crate::config::{NSMAP, XHTML_NAMESPACE, XML_NAMESPACE};
use crate::error::Result;

/// Namespace bindings in scope at an element.
#[derive(Debug, Clone, Default)]
struct Scope {
    default: Option<String>,
    prefixes: Vec<(String, String)>,
}

impl Scope {
    fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(_, u)| u == uri)
            .map(|(p, _)| p.as_str())
    }

    fn is_bound(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|(p, _)| p == prefix)
    }

    fn uri_of(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, u)| u.as_str())
    }

    fn bind(&mut self, prefix: &str, uri: &str) {
        self.prefixes.retain(|(p, _)| p != prefix);
        self.prefixes.push((prefix.to_string(), uri.to_string()));
    }

    /// Pick a prefix for an undeclared namespace: the fixed map's prefix if
    /// it is still free, otherwise the first free `nsN`.
    fn free_prefix(&self, uri: &str) -> String {
        if let Some(prefix) = NSMAP
            .iter()
            .find_map(|(p, u)| p.filter(|p| *u == uri && !self.is_bound(p)))
        {
            return prefix.to_string();
        }
        (0..)
            .map(|n| format!("ns{n}"))
            .find(|p| !self.is_bound(p))
            .unwrap_or_default()
    }
}

/// Render an element tree with an XML declaration and two-space indentation.
///
/// # Examples
/// ```
/// use xccdf::xml::{to_xml_string, XmlElement};
///
/// let mut title = XmlElement::new(None, "title");
/// title.set_attribute(None, "override", "true");
/// let xml = to_xml_string(&title).unwrap();
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(xml.contains(r#"<title override="true"/>"#));
/// ```
pub fn to_xml_string(root: &XmlElement) -> Result<String> {
    let mut buffer = Vec::new();
    write_xml(root, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write an element tree to any `Write` sink.
pub fn write_xml<W: Write>(root: &XmlElement, sink: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut declarations: Vec<(Option<String>, String)> = Vec::new();
    let mut scope = Scope::default();
    for ns in root.namespaces.iter().filter(|ns| ns.uri != XML_NAMESPACE) {
        match ns.prefix.as_deref() {
            None if scope.default.is_none() => {
                scope.default = Some(ns.uri.clone());
                declarations.push((None, ns.uri.clone()));
            }
            None => {}
            Some(prefix) if !scope.is_bound(prefix) => {
                scope.bind(prefix, &ns.uri);
                declarations.push((Some(prefix.to_string()), ns.uri.clone()));
            }
            Some(_) => {}
        }
    }

    write_element(&mut writer, root, scope, declarations)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &XmlElement,
    mut scope: Scope,
    mut declarations: Vec<(Option<String>, String)>,
) -> Result<()> {
    let qname = element_name(element, &mut scope, &mut declarations);

    let mut attributes = Vec::with_capacity(element.attributes.len());
    for attr in &element.attributes {
        let key = match attr.namespace.as_deref() {
            None => attr.name.clone(),
            Some(XML_NAMESPACE) => format!("xml:{}", attr.name),
            Some(uri) => {
                let prefix = match scope.prefix_for(uri) {
                    Some(prefix) => prefix.to_string(),
                    None => {
                        let prefix = scope.free_prefix(uri);
                        scope.bind(&prefix, uri);
                        declarations.push((Some(prefix.clone()), uri.to_string()));
                        prefix
                    }
                };
                format!("{prefix}:{}", attr.name)
            }
        };
        attributes.push((key, attr.value.as_str()));
    }

    if let Some(XmlText::Markup {
        prefix, namespaces, ..
    }) = &element.text
    {
        if !scope.is_bound(prefix) {
            scope.bind(prefix, XHTML_NAMESPACE);
            declarations.push((Some(prefix.clone()), XHTML_NAMESPACE.to_string()));
        }
        for ns in namespaces {
            let Some(local) = ns.prefix.as_deref() else {
                continue;
            };
            if scope.uri_of(local) != Some(ns.uri.as_str()) {
                scope.bind(local, &ns.uri);
                declarations.push((Some(local.to_string()), ns.uri.clone()));
            }
        }
    }

    let mut start = BytesStart::new(qname.as_str());
    for (prefix, uri) in &declarations {
        match prefix {
            None => start.push_attribute(("xmlns", uri.as_str())),
            Some(prefix) => {
                let key = format!("xmlns:{prefix}");
                start.push_attribute((key.as_str(), uri.as_str()));
            }
        }
    }
    for (key, value) in &attributes {
        start.push_attribute((key.as_str(), *value));
    }

    let text = element.text.as_ref().filter(|t| !t.as_str().is_empty());
    if text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    match text {
        Some(XmlText::Plain(content)) => {
            writer.write_event(Event::Text(BytesText::new(content)))?;
        }
        Some(XmlText::Markup { content, .. }) => {
            writer.write_event(Event::Text(BytesText::from_escaped(content.as_str())))?;
        }
        None => {}
    }
    for child in &element.children {
        write_element(writer, child, scope.clone(), Vec::new())?;
    }
    writer.write_event(Event::End(BytesEnd::new(qname.as_str())))?;
    Ok(())
}

/// Qualified name for an element, declaring its namespace when needed.
fn element_name(
    element: &XmlElement,
    scope: &mut Scope,
    declarations: &mut Vec<(Option<String>, String)>,
) -> String {
    match element.namespace.as_deref() {
        ns if ns == scope.default.as_deref() => element.name.clone(),
        Some(uri) => match scope.prefix_for(uri) {
            Some(prefix) => format!("{prefix}:{}", element.name),
            None => {
                scope.default = Some(uri.to_string());
                declarations.push((None, uri.to_string()));
                element.name.clone()
            }
        },
        None => {
            scope.default = None;
            declarations.push((None, String::new()));
            element.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XCCDF_NAMESPACE;
    use crate::xml::{Attribute, Namespace};

    fn render(element: &XmlElement) -> String {
        to_xml_string(element).unwrap()
    }

    #[test]
    fn test_fresh_root_declares_namespace_map() {
        let root = XmlElement::fresh(Some(XCCDF_NAMESPACE), "Benchmark");
        let xml = render(&root);
        assert!(xml.contains(&format!(r#"<Benchmark xmlns="{XCCDF_NAMESPACE}""#)));
        assert!(xml.contains(&format!(r#"xmlns:cdf="{XCCDF_NAMESPACE}""#)));
        assert!(xml.contains(r#"xmlns:dsig="http://www.w3.org/2000/09/xmldsig#""#));
    }

    #[test]
    fn test_children_in_default_namespace_are_unprefixed() {
        let mut root = XmlElement::fresh(Some(XCCDF_NAMESPACE), "Group");
        let mut title = XmlElement::new(Some(XCCDF_NAMESPACE), "title");
        title.text = Some(XmlText::Plain("A & B".to_string()));
        root.children.push(title);

        let xml = render(&root);
        assert!(xml.contains("\n  <title>A &amp; B</title>\n"));
        assert!(xml.ends_with("</Group>"));
    }

    #[test]
    fn test_xml_attributes_use_reserved_prefix() {
        let mut title = XmlElement::new(None, "title");
        title
            .attributes
            .push(Attribute::new(Some(XML_NAMESPACE), "lang", "en"));
        let xml = render(&title);
        assert!(xml.contains(r#"<title xml:lang="en"/>"#));
        assert!(!xml.contains("xmlns:xml"));
    }

    #[test]
    fn test_undeclared_attribute_namespace_gets_prefix() {
        let mut rule = XmlElement::new(None, "Rule");
        rule.attributes
            .push(Attribute::new(Some("urn:vendor"), "extra", "1"));
        let xml = render(&rule);
        assert!(xml.contains(r#"xmlns:ns0="urn:vendor""#));
        assert!(xml.contains(r#"ns0:extra="1""#));
    }

    #[test]
    fn test_markup_written_verbatim_with_prefix_declared() {
        let mut description = XmlElement::new(None, "description");
        description.text = Some(XmlText::Markup {
            prefix: "html".to_string(),
            content: "Use <html:b>care</html:b>".to_string(),
            namespaces: Vec::new(),
        });
        let xml = render(&description);
        assert!(xml.contains(&format!(r#"xmlns:html="{XHTML_NAMESPACE}""#)));
        assert!(xml.contains(">Use <html:b>care</html:b></description>"));
    }

    #[test]
    fn test_markup_namespaces_declared_where_not_in_scope() {
        let mut root = XmlElement::fresh(Some(XCCDF_NAMESPACE), "Benchmark");
        let mut description = XmlElement::new(Some(XCCDF_NAMESPACE), "description");
        description.text = Some(XmlText::Markup {
            prefix: "html".to_string(),
            content: "<xhtml:p>hi</xhtml:p> <ext:x/>".to_string(),
            namespaces: vec![
                Namespace {
                    prefix: Some("xhtml".to_string()),
                    uri: XHTML_NAMESPACE.to_string(),
                },
                Namespace {
                    prefix: Some("ext".to_string()),
                    uri: "urn:ext".to_string(),
                },
            ],
        });
        root.children.push(description);

        let xml = render(&root);
        // `xhtml` is already bound on the fresh root with the same URI.
        assert!(xml.contains(r#"<description xmlns:ext="urn:ext">"#));
        assert!(roxmltree::Document::parse(&xml).is_ok());
    }

    #[test]
    fn test_unqualified_child_under_default_namespace_resets_it() {
        let mut root = XmlElement::fresh(Some(XCCDF_NAMESPACE), "Benchmark");
        root.children.push(XmlElement::new(None, "element"));
        let xml = render(&root);
        assert!(xml.contains(r#"<element xmlns=""/>"#));
    }

    #[test]
    fn test_foreign_namespace_declared_locally() {
        let mut root = XmlElement::new(None, "root");
        root.children.push(XmlElement::new(Some("urn:other"), "child"));
        let xml = render(&root);
        assert!(xml.contains(r#"<child xmlns="urn:other"/>"#));
    }
}
