//! Mixed-content elements.
//!
//! XCCDF text elements may embed XHTML under a reserved prefix. The markup
//! is kept as an opaque string: the prefix is stripped on import and put
//! back on export, where the string becomes the element's raw text.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

use super::dict::ElementDict;
use super::element::Element;
use crate::config::{Config, XCCDF_NAMESPACE, XML_NAMESPACE};
use crate::error::Result;
use crate::xml::{inner_markup, Namespace, XmlElement, XmlText};

/// An unprefixed start, end or empty-element tag. Comments, processing
/// instructions and already-prefixed names never match.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static UNPREFIXED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z_][\w.\-]*)([\s/>])").expect("valid regex"));

/// A prefixed tag or attribute name.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:</?|\s)([A-Za-z_][\w.\-]*):[A-Za-z_]").expect("valid regex")
});

/// Strip the reserved prefix and its declarations from serialized markup.
///
/// # Examples
/// ```
/// use xccdf::models::decode_markup;
///
/// let raw = r#"<html:p xmlns:html="http://www.w3.org/1999/xhtml">hi</html:p>"#;
/// assert_eq!(decode_markup(raw, "html").unwrap(), "<p>hi</p>");
/// ```
pub fn decode_markup(raw: &str, prefix: &str) -> Result<String> {
    let prefix = regex::escape(prefix);
    let declaration = Regex::new(&format!(r#"\s+xmlns:{prefix}\s*=\s*(?:"[^"]*"|'[^']*')"#))?;
    let qualified = Regex::new(&format!(r"(</?){prefix}:"))?;

    let stripped = declaration.replace_all(raw, "");
    Ok(qualified.replace_all(&stripped, "${1}").into_owned())
}

/// Qualify every unprefixed tag in `content` with `prefix`.
///
/// # Examples
/// ```
/// use xccdf::models::encode_markup;
///
/// assert_eq!(encode_markup("<p>hi<br/></p>", "html"), "<html:p>hi<html:br/></html:p>");
/// ```
#[must_use]
pub fn encode_markup(content: &str, prefix: &str) -> String {
    UNPREFIXED_TAG
        .replace_all(content, format!("<${{1}}{prefix}:${{2}}${{3}}").as_str())
        .into_owned()
}

/// In-scope bindings of `node` for the prefixes `markup` uses, other than
/// `reserved`. The raw slice loses declarations made on the element itself
/// or its ancestors, so these travel with the markup.
fn referenced_namespaces(node: Node<'_, '_>, markup: &str, reserved: &str) -> Vec<Namespace> {
    let mut namespaces: Vec<Namespace> = Vec::new();
    for captures in QUALIFIED_NAME.captures_iter(markup) {
        let prefix = &captures[1];
        if prefix == reserved
            || prefix == "xmlns"
            || namespaces.iter().any(|ns| ns.prefix.as_deref() == Some(prefix))
        {
            continue;
        }
        if let Some(uri) = node.lookup_namespace_uri(Some(prefix)) {
            if uri != XML_NAMESPACE {
                namespaces.push(Namespace {
                    prefix: Some(prefix.to_string()),
                    uri: uri.to_string(),
                });
            }
        }
    }
    namespaces
}

/// Element whose payload is embedded markup.
#[derive(Debug, Clone)]
pub struct HtmlElement {
    element: Element,
    content: String,
    prefix: String,
    namespaces: Vec<Namespace>,
}

impl HtmlElement {
    /// Import a parsed element, decoding its inner markup.
    pub fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let mut element = Element::from_xml(node)?;
        element.set_text(None);
        let content = decode_markup(inner_markup(node), &config.markup_prefix)?;
        let namespaces = referenced_namespaces(node, &content, &config.markup_prefix);
        tracing::trace!(
            tag = %element.tag(),
            len = content.len(),
            namespaces = namespaces.len(),
            "decoded markup"
        );

        Ok(Self {
            element,
            content,
            prefix: config.markup_prefix.clone(),
            namespaces,
        })
    }

    /// Scratch element with empty content.
    pub fn new(tag: &str, config: &Config) -> Self {
        Self {
            element: Element::with_namespace(Some(XCCDF_NAMESPACE), tag),
            content: String::new(),
            prefix: config.markup_prefix.clone(),
            namespaces: Vec::new(),
        }
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// Decoded markup, empty for a scratch element.
    #[must_use]
    pub fn html_content(&self) -> &str {
        &self.content
    }

    pub fn set_html_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Prefix the markup is encoded with on export.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Namespaces the markup uses besides the reserved prefix.
    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Bind `prefix` for use inside the markup.
    pub fn declare_namespace(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        let prefix = prefix.into();
        self.namespaces
            .retain(|ns| ns.prefix.as_deref() != Some(prefix.as_str()));
        self.namespaces.push(Namespace {
            prefix: Some(prefix),
            uri: uri.into(),
        });
    }

    /// Refresh the binding and set the encoded markup as its raw text.
    pub fn export(&mut self) -> &XmlElement {
        let markup = encode_markup(&self.content, &self.prefix);
        let binding = self.element.refresh();
        binding.text = (!markup.is_empty()).then(|| XmlText::Markup {
            prefix: self.prefix.clone(),
            content: markup,
            namespaces: self.namespaces.clone(),
        });
        binding
    }

    #[must_use]
    pub fn as_dict(&self) -> ElementDict {
        ElementDict {
            content: Some(self.content.clone()),
            ..self.element.as_dict()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XHTML_NAMESPACE;
    use roxmltree::Document;

    fn description(inner: &str) -> String {
        format!(
            r#"<description xmlns="{XCCDF_NAMESPACE}" xmlns:html="{XHTML_NAMESPACE}">{inner}</description>"#
        )
    }

    #[test]
    fn test_prefix_stripped_on_import() {
        let xml = description("<html:p>hi</html:p>");
        let doc = Document::parse(&xml).unwrap();
        let element = HtmlElement::from_xml_with(doc.root_element(), &Config::default()).unwrap();
        assert_eq!(element.html_content(), "<p>hi</p>");
    }

    #[test]
    fn test_export_restores_prefixed_form() {
        let xml = description("<html:p>hi</html:p>");
        let doc = Document::parse(&xml).unwrap();
        let mut element =
            HtmlElement::from_xml_with(doc.root_element(), &Config::default()).unwrap();

        let binding = element.export();
        assert_eq!(binding.text_str(), Some("<html:p>hi</html:p>"));
        assert!(binding.children.is_empty());
    }

    #[test]
    fn test_local_declarations_are_removed() {
        let raw = format!(r#"Run <html:code xmlns:html="{XHTML_NAMESPACE}">ls</html:code> now"#);
        assert_eq!(
            decode_markup(&raw, "html").unwrap(),
            "Run <code>ls</code> now"
        );
    }

    #[test]
    fn test_other_prefixes_untouched() {
        assert_eq!(
            decode_markup("<xhtml:b>x</xhtml:b>", "html").unwrap(),
            "<xhtml:b>x</xhtml:b>"
        );
        assert_eq!(encode_markup("<xhtml:b>x</xhtml:b>", "html"), "<xhtml:b>x</xhtml:b>");
    }

    #[test]
    fn test_encode_skips_comments_and_instructions() {
        assert_eq!(
            encode_markup("<!-- c --><?pi x?><a href='x'>y</a>", "html"),
            "<!-- c --><?pi x?><html:a href='x'>y</html:a>"
        );
    }

    #[test]
    fn test_scratch_content_is_empty() {
        let mut element = HtmlElement::new("description", &Config::default());
        assert_eq!(element.html_content(), "");
        assert!(element.export().text.is_none());
    }

    #[test]
    fn test_custom_prefix() {
        let config = Config::from_yaml_str("markup_prefix: h\n").unwrap();
        let xml = r#"<notice xmlns:h="urn:h" id="n"><h:em>x</h:em></notice>"#;
        let doc = Document::parse(xml).unwrap();
        let mut element = HtmlElement::from_xml_with(doc.root_element(), &config).unwrap();
        assert_eq!(element.html_content(), "<em>x</em>");
        assert_eq!(element.export().text_str(), Some("<h:em>x</h:em>"));
    }

    #[test]
    fn test_inherited_prefix_recorded_for_export() {
        let xml = format!(
            r#"<Group xmlns="{XCCDF_NAMESPACE}" xmlns:xhtml="{XHTML_NAMESPACE}" xmlns:v="urn:v">
                <description>See <xhtml:a v:ref="1">this</xhtml:a></description>
            </Group>"#
        );
        let doc = Document::parse(&xml).unwrap();
        let node = doc.root_element().first_element_child().unwrap();
        let mut element = HtmlElement::from_xml_with(node, &Config::default()).unwrap();

        let prefixes: Vec<_> = element
            .namespaces()
            .iter()
            .filter_map(|ns| ns.prefix.as_deref())
            .collect();
        assert_eq!(prefixes, ["xhtml", "v"]);

        match &element.export().text {
            Some(XmlText::Markup { namespaces, .. }) => assert_eq!(namespaces.len(), 2),
            other => panic!("expected markup, got {other:?}"),
        }
    }

    #[test]
    fn test_reserved_and_undeclared_prefixes_not_recorded() {
        let xml = description("<html:p>a</html:p> note:x");
        let doc = Document::parse(&xml).unwrap();
        let element = HtmlElement::from_xml_with(doc.root_element(), &Config::default()).unwrap();
        assert!(element.namespaces().is_empty());
    }

    #[test]
    fn test_plain_text_content() {
        let xml = description("Just words &amp; more");
        let doc = Document::parse(&xml).unwrap();
        let element = HtmlElement::from_xml_with(doc.root_element(), &Config::default()).unwrap();
        assert_eq!(element.html_content(), "Just words &amp; more");
        assert!(element.element().text().is_none());
    }
}
