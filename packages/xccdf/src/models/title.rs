//! `<title>` element.

use std::fmt;

use roxmltree::Node;

use super::element::Element;
use super::node::XccdfNode;
use crate::config::{Config, XCCDF_NAMESPACE};
use crate::error::Result;

/// Human-readable title of a benchmark item.
#[derive(Debug, Clone)]
pub struct Title {
    element: Element,
}

impl Title {
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.attrs().get("lang")
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.attrs_mut().set("lang", lang);
    }

    /// Whether this title replaces an inherited one.
    #[must_use]
    pub fn overrides(&self) -> Option<bool> {
        self.attrs().get_bool("override")
    }

    pub fn set_override(&mut self, value: bool) {
        self.attrs_mut().set_bool("override", value);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.element.set_text(Some(text.into()));
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("title")?;
        if let Some(text) = self.text() {
            write!(f, " {text}")?;
        }
        if let Some(lang) = self.lang() {
            write!(f, " ({lang})")?;
        }
        Ok(())
    }
}

impl XccdfNode for Title {
    const TAG: &'static str = "title";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let element = Element::from_xml(node)?;
        element.check_coercions(config)?;
        Ok(Self { element })
    }

    fn from_params_with(text: String, _config: &Config) -> Result<Self> {
        let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), Self::TAG);
        element.set_text(Some(text));
        Ok(Self { element })
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XccdfError;
    use roxmltree::Document;

    #[test]
    fn test_import_title() {
        let xml = r#"<title xmlns="http://checklists.nist.gov/xccdf/1.1" xml:lang="en-US" override="true">Ensure SSH is configured</title>"#;
        let doc = Document::parse(xml).unwrap();
        let title = Title::from_xml(doc.root_element()).unwrap();

        assert_eq!(title.text(), Some("Ensure SSH is configured"));
        assert_eq!(title.lang(), Some("en-US"));
        assert_eq!(title.overrides(), Some(true));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let xml = r#"<title override="maybe">x</title>"#;
        let doc = Document::parse(xml).unwrap();
        let err = Title::from_xml(doc.root_element()).unwrap_err();
        assert!(matches!(err, XccdfError::InvalidEnumeratedValue { .. }));
    }

    #[test]
    fn test_scratch_title_roundtrip() {
        let mut title = Title::from_params("Hardening & audit".to_string()).unwrap();
        title.set_lang("en");
        title.set_override(false);

        let xml = title.to_xml_string().unwrap();
        assert!(xml.contains(r#"xml:lang="en""#));
        assert!(xml.contains("Hardening &amp; audit"));

        let doc = Document::parse(&xml).unwrap();
        let again = Title::from_xml(doc.root_element()).unwrap();
        assert!(title.semantic_eq(&again));
    }
}
