//! `<version>` element, plain and as used by a Tailoring.

use std::fmt;

use chrono::NaiveDateTime;
use roxmltree::Node;

use super::element::Element;
use super::node::XccdfNode;
use crate::config::{format_timestamp, parse_timestamp, Config, XCCDF_NAMESPACE};
use crate::error::{Result, XccdfError};

/// Version of a benchmark item with optional timestamp and update URI.
#[derive(Debug, Clone)]
pub struct Version {
    element: Element,
}

impl Version {
    #[must_use]
    pub fn version(&self) -> &str {
        self.text().unwrap_or_default()
    }

    /// Timestamp of this version.
    #[must_use]
    pub fn time(&self) -> Option<NaiveDateTime> {
        self.attrs().get("time").and_then(parse_timestamp)
    }

    /// Store a timestamp in canonical `YYYY-MM-DDTHH:MM:SS` form.
    pub fn set_time(&mut self, time: NaiveDateTime) {
        self.attrs_mut().set("time", format_timestamp(&time));
    }

    /// URI where updates to this version can be found.
    #[must_use]
    pub fn update(&self) -> Option<&str> {
        self.attrs().get("update")
    }

    pub fn set_update(&mut self, update: &str) {
        self.attrs_mut().set("update", update);
    }

    fn validate_time(element: &Element) -> Result<()> {
        match element.attrs().get("time") {
            Some(time) if parse_timestamp(time).is_none() => Err(XccdfError::InvalidValue {
                element: Self::TAG.to_string(),
                attribute: "time".to_string(),
                value: time.to_string(),
                reason: "expected an xs:dateTime".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version {}", self.version())
    }
}

impl XccdfNode for Version {
    const TAG: &'static str = "version";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let element = Element::from_xml(node)?;
        Self::validate_time(&element)?;
        element.check_coercions(config)?;
        Ok(Self { element })
    }

    fn from_params_with(version: String, _config: &Config) -> Result<Self> {
        let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), Self::TAG);
        element.set_text(Some(version));
        Ok(Self { element })
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

/// Scratch parameters of a [`TailoringVersion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailoringVersionParams {
    pub version: String,
    pub time: NaiveDateTime,
}

/// `<version>` of a Tailoring, where `time` is mandatory.
#[derive(Debug, Clone)]
pub struct TailoringVersion {
    inner: Version,
}

impl TailoringVersion {
    #[must_use]
    pub fn version(&self) -> &str {
        self.inner.version()
    }

    /// Timestamp of this version. Always present once validated; a value
    /// removed from the bag afterwards reads as `None`.
    #[must_use]
    pub fn time(&self) -> Option<NaiveDateTime> {
        self.inner.time()
    }

    pub fn set_time(&mut self, time: NaiveDateTime) {
        self.inner.set_time(time);
    }

    #[must_use]
    pub fn update(&self) -> Option<&str> {
        self.inner.update()
    }

    fn require_time(inner: &Version) -> Result<()> {
        inner.element().require("time").map(|_| ())
    }
}

impl fmt::Display for TailoringVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version {}", self.version())
    }
}

impl XccdfNode for TailoringVersion {
    const TAG: &'static str = "version";
    type Params = TailoringVersionParams;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let inner = Version::from_xml_with(node, config)?;
        Self::require_time(&inner)?;
        Ok(Self { inner })
    }

    fn from_params_with(params: TailoringVersionParams, config: &Config) -> Result<Self> {
        let mut inner = Version::from_params_with(params.version, config)?;
        inner.set_time(params.time);
        Ok(Self { inner })
    }

    fn element(&self) -> &Element {
        self.inner.element()
    }

    fn element_mut(&mut self) -> &mut Element {
        self.inner.element_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roxmltree::Document;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 1, 20)
            .and_then(|d| d.and_hms_opt(10, 11, 12))
            .unwrap()
    }

    #[test]
    fn test_import_version() {
        let xml = r#"<version time="2015-01-20T10:11:12" update="https://example.org/updates">0.9</version>"#;
        let doc = Document::parse(xml).unwrap();
        let version = Version::from_xml(doc.root_element()).unwrap();

        assert_eq!(version.version(), "0.9");
        assert_eq!(version.time(), Some(timestamp()));
        assert_eq!(version.update(), Some("https://example.org/updates"));
    }

    #[test]
    fn test_invalid_time() {
        let doc = Document::parse(r#"<version time="yesterday">1</version>"#).unwrap();
        let err = Version::from_xml(doc.root_element()).unwrap_err();
        assert!(matches!(err, XccdfError::InvalidValue { .. }));
    }

    #[test]
    fn test_tailoring_version_requires_time() {
        let doc = Document::parse("<version>1</version>").unwrap();
        let err = TailoringVersion::from_xml(doc.root_element()).unwrap_err();
        assert_eq!(err.to_string(), "time attribute required on <version>");

        let doc = Document::parse(r#"<version time="">1</version>"#).unwrap();
        let err = TailoringVersion::from_xml(doc.root_element()).unwrap_err();
        assert!(matches!(err, XccdfError::RequiredAttributeMissing { .. }));
    }

    #[test]
    fn test_scratch_tailoring_version_roundtrip() {
        let mut version = TailoringVersion::from_params(TailoringVersionParams {
            version: "1".to_string(),
            time: timestamp(),
        })
        .unwrap();

        let xml = version.to_xml_string().unwrap();
        assert!(xml.contains(r#"time="2015-01-20T10:11:12""#));

        let doc = Document::parse(&xml).unwrap();
        let again = TailoringVersion::from_xml(doc.root_element()).unwrap();
        assert!(version.semantic_eq(&again));
        assert_eq!(again.time(), Some(timestamp()));
    }

    #[test]
    fn test_offset_timestamp_accepted() {
        let doc = Document::parse(r#"<version time="2015-01-20T10:11:12Z">1</version>"#).unwrap();
        let version = TailoringVersion::from_xml(doc.root_element()).unwrap();
        assert_eq!(version.time(), Some(timestamp()));
    }
}
