//! `<status>` element.

use std::fmt;

use chrono::NaiveDate;
use roxmltree::Node;

use super::element::Element;
use super::node::XccdfNode;
use crate::config::{format_date, parse_date, Config, XCCDF_NAMESPACE};
use crate::error::{Result, XccdfError};

/// Maturity status of a benchmark item, optionally dated.
#[derive(Debug, Clone)]
pub struct Status {
    element: Element,
}

impl Status {
    /// Status value, such as `draft` or `accepted`.
    #[must_use]
    pub fn state(&self) -> &str {
        self.text().unwrap_or_default()
    }

    /// Date the status was assigned.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.attrs().get("date").and_then(parse_date)
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.attrs_mut().set("date", format_date(&date));
    }

    fn validate(element: &Element, config: &Config) -> Result<()> {
        let state = element.text().unwrap_or_default();
        if !config.is_valid_status(state) {
            return Err(XccdfError::InvalidEnumeratedValue {
                element: Self::TAG.to_string(),
                attribute: "state".to_string(),
                value: state.to_string(),
                choices: config.status_values.clone(),
            });
        }

        if let Some(date) = element.attrs().get("date") {
            if parse_date(date).is_none() {
                return Err(XccdfError::InvalidValue {
                    element: Self::TAG.to_string(),
                    attribute: "date".to_string(),
                    value: date.to_string(),
                    reason: "expected YYYY-MM-DD".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.state())?;
        if let Some(date) = self.attrs().get("date") {
            write!(f, " ({date})")?;
        }
        Ok(())
    }
}

impl XccdfNode for Status {
    const TAG: &'static str = "status";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let element = Element::from_xml(node)?;
        Self::validate(&element, config)?;
        element.check_coercions(config)?;
        Ok(Self { element })
    }

    fn from_params_with(state: String, config: &Config) -> Result<Self> {
        let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), Self::TAG);
        element.set_text(Some(state));
        Self::validate(&element, config)?;
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
    use roxmltree::Document;

    fn import(xml: &str) -> Result<Status> {
        let doc = Document::parse(xml).unwrap();
        Status::from_xml(doc.root_element())
    }

    #[test]
    fn test_import_dated_status() {
        let status = import(r#"<status date="2015-01-20">draft</status>"#).unwrap();
        assert_eq!(status.state(), "draft");
        assert_eq!(status.date(), NaiveDate::from_ymd_opt(2015, 1, 20));
    }

    #[test]
    fn test_invalid_state() {
        let err = import("<status>approved</status>").unwrap_err();
        assert!(matches!(err, XccdfError::InvalidEnumeratedValue { .. }));

        let err = import("<status/>").unwrap_err();
        assert!(matches!(err, XccdfError::InvalidEnumeratedValue { .. }));
    }

    #[test]
    fn test_invalid_date() {
        let err = import(r#"<status date="20-01-2015">draft</status>"#).unwrap_err();
        assert!(matches!(err, XccdfError::InvalidValue { .. }));
    }

    #[test]
    fn test_injected_status_values() {
        let config = Config::from_yaml_str("status_values: [approved]\n").unwrap();
        let doc = Document::parse("<status>approved</status>").unwrap();
        assert!(Status::from_xml_with(doc.root_element(), &config).is_ok());
        assert!(Status::from_params_with("draft".to_string(), &config).is_err());
    }

    #[test]
    fn test_scratch_status_roundtrip() {
        let mut status = Status::from_params("accepted".to_string()).unwrap();
        status.set_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let xml = status.to_xml_string().unwrap();
        assert!(xml.contains(r#"date="2024-03-01""#));
        let again = import(&xml).unwrap();
        assert!(status.semantic_eq(&again));
    }
}
