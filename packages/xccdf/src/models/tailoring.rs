//! `<Tailoring>` document root.

use std::fmt;

use roxmltree::Node;

use super::child::Child;
use super::composite::{
    container_dict, export_container, import_container_checked, parse_root, scratch_container,
};
use super::dict::ElementDict;
use super::element::Element;
use super::node::XccdfNode;
use super::profile::Profile;
use super::status::Status;
use super::version::TailoringVersion;
use crate::config::{validate_tailoring_id, Config};
use crate::error::Result;
use crate::registry::tailoring_model;
use crate::xml::XmlElement;

/// Profiles layered over a Benchmark without modifying it.
///
/// The identifier must follow `xccdf_<org>_tailoring_<name>`; the version
/// child must carry a timestamp.
#[derive(Debug, Clone)]
pub struct Tailoring {
    element: Element,
    children: Vec<Child>,
}

impl Tailoring {
    /// Parse a document whose root is `<Tailoring>`.
    pub fn from_xml_str(text: &str) -> Result<Self> {
        parse_root(text, Config::shared())
    }

    pub fn from_xml_str_with(text: &str, config: &Config) -> Result<Self> {
        parse_root(text, config)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.attrs().get("id").unwrap_or_default()
    }

    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }

    pub fn add_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    #[must_use]
    pub fn version(&self) -> Option<&TailoringVersion> {
        self.children.iter().find_map(|c| match c {
            Child::TailoringVersion(version) => Some(version),
            _ => None,
        })
    }

    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.children.iter().filter_map(|c| match c {
            Child::Status(status) => Some(status),
            _ => None,
        })
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.children.iter().filter_map(|c| match c {
            Child::Profile(profile) => Some(profile),
            _ => None,
        })
    }
}

impl fmt::Display for Tailoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tailoring {}", self.id())
    }
}

impl XccdfNode for Tailoring {
    const TAG: &'static str = "Tailoring";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let (element, children) =
            import_container_checked(node, config, tailoring_model(), |element| {
                validate_tailoring_id(element.attrs().get("id").unwrap_or_default())
            })?;
        Ok(Self { element, children })
    }

    fn from_params_with(id: String, _config: &Config) -> Result<Self> {
        let element = scratch_container(Self::TAG, id)?;
        validate_tailoring_id(element.attrs().get("id").unwrap_or_default())?;
        Ok(Self {
            element,
            children: Vec::new(),
        })
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn export(&mut self) -> &XmlElement {
        export_container(&mut self.element, &mut self.children, tailoring_model())
    }

    fn as_dict(&self) -> ElementDict {
        container_dict(&self.element, &self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_timestamp, XCCDF_NAMESPACE};
    use crate::error::XccdfError;
    use crate::models::{Select, SelectParams, TailoringVersionParams, Title};

    fn tailoring(id: &str, body: &str) -> String {
        format!(r#"<Tailoring xmlns="{XCCDF_NAMESPACE}" id="{id}">{body}</Tailoring>"#)
    }

    const BODY: &str = r#"<Profile id="p1"><title>Tailored</title></Profile>
        <version time="2015-01-20T10:11:12">1</version>"#;

    #[test]
    fn test_import_tailoring() {
        let t = Tailoring::from_xml_str(&tailoring("xccdf_org_tailoring_name", BODY)).unwrap();

        assert_eq!(t.id(), "xccdf_org_tailoring_name");
        let tags: Vec<_> = t.children().iter().map(Child::tag).collect();
        assert_eq!(tags, vec!["version", "Profile"]);
        assert_eq!(t.version().map(TailoringVersion::version), Some("1"));
        assert_eq!(
            t.version().and_then(TailoringVersion::time),
            parse_timestamp("2015-01-20T10:11:12")
        );
        assert_eq!(t.profiles().count(), 1);
    }

    #[test]
    fn test_invalid_id_rejected() {
        let err = Tailoring::from_xml_str(&tailoring("not_a_valid_id", BODY)).unwrap_err();
        assert!(matches!(err, XccdfError::InvalidIdentifierFormat { .. }));

        let err = Tailoring::from_params("not_a_valid_id".to_string()).unwrap_err();
        assert!(matches!(err, XccdfError::InvalidIdentifierFormat { .. }));
    }

    #[test]
    fn test_id_format_checked_before_children() {
        for body in ["", "<version>1</version>", r#"<Profile id="p"/>"#] {
            let err = Tailoring::from_xml_str(&tailoring("not_a_valid_id", body)).unwrap_err();
            assert!(
                matches!(err, XccdfError::InvalidIdentifierFormat { .. }),
                "body {body:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_scratch_children_exported_in_canonical_order() {
        let mut t = Tailoring::from_params("xccdf_org_tailoring_custom".to_string()).unwrap();
        let mut profile = Profile::from_params("p".to_string()).unwrap();
        profile.add_child(Title::from_params("P".to_string()).unwrap());
        t.add_child(profile);
        t.add_child(
            TailoringVersion::from_params(TailoringVersionParams {
                version: "1".to_string(),
                time: parse_timestamp("2016-03-01T08:00:00").unwrap(),
            })
            .unwrap(),
        );

        let names: Vec<_> = t.export().children.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, ["version", "Profile"]);
    }

    #[test]
    fn test_missing_id_reports_required() {
        let xml = format!(r#"<Tailoring xmlns="{XCCDF_NAMESPACE}">{BODY}</Tailoring>"#);
        let err = Tailoring::from_xml_str(&xml).unwrap_err();
        assert!(matches!(err, XccdfError::RequiredAttributeMissing { .. }));
    }

    #[test]
    fn test_version_without_time_rejected() {
        let body = r#"<version>1</version><Profile id="p"><title>t</title></Profile>"#;
        let err = Tailoring::from_xml_str(&tailoring("xccdf_org_tailoring_x", body)).unwrap_err();
        assert_eq!(err.to_string(), "time attribute required on <version>");
    }

    #[test]
    fn test_missing_version_and_profile() {
        let err = Tailoring::from_xml_str(&tailoring(
            "xccdf_org_tailoring_x",
            r#"<Profile id="p"><title>t</title></Profile>"#,
        ))
        .unwrap_err();
        assert!(err.to_string().ends_with("version element is required"));

        let err = Tailoring::from_xml_str(&tailoring(
            "xccdf_org_tailoring_x",
            r#"<version time="2015-01-20T10:11:12">1</version>"#,
        ))
        .unwrap_err();
        assert!(err.to_string().ends_with("Profile element is required at least once"));
    }

    #[test]
    fn test_scratch_tailoring_roundtrip() {
        let mut t = Tailoring::from_params("xccdf_org_tailoring_custom".to_string()).unwrap();
        assert!(t.children().is_empty());

        let time = parse_timestamp("2016-03-01T08:00:00").unwrap();
        t.add_child(
            TailoringVersion::from_params(TailoringVersionParams {
                version: "2".to_string(),
                time,
            })
            .unwrap(),
        );
        let mut profile = Profile::from_params("p_custom".to_string()).unwrap();
        profile.add_child(Title::from_params("Custom".to_string()).unwrap());
        profile.add_child(
            Select::from_params(SelectParams {
                idref: "r1".to_string(),
                selected: false,
            })
            .unwrap(),
        );
        t.add_child(profile);

        let xml = t.to_xml_string().unwrap();
        let again = Tailoring::from_xml_str(&xml).unwrap();
        assert!(t.semantic_eq(&again));
        assert_eq!(again.version().and_then(TailoringVersion::time), Some(time));
    }
}
