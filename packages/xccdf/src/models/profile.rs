//! `<Profile>` element.

use std::fmt;

use roxmltree::Node;

use super::child::Child;
use super::composite::{
    container_dict, export_container, import_container, scratch_container, ItemAttributes,
};
use super::dict::ElementDict;
use super::element::Element;
use super::node::XccdfNode;
use super::select::Select;
use crate::config::Config;
use crate::error::Result;
use crate::registry::profile_model;
use crate::xml::XmlElement;

/// Named selection of Rules and Groups.
#[derive(Debug, Clone)]
pub struct Profile {
    element: Element,
    children: Vec<Child>,
}

impl Profile {
    #[must_use]
    pub fn id(&self) -> &str {
        self.attrs().get("id").unwrap_or_default()
    }

    /// Identifier of the Profile this one extends.
    #[must_use]
    pub fn extends(&self) -> Option<&str> {
        self.attrs().get("extends")
    }

    pub fn set_extends(&mut self, id: &str) {
        self.attrs_mut().set("extends", id);
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

    pub fn selects(&self) -> impl Iterator<Item = &Select> {
        self.children.iter().filter_map(|c| match c {
            Child::Select(select) => Some(select),
            _ => None,
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile {}", self.id())
    }
}

impl XccdfNode for Profile {
    const TAG: &'static str = "Profile";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let (element, children) = import_container(node, config, profile_model())?;
        Ok(Self { element, children })
    }

    fn from_params_with(id: String, _config: &Config) -> Result<Self> {
        Ok(Self {
            element: scratch_container(Self::TAG, id)?,
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
        export_container(&mut self.element, &mut self.children, profile_model())
    }

    fn as_dict(&self) -> ElementDict {
        container_dict(&self.element, &self.children)
    }
}

impl ItemAttributes for Profile {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XccdfError;
    use crate::models::{SelectParams, Title};
    use roxmltree::Document;

    fn import(xml: &str) -> Result<Profile> {
        let doc = Document::parse(xml).unwrap();
        Profile::from_xml(doc.root_element())
    }

    #[test]
    fn test_import_profile() {
        let xml = r#"<Profile id="p1" extends="base" prohibitChanges="true">
            <select idref="r1" selected="true"/>
            <title>Server</title>
            <select idref="r2" selected="0"/>
        </Profile>"#;
        let profile = import(xml).unwrap();

        assert_eq!(profile.extends(), Some("base"));
        assert_eq!(profile.prohibit_changes(), Some(true));
        assert_eq!(profile.is_abstract(), None);
        let selected: Vec<_> = profile.selects().map(Select::is_selected).collect();
        assert_eq!(selected, vec![true, false]);
        assert_eq!(profile.children().first().map(Child::tag), Some("title"));
    }

    #[test]
    fn test_profile_requires_title() {
        let err = import(r#"<Profile id="p"><select idref="r" selected="1"/></Profile>"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "<Profile> cardinality violated: title element is required at least once"
        );
    }

    #[test]
    fn test_profile_requires_id() {
        let err = import(r#"<Profile><title>x</title></Profile>"#).unwrap_err();
        assert!(matches!(err, XccdfError::RequiredAttributeMissing { .. }));
    }

    #[test]
    fn test_invalid_abstract_flag() {
        let err = import(r#"<Profile id="p" abstract="no"><title>x</title></Profile>"#)
            .unwrap_err();
        assert!(matches!(err, XccdfError::InvalidEnumeratedValue { .. }));
    }

    #[test]
    fn test_scratch_profile_roundtrip() {
        let mut profile = Profile::from_params("xccdf_org_profile_server".to_string()).unwrap();
        profile.set_abstract(false);
        profile.add_child(Title::from_params("Server".to_string()).unwrap());
        profile.add_child(
            Select::from_params(SelectParams {
                idref: "r1".to_string(),
                selected: true,
            })
            .unwrap(),
        );

        let xml = profile.to_xml_string().unwrap();
        let again = import(&xml).unwrap();
        assert!(profile.semantic_eq(&again));
    }
}
