//! `<Group>` element.

use std::fmt;

use roxmltree::Node;

use super::child::Child;
use super::composite::{
    children_of, container_dict, export_container, import_container, scratch_container,
    ItemAttributes, SelectableAttributes,
};
use super::dict::ElementDict;
use super::element::Element;
use super::node::XccdfNode;
use super::rule::Rule;
use crate::config::Config;
use crate::error::Result;
use crate::registry::{group_model, ChildKind};
use crate::xml::XmlElement;

/// Container of Rules and nested Groups.
#[derive(Debug, Clone)]
pub struct Group {
    element: Element,
    children: Vec<Child>,
}

impl Group {
    #[must_use]
    pub fn id(&self) -> &str {
        self.attrs().get("id").unwrap_or_default()
    }

    /// Children, sorted into export order by the last export.
    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }

    /// Append a child. Export sorts children into canonical order; Groups
    /// and Rules keep the order they were added in.
    pub fn add_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Nested Groups.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|c| match c {
            Child::Group(group) => Some(group),
            _ => None,
        })
    }

    /// Rules directly under this Group.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.children.iter().filter_map(|c| match c {
            Child::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    /// Number of children of one kind.
    #[must_use]
    pub fn count(&self, kind: ChildKind) -> usize {
        children_of(&self.children, kind).count()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.id())
    }
}

impl XccdfNode for Group {
    const TAG: &'static str = "Group";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let (element, children) = import_container(node, config, group_model())?;
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
        export_container(&mut self.element, &mut self.children, group_model())
    }

    fn as_dict(&self) -> ElementDict {
        container_dict(&self.element, &self.children)
    }
}

impl ItemAttributes for Group {}
impl SelectableAttributes for Group {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XCCDF_NAMESPACE;
    use crate::error::XccdfError;
    use crate::models::{BindingState, Title};
    use roxmltree::Document;

    fn import(xml: &str) -> Result<Group> {
        let doc = Document::parse(xml).unwrap();
        Group::from_xml(doc.root_element())
    }

    #[test]
    fn test_import_group() {
        let xml = format!(
            r#"<Group xmlns="{XCCDF_NAMESPACE}" id="g1" hidden="false" weight="2">
                <Rule id="r1"/>
                <title>Services</title>
                <Group id="g2"><Rule id="r2"/></Group>
                <Rule id="r3"/>
                <status>draft</status>
            </Group>"#
        );
        let group = import(&xml).unwrap();

        assert_eq!(group.id(), "g1");
        assert_eq!(group.hidden(), Some(false));
        assert_eq!(group.weight(), Some(2.0));
        assert!(group.text().is_none());

        let tags: Vec<_> = group.children().iter().map(Child::tag).collect();
        assert_eq!(tags, vec!["status", "title", "Rule", "Group", "Rule"]);
        assert_eq!(group.groups().count(), 1);
        assert_eq!(group.rules().map(Rule::id).collect::<Vec<_>>(), vec!["r1", "r3"]);
    }

    #[test]
    fn test_group_requires_group_or_rule() {
        let err = import(r#"<Group id="g"><title>Empty</title></Group>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "<Group> cardinality violated: a group must contain at least a group or a rule"
        );
    }

    #[test]
    fn test_group_requires_id() {
        let err = import(r#"<Group><Rule id="r"/></Group>"#).unwrap_err();
        assert!(matches!(err, XccdfError::RequiredAttributeMissing { .. }));
    }

    #[test]
    fn test_invalid_weight() {
        let err = import(r#"<Group id="g" weight="high"><Rule id="r"/></Group>"#).unwrap_err();
        assert!(matches!(err, XccdfError::InvalidValue { .. }));
    }

    #[test]
    fn test_scratch_group_roundtrip() {
        let mut group = Group::from_params("xccdf_org_group_ssh".to_string()).unwrap();
        assert!(group.children().is_empty());
        assert_eq!(group.binding_state(), BindingState::Detached);

        group.set_selected(true);
        group.add_child(Title::from_params("SSH".to_string()).unwrap());
        group.add_child(Rule::from_params("xccdf_org_rule_sshd".to_string()).unwrap());

        let xml = group.to_xml_string().unwrap();
        let again = import(&xml).unwrap();
        assert!(group.semantic_eq(&again));
        assert_eq!(again.count(ChildKind::Rule), 1);
    }
}
