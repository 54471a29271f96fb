//! `<Rule>` element.

use std::fmt;

use roxmltree::Node;

use super::child::Child;
use super::composite::{
    container_dict, export_container, import_container, scratch_container, ItemAttributes,
    SelectableAttributes,
};
use super::dict::ElementDict;
use super::element::Element;
use super::ident::Ident;
use super::node::XccdfNode;
use crate::config::Config;
use crate::error::Result;
use crate::registry::rule_model;
use crate::xml::XmlElement;

/// A single check item of a benchmark.
#[derive(Debug, Clone)]
pub struct Rule {
    element: Element,
    children: Vec<Child>,
}

impl Rule {
    #[must_use]
    pub fn id(&self) -> &str {
        self.attrs().get("id").unwrap_or_default()
    }

    /// Role of the Rule in scoring (`full`, `unscored`, `unchecked`).
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.attrs().get("role")
    }

    pub fn set_role(&mut self, role: &str) {
        self.attrs_mut().set("role", role);
    }

    /// Severity of a failed check.
    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.attrs().get("severity")
    }

    pub fn set_severity(&mut self, severity: &str) {
        self.attrs_mut().set("severity", severity);
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

    /// External identifiers of this Rule.
    pub fn idents(&self) -> impl Iterator<Item = &Ident> {
        self.children.iter().filter_map(|c| match c {
            Child::Ident(ident) => Some(ident),
            _ => None,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.id())
    }
}

impl XccdfNode for Rule {
    const TAG: &'static str = "Rule";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let (element, children) = import_container(node, config, rule_model())?;
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
        export_container(&mut self.element, &mut self.children, rule_model())
    }

    fn as_dict(&self) -> ElementDict {
        container_dict(&self.element, &self.children)
    }
}

impl ItemAttributes for Rule {}
impl SelectableAttributes for Rule {}
