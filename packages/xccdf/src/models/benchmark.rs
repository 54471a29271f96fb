//! `<Benchmark>` document root.

use std::fmt;

use roxmltree::Node;

use super::child::Child;
use super::composite::{
    children_of, container_dict, export_container, import_container, parse_root,
    scratch_container,
};
use super::dict::ElementDict;
use super::element::Element;
use super::group::Group;
use super::node::XccdfNode;
use super::profile::Profile;
use super::rule::Rule;
use super::status::Status;
use super::version::Version;
use crate::config::Config;
use crate::error::Result;
use crate::registry::{benchmark_model, ChildKind};
use crate::xml::XmlElement;

/// A complete XCCDF checklist.
///
/// On import the children are classified into canonical order: status,
/// title, description, notice, front-matter, rear-matter, platform,
/// version, Profile, then Groups and Rules as they appear in the source.
/// A Benchmark needs exactly one version, at least one status and at least
/// one Group or Rule.
///
/// # Examples
/// ```
/// use xccdf::models::{Benchmark, XccdfNode};
///
/// let xml = r#"<Benchmark xmlns="http://checklists.nist.gov/xccdf/1.1" id="b1">
///   <status>draft</status>
///   <version>0.1</version>
///   <Rule id="r1"/>
/// </Benchmark>"#;
/// let benchmark = Benchmark::from_xml_str(xml).unwrap();
/// assert_eq!(benchmark.id(), "b1");
/// assert_eq!(benchmark.version().map(|v| v.version()), Some("0.1"));
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    element: Element,
    children: Vec<Child>,
}

impl Benchmark {
    /// Parse a document whose root is `<Benchmark>`.
    pub fn from_xml_str(text: &str) -> Result<Self> {
        parse_root(text, Config::shared())
    }

    /// Parse with an explicit configuration.
    pub fn from_xml_str_with(text: &str, config: &Config) -> Result<Self> {
        parse_root(text, config)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.attrs().get("id").unwrap_or_default()
    }

    /// Whether the Benchmark has already been resolved.
    #[must_use]
    pub fn resolved(&self) -> Option<bool> {
        self.attrs().get_bool("resolved")
    }

    pub fn set_resolved(&mut self, value: bool) {
        self.attrs_mut().set_bool("resolved", value);
    }

    /// Name of the benchmark authoring style.
    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.attrs().get("style")
    }

    pub fn set_style(&mut self, style: &str) {
        self.attrs_mut().set("style", style);
    }

    #[must_use]
    pub fn style_href(&self) -> Option<&str> {
        self.attrs().get("style-href")
    }

    pub fn set_style_href(&mut self, href: &str) {
        self.attrs_mut().set("style-href", href);
    }

    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.attrs().get("lang")
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.attrs_mut().set("lang", lang);
    }

    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }

    /// Append a child. Export sorts children into canonical order.
    pub fn add_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    #[must_use]
    pub fn version(&self) -> Option<&Version> {
        self.children.iter().find_map(|c| match c {
            Child::Version(version) => Some(version),
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

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|c| match c {
            Child::Group(group) => Some(group),
            _ => None,
        })
    }

    /// Rules directly under the Benchmark.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.children.iter().filter_map(|c| match c {
            Child::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, kind: ChildKind) -> usize {
        children_of(&self.children, kind).count()
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Benchmark {}", self.id())
    }
}

impl XccdfNode for Benchmark {
    const TAG: &'static str = "Benchmark";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let (element, children) = import_container(node, config, benchmark_model())?;
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
        export_container(&mut self.element, &mut self.children, benchmark_model())
    }

    fn as_dict(&self) -> ElementDict {
        container_dict(&self.element, &self.children)
    }
}
