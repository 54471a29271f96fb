//! Shared surface of every typed XCCDF node.

use roxmltree::Node;

use super::dict::ElementDict;
use super::element::{Attributes, BindingState, Element};
use crate::config::Config;
use crate::error::{Result, XccdfError};
use crate::xml::{to_xml_string, XmlElement};

/// A typed XCCDF element.
///
/// Implementors provide import, scratch construction and access to their
/// [`Element`]. Export, rendering and comparison come with default
/// implementations that leaves and composites refine where needed.
pub trait XccdfNode: Sized {
    /// Local tag name of the element.
    const TAG: &'static str;

    /// Minimum parameters for scratch construction.
    type Params;

    /// Import a parsed element with an explicit configuration.
    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self>;

    /// Build from scratch with an explicit configuration.
    fn from_params_with(params: Self::Params, config: &Config) -> Result<Self>;

    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    /// Import a parsed element with the shared configuration.
    fn from_xml(node: Node<'_, '_>) -> Result<Self> {
        Self::from_xml_with(node, Config::shared())
    }

    /// Build from scratch with the shared configuration.
    fn from_params(params: Self::Params) -> Result<Self> {
        Self::from_params_with(params, Config::shared())
    }

    /// Import `source` when given, otherwise build from `params`.
    ///
    /// Fails with [`XccdfError::MissingConstructionInput`] when neither is
    /// supplied.
    fn construct(source: Option<Node<'_, '_>>, params: Option<Self::Params>) -> Result<Self> {
        match (source, params) {
            (Some(node), _) => Self::from_xml(node),
            (None, Some(params)) => Self::from_params(params),
            (None, None) => Err(XccdfError::missing_input(Self::TAG)),
        }
    }

    /// Commit in-memory state to the binding and return it.
    fn export(&mut self) -> &XmlElement {
        self.element_mut().export()
    }

    /// Export and render as indented XML text.
    fn to_xml_string(&mut self) -> Result<String> {
        to_xml_string(self.export())
    }

    /// In-memory export.
    fn as_dict(&self) -> ElementDict {
        self.element().as_dict()
    }

    /// Compare two nodes through their in-memory export.
    fn semantic_eq(&self, other: &Self) -> bool {
        self.as_dict() == other.as_dict()
    }

    fn namespace(&self) -> Option<&str> {
        self.element().namespace()
    }

    fn tag(&self) -> &str {
        self.element().tag()
    }

    fn attrs(&self) -> &Attributes {
        self.element().attrs()
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        self.element_mut().attrs_mut()
    }

    fn text(&self) -> Option<&str> {
        self.element().text()
    }

    fn binding_state(&self) -> BindingState {
        self.element().binding_state()
    }
}
