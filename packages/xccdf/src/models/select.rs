//! `<select>` element.

use std::fmt;

use roxmltree::Node;

use super::element::Element;
use super::node::XccdfNode;
use crate::config::{parse_boolean, Config, BOOLEAN_CHOICES, XCCDF_NAMESPACE};
use crate::error::{Result, XccdfError};

/// Scratch parameters of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectParams {
    pub idref: String,
    pub selected: bool,
}

/// Profile selection of a Rule or Group.
#[derive(Debug, Clone)]
pub struct Select {
    element: Element,
}

impl Select {
    #[must_use]
    pub fn idref(&self) -> &str {
        self.attrs().get("idref").unwrap_or_default()
    }

    /// Whether the referenced item is selected. A missing flag reads as
    /// not selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.attrs()
            .get("selected")
            .and_then(parse_boolean)
            .unwrap_or(false)
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.attrs_mut().set_bool("selected", selected);
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "select {} {}", self.idref(), self.is_selected())
    }
}

impl XccdfNode for Select {
    const TAG: &'static str = "select";
    type Params = SelectParams;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let element = Element::from_xml(node)?;
        element.require("idref")?;
        element.check_choice("selected", BOOLEAN_CHOICES)?;
        element.check_coercions(config)?;
        Ok(Self { element })
    }

    fn from_params_with(params: SelectParams, _config: &Config) -> Result<Self> {
        if params.idref.is_empty() {
            return Err(XccdfError::required(Self::TAG, "idref"));
        }
        let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), Self::TAG);
        element.attrs_mut().set("idref", params.idref);
        element.attrs_mut().set_bool("selected", params.selected);
        Ok(Self { element })
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}
