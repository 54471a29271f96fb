//! `<ident>` element.

use std::fmt;

use roxmltree::Node;

use super::element::Element;
use super::node::XccdfNode;
use crate::config::{Config, XCCDF_NAMESPACE};
use crate::error::{Result, XccdfError};

/// Scratch parameters of an [`Ident`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentParams {
    /// Identifier code, such as `CCE-27072-8`.
    pub ident: String,
    /// URI of the identification system.
    pub system: String,
}

/// Long-term identifier of a Rule in an external system.
#[derive(Debug, Clone)]
pub struct Ident {
    element: Element,
}

impl Ident {
    #[must_use]
    pub fn ident(&self) -> &str {
        self.text().unwrap_or_default()
    }

    #[must_use]
    pub fn system(&self) -> &str {
        self.attrs().get("system").unwrap_or_default()
    }

    fn validate(element: &Element) -> Result<()> {
        if element.text().unwrap_or_default().is_empty() {
            return Err(XccdfError::required(Self::TAG, "ident"));
        }
        element.require("system")?;
        Ok(())
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ident {}", self.ident())
    }
}

impl XccdfNode for Ident {
    const TAG: &'static str = "ident";
    type Params = IdentParams;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let element = Element::from_xml(node)?;
        Self::validate(&element)?;
        element.check_coercions(config)?;
        Ok(Self { element })
    }

    fn from_params_with(params: IdentParams, _config: &Config) -> Result<Self> {
        let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), Self::TAG);
        element.set_text(Some(params.ident));
        element.attrs_mut().set("system", params.system);
        Self::validate(&element)?;
        Ok(Self { element })
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}
