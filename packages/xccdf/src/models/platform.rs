//! `<platform>` element.

use std::fmt;

use roxmltree::Node;

use super::element::Element;
use super::node::XccdfNode;
use crate::config::{Config, XCCDF_NAMESPACE};
use crate::error::{Result, XccdfError};

/// Applicable platform, referenced by CPE name or CPE language expression.
#[derive(Debug, Clone)]
pub struct Platform {
    element: Element,
}

impl Platform {
    #[must_use]
    pub fn idref(&self) -> &str {
        self.attrs().get("idref").unwrap_or_default()
    }

    pub fn set_idref(&mut self, idref: &str) {
        self.attrs_mut().set("idref", idref);
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "platform {}", self.idref())
    }
}

impl XccdfNode for Platform {
    const TAG: &'static str = "platform";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let element = Element::from_xml(node)?;
        element.require("idref")?;
        element.check_coercions(config)?;
        Ok(Self { element })
    }

    fn from_params_with(idref: String, _config: &Config) -> Result<Self> {
        if idref.is_empty() {
            return Err(XccdfError::required(Self::TAG, "idref"));
        }
        let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), Self::TAG);
        element.attrs_mut().set("idref", idref);
        Ok(Self { element })
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}
