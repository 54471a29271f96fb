//! Mixed-content leaves: `<description>`, `<front-matter>`,
//! `<rear-matter>` and `<notice>`.

use std::fmt;

use roxmltree::Node;

use super::dict::ElementDict;
use super::element::Element;
use super::html::HtmlElement;
use super::node::XccdfNode;
use crate::config::Config;
use crate::error::{Result, XccdfError};
use crate::xml::XmlElement;

macro_rules! mixed_content_leaf {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: HtmlElement,
        }

        impl $name {
            /// Scratch element with empty content.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    inner: HtmlElement::new($tag, Config::shared()),
                }
            }

            #[must_use]
            pub fn html_content(&self) -> &str {
                self.inner.html_content()
            }

            pub fn set_html_content(&mut self, content: impl Into<String>) {
                self.inner.set_html_content(content);
            }

            #[must_use]
            pub fn lang(&self) -> Option<&str> {
                self.attrs().get("lang")
            }

            pub fn set_lang(&mut self, lang: &str) {
                self.attrs_mut().set("lang", lang);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.html_content())?;
                if let Some(lang) = self.lang() {
                    write!(f, " ({lang})")?;
                }
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl XccdfNode for $name {
            const TAG: &'static str = $tag;
            type Params = ();

            fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
                Ok(Self {
                    inner: HtmlElement::from_xml_with(node, config)?,
                })
            }

            fn from_params_with(_params: (), config: &Config) -> Result<Self> {
                Ok(Self {
                    inner: HtmlElement::new($tag, config),
                })
            }

            fn element(&self) -> &Element {
                self.inner.element()
            }

            fn element_mut(&mut self) -> &mut Element {
                self.inner.element_mut()
            }

            fn export(&mut self) -> &XmlElement {
                self.inner.export()
            }

            fn as_dict(&self) -> ElementDict {
                self.inner.as_dict()
            }
        }
    };
}

mixed_content_leaf!(
    /// `<description>` of a benchmark item.
    Description,
    "description"
);

mixed_content_leaf!(
    /// `<front-matter>`: introductory text of a Benchmark.
    FrontMatter,
    "front-matter"
);

mixed_content_leaf!(
    /// `<rear-matter>`: concluding text of a Benchmark.
    RearMatter,
    "rear-matter"
);

/// `<notice>`: legal notice with a mandatory `id`.
#[derive(Debug, Clone)]
pub struct Notice {
    inner: HtmlElement,
}

impl Notice {
    #[must_use]
    pub fn id(&self) -> &str {
        self.attrs().get("id").unwrap_or_default()
    }

    #[must_use]
    pub fn html_content(&self) -> &str {
        self.inner.html_content()
    }

    pub fn set_html_content(&mut self, content: impl Into<String>) {
        self.inner.set_html_content(content);
    }

    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.attrs().get("lang")
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.attrs_mut().set("lang", lang);
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice {}", self.id())?;
        if let Some(lang) = self.lang() {
            write!(f, " ({lang})")?;
        }
        Ok(())
    }
}

impl XccdfNode for Notice {
    const TAG: &'static str = "notice";
    type Params = String;

    fn from_xml_with(node: Node<'_, '_>, config: &Config) -> Result<Self> {
        let inner = HtmlElement::from_xml_with(node, config)?;
        inner.element().require("id")?;
        Ok(Self { inner })
    }

    fn from_params_with(id: String, config: &Config) -> Result<Self> {
        if id.is_empty() {
            return Err(XccdfError::required(Self::TAG, "id"));
        }
        let mut inner = HtmlElement::new(Self::TAG, config);
        inner.element_mut().attrs_mut().set("id", id);
        Ok(Self { inner })
    }

    fn element(&self) -> &Element {
        self.inner.element()
    }

    fn element_mut(&mut self) -> &mut Element {
        self.inner.element_mut()
    }

    fn export(&mut self) -> &XmlElement {
        self.inner.export()
    }

    fn as_dict(&self) -> ElementDict {
        self.inner.as_dict()
    }
}
