//! Whole-document entry point.

use std::fmt;

use crate::config::Config;
use crate::error::{Result, XccdfError};
use crate::models::{Benchmark, ElementDict, Tailoring, XccdfNode};
use crate::xml::get_tag_name;

/// A parsed XCCDF document, dispatched on its root element.
#[derive(Debug, Clone)]
pub enum Document {
    Benchmark(Benchmark),
    Tailoring(Tailoring),
}

impl Document {
    /// Root identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Benchmark(benchmark) => benchmark.id(),
            Self::Tailoring(tailoring) => tailoring.id(),
        }
    }

    #[must_use]
    pub fn as_dict(&self) -> ElementDict {
        match self {
            Self::Benchmark(benchmark) => benchmark.as_dict(),
            Self::Tailoring(tailoring) => tailoring.as_dict(),
        }
    }

    /// Export the root and render the document as indented XML.
    pub fn to_xml_string(&mut self) -> Result<String> {
        match self {
            Self::Benchmark(benchmark) => benchmark.to_xml_string(),
            Self::Tailoring(tailoring) => tailoring.to_xml_string(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Benchmark(benchmark) => fmt::Display::fmt(benchmark, f),
            Self::Tailoring(tailoring) => fmt::Display::fmt(tailoring, f),
        }
    }
}

/// Parse an XCCDF document with the shared configuration.
///
/// # Examples
/// ```
/// use xccdf::{parse_document, Document};
///
/// let xml = r#"<Tailoring xmlns="http://checklists.nist.gov/xccdf/1.1"
///     id="xccdf_org_tailoring_demo">
///   <version time="2015-01-20T10:11:12">1</version>
///   <Profile id="p"><title>Demo</title></Profile>
/// </Tailoring>"#;
/// let document = parse_document(xml).unwrap();
/// assert!(matches!(document, Document::Tailoring(_)));
/// assert_eq!(document.id(), "xccdf_org_tailoring_demo");
/// ```
pub fn parse_document(text: &str) -> Result<Document> {
    parse_document_with(text, Config::shared())
}

/// Parse an XCCDF document with an explicit configuration.
///
/// # Errors
/// Returns `UnknownRoot` when the root is neither `<Benchmark>` nor
/// `<Tailoring>`, or any error raised while importing the tree.
pub fn parse_document_with(text: &str, config: &Config) -> Result<Document> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    let tag = get_tag_name(root);
    tracing::debug!(root = tag, len = text.len(), "parsing document");

    if tag == Benchmark::TAG {
        Ok(Document::Benchmark(Benchmark::from_xml_with(root, config)?))
    } else if tag == Tailoring::TAG {
        Ok(Document::Tailoring(Tailoring::from_xml_with(root, config)?))
    } else {
        Err(XccdfError::UnknownRoot(tag.to_string()))
    }
}
