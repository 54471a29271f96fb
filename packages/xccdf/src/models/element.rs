//! Generic element binding.
//!
//! An [`Element`] holds what every XCCDF node shares: namespace, local tag,
//! an ordered attribute bag, optional text and the owned XML binding. The
//! typed nodes wrap it and add their own invariants.

use std::fmt;

use roxmltree::Node;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::dict::ElementDict;
use crate::config::{implied_attribute_namespace, parse_boolean, Config, BOOLEAN_CHOICES};
use crate::error::{Result, XccdfError};
use crate::xml::{namespace_and_tag, node_clark_name, to_xml_string, Attribute, XmlElement, XmlText};

/// Ordered attribute bag keyed by local name.
///
/// Each entry remembers the namespace it was read with so export can
/// requalify it. Equality ignores order and namespaces.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<Attribute>) -> Self {
        Self { entries }
    }

    /// Value of an attribute by local name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|a| a.name == name)
    }

    /// Set an attribute by local name.
    ///
    /// An existing entry keeps its position and namespace. A new entry gets
    /// the namespace implied by its name (`xml:lang` and friends) and goes
    /// to the end.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Attribute::new(
                implied_attribute_namespace(name),
                name,
                value,
            )),
        }
    }

    /// Set an attribute with an explicit namespace.
    pub fn set_qualified(&mut self, namespace: Option<&str>, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.name == name) {
            Some(existing) => {
                existing.namespace = namespace.map(String::from);
                existing.value = value;
            }
            None => self.entries.push(Attribute::new(namespace, name, value)),
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|a| a.name == name)?;
        Some(self.entries.remove(index).value)
    }

    /// Parse an attribute as an XCCDF boolean.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(parse_boolean)
    }

    /// Store a boolean in canonical form.
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set(name, if value { "true" } else { "false" });
    }

    /// Parse an attribute as a decimal number.
    #[must_use]
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.trim().parse().ok())
    }

    /// Store a number in canonical form.
    pub fn set_f64(&mut self, name: &str, value: f64) {
        self.set(name, value.to_string());
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
    }

    /// Entries with their namespaces.
    #[must_use]
    pub fn entries(&self) -> &[Attribute] {
        &self.entries
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|a| other.get(&a.name) == Some(a.value.as_str()))
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for attr in &self.entries {
            map.serialize_entry(&attr.name, &attr.value)?;
        }
        map.end()
    }
}

/// Whether a node currently owns an XML binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// Built from scratch and not exported yet.
    Detached,
    /// Imported, or exported at least once. The binding may be stale
    /// relative to the in-memory fields until the next export.
    Bound,
}

/// Generic binding of one XML element.
#[derive(Debug, Clone)]
pub struct Element {
    namespace: Option<String>,
    tag: String,
    attrs: Attributes,
    text: Option<String>,
    binding: Option<XmlElement>,
}

impl Element {
    /// Create an unqualified element from scratch.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_namespace(None, tag)
    }

    /// Create an element from scratch in the given namespace.
    pub fn with_namespace(namespace: Option<&str>, tag: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(String::from),
            tag: tag.into(),
            attrs: Attributes::new(),
            text: None,
            binding: None,
        }
    }

    /// Import a parsed element.
    ///
    /// Namespace and tag go through the qualified name resolver. Every
    /// attribute is reflected into the bag and the element's leading text is
    /// captured. The source document is left untouched.
    pub fn from_xml(node: Node<'_, '_>) -> Result<Self> {
        let name = node_clark_name(node);
        let (namespace, Some(tag)) = namespace_and_tag(name.as_str()) else {
            return Err(XccdfError::MalformedName(name));
        };

        let binding = XmlElement::shell_from(node);
        Ok(Self {
            namespace: namespace.map(String::from),
            tag: tag.to_string(),
            attrs: Attributes::from_entries(binding.attributes.clone()),
            text: node.text().map(String::from),
            binding: Some(binding),
        })
    }

    /// Import `source` when given, otherwise create a scratch element named
    /// `tag`.
    ///
    /// # Examples
    /// ```
    /// use xccdf::models::Element;
    ///
    /// let element = Element::construct(None, Some("title")).unwrap();
    /// assert_eq!(element.tag(), "title");
    /// assert!(Element::construct(None, None).is_err());
    /// ```
    pub fn construct(source: Option<Node<'_, '_>>, tag: Option<&str>) -> Result<Self> {
        match (source, tag) {
            (Some(node), _) => Self::from_xml(node),
            (None, Some(tag)) => Ok(Self::new(tag)),
            (None, None) => Err(XccdfError::missing_input("element")),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Current binding state.
    #[must_use]
    pub fn binding_state(&self) -> BindingState {
        if self.binding.is_some() {
            BindingState::Bound
        } else {
            BindingState::Detached
        }
    }

    /// The owned binding, if any. May be stale until [`Element::export`].
    #[must_use]
    pub fn binding(&self) -> Option<&XmlElement> {
        self.binding.as_ref()
    }

    /// Bring the binding in line with the in-memory fields.
    ///
    /// Creates the binding with the fixed namespace map when detached,
    /// drops previously attached children and rewrites every attribute from
    /// the bag.
    pub(crate) fn refresh(&mut self) -> &mut XmlElement {
        let binding = self.binding.get_or_insert_with(|| {
            tracing::debug!(tag = %self.tag, "creating binding");
            XmlElement::fresh(self.namespace.as_deref(), self.tag.as_str())
        });

        binding.namespace.clone_from(&self.namespace);
        binding.name.clone_from(&self.tag);
        binding.children.clear();
        binding.attributes = self.attrs.entries().to_vec();
        binding.text = self.text.clone().map(XmlText::Plain);
        binding
    }

    /// Commit in-memory state to the binding and return it.
    pub fn export(&mut self) -> &XmlElement {
        self.refresh()
    }

    /// Export and render as indented XML text.
    pub fn to_xml_string(&mut self) -> Result<String> {
        to_xml_string(self.export())
    }

    /// In-memory export of the generic fields.
    #[must_use]
    pub fn as_dict(&self) -> ElementDict {
        ElementDict {
            namespace: self.namespace.clone(),
            name: self.tag.clone(),
            text: self.text.clone(),
            attrs: self.attrs.clone(),
            ..ElementDict::default()
        }
    }

    /// Compare namespace, tag, attribute set and text.
    #[must_use]
    pub fn semantic_eq(&self, other: &Self) -> bool {
        self.as_dict() == other.as_dict()
    }

    /// Non-empty value of a mandatory attribute.
    pub(crate) fn require(&self, attribute: &str) -> Result<&str> {
        self.attrs
            .get(attribute)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| XccdfError::required(self.tag.as_str(), attribute))
    }

    /// Check an attribute, when present, against a closed set.
    pub(crate) fn check_choice(&self, attribute: &str, choices: &[&str]) -> Result<()> {
        match self.attrs.get(attribute) {
            Some(value) if !choices.contains(&value) => Err(XccdfError::InvalidEnumeratedValue {
                element: self.tag.clone(),
                attribute: attribute.to_string(),
                value: value.to_string(),
                choices: choices.iter().map(|c| (*c).to_string()).collect(),
            }),
            _ => Ok(()),
        }
    }

    /// Check the configured boolean and numeric attribute coercions.
    pub(crate) fn check_coercions(&self, config: &Config) -> Result<()> {
        for (name, value) in self.attrs.iter() {
            if config.is_boolean_attribute(name) {
                self.check_choice(name, BOOLEAN_CHOICES)?;
            } else if config.is_numeric_attribute(name) && value.trim().parse::<f64>().is_err() {
                return Err(XccdfError::InvalidValue {
                    element: self.tag.clone(),
                    attribute: name.to_string(),
                    value: value.to_string(),
                    reason: "expected a decimal number".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Renders as `<namespace>tag`, or the bare tag without a namespace.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "<{namespace}>")?;
        }
        f.write_str(&self.tag)
    }
}
