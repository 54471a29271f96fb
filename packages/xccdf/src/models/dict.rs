//! In-memory export for non-XML consumers.
//!
//! [`ElementDict`] mirrors a node as an ordered mapping: the generic fields
//! first, then the children of a composite grouped by kind. It is what
//! semantic equality compares, and it renders to JSON or YAML.

use serde::Serialize;

use super::child::Child;
use super::element::Attributes;
use crate::error::Result;

/// Ordered, serializable view of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementDict {
    pub namespace: Option<String>,
    pub name: String,
    pub text: Option<String>,
    pub attrs: Attributes,
    /// Decoded markup of a mixed-content element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub children: ChildDicts,
}

/// Children of a composite, grouped by kind.
///
/// Empty groups are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChildDicts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Box<ElementDict>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub front_matters: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rear_matters: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selects: Vec<ElementDict>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub idents: Vec<ElementDict>,
}

impl ChildDicts {
    /// Group the dictionaries of `children` by kind, keeping their order
    /// within each group.
    #[must_use]
    pub fn collect(children: &[Child]) -> Self {
        let mut dicts = Self::default();
        for child in children {
            let dict = child.as_dict();
            match child {
                Child::Version(_) | Child::TailoringVersion(_) => {
                    dicts.version = Some(Box::new(dict));
                }
                Child::Status(_) => dicts.statuses.push(dict),
                Child::Title(_) => dicts.titles.push(dict),
                Child::Description(_) => dicts.descriptions.push(dict),
                Child::Notice(_) => dicts.notices.push(dict),
                Child::FrontMatter(_) => dicts.front_matters.push(dict),
                Child::RearMatter(_) => dicts.rear_matters.push(dict),
                Child::Platform(_) => dicts.platforms.push(dict),
                Child::Profile(_) => dicts.profiles.push(dict),
                Child::Group(_) => dicts.groups.push(dict),
                Child::Rule(_) => dicts.rules.push(dict),
                Child::Select(_) => dicts.selects.push(dict),
                Child::Ident(_) => dicts.idents.push(dict),
            }
        }
        dicts
    }
}

impl ElementDict {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
