//! Closed set of nodes a container can hold.

use std::fmt;

use roxmltree::Node;

use super::dict::ElementDict;
use super::group::Group;
use super::ident::Ident;
use super::node::XccdfNode;
use super::platform::Platform;
use super::profile::Profile;
use super::rule::Rule;
use super::select::Select;
use super::status::Status;
use super::text::{Description, FrontMatter, Notice, RearMatter};
use super::title::Title;
use super::version::{TailoringVersion, Version};
use crate::config::Config;
use crate::error::Result;
use crate::registry::ChildKind;
use crate::xml::XmlElement;

/// A typed child of a composite node.
#[derive(Debug, Clone)]
pub enum Child {
    Status(Status),
    Version(Version),
    TailoringVersion(TailoringVersion),
    Title(Title),
    Description(Description),
    Notice(Notice),
    FrontMatter(FrontMatter),
    RearMatter(RearMatter),
    Platform(Platform),
    Profile(Profile),
    Group(Group),
    Rule(Rule),
    Select(Select),
    Ident(Ident),
}

/// Apply the same expression to whichever node a [`Child`] holds.
macro_rules! dispatch {
    ($child:expr, $node:ident => $body:expr) => {
        match $child {
            Child::Status($node) => $body,
            Child::Version($node) => $body,
            Child::TailoringVersion($node) => $body,
            Child::Title($node) => $body,
            Child::Description($node) => $body,
            Child::Notice($node) => $body,
            Child::FrontMatter($node) => $body,
            Child::RearMatter($node) => $body,
            Child::Platform($node) => $body,
            Child::Profile($node) => $body,
            Child::Group($node) => $body,
            Child::Rule($node) => $body,
            Child::Select($node) => $body,
            Child::Ident($node) => $body,
        }
    };
}

impl Child {
    /// Import a parsed element as the given kind.
    pub fn import(kind: ChildKind, node: Node<'_, '_>, config: &Config) -> Result<Self> {
        Ok(match kind {
            ChildKind::Status => Self::Status(Status::from_xml_with(node, config)?),
            ChildKind::Version => Self::Version(Version::from_xml_with(node, config)?),
            ChildKind::TailoringVersion => {
                Self::TailoringVersion(TailoringVersion::from_xml_with(node, config)?)
            }
            ChildKind::Title => Self::Title(Title::from_xml_with(node, config)?),
            ChildKind::Description => Self::Description(Description::from_xml_with(node, config)?),
            ChildKind::Notice => Self::Notice(Notice::from_xml_with(node, config)?),
            ChildKind::FrontMatter => Self::FrontMatter(FrontMatter::from_xml_with(node, config)?),
            ChildKind::RearMatter => Self::RearMatter(RearMatter::from_xml_with(node, config)?),
            ChildKind::Platform => Self::Platform(Platform::from_xml_with(node, config)?),
            ChildKind::Profile => Self::Profile(Profile::from_xml_with(node, config)?),
            ChildKind::Group => Self::Group(Group::from_xml_with(node, config)?),
            ChildKind::Rule => Self::Rule(Rule::from_xml_with(node, config)?),
            ChildKind::Select => Self::Select(Select::from_xml_with(node, config)?),
            ChildKind::Ident => Self::Ident(Ident::from_xml_with(node, config)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChildKind {
        match self {
            Self::Status(_) => ChildKind::Status,
            Self::Version(_) => ChildKind::Version,
            Self::TailoringVersion(_) => ChildKind::TailoringVersion,
            Self::Title(_) => ChildKind::Title,
            Self::Description(_) => ChildKind::Description,
            Self::Notice(_) => ChildKind::Notice,
            Self::FrontMatter(_) => ChildKind::FrontMatter,
            Self::RearMatter(_) => ChildKind::RearMatter,
            Self::Platform(_) => ChildKind::Platform,
            Self::Profile(_) => ChildKind::Profile,
            Self::Group(_) => ChildKind::Group,
            Self::Rule(_) => ChildKind::Rule,
            Self::Select(_) => ChildKind::Select,
            Self::Ident(_) => ChildKind::Ident,
        }
    }

    /// Refresh the child's binding and return it.
    pub fn export(&mut self) -> &XmlElement {
        dispatch!(self, node => node.export())
    }

    #[must_use]
    pub fn as_dict(&self) -> ElementDict {
        dispatch!(self, node => node.as_dict())
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        dispatch!(self, node => node.tag())
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, node => fmt::Display::fmt(node, f))
    }
}

macro_rules! impl_from_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Child {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Status,
    Version,
    TailoringVersion,
    Title,
    Description,
    Notice,
    FrontMatter,
    RearMatter,
    Platform,
    Profile,
    Group,
    Rule,
    Select,
    Ident,
);
