//! Types for the content model registry.

use std::fmt;

/// Kind of child element a container can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    Status,
    Version,
    /// `<version>` under a Tailoring, with mandatory `time`.
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
}

impl ChildKind {
    /// Local tag name the kind is written with.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Version | Self::TailoringVersion => "version",
            Self::Title => "title",
            Self::Description => "description",
            Self::Notice => "notice",
            Self::FrontMatter => "front-matter",
            Self::RearMatter => "rear-matter",
            Self::Platform => "platform",
            Self::Profile => "Profile",
            Self::Group => "Group",
            Self::Rule => "Rule",
            Self::Select => "select",
            Self::Ident => "ident",
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Occurrence bound of a child kind within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurs {
    /// At most one instance; a second one is a structural defect.
    AtMostOnce,
    /// Any number of instances.
    Many,
}

/// Registered child slot: which kind a tag maps to, how often it may occur
/// and where its instances go when the child list is reassembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub kind: ChildKind,
    pub occurs: Occurs,
    pub slot: usize,
}

/// Minimum bound checked after the scan: at least one child of any of
/// `kinds` must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumRule {
    pub kinds: Vec<ChildKind>,
    pub message: String,
}
