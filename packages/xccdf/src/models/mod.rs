//! Typed XCCDF nodes.
//!
//! Every node wraps an [`Element`]: a tag, an attribute bag, optional text
//! and a lazily created binding to an owned XML tree. Leaves validate their
//! own content; composites classify their children through the content
//! models in [`crate::registry`].

mod benchmark;
mod child;
mod composite;
mod dict;
mod element;
mod group;
mod html;
mod ident;
mod node;
mod platform;
mod profile;
mod rule;
mod select;
mod status;
mod tailoring;
mod text;
mod title;
mod version;

pub use benchmark::Benchmark;
pub use child::Child;
pub use composite::{ItemAttributes, SelectableAttributes};
pub use dict::{ChildDicts, ElementDict};
pub use element::{Attributes, BindingState, Element};
pub use group::Group;
pub use html::{decode_markup, encode_markup, HtmlElement};
pub use ident::{Ident, IdentParams};
pub use node::XccdfNode;
pub use platform::Platform;
pub use profile::Profile;
pub use rule::Rule;
pub use select::{Select, SelectParams};
pub use status::Status;
pub use tailoring::Tailoring;
pub use text::{Description, FrontMatter, Notice, RearMatter};
pub use title::Title;
pub use version::{TailoringVersion, TailoringVersionParams, Version};
