//! XML plumbing: name resolution, the owned element tree bound to each
//! node, source navigation helpers and the text writer.

mod qname;
mod tree;
mod utils;
mod writer;

pub use qname::{clark_name, namespace_and_tag, node_clark_name};
pub use tree::{Attribute, Namespace, XmlElement, XmlText};
pub use utils::{element_children, get_tag_name, inner_markup};
pub use writer::{to_xml_string, write_xml};
