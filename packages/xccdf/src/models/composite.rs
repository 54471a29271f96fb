//! Building blocks shared by the composite nodes.

use roxmltree::Node;

use super::child::Child;
use super::dict::{ChildDicts, ElementDict};
use super::element::Element;
use super::node::XccdfNode;
use crate::config::{Config, XCCDF_NAMESPACE};
use crate::error::{Result, XccdfError};
use crate::registry::{ChildKind, Classifier, ContentModel};
use crate::xml::{get_tag_name, XmlElement};

/// Import a container: element, mandatory `id`, attribute coercions, then
/// its classified children.
pub(crate) fn import_container(
    node: Node<'_, '_>,
    config: &Config,
    model: &ContentModel,
) -> Result<(Element, Vec<Child>)> {
    import_container_checked(node, config, model, |_| Ok(()))
}

/// Like [`import_container`], running `check` on the container's own
/// attributes before any child is classified.
pub(crate) fn import_container_checked(
    node: Node<'_, '_>,
    config: &Config,
    model: &ContentModel,
    check: impl FnOnce(&Element) -> Result<()>,
) -> Result<(Element, Vec<Child>)> {
    let mut element = Element::from_xml(node)?;
    element.set_text(None);
    element.require("id")?;
    check(&element)?;
    element.check_coercions(config)?;

    let children = Classifier::new(model).classify(node, config)?;
    tracing::debug!(
        tag = %element.tag(),
        id = element.attrs().get("id").unwrap_or_default(),
        children = children.len(),
        "imported container"
    );
    Ok((element, children))
}

/// Scratch container carrying only its identifier.
pub(crate) fn scratch_container(tag: &str, id: String) -> Result<Element> {
    if id.is_empty() {
        return Err(XccdfError::required(tag, "id"));
    }
    let mut element = Element::with_namespace(Some(XCCDF_NAMESPACE), tag);
    element.attrs_mut().set("id", id);
    Ok(element)
}

/// Put `children` in the canonical order of `model`. The sort is stable,
/// so interleaved Groups and Rules keep their relative order and kinds the
/// model does not know go last.
pub(crate) fn sort_children(children: &mut [Child], model: &ContentModel) {
    children.sort_by_key(|c| {
        model
            .lookup(c.kind().tag())
            .map_or(usize::MAX, |spec| spec.slot)
    });
}

/// Sort and export every child, then refresh the container's binding and
/// attach copies of the children's bindings.
pub(crate) fn export_container<'a>(
    element: &'a mut Element,
    children: &mut [Child],
    model: &ContentModel,
) -> &'a XmlElement {
    sort_children(children, model);
    let exported: Vec<XmlElement> = children.iter_mut().map(|c| c.export().clone()).collect();
    let binding = element.refresh();
    binding.text = None;
    binding.children = exported;
    binding
}

/// Element dictionary with children grouped by kind.
pub(crate) fn container_dict(element: &Element, children: &[Child]) -> ElementDict {
    ElementDict {
        children: ChildDicts::collect(children),
        ..element.as_dict()
    }
}

/// Parse `text` and import its root as `T`.
///
/// The root's local name must be `T::TAG`, otherwise the document is
/// rejected with [`XccdfError::UnknownRoot`].
pub(crate) fn parse_root<T: XccdfNode>(text: &str, config: &Config) -> Result<T> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    let tag = get_tag_name(root);
    if tag != T::TAG {
        return Err(XccdfError::UnknownRoot(tag.to_string()));
    }
    T::from_xml_with(root, config)
}

/// Children of one kind.
pub(crate) fn children_of(children: &[Child], kind: ChildKind) -> impl Iterator<Item = &Child> {
    children.iter().filter(move |c| c.kind() == kind)
}

/// Typed accessors for the attributes Groups, Rules and Profiles share.
pub trait ItemAttributes: XccdfNode {
    /// Whether the item only serves as a base for extension.
    fn is_abstract(&self) -> Option<bool> {
        self.attrs().get_bool("abstract")
    }

    fn set_abstract(&mut self, value: bool) {
        self.attrs_mut().set_bool("abstract", value);
    }

    /// Whether tailoring may modify the item.
    fn prohibit_changes(&self) -> Option<bool> {
        self.attrs().get_bool("prohibitChanges")
    }

    fn set_prohibit_changes(&mut self, value: bool) {
        self.attrs_mut().set_bool("prohibitChanges", value);
    }
}

/// Typed accessors for selectable items, Groups and Rules.
pub trait SelectableAttributes: ItemAttributes {
    fn hidden(&self) -> Option<bool> {
        self.attrs().get_bool("hidden")
    }

    fn set_hidden(&mut self, value: bool) {
        self.attrs_mut().set_bool("hidden", value);
    }

    /// Default selection state.
    fn selected(&self) -> Option<bool> {
        self.attrs().get_bool("selected")
    }

    fn set_selected(&mut self, value: bool) {
        self.attrs_mut().set_bool("selected", value);
    }

    /// Relative scoring weight.
    fn weight(&self) -> Option<f64> {
        self.attrs().get_f64("weight")
    }

    fn set_weight(&mut self, value: f64) {
        self.attrs_mut().set_f64("weight", value);
    }
}
