//! Qualified name resolution.
//!
//! Names are exchanged in Clark notation, `{uri}local`, the same form the
//! expanded names of the parser render to. A name without the braces carries
//! no namespace.

use roxmltree::Node;

/// Split a qualified name into `(namespace, local name)`.
///
/// Malformed input never fails: it resolves to `(None, None)` so a single
/// degenerate attribute cannot abort a whole document import. Absent input
/// (`None`) resolves the same way.
///
/// # Examples
/// ```
/// use xccdf::xml::namespace_and_tag;
///
/// assert_eq!(
///     namespace_and_tag("{http://checklists.nist.gov/xccdf/1.1}Benchmark"),
///     (Some("http://checklists.nist.gov/xccdf/1.1"), Some("Benchmark"))
/// );
/// assert_eq!(namespace_and_tag("id"), (None, Some("id")));
/// assert_eq!(namespace_and_tag("{broken"), (None, None));
/// assert_eq!(namespace_and_tag(None::<&str>), (None, None));
/// ```
pub fn namespace_and_tag<'a>(
    name: impl Into<Option<&'a str>>,
) -> (Option<&'a str>, Option<&'a str>) {
    let Some(name) = name.into() else {
        return (None, None);
    };

    match name.strip_prefix('{') {
        Some(rest) => match rest.split_once('}') {
            Some((_, tag)) if tag.is_empty() || tag.contains(['{', '}']) => (None, None),
            Some(("", tag)) => (None, Some(tag)),
            Some((uri, tag)) => (Some(uri), Some(tag)),
            None => (None, None),
        },
        None if name.is_empty() || name.contains(['{', '}']) => (None, None),
        None => (None, Some(name)),
    }
}

/// Render a namespace and local name in Clark notation.
///
/// # Examples
/// ```
/// use xccdf::xml::clark_name;
///
/// assert_eq!(clark_name(Some("urn:x"), "a"), "{urn:x}a");
/// assert_eq!(clark_name(None, "a"), "a");
/// ```
#[must_use]
pub fn clark_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(uri) => format!("{{{uri}}}{local}"),
        None => local.to_string(),
    }
}

/// Clark name of a parsed element.
#[must_use]
pub fn node_clark_name(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    clark_name(name.namespace(), name.name())
}
