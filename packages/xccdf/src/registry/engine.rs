//! Classification engine that builds a container's child list.

use std::collections::HashMap;

use roxmltree::Node;

use super::core::ContentModel;
use super::types::{ChildKind, Occurs};
use crate::config::Config;
use crate::error::{Result, XccdfError};
use crate::models::Child;
use crate::xml::{element_children, namespace_and_tag, node_clark_name};

/// Engine that classifies a container's children against its content model.
///
/// Unknown children are dropped. A repeated single-valued child fails the
/// moment it is seen; minimum bounds are checked once the scan is done.
pub struct Classifier<'m> {
    model: &'m ContentModel,
}

impl<'m> Classifier<'m> {
    /// Create a classifier for the given model.
    #[must_use]
    pub fn new(model: &'m ContentModel) -> Self {
        Self { model }
    }

    /// Get a reference to the underlying model.
    #[must_use]
    pub fn model(&self) -> &ContentModel {
        self.model
    }

    /// Import and classify the element children of `node`.
    ///
    /// # Returns
    /// Children in canonical order
    ///
    /// # Errors
    /// Returns `Cardinality` when a single-valued child repeats or a minimum
    /// rule is unmet, or any error raised while importing a child.
    pub fn classify(&self, node: Node<'_, '_>, config: &Config) -> Result<Vec<Child>> {
        let container = self.model.container();
        let mut slots: Vec<Vec<Child>> = (0..self.model.slot_count()).map(|_| Vec::new()).collect();
        let mut counts: HashMap<ChildKind, usize> = HashMap::new();

        for child in element_children(node) {
            let name = node_clark_name(child);
            let (_, Some(tag)) = namespace_and_tag(name.as_str()) else {
                tracing::debug!(container, name = %name, "dropping child with malformed name");
                continue;
            };

            let Some(entry) = self.model.lookup(tag) else {
                tracing::debug!(container, tag, "dropping unknown child element");
                continue;
            };

            let seen = counts.entry(entry.kind).or_insert(0);
            if entry.occurs == Occurs::AtMostOnce && *seen > 0 {
                return Err(XccdfError::cardinality(
                    container,
                    format!("{tag} element found more than once"),
                ));
            }
            *seen += 1;

            tracing::trace!(container, tag, slot = entry.slot, "classifying child");
            let imported = Child::import(entry.kind, child, config)?;
            if let Some(slot) = slots.get_mut(entry.slot) {
                slot.push(imported);
            }
        }

        for rule in self.model.minimums() {
            let present: usize = rule
                .kinds
                .iter()
                .map(|kind| counts.get(kind).copied().unwrap_or(0))
                .sum();
            if present == 0 {
                return Err(XccdfError::cardinality(container, rule.message.as_str()));
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_rule_model;
    use roxmltree::Document;

    #[test]
    fn test_classify_reorders_children() {
        let xml = r#"<Rule id="r">
            <ident system="urn:cce">CCE-1</ident>
            <title>T</title>
            <status>draft</status>
        </Rule>"#;
        let doc = Document::parse(xml).unwrap();
        let model = create_rule_model();
        let children = Classifier::new(&model)
            .classify(doc.root_element(), &Config::default())
            .unwrap();

        let kinds: Vec<_> = children.iter().map(Child::kind).collect();
        assert_eq!(
            kinds,
            vec![ChildKind::Status, ChildKind::Title, ChildKind::Ident]
        );
    }

    #[test]
    fn test_unknown_children_dropped() {
        let xml = r#"<Rule id="r"><check system="oval"/><rationale>why</rationale></Rule>"#;
        let doc = Document::parse(xml).unwrap();
        let model = create_rule_model();
        let children = Classifier::new(&model)
            .classify(doc.root_element(), &Config::default())
            .unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn test_duplicate_single_valued_child() {
        let xml = r#"<Rule id="r"><version>1</version><version>2</version></Rule>"#;
        let doc = Document::parse(xml).unwrap();
        let model = create_rule_model();
        let err = Classifier::new(&model)
            .classify(doc.root_element(), &Config::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "<Rule> cardinality violated: version element found more than once"
        );
    }

    #[test]
    fn test_child_errors_propagate() {
        let xml = r#"<Rule id="r"><status>approved</status></Rule>"#;
        let doc = Document::parse(xml).unwrap();
        let model = create_rule_model();
        let err = Classifier::new(&model)
            .classify(doc.root_element(), &Config::default())
            .unwrap_err();
        assert!(matches!(err, XccdfError::InvalidEnumeratedValue { .. }));
    }
}
