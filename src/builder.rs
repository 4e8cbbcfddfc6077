//! Fluent builder for [`Node`] values.

use crate::model::{Node, PropertyMap, Value};
use crate::{Error, Result};

/// A fluent, resettable accumulator that produces a validated [`Node`].
///
/// Mutators chain by value; [`NodeBuilder::build`] borrows, so one builder
/// can produce several nodes from the same accumulated state. State
/// survives a build — call [`NodeBuilder::reset`] to start over.
///
/// ```rust
/// use graphlet::NodeBuilder;
///
/// # fn main() -> graphlet::Result<()> {
/// let node = NodeBuilder::new()
///     .with_id("n42")
///     .add_label("Person")
///     .add_property("name", "Alice")
///     .build()?;
/// assert!(node.has_label("Person"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeBuilder {
    id: Option<String>,
    labels: Vec<String>,
    properties: PropertyMap,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from an existing node's current values. Labels and
    /// properties are copied, so the builder stays independent of the
    /// source.
    pub fn from_node(node: &Node) -> Self {
        Self {
            id: Some(node.id.clone()),
            labels: node.labels.clone(),
            properties: node.properties.clone(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a label unless already present.
    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
        self
    }

    /// Add each label in turn, keeping first-seen order.
    pub fn add_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for label in labels {
            self = self.add_label(label);
        }
        self
    }

    /// Replace the whole label sequence verbatim. No dedup pass — the
    /// caller owns the invariant here.
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Upsert a single property.
    pub fn add_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Shallow-merge into the accumulated properties; incoming keys win.
    pub fn add_properties(mut self, properties: PropertyMap) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Replace the whole properties mapping.
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    /// Construct a node from the accumulated state.
    ///
    /// Fails when no id has been set. The builder keeps its state.
    pub fn build(&self) -> Result<Node> {
        let id = self
            .id
            .as_ref()
            .ok_or_else(|| Error::Validation("Node ID is required".into()))?;

        Ok(Node::new(id.as_str())
            .with_labels(self.labels.iter().cloned())
            .with_properties(self.properties.clone()))
    }

    /// Clear id, labels, and properties.
    pub fn reset(mut self) -> Self {
        self.id = None;
        self.labels.clear();
        self.properties.clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::props;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_requires_id() {
        let err = NodeBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Node ID is required"));
    }

    #[test]
    fn test_build_with_only_id() {
        let node = NodeBuilder::new().with_id("n7").build().unwrap();
        assert_eq!(node.id, "n7");
        assert!(node.labels.is_empty());
        assert!(node.properties.is_empty());
    }

    #[test]
    fn test_add_label_dedups_add_labels_keeps_order() {
        let node = NodeBuilder::new()
            .with_id("n0")
            .add_labels(["Person", "Admin", "Person"])
            .build()
            .unwrap();
        assert_eq!(node.labels, ["Person", "Admin"]);
    }

    #[test]
    fn test_with_labels_replaces_verbatim() {
        let node = NodeBuilder::new()
            .with_id("n0")
            .add_label("Person")
            .with_labels(["A", "A", "B"])
            .build()
            .unwrap();
        assert_eq!(node.labels, ["A", "A", "B"]);
    }

    #[test]
    fn test_property_merge_and_replace() {
        let builder = NodeBuilder::new()
            .with_id("n0")
            .add_property("a", 1i64)
            .add_properties(props([("a", 2i64), ("b", 3i64)]));
        let node = builder.build().unwrap();
        assert_eq!(node.get_property("a"), Some(&Value::Int(2)));
        assert_eq!(node.get_property("b"), Some(&Value::Int(3)));

        let node = NodeBuilder::from_node(&node)
            .with_properties(props([("c", 4i64)]))
            .build()
            .unwrap();
        assert_eq!(node.get_property("a"), None);
        assert_eq!(node.get_property("c"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_build_does_not_reset() {
        let builder = NodeBuilder::new().with_id("n0").add_label("Person");
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);

        let rebuilt = builder.reset().with_id("n1").build().unwrap();
        assert_eq!(rebuilt.id, "n1");
        assert!(rebuilt.labels.is_empty());
    }

    #[test]
    fn test_from_node_is_independent_of_source() {
        let source = Node::new("n0")
            .with_labels(["Person"])
            .with_properties(props([("name", "Alice")]));
        let copy = NodeBuilder::from_node(&source)
            .add_label("Admin")
            .add_property("name", "Mallory")
            .build()
            .unwrap();

        assert_eq!(source.labels, ["Person"]);
        assert_eq!(source.get_property("name"), Some(&Value::from("Alice")));
        assert_eq!(copy.labels, ["Person", "Admin"]);
        assert_eq!(copy.get_property("name"), Some(&Value::from("Mallory")));
    }
}
