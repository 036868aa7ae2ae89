//! The parsed tag tree.

use std::collections::BTreeMap;

use serde::Serialize;

/// The value stored under a tag name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkupValue {
    /// Self-closing tag, or a tag with empty/whitespace-only content.
    Null,
    /// Content without nested tags, verbatim.
    Text(String),
    /// Content with nested tags.
    Node(MarkupNode),
}

impl MarkupValue {
    /// The literal text, if this is a leaf string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MarkupValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The nested node, if any.
    pub fn as_node(&self) -> Option<&MarkupNode> {
        match self {
            MarkupValue::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl From<&str> for MarkupValue {
    fn from(text: &str) -> Self {
        MarkupValue::Text(text.to_string())
    }
}

impl From<String> for MarkupValue {
    fn from(text: String) -> Self {
        MarkupValue::Text(text)
    }
}

impl From<MarkupNode> for MarkupValue {
    fn from(node: MarkupNode) -> Self {
        MarkupValue::Node(node)
    }
}

/// A mapping from case-sensitive tag name to [`MarkupValue`].
///
/// Inserting an existing name replaces the earlier value, so the last
/// occurrence in document order wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MarkupNode {
    entries: BTreeMap<String, MarkupValue>,
}

impl MarkupNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: MarkupValue) -> Option<MarkupValue> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&MarkupValue> {
        self.entries.get(name)
    }

    /// Leaf text stored under `name`; `None` when absent, null, or nested.
    pub fn leaf(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(MarkupValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<MarkupValue>> FromIterator<(K, V)> for MarkupNode {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = MarkupNode::new();
        for (name, value) in iter {
            node.insert(name, value.into());
        }
        node
    }
}
