//! Message document: the nested string tree holding one locale's text.

use serde::Deserialize;
use std::collections::HashMap;

/// A node in a message document: either a translatable string leaf or a
/// subtree of further segments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageNode {
    /// A translatable string.
    Text(String),
    /// A nested group of messages.
    Tree(HashMap<String, MessageNode>),
}

/// One locale's complete message bundle, loaded wholesale and replaced
/// atomically on locale change.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MessageDocument {
    root: HashMap<String, MessageNode>,
}

impl MessageDocument {
    /// Parse a document from JSON content.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Resolve a dot-delimited key (e.g. `"home.features.jobs.name"`) to
    /// the string leaf it addresses.
    ///
    /// Returns `None` for empty keys, missing segments, descent through a
    /// leaf, or a path ending on a subtree. Never panics.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }

        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                MessageNode::Tree(children) => node = children.get(segment)?,
                MessageNode::Text(_) => return None,
            }
        }

        match node {
            MessageNode::Text(text) => Some(text),
            MessageNode::Tree(_) => None,
        }
    }

    /// All dot-delimited leaf keys in the document, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, String::new(), &mut keys);
        keys.sort();
        keys
    }

    /// The number of string leaves in the document.
    pub fn count(&self) -> usize {
        self.keys().len()
    }
}

fn collect_keys(tree: &HashMap<String, MessageNode>, prefix: String, out: &mut Vec<String>) {
    for (segment, node) in tree {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };
        match node {
            MessageNode::Text(_) => out.push(path),
            MessageNode::Tree(children) => collect_keys(children, path, out),
        }
    }
}
