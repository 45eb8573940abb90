use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Serialize, Deserialize};

/// Attribute-bearing element an item persists to
///
/// One node per item: a flat map of attribute name to decimal integer text,
/// mirroring the `<item id=".." count="..">` elements of the map and player
/// files. Nodes embed directly in the JSON save files.
///
/// Reads are deliberately lenient: a missing or malformed attribute parses
/// as 0 instead of failing, so a damaged save degrades to zeroed fields
/// rather than aborting the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemNode {
    attributes: BTreeMap<String, String>,
}

impl ItemNode {
    /// Creates a node with no attributes
    pub fn new() -> Self {
        ItemNode::default()
    }

    /// Sets an attribute, overwriting any previous value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Display) {
        self.attributes.insert(name.into(), value.to_string());
    }

    /// Raw attribute text, or None if absent
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns true if the attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute parsed as an integer; missing or malformed values read as 0
    pub fn int_attr(&self, name: &str) -> i64 {
        self.attr(name)
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Number of attributes on the node
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the node has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
