//! Collapsible tree model for arbitrary JSON values.
//!
//! The tree is rebuilt from the value on every render. Expansion state lives
//! outside the value as a set of toggled node paths (JSON Pointers), so a node
//! is open when `depth < DEFAULT_EXPANDED_DEPTH` unless its path was toggled.
//!
//! Input is assumed acyclic, which always holds for decoded JSON; there is no
//! cycle detection.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::json_text::number_literal;
use crate::text::truncate_with_ellipsis;

/// Containers shallower than this start expanded.
pub const DEFAULT_EXPANDED_DEPTH: usize = 2;
/// Strings longer than this many characters are shortened for display.
pub const MAX_DISPLAY_STRING: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

impl ContainerKind {
    pub fn open(self) -> &'static str {
        match self {
            ContainerKind::Array => "[",
            ContainerKind::Object => "{",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            ContainerKind::Array => "]",
            ContainerKind::Object => "}",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            ContainerKind::Array => "items",
            ContainerKind::Object => "keys",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Null,
    Bool(bool),
    Number(String),
    /// `display` is what gets painted; the full string stays in the source value.
    Str { display: String, truncated: bool },
    /// `[]` or `{}`; nothing to toggle.
    Empty(ContainerKind),
    Container(ContainerNode),
}

impl TreeNode {
    /// Literal text for leaves, `None` for non-empty containers.
    pub fn literal(&self) -> Option<String> {
        match self {
            TreeNode::Null => Some("null".to_string()),
            TreeNode::Bool(value) => Some(value.to_string()),
            TreeNode::Number(text) => Some(text.clone()),
            TreeNode::Str { display, .. } => Some(format!("\"{display}\"")),
            TreeNode::Empty(kind) => Some(format!("{}{}", kind.open(), kind.close())),
            TreeNode::Container(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub kind: ContainerKind,
    pub path: String,
    pub depth: usize,
    pub len: usize,
    pub expanded: bool,
    /// Populated only when expanded.
    pub children: Vec<TreeEntry>,
}

impl ContainerNode {
    /// Count shown in place of the contents while collapsed, e.g. `3 items`.
    pub fn summary(&self) -> String {
        format!("{} {}", self.len, self.kind.noun())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    /// Object key; `None` for array elements.
    pub key: Option<String>,
    pub node: TreeNode,
}

/// Builds the display tree for `value`.
///
/// `toggled` holds the paths the user flipped away from their default state.
pub fn build_tree(value: &Value, toggled: &BTreeSet<String>) -> TreeNode {
    build_node(value, String::new(), 0, toggled)
}

/// Whether the container at `path`/`depth` is currently open.
pub fn is_expanded(path: &str, depth: usize, toggled: &BTreeSet<String>) -> bool {
    (depth < DEFAULT_EXPANDED_DEPTH) != toggled.contains(path)
}

fn build_node(value: &Value, path: String, depth: usize, toggled: &BTreeSet<String>) -> TreeNode {
    match value {
        Value::Null => TreeNode::Null,
        Value::Bool(b) => TreeNode::Bool(*b),
        Value::Number(n) => TreeNode::Number(number_literal(n)),
        Value::String(s) => {
            let (display, truncated) = truncate_with_ellipsis(s, MAX_DISPLAY_STRING);
            TreeNode::Str { display, truncated }
        }
        Value::Array(items) if items.is_empty() => TreeNode::Empty(ContainerKind::Array),
        Value::Object(map) if map.is_empty() => TreeNode::Empty(ContainerKind::Object),
        Value::Array(items) => {
            let expanded = is_expanded(&path, depth, toggled);
            let children = if expanded {
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| TreeEntry {
                        key: None,
                        node: build_node(item, format!("{path}/{index}"), depth + 1, toggled),
                    })
                    .collect()
            } else {
                Vec::new()
            };
            TreeNode::Container(ContainerNode {
                kind: ContainerKind::Array,
                path,
                depth,
                len: items.len(),
                expanded,
                children,
            })
        }
        Value::Object(map) => {
            let expanded = is_expanded(&path, depth, toggled);
            let children = if expanded {
                map.iter()
                    .map(|(key, item)| TreeEntry {
                        key: Some(key.clone()),
                        node: build_node(
                            item,
                            format!("{path}/{}", escape_pointer_token(key)),
                            depth + 1,
                            toggled,
                        ),
                    })
                    .collect()
            } else {
                Vec::new()
            };
            TreeNode::Container(ContainerNode {
                kind: ContainerKind::Object,
                path,
                depth,
                len: map.len(),
                expanded,
                children,
            })
        }
    }
}

// RFC 6901: `~` and `/` inside a key must not read as separators.
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
