//! The configuration tree.
//!
//! A parsed configuration is a tree of [`ConfigNode`]s rooted at the "main
//! node", an anonymous block. Every node is one of five variants:
//!
//! - [`ConfigNode::Key`]: a named scalar, `key = "value";`
//! - [`ConfigNode::Value`]: an unnamed scalar, as found inside lists
//! - [`ConfigNode::Block`]: a group of entries, `name = { ... };`
//! - [`ConfigNode::List`]: an ordered list, `name = ( ... );`
//! - [`ConfigNode::Comment`]: a `#` comment, kept in the tree but never emitted
//!
//! Containers own their children in source order.
//!
//! ## Examples
//!
//! ```rust
//! use iconfig2yaml::{ConfigNode, NodeKind};
//!
//! let root = ConfigNode::anonymous_block(vec![
//!     ConfigNode::key("nick", "wolf"),
//!     ConfigNode::list("channels", vec![ConfigNode::value("#rust")]),
//!     ConfigNode::comment(" set by setup"),
//! ]);
//!
//! assert_eq!(root.kind(), NodeKind::Block);
//! assert!(!root.is_named());
//! assert_eq!(root.children().len(), 3);
//! assert_eq!(root.depth(), 2);
//! ```

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;
use std::mem;

/// A node of the configuration tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigNode {
    Key { key: String, value: String },
    Value { value: String },
    Block {
        key: Option<String>,
        children: Vec<ConfigNode>,
    },
    List {
        key: Option<String>,
        children: Vec<ConfigNode>,
    },
    Comment { text: String },
}

/// The discriminant of a [`ConfigNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Key,
    Value,
    Block,
    List,
    Comment,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Key => "Key",
            NodeKind::Value => "Value",
            NodeKind::Block => "Block",
            NodeKind::List => "List",
            NodeKind::Comment => "Comment",
        })
    }
}

impl ConfigNode {
    /// Creates a `key = value` node.
    pub fn key(key: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigNode::Key {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an unnamed scalar.
    pub fn value(value: impl Into<String>) -> Self {
        ConfigNode::Value {
            value: value.into(),
        }
    }

    /// Creates a named block.
    pub fn block(key: impl Into<String>, children: Vec<ConfigNode>) -> Self {
        ConfigNode::Block {
            key: Some(key.into()),
            children,
        }
    }

    /// Creates a block without a name, like the main node or a block inside a list.
    pub fn anonymous_block(children: Vec<ConfigNode>) -> Self {
        ConfigNode::Block {
            key: None,
            children,
        }
    }

    /// Creates a named list.
    pub fn list(key: impl Into<String>, children: Vec<ConfigNode>) -> Self {
        ConfigNode::List {
            key: Some(key.into()),
            children,
        }
    }

    /// Creates a list without a name.
    pub fn anonymous_list(children: Vec<ConfigNode>) -> Self {
        ConfigNode::List {
            key: None,
            children,
        }
    }

    /// Creates a comment node. `text` is everything after the `#`.
    pub fn comment(text: impl Into<String>) -> Self {
        ConfigNode::Comment { text: text.into() }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            ConfigNode::Key { .. } => NodeKind::Key,
            ConfigNode::Value { .. } => NodeKind::Value,
            ConfigNode::Block { .. } => NodeKind::Block,
            ConfigNode::List { .. } => NodeKind::List,
            ConfigNode::Comment { .. } => NodeKind::Comment,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, ConfigNode::Key { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, ConfigNode::Value { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, ConfigNode::Block { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, ConfigNode::List { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, ConfigNode::Comment { .. })
    }

    /// Returns `true` for blocks and lists.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, ConfigNode::Block { .. } | ConfigNode::List { .. })
    }

    /// Returns the node's name.
    ///
    /// Always `Some` for `Key`, `Some` for named containers, `None` otherwise.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            ConfigNode::Key { key, .. } => Some(key),
            ConfigNode::Block { key, .. } | ConfigNode::List { key, .. } => key.as_deref(),
            ConfigNode::Value { .. } | ConfigNode::Comment { .. } => None,
        }
    }

    /// Returns `true` when the node carries a name.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name().is_some()
    }

    /// Returns the scalar payload of `Key`, `Value` and `Comment` nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iconfig2yaml::ConfigNode;
    ///
    /// assert_eq!(ConfigNode::key("port", "6697").text(), Some("6697"));
    /// assert_eq!(ConfigNode::anonymous_block(vec![]).text(), None);
    /// ```
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            ConfigNode::Key { value, .. } | ConfigNode::Value { value } => Some(value),
            ConfigNode::Comment { text } => Some(text),
            ConfigNode::Block { .. } | ConfigNode::List { .. } => None,
        }
    }

    /// Returns the children of a container; scalars have none.
    #[must_use]
    pub fn children(&self) -> &[ConfigNode] {
        match self {
            ConfigNode::Block { children, .. } | ConfigNode::List { children, .. } => children,
            _ => &[],
        }
    }

    /// Finds the first direct child with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfigNode> {
        self.children().iter().find(|child| child.name() == Some(name))
    }

    /// Returns the maximum container nesting below and including this node.
    ///
    /// Scalars have depth 0, an empty block has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0usize)];
        while let Some((node, level)) = pending.pop() {
            if node.is_container() {
                deepest = deepest.max(level + 1);
                pending.extend(node.children().iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

// Children are released from a flat stack so nesting depth is unbounded.
impl Drop for ConfigNode {
    fn drop(&mut self) {
        let mut pending = match self {
            ConfigNode::Block { children, .. } | ConfigNode::List { children, .. }
                if children.iter().any(ConfigNode::is_container) =>
            {
                mem::take(children)
            }
            _ => return,
        };
        while let Some(mut node) = pending.pop() {
            if let ConfigNode::Block { children, .. } | ConfigNode::List { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

/// What a node contributes to its parent's body, in emission order.
enum Item<'a> {
    Scalar(&'a str),
    Body(&'a ConfigNode),
}

impl Serialize for Item<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Item::Scalar(s) => serializer.serialize_str(s),
            Item::Body(node) => serialize_body(node, serializer),
        }
    }
}

fn items(children: &[ConfigNode]) -> Vec<Item<'_>> {
    let mut out = Vec::with_capacity(children.len() * 2);
    for child in children {
        match child {
            ConfigNode::Key { key, value } => {
                out.push(Item::Scalar(key));
                out.push(Item::Scalar(value));
            }
            ConfigNode::Value { value } => out.push(Item::Scalar(value)),
            ConfigNode::Block { key, .. } | ConfigNode::List { key, .. } => {
                if let Some(key) = key {
                    out.push(Item::Scalar(key));
                }
                out.push(Item::Body(child));
            }
            ConfigNode::Comment { .. } => {}
        }
    }
    out
}

fn serialize_body<S>(node: &ConfigNode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let body = items(node.children());
    match node {
        ConfigNode::Block { .. } => {
            if body.len() % 2 != 0 {
                return Err(S::Error::custom("mapping entry is missing a value"));
            }
            let mut map = serializer.serialize_map(Some(body.len() / 2))?;
            for pair in body.chunks(2) {
                map.serialize_entry(&pair[0], &pair[1])?;
            }
            map.end()
        }
        ConfigNode::List { .. } => {
            let mut seq = serializer.serialize_seq(Some(body.len()))?;
            for item in &body {
                seq.serialize_element(item)?;
            }
            seq.end()
        }
        _ => Err(S::Error::custom("scalar node has no body")),
    }
}

/// Serializes the node with the same shape the YAML serializer emits.
///
/// Blocks become maps whose entries pair up the scalars and containers their
/// children contribute, lists become sequences, comments vanish. Only a tree
/// whose event stream is a single node can be serialized: a top-level `Key`
/// or a named container yields two nodes and is rejected.
impl Serialize for ConfigNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConfigNode::Value { value } => serializer.serialize_str(value),
            ConfigNode::Block { key: None, .. } | ConfigNode::List { key: None, .. } => {
                serialize_body(self, serializer)
            }
            ConfigNode::Comment { .. } => serializer.serialize_unit(),
            ConfigNode::Key { .. } | ConfigNode::Block { .. } | ConfigNode::List { .. } => Err(
                S::Error::custom("a named node does not form a single document"),
            ),
        }
    }
}
