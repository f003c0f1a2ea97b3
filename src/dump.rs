//! Human-readable dump of a configuration tree.

use crate::ConfigNode;
use std::fmt;

/// Displays a [`ConfigNode`] tree one node per line, indented four spaces
/// per level.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::{ConfigNode, Dump};
///
/// let root = ConfigNode::anonymous_block(vec![
///     ConfigNode::key("nick", "wolf"),
///     ConfigNode::list("channels", vec![ConfigNode::value("#rust")]),
/// ]);
///
/// assert_eq!(
///     Dump(&root).to_string(),
///     "Block: (anonymous)\n    Key: 'nick' => 'wolf'\n    List: channels\n        Value: #rust\n"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dump<'a>(pub &'a ConfigNode);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.0, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            write!(f, "{:width$}", "", width = depth * 4)?;
            match node {
                ConfigNode::Key { key, value } => writeln!(f, "Key: '{}' => '{}'", key, value)?,
                ConfigNode::Value { value } => writeln!(f, "Value: {}", value)?,
                ConfigNode::Block { key, children } | ConfigNode::List { key, children } => {
                    let label = if node.is_block() { "Block" } else { "List" };
                    writeln!(f, "{}: {}", label, key.as_deref().unwrap_or("(anonymous)"))?;
                    stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
                }
                ConfigNode::Comment { text } => writeln!(f, "Comment: {}", text)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_layout() {
        let root = ConfigNode::anonymous_block(vec![
            ConfigNode::key("a", "1"),
            ConfigNode::comment(" note"),
            ConfigNode::block(
                "servers",
                vec![ConfigNode::anonymous_list(vec![ConfigNode::value("x")])],
            ),
        ]);
        let expected = "\
Block: (anonymous)
    Key: 'a' => '1'
    Comment:  note
    Block: servers
        List: (anonymous)
            Value: x
";
        assert_eq!(Dump(&root).to_string(), expected);
    }

    #[test]
    fn test_dump_scalar_root() {
        assert_eq!(Dump(&ConfigNode::value("v")).to_string(), "Value: v\n");
    }
}
