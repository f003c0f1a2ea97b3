//! # iconfig2yaml
//!
//! Converts irssi configuration files to YAML.
//!
//! An irssi configuration is a tree of `key = value;` entries, `{ ... }`
//! blocks, `( ... )` lists and `#` comments. This crate parses that tree into
//! [`ConfigNode`]s and serializes it as a stream of YAML events, which a
//! [`YamlEmitter`], backed by libyaml, turns into text.
//!
//! ## Key Features
//!
//! - **Faithful structure**: blocks become mappings, lists become sequences,
//!   children keep their source order
//! - **Plain output**: scalars are written unquoted wherever YAML allows it
//! - **Canonical mode**: fully explicit YAML for debugging other tools
//! - **Event-level API**: the [`Emit`] trait lets any consumer receive the
//!   events instead of text
//! - **No recursion**: parsing, serialization and dumping keep explicit
//!   stacks, so nesting depth is limited only by memory
//!
//! ## Quick Start
//!
//! ```rust
//! use iconfig2yaml::{from_str, to_string};
//!
//! let source = r#"
//! servers = ( { address = "irc.libera.chat"; port = "6697"; } );
//! settings = { core = { real_name = "Wolf"; }; };
//! "#;
//!
//! let root = from_str(source).unwrap();
//! let yaml = to_string(&root).unwrap();
//! assert_eq!(
//!     yaml,
//!     "servers:\n- address: irc.libera.chat\n  port: 6697\nsettings:\n  core:\n    real_name: Wolf\n"
//! );
//! ```
//!
//! ## What Is Lost
//!
//! - Comments are parsed into the tree but never emitted.
//! - Every scalar is a string in irssi, but plain YAML scalars such as `6697`
//!   or `yes` read back as numbers or booleans in YAML tools.
//!
//! ## Tracing
//!
//! The serializer reports every node and event through the [`log`] facade at
//! `trace` level. Install any logger to see them; output is unaffected.

pub mod config;
pub mod dump;
pub mod emitter;
pub mod error;
pub mod event;
pub mod node;
pub mod options;
pub mod parser;
pub mod ser;

pub use config::{ConfigFile, CreateMode};
pub use dump::Dump;
pub use emitter::{Emit, YamlEmitter};
pub use error::{EmitterErrorKind, Error, Result};
pub use event::{CollectionStyle, Encoding, Event, ScalarStyle, VersionDirective};
pub use node::{ConfigNode, NodeKind};
pub use options::EmitterOptions;
pub use ser::{serialize, Serializer};

use std::io;
use std::path::Path;

/// Serialize a configuration tree to a YAML string.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::{to_string, ConfigNode};
///
/// let root = ConfigNode::anonymous_block(vec![
///     ConfigNode::key("a", "1"),
///     ConfigNode::list("sub", vec![ConfigNode::value("x")]),
///     ConfigNode::comment("ignored"),
/// ]);
/// assert_eq!(to_string(&root).unwrap(), "a: 1\nsub:\n- x\n");
/// ```
///
/// # Errors
///
/// Returns an emitter error if the tree does not form a valid YAML document,
/// such as a block whose children leave a mapping key without a value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(node: &ConfigNode) -> Result<String> {
    to_string_with_options(node, EmitterOptions::default())
}

/// Serialize a configuration tree to a YAML string with custom options.
///
/// # Errors
///
/// Returns an emitter error if the tree does not form a valid YAML document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(node: &ConfigNode, options: EmitterOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    to_writer_with_options(&mut buffer, node, options)?;
    String::from_utf8(buffer).map_err(|e| Error::io(&e.to_string()))
}

/// Serialize a configuration tree as YAML into a writer.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::{to_writer, ConfigNode};
///
/// let root = ConfigNode::anonymous_list(vec![ConfigNode::value("x")]);
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &root).unwrap();
/// assert_eq!(buffer, b"- x\n");
/// ```
///
/// # Errors
///
/// Returns a writer error if the writer fails, or an emitter error if the
/// tree does not form a valid YAML document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, node: &ConfigNode) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, node, EmitterOptions::default())
}

/// Serialize a configuration tree as YAML into a writer with custom options.
///
/// # Errors
///
/// Returns a writer error if the writer fails, or an emitter error if the
/// tree does not form a valid YAML document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, node: &ConfigNode, options: EmitterOptions) -> Result<()>
where
    W: io::Write,
{
    let emitter = YamlEmitter::with_options(writer, options);
    Serializer::new(emitter).serialize_document(node)
}

/// Parse irssi configuration text.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::{from_str, ConfigNode};
///
/// let root = from_str("nick = wolf; # me").unwrap();
/// assert_eq!(
///     root,
///     ConfigNode::anonymous_block(vec![
///         ConfigNode::key("nick", "wolf"),
///         ConfigNode::comment(" me"),
///     ])
/// );
/// ```
///
/// # Errors
///
/// Returns a syntax error with line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(source: &str) -> Result<ConfigNode> {
    parser::parse(source)
}

/// Read and parse an irssi configuration file. A missing file is an error.
///
/// # Errors
///
/// Returns an open error if the file cannot be read, or a syntax error if
/// its content is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<ConfigNode> {
    ConfigFile::open(path, CreateMode::Never)?.parse()
}
