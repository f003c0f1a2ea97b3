//! Configuration tree to YAML event serialization.
//!
//! This module provides the [`Serializer`] that walks a [`ConfigNode`] tree
//! and feeds the matching [`Event`]s to any [`Emit`] implementation.
//!
//! ## Overview
//!
//! Each node maps to a fixed sequence of events:
//!
//! - **Key**: its key and its value as two plain scalars
//! - **Value**: one plain scalar
//! - **Block**: the key scalar when named, then a block mapping around the children
//! - **List**: the key scalar when named, then a block sequence around the children
//! - **Comment**: nothing
//!
//! Serialization stops at the first event the emitter rejects and returns the
//! emitter's error. Traversal keeps its own stack, so deeply nested trees do
//! not grow the call stack.
//!
//! ## Tracing
//!
//! Every node visited and every event emitted is reported through [`log`] at
//! `trace` level, indented four spaces per level of nesting. Nothing is
//! reported unless a logger is installed with that level enabled.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use iconfig2yaml::{to_string, ConfigNode};
//!
//! let root = ConfigNode::anonymous_block(vec![ConfigNode::key("nick", "wolf")]);
//! assert_eq!(to_string(&root).unwrap(), "nick: wolf\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use iconfig2yaml::{ConfigNode, Event, Serializer};
//!
//! let root = ConfigNode::anonymous_list(vec![ConfigNode::value("x")]);
//!
//! let mut serializer = Serializer::new(Vec::<Event<'static>>::new());
//! serializer.serialize_node(&root).unwrap();
//!
//! let events = serializer.into_inner();
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[1], Event::plain_scalar("x"));
//! ```

use crate::emitter::Emit;
use crate::event::{Encoding, Event};
use crate::{ConfigNode, Result};
use log::trace;

/// The YAML event serializer.
///
/// Wraps an emitter and serializes configuration trees into it.
pub struct Serializer<E: Emit> {
    emitter: E,
}

/// Pending traversal work.
enum Step<'a> {
    Visit(&'a ConfigNode, usize),
    Close(Event<'static>, usize),
}

impl<E: Emit> Serializer<E> {
    /// Wraps an event consumer.
    pub fn new(emitter: E) -> Self {
        Serializer { emitter }
    }

    /// Returns the wrapped consumer.
    pub fn into_inner(self) -> E {
        self.emitter
    }

    /// Borrows the wrapped consumer.
    pub fn get_ref(&self) -> &E {
        &self.emitter
    }

    /// Mutably borrows the wrapped consumer.
    pub fn get_mut(&mut self) -> &mut E {
        &mut self.emitter
    }

    fn emit(&mut self, depth: usize, event: Event<'_>) -> Result<()> {
        let indent = depth * 4;
        match &event {
            Event::StreamStart { .. } => trace!("{:indent$}Start Stream", ""),
            Event::StreamEnd => trace!("{:indent$}End Stream", ""),
            Event::DocumentStart { .. } => trace!("{:indent$}Start Document", ""),
            Event::DocumentEnd { .. } => trace!("{:indent$}End Document", ""),
            Event::Scalar { value, .. } => trace!("{:indent$}Scalar: {}", "", value),
            Event::MappingStart { .. } => trace!("{:indent$}Start Mapping", ""),
            Event::MappingEnd => trace!("{:indent$}End Mapping", ""),
            Event::SequenceStart { .. } => trace!("{:indent$}Start Sequence", ""),
            Event::SequenceEnd => trace!("{:indent$}End Sequence", ""),
            Event::Alias { anchor } => trace!("{:indent$}Alias: {}", "", anchor),
        }
        self.emitter.emit(event)
    }

    /// Emits the stream and document openers: UTF-8 stream start, then an
    /// implicit document start without directives.
    pub fn begin(&mut self) -> Result<()> {
        self.emit(0, Event::stream_start(Encoding::Utf8))?;
        self.emit(0, Event::document_start(true))
    }

    /// Emits an implicit document end and the stream end.
    pub fn finish(&mut self) -> Result<()> {
        self.emit(0, Event::document_end(true))?;
        self.emit(0, Event::stream_end())
    }

    /// Serializes `node` and everything below it.
    ///
    /// # Errors
    ///
    /// Returns the first error the emitter reports. No event is emitted after
    /// a rejected one.
    pub fn serialize_node(&mut self, node: &ConfigNode) -> Result<()> {
        let mut stack = vec![Step::Visit(node, 0)];

        while let Some(step) = stack.pop() {
            let (node, depth) = match step {
                Step::Visit(node, depth) => (node, depth),
                Step::Close(event, depth) => {
                    self.emit(depth, event)?;
                    continue;
                }
            };
            let indent = depth * 4;

            match node {
                ConfigNode::Key { key, value } => {
                    trace!("{:indent$}Key: {} -> {}", "", key, value);
                    self.emit(depth, Event::plain_scalar(key.as_str()))?;
                    self.emit(depth, Event::plain_scalar(value.as_str()))?;
                }
                ConfigNode::Value { value } => {
                    trace!("{:indent$}Value: {}", "", value);
                    self.emit(depth, Event::plain_scalar(value.as_str()))?;
                }
                ConfigNode::Block { key, children } => {
                    match key {
                        Some(key) => {
                            trace!("{:indent$}Begin Named Block: {}", "", key);
                            self.emit(depth, Event::plain_scalar(key.as_str()))?;
                        }
                        None => trace!("{:indent$}Begin Anonymous Block", ""),
                    }
                    self.emit(depth, Event::block_mapping_start())?;
                    stack.push(Step::Close(Event::mapping_end(), depth));
                    stack.extend(children.iter().rev().map(|c| Step::Visit(c, depth + 1)));
                }
                ConfigNode::List { key, children } => {
                    match key {
                        Some(key) => {
                            trace!("{:indent$}Begin Named List: {}", "", key);
                            self.emit(depth, Event::plain_scalar(key.as_str()))?;
                        }
                        None => trace!("{:indent$}Begin Anonymous List", ""),
                    }
                    self.emit(depth, Event::block_sequence_start())?;
                    stack.push(Step::Close(Event::sequence_end(), depth));
                    stack.extend(children.iter().rev().map(|c| Step::Visit(c, depth + 1)));
                }
                ConfigNode::Comment { text } => {
                    trace!("{:indent$}Comment: {}", "", text);
                }
            }
        }

        Ok(())
    }

    /// Serializes `node` as a complete stream: [`begin`](Self::begin), the
    /// node, then [`finish`](Self::finish).
    pub fn serialize_document(&mut self, node: &ConfigNode) -> Result<()> {
        self.begin()?;
        self.serialize_node(node)?;
        self.finish()
    }
}

/// Serializes `node` into `emitter`, without the stream envelope.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::{serialize, ConfigNode, Event};
///
/// let mut events: Vec<Event<'static>> = Vec::new();
/// serialize(&mut events, &ConfigNode::key("a", "1")).unwrap();
/// assert_eq!(events, vec![Event::plain_scalar("a"), Event::plain_scalar("1")]);
/// ```
pub fn serialize<E: Emit + ?Sized>(emitter: &mut E, node: &ConfigNode) -> Result<()> {
    Serializer::new(emitter).serialize_node(node)
}
