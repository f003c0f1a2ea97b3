//! YAML structural events.
//!
//! An [`Event`] is one step of a YAML serialization: stream and document
//! boundaries, scalars, and the start and end of collections. Events borrow
//! their text where possible; [`Event::into_owned`] detaches them.

use std::borrow::Cow;

/// Tag the serializer attaches to every sequence.
pub const DEFAULT_SEQUENCE_TAG: &str = "tag:yaml.org,2002:seq";
pub const DEFAULT_MAPPING_TAG: &str = "tag:yaml.org,2002:map";
pub const DEFAULT_SCALAR_TAG: &str = "tag:yaml.org,2002:str";

/// Character encoding of the output stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Let the emitter decide; it picks UTF-8.
    #[default]
    Any,
    Utf8,
    Utf16Le,
    Utf16Be,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    #[default]
    Any,
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

/// Layout of a mapping or a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollectionStyle {
    #[default]
    Any,
    Block,
    Flow,
}

/// A `%YAML major.minor` directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionDirective {
    pub major: u8,
    pub minor: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    StreamStart {
        encoding: Encoding,
    },
    StreamEnd,
    DocumentStart {
        version: Option<VersionDirective>,
        implicit: bool,
    },
    DocumentEnd {
        implicit: bool,
    },
    Alias {
        anchor: Cow<'a, str>,
    },
    Scalar {
        anchor: Option<Cow<'a, str>>,
        tag: Option<Cow<'a, str>>,
        value: Cow<'a, str>,
        plain_implicit: bool,
        quoted_implicit: bool,
        style: ScalarStyle,
    },
    SequenceStart {
        anchor: Option<Cow<'a, str>>,
        tag: Option<Cow<'a, str>>,
        implicit: bool,
        style: CollectionStyle,
    },
    SequenceEnd,
    MappingStart {
        anchor: Option<Cow<'a, str>>,
        tag: Option<Cow<'a, str>>,
        implicit: bool,
        style: CollectionStyle,
    },
    MappingEnd,
}

impl<'a> Event<'a> {
    pub fn stream_start(encoding: Encoding) -> Self {
        Event::StreamStart { encoding }
    }

    pub fn stream_end() -> Self {
        Event::StreamEnd
    }

    /// A document start without directives.
    pub fn document_start(implicit: bool) -> Self {
        Event::DocumentStart {
            version: None,
            implicit,
        }
    }

    pub fn document_end(implicit: bool) -> Self {
        Event::DocumentEnd { implicit }
    }

    /// An untagged scalar that may be written in any unquoted or quoted form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iconfig2yaml::{Event, ScalarStyle};
    ///
    /// let event = Event::plain_scalar("port");
    /// assert!(matches!(event, Event::Scalar { style: ScalarStyle::Plain, .. }));
    /// ```
    pub fn plain_scalar(value: impl Into<Cow<'a, str>>) -> Self {
        Event::Scalar {
            anchor: None,
            tag: None,
            value: value.into(),
            plain_implicit: true,
            quoted_implicit: true,
            style: ScalarStyle::Plain,
        }
    }

    /// An untagged block mapping.
    pub fn block_mapping_start() -> Self {
        Event::MappingStart {
            anchor: None,
            tag: None,
            implicit: false,
            style: CollectionStyle::Block,
        }
    }

    pub fn mapping_end() -> Self {
        Event::MappingEnd
    }

    /// A block sequence carrying the default sequence tag.
    pub fn block_sequence_start() -> Self {
        Event::SequenceStart {
            anchor: None,
            tag: Some(Cow::Borrowed(DEFAULT_SEQUENCE_TAG)),
            implicit: true,
            style: CollectionStyle::Block,
        }
    }

    pub fn sequence_end() -> Self {
        Event::SequenceEnd
    }

    /// Name of the event in libyaml's vocabulary.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Event::StreamStart { .. } => "STREAM-START",
            Event::StreamEnd => "STREAM-END",
            Event::DocumentStart { .. } => "DOCUMENT-START",
            Event::DocumentEnd { .. } => "DOCUMENT-END",
            Event::Alias { .. } => "ALIAS",
            Event::Scalar { .. } => "SCALAR",
            Event::SequenceStart { .. } => "SEQUENCE-START",
            Event::SequenceEnd => "SEQUENCE-END",
            Event::MappingStart { .. } => "MAPPING-START",
            Event::MappingEnd => "MAPPING-END",
        }
    }

    /// Returns `true` for events that begin a node.
    #[must_use]
    pub const fn is_node_start(&self) -> bool {
        matches!(
            self,
            Event::Alias { .. }
                | Event::Scalar { .. }
                | Event::SequenceStart { .. }
                | Event::MappingStart { .. }
        )
    }

    /// Detaches the event from any borrowed text.
    pub fn into_owned(self) -> Event<'static> {
        fn own(text: Cow<'_, str>) -> Cow<'static, str> {
            Cow::Owned(text.into_owned())
        }

        match self {
            Event::StreamStart { encoding } => Event::StreamStart { encoding },
            Event::StreamEnd => Event::StreamEnd,
            Event::DocumentStart { version, implicit } => {
                Event::DocumentStart { version, implicit }
            }
            Event::DocumentEnd { implicit } => Event::DocumentEnd { implicit },
            Event::Alias { anchor } => Event::Alias {
                anchor: own(anchor),
            },
            Event::Scalar {
                anchor,
                tag,
                value,
                plain_implicit,
                quoted_implicit,
                style,
            } => Event::Scalar {
                anchor: anchor.map(own),
                tag: tag.map(own),
                value: own(value),
                plain_implicit,
                quoted_implicit,
                style,
            },
            Event::SequenceStart {
                anchor,
                tag,
                implicit,
                style,
            } => Event::SequenceStart {
                anchor: anchor.map(own),
                tag: tag.map(own),
                implicit,
                style,
            },
            Event::SequenceEnd => Event::SequenceEnd,
            Event::MappingStart {
                anchor,
                tag,
                implicit,
                style,
            } => Event::MappingStart {
                anchor: anchor.map(own),
                tag: tag.map(own),
                implicit,
                style,
            },
            Event::MappingEnd => Event::MappingEnd,
        }
    }
}
