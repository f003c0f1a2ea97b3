//! YAML emission from a stream of [`Event`]s.
//!
//! [`Emit`] is the seam between the serializer and whatever consumes its
//! events. [`YamlEmitter`] is the production implementation: it hands every
//! event to libyaml's emitter (through `unsafe-libyaml`, the same emitter
//! `serde_yaml_ng` drives) and writes the resulting text to any
//! [`io::Write`] sink. That gives the usual libyaml layout:
//!
//! - block mappings and sequences, with sequences under a mapping key written
//!   without extra indentation (`key:\n- item`)
//! - empty collections as `{}` and `[]`
//! - plain scalars wherever YAML allows them, falling back to single and then
//!   double quotes
//! - canonical mode: `---`, flow collections, explicit tags and double quotes
//!
//! libyaml holds back a few events before writing a collection so it can tell
//! empty collections and simple keys apart. Output is buffered and flushed at
//! document end, stream end, and whenever the internal buffer fills up.
//!
//! ## Examples
//!
//! ```rust
//! use iconfig2yaml::{Emit, Encoding, Event, YamlEmitter};
//!
//! let mut emitter = YamlEmitter::new(Vec::new());
//! emitter.emit(Event::stream_start(Encoding::Utf8)).unwrap();
//! emitter.emit(Event::document_start(true)).unwrap();
//! emitter.emit(Event::block_mapping_start()).unwrap();
//! emitter.emit(Event::plain_scalar("nick")).unwrap();
//! emitter.emit(Event::plain_scalar("wolf")).unwrap();
//! emitter.emit(Event::mapping_end()).unwrap();
//! emitter.emit(Event::document_end(true)).unwrap();
//! emitter.emit(Event::stream_end()).unwrap();
//!
//! assert_eq!(emitter.into_inner(), b"nick: wolf\n");
//! ```

use crate::event::{CollectionStyle, Encoding, Event, ScalarStyle};
use crate::{EmitterOptions, Error, Result};
use std::ffi::{c_void, CStr, CString};
use std::io;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr::{self, addr_of_mut, NonNull};
use std::slice;
use unsafe_libyaml as sys;

/// Anything that accepts YAML events.
pub trait Emit {
    /// Consumes one event. An error means the event was rejected and the
    /// stream cannot continue.
    fn emit(&mut self, event: Event<'_>) -> Result<()>;
}

impl<E: Emit + ?Sized> Emit for &mut E {
    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        (**self).emit(event)
    }
}

/// Collects events, for inspection or replay.
impl Emit for Vec<Event<'static>> {
    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        self.push(event.into_owned());
        Ok(())
    }
}

/// Everything libyaml points into. Lives in its own allocation so the
/// address handed to the write callback stays put.
struct Pinned<W> {
    sys: sys::yaml_emitter_t,
    writer: W,
    write_error: Option<io::Error>,
    options: EmitterOptions,
    started: bool,
    failure: Option<Error>,
}

/// A YAML writer driven by [`Event`]s.
///
/// Once an event is rejected the emitter stays failed: every later call
/// returns the same error.
pub struct YamlEmitter<W: io::Write> {
    pin: NonNull<Pinned<W>>,
}

impl<W: io::Write> YamlEmitter<W> {
    /// Creates an emitter with default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, EmitterOptions::default())
    }

    /// Creates an emitter writing to `writer` with the given options.
    pub fn with_options(writer: W, options: EmitterOptions) -> Self {
        let pin: NonNull<Pinned<W>> =
            NonNull::from(Box::leak(Box::new(MaybeUninit::<Pinned<W>>::uninit()))).cast();
        let raw = pin.as_ptr();

        let indent = i32::try_from(options.indent).unwrap_or(2);
        let width = i32::try_from(options.width).unwrap_or(-1);
        unsafe {
            let emitter = addr_of_mut!((*raw).sys);
            let failure = if sys::yaml_emitter_initialize(emitter).fail {
                Some(Error::memory())
            } else {
                None
            };
            sys::yaml_emitter_set_output(emitter, write_handler::<W>, raw.cast());
            sys::yaml_emitter_set_canonical(emitter, options.canonical);
            sys::yaml_emitter_set_unicode(emitter, options.unicode);
            sys::yaml_emitter_set_indent(emitter, indent);
            sys::yaml_emitter_set_width(emitter, width);

            addr_of_mut!((*raw).writer).write(writer);
            addr_of_mut!((*raw).write_error).write(None);
            addr_of_mut!((*raw).options).write(options);
            addr_of_mut!((*raw).started).write(false);
            addr_of_mut!((*raw).failure).write(failure);
        }
        YamlEmitter { pin }
    }

    fn pinned(&self) -> &Pinned<W> {
        unsafe { self.pin.as_ref() }
    }

    fn pinned_mut(&mut self) -> &mut Pinned<W> {
        unsafe { self.pin.as_mut() }
    }

    /// The options this emitter was created with.
    pub fn options(&self) -> &EmitterOptions {
        &self.pinned().options
    }

    /// Borrows the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.pinned().writer
    }

    /// Returns the sink. Output not yet flushed is discarded.
    pub fn into_inner(self) -> W {
        let this = ManuallyDrop::new(self);
        let mut pinned = unsafe { Box::from_raw(this.pin.as_ptr()) };
        unsafe { sys::yaml_emitter_delete(&mut pinned.sys) };
        let Pinned { writer, .. } = *pinned;
        writer
    }

    /// Writes buffered output to the sink and flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns a writer error when the sink fails, or the earlier error if
    /// the emitter already failed.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(error) = &self.pinned().failure {
            return Err(error.clone());
        }
        // libyaml only knows its output encoding after STREAM-START.
        if self.pinned().started {
            let emitter = unsafe { addr_of_mut!((*self.pin.as_ptr()).sys) };
            let status = unsafe { sys::yaml_emitter_flush(emitter) };
            if status.fail {
                let error = self.last_error();
                return Err(self.fail(error));
            }
        }
        self.pinned_mut()
            .writer
            .flush()
            .map_err(|e| Error::writer(&format!("flush error: {}", e)))
    }

    fn fail(&mut self, error: Error) -> Error {
        self.pinned_mut().failure = Some(error.clone());
        error
    }

    /// Reads the error libyaml recorded for the last failed call.
    fn last_error(&mut self) -> Error {
        let raw = self.pin.as_ptr();
        let (kind, problem) = unsafe { ((&(*raw).sys).error, (&(*raw).sys).problem) };
        let problem = if problem.is_null() {
            "emitter failed without reporting a problem".to_string()
        } else {
            unsafe { CStr::from_ptr(problem) }
                .to_string_lossy()
                .into_owned()
        };
        match kind {
            sys::YAML_MEMORY_ERROR => Error::memory(),
            sys::YAML_WRITER_ERROR => match self.pinned_mut().write_error.take() {
                Some(io_error) => Error::writer(&format!("{}: {}", problem, io_error)),
                None => Error::writer(&problem),
            },
            _ => Error::rejected(&problem),
        }
    }

    fn emit_event(&mut self, event: &Event<'_>) -> Result<()> {
        let mut sys_event = MaybeUninit::<sys::yaml_event_t>::uninit();
        let sys_event = sys_event.as_mut_ptr();

        // libyaml copies anchors and tags, so these only need to outlive
        // the initialize call.
        let (anchor, tag) = match event {
            Event::Alias { anchor } => (Some(c_string("anchor", anchor)?), None),
            Event::Scalar { anchor, tag, .. }
            | Event::SequenceStart { anchor, tag, .. }
            | Event::MappingStart { anchor, tag, .. } => (
                anchor.as_deref().map(|a| c_string("anchor", a)).transpose()?,
                tag.as_deref().map(|t| c_string("tag", t)).transpose()?,
            ),
            _ => (None, None),
        };
        let anchor_ptr = anchor.as_ref().map_or(ptr::null(), |a| a.as_ptr().cast::<u8>());
        let tag_ptr = tag.as_ref().map_or(ptr::null(), |t| t.as_ptr().cast::<u8>());

        let initialized = unsafe {
            match event {
                Event::StreamStart { encoding } => {
                    sys::yaml_stream_start_event_initialize(sys_event, sys_encoding(*encoding))
                }
                Event::StreamEnd => sys::yaml_stream_end_event_initialize(sys_event),
                Event::DocumentStart { version, implicit } => {
                    let mut directive = version.map(|version| {
                        let mut directive =
                            MaybeUninit::<sys::yaml_version_directive_t>::zeroed().assume_init();
                        directive.major = version.major.into();
                        directive.minor = version.minor.into();
                        directive
                    });
                    let directive_ptr = directive
                        .as_mut()
                        .map_or(ptr::null_mut(), |d| d as *mut sys::yaml_version_directive_t);
                    sys::yaml_document_start_event_initialize(
                        sys_event,
                        directive_ptr,
                        ptr::null_mut(),
                        ptr::null_mut(),
                        *implicit,
                    )
                }
                Event::DocumentEnd { implicit } => {
                    sys::yaml_document_end_event_initialize(sys_event, *implicit)
                }
                Event::Alias { .. } => sys::yaml_alias_event_initialize(sys_event, anchor_ptr),
                Event::Scalar {
                    value,
                    plain_implicit,
                    quoted_implicit,
                    style,
                    ..
                } => {
                    let length = i32::try_from(value.len())
                        .map_err(|_| Error::rejected("scalar value is too long"))?;
                    sys::yaml_scalar_event_initialize(
                        sys_event,
                        anchor_ptr,
                        tag_ptr,
                        value.as_ptr(),
                        length,
                        *plain_implicit,
                        *quoted_implicit,
                        sys_scalar_style(*style),
                    )
                }
                Event::SequenceStart { implicit, style, .. } => {
                    sys::yaml_sequence_start_event_initialize(
                        sys_event,
                        anchor_ptr,
                        tag_ptr,
                        *implicit,
                        sys_sequence_style(*style),
                    )
                }
                Event::SequenceEnd => sys::yaml_sequence_end_event_initialize(sys_event),
                Event::MappingStart { implicit, style, .. } => {
                    sys::yaml_mapping_start_event_initialize(
                        sys_event,
                        anchor_ptr,
                        tag_ptr,
                        *implicit,
                        sys_mapping_style(*style),
                    )
                }
                Event::MappingEnd => sys::yaml_mapping_end_event_initialize(sys_event),
            }
        };
        if initialized.fail {
            return Err(Error::memory());
        }

        // The emitter takes ownership of the event, also on failure.
        let emitter = unsafe { addr_of_mut!((*self.pin.as_ptr()).sys) };
        let emitted = unsafe { sys::yaml_emitter_emit(emitter, sys_event) };
        if emitted.fail {
            return Err(self.last_error());
        }
        Ok(())
    }
}

impl<W: io::Write> Emit for YamlEmitter<W> {
    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        if let Some(error) = &self.pinned().failure {
            return Err(error.clone());
        }
        match self.emit_event(&event) {
            Ok(()) => {
                if matches!(event, Event::StreamStart { .. }) {
                    self.pinned_mut().started = true;
                }
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }
}

impl<W: io::Write> Drop for YamlEmitter<W> {
    fn drop(&mut self) {
        let mut pinned = unsafe { Box::from_raw(self.pin.as_ptr()) };
        unsafe { sys::yaml_emitter_delete(&mut pinned.sys) };
    }
}

unsafe fn write_handler<W: io::Write>(data: *mut c_void, buffer: *mut u8, size: u64) -> i32 {
    let pinned = data.cast::<Pinned<W>>();
    let bytes = unsafe { slice::from_raw_parts(buffer, size as usize) };
    match unsafe { (*pinned).writer.write_all(bytes) } {
        Ok(()) => 1,
        Err(error) => {
            unsafe { (*pinned).write_error = Some(error) };
            0
        }
    }
}

fn c_string(what: &str, text: &str) -> Result<CString> {
    CString::new(text)
        .map_err(|_| Error::rejected(&format!("{} value must not contain NUL characters", what)))
}

fn sys_encoding(encoding: Encoding) -> sys::yaml_encoding_t {
    match encoding {
        Encoding::Any => sys::YAML_ANY_ENCODING,
        Encoding::Utf8 => sys::YAML_UTF8_ENCODING,
        Encoding::Utf16Le => sys::YAML_UTF16LE_ENCODING,
        Encoding::Utf16Be => sys::YAML_UTF16BE_ENCODING,
    }
}

fn sys_scalar_style(style: ScalarStyle) -> sys::yaml_scalar_style_t {
    match style {
        ScalarStyle::Any => sys::YAML_ANY_SCALAR_STYLE,
        ScalarStyle::Plain => sys::YAML_PLAIN_SCALAR_STYLE,
        ScalarStyle::SingleQuoted => sys::YAML_SINGLE_QUOTED_SCALAR_STYLE,
        ScalarStyle::DoubleQuoted => sys::YAML_DOUBLE_QUOTED_SCALAR_STYLE,
        ScalarStyle::Literal => sys::YAML_LITERAL_SCALAR_STYLE,
        ScalarStyle::Folded => sys::YAML_FOLDED_SCALAR_STYLE,
    }
}

fn sys_sequence_style(style: CollectionStyle) -> sys::yaml_sequence_style_t {
    match style {
        CollectionStyle::Any => sys::YAML_ANY_SEQUENCE_STYLE,
        CollectionStyle::Block => sys::YAML_BLOCK_SEQUENCE_STYLE,
        CollectionStyle::Flow => sys::YAML_FLOW_SEQUENCE_STYLE,
    }
}

fn sys_mapping_style(style: CollectionStyle) -> sys::yaml_mapping_style_t {
    match style {
        CollectionStyle::Any => sys::YAML_ANY_MAPPING_STYLE,
        CollectionStyle::Block => sys::YAML_BLOCK_MAPPING_STYLE,
        CollectionStyle::Flow => sys::YAML_FLOW_MAPPING_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{VersionDirective, DEFAULT_SEQUENCE_TAG};
    use crate::EmitterErrorKind;
    use std::borrow::Cow;

    fn emit_all(options: EmitterOptions, events: Vec<Event<'_>>) -> Result<String> {
        let mut emitter = YamlEmitter::with_options(Vec::new(), options);
        for event in events {
            emitter.emit(event)?;
        }
        Ok(String::from_utf8(emitter.into_inner()).unwrap())
    }

    fn document(body: Vec<Event<'static>>) -> Vec<Event<'static>> {
        let mut events = vec![
            Event::stream_start(Encoding::Utf8),
            Event::document_start(true),
        ];
        events.extend(body);
        events.push(Event::document_end(true));
        events.push(Event::stream_end());
        events
    }

    fn scalar(value: &str) -> Event<'static> {
        Event::plain_scalar(value.to_string())
    }

    fn render(body: Vec<Event<'static>>) -> String {
        emit_all(EmitterOptions::default(), document(body)).unwrap()
    }

    #[test]
    fn test_block_mapping_with_indentless_sequence() {
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("a"),
            scalar("1"),
            scalar("sub"),
            Event::block_sequence_start(),
            scalar("x"),
            scalar("y"),
            Event::sequence_end(),
            Event::mapping_end(),
        ]);
        assert_eq!(yaml, "a: 1\nsub:\n- x\n- y\n");
    }

    #[test]
    fn test_nested_mappings_indent() {
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("settings"),
            Event::block_mapping_start(),
            scalar("core"),
            Event::block_mapping_start(),
            scalar("nick"),
            scalar("wolf"),
            Event::mapping_end(),
            Event::mapping_end(),
            Event::mapping_end(),
        ]);
        assert_eq!(yaml, "settings:\n  core:\n    nick: wolf\n");
    }

    #[test]
    fn test_mapping_inside_sequence_is_compact() {
        let yaml = render(vec![
            Event::block_sequence_start(),
            Event::block_mapping_start(),
            scalar("address"),
            scalar("irc.example.org"),
            scalar("port"),
            scalar("6697"),
            Event::mapping_end(),
            Event::block_sequence_start(),
            scalar("a"),
            scalar("b"),
            Event::sequence_end(),
            Event::sequence_end(),
        ]);
        assert_eq!(
            yaml,
            "- address: irc.example.org\n  port: 6697\n- - a\n  - b\n"
        );
    }

    #[test]
    fn test_empty_collections_use_flow_style() {
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("empty_block"),
            Event::block_mapping_start(),
            Event::mapping_end(),
            scalar("empty_list"),
            Event::block_sequence_start(),
            Event::sequence_end(),
            Event::mapping_end(),
        ]);
        assert_eq!(yaml, "empty_block: {}\nempty_list: []\n");
    }

    #[test]
    fn test_quoting_falls_back_when_plain_is_impossible() {
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("a"),
            scalar("key: value"),
            scalar("b"),
            scalar(""),
            scalar("c"),
            scalar("#hash"),
            scalar("d"),
            scalar("it's"),
            scalar("e"),
            scalar("tab\there"),
            scalar("f"),
            scalar("123"),
            Event::mapping_end(),
        ]);
        assert_eq!(
            yaml,
            "a: 'key: value'\nb:\nc: '#hash'\nd: it's\ne: \"tab\\there\"\nf: 123\n"
        );
    }

    #[test]
    fn test_single_quotes_are_doubled() {
        let yaml = render(vec![scalar("'quoted'")]);
        assert_eq!(yaml, "'''quoted'''\n");
    }

    #[test]
    fn test_non_ascii_is_escaped_unless_unicode() {
        let events = || {
            document(vec![
                Event::block_mapping_start(),
                scalar("name"),
                scalar("Jürgen"),
                Event::mapping_end(),
            ])
        };
        let ascii = emit_all(EmitterOptions::new(), events()).unwrap();
        assert_eq!(ascii, "name: \"J\\xFCrgen\"\n");

        let unicode = emit_all(EmitterOptions::new().with_unicode(true), events()).unwrap();
        assert_eq!(unicode, "name: Jürgen\n");
    }

    #[test]
    fn test_next_line_is_escaped_even_with_unicode() {
        for options in [EmitterOptions::new(), EmitterOptions::new().with_unicode(true)] {
            let yaml = emit_all(options, document(vec![scalar("\u{85}")])).unwrap();
            assert_eq!(yaml, "\"\\N\"\n");

            let parsed: String = serde_yaml_ng::from_str(&yaml).unwrap();
            assert_eq!(parsed, "\u{85}");
        }
    }

    #[test]
    fn test_canonical_output() {
        let events = document(vec![
            Event::block_mapping_start(),
            scalar("a"),
            scalar("1"),
            scalar("sub"),
            Event::block_sequence_start(),
            scalar("x"),
            Event::sequence_end(),
            Event::mapping_end(),
        ]);
        let yaml = emit_all(EmitterOptions::canonical(), events).unwrap();
        assert_eq!(
            yaml,
            "---\n{\n  ? \"a\"\n  : \"1\",\n  ? \"sub\"\n  : !!seq [\n    \"x\",\n  ],\n}\n"
        );
    }

    #[test]
    fn test_explicit_document_markers() {
        let events = vec![
            Event::stream_start(Encoding::Utf8),
            Event::document_start(false),
            scalar("value"),
            Event::document_end(false),
            Event::stream_end(),
        ];
        let yaml = emit_all(EmitterOptions::default(), events).unwrap();
        assert_eq!(yaml, "--- value\n...\n");
    }

    #[test]
    fn test_unsupported_version_directive() {
        let events = vec![
            Event::stream_start(Encoding::Utf8),
            Event::DocumentStart {
                version: Some(VersionDirective { major: 2, minor: 0 }),
                implicit: false,
            },
            scalar("value"),
        ];
        let err = emit_all(EmitterOptions::default(), events).unwrap_err();
        assert_eq!(err, Error::rejected("incompatible %YAML directive"));
    }

    #[test]
    fn test_anchor_and_alias() {
        let yaml = render(vec![
            Event::block_sequence_start(),
            Event::Scalar {
                anchor: Some(Cow::Borrowed("first")),
                tag: None,
                value: Cow::Borrowed("one"),
                plain_implicit: true,
                quoted_implicit: true,
                style: ScalarStyle::Plain,
            },
            Event::Alias {
                anchor: Cow::Borrowed("first"),
            },
            Event::sequence_end(),
        ]);
        assert_eq!(yaml, "- &first one\n- *first\n");
    }

    #[test]
    fn test_literal_scalar() {
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("motd"),
            Event::Scalar {
                anchor: None,
                tag: None,
                value: Cow::Borrowed("line one\nline two\n"),
                plain_implicit: true,
                quoted_implicit: true,
                style: ScalarStyle::Literal,
            },
            Event::mapping_end(),
        ]);
        assert_eq!(yaml, "motd: |\n  line one\n  line two\n");
    }

    #[test]
    fn test_multiline_plain_becomes_single_quoted() {
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("k"),
            scalar("a\nb"),
            Event::mapping_end(),
        ]);
        assert_eq!(yaml, "k: 'a\n\n  b'\n");
    }

    #[test]
    fn test_long_plain_scalar_is_folded() {
        let words = vec!["word"; 30].join(" ");
        let yaml = render(vec![
            Event::block_mapping_start(),
            scalar("k"),
            scalar(&words),
            Event::mapping_end(),
        ]);
        assert!(yaml.lines().count() > 1);
        assert!(yaml.lines().skip(1).all(|line| line.starts_with("  word")));
        let parsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed["k"].as_str(), Some(words.as_str()));
    }

    #[test]
    fn test_explicit_sequence_tag_uses_handle() {
        let yaml = render(vec![
            Event::SequenceStart {
                anchor: None,
                tag: Some(Cow::Borrowed(DEFAULT_SEQUENCE_TAG)),
                implicit: false,
                style: CollectionStyle::Block,
            },
            scalar("x"),
            Event::sequence_end(),
        ]);
        assert_eq!(yaml, "!!seq\n- x\n");
    }

    #[test]
    fn test_utf16_output_has_bom() {
        let events = vec![
            Event::stream_start(Encoding::Utf16Le),
            Event::document_start(true),
            scalar("a"),
            Event::document_end(true),
            Event::stream_end(),
        ];
        let mut emitter = YamlEmitter::new(Vec::new());
        for event in events {
            emitter.emit(event).unwrap();
        }
        assert_eq!(emitter.into_inner(), vec![0xFF, 0xFE, b'a', 0, b'\n', 0]);
    }

    #[test]
    fn test_out_of_order_events_are_rejected() {
        let mut emitter = YamlEmitter::new(Vec::new());
        let err = emitter.emit(Event::plain_scalar("early")).unwrap_err();
        assert_eq!(err, Error::rejected("expected STREAM-START"));

        // The failure sticks.
        let again = emitter.emit(Event::stream_start(Encoding::Utf8)).unwrap_err();
        assert_eq!(again, err);
        assert_eq!(emitter.flush().unwrap_err(), err);
    }

    #[test]
    fn test_flush_before_stream_start() {
        let mut emitter = YamlEmitter::new(Vec::new());
        emitter.flush().unwrap();
        assert!(emitter.get_ref().is_empty());
    }

    #[test]
    fn test_mapping_key_without_value_is_rejected() {
        let events = document(vec![
            Event::block_mapping_start(),
            scalar("lonely"),
            Event::mapping_end(),
        ]);
        let err = emit_all(EmitterOptions::default(), events).unwrap_err();
        assert_eq!(
            err,
            Error::rejected("expected SCALAR, SEQUENCE-START, MAPPING-START, or ALIAS")
        );
    }

    #[test]
    fn test_second_root_node_is_rejected() {
        let events = vec![
            Event::stream_start(Encoding::Utf8),
            Event::document_start(true),
            scalar("root"),
            Event::block_mapping_start(),
            scalar("a"),
            scalar("b"),
            Event::mapping_end(),
        ];
        let err = emit_all(EmitterOptions::default(), events).unwrap_err();
        assert_eq!(err, Error::rejected("expected DOCUMENT-END"));
    }

    #[test]
    fn test_invalid_anchor_is_rejected() {
        let events = document(vec![Event::Alias {
            anchor: Cow::Borrowed("no spaces"),
        }]);
        let err = emit_all(EmitterOptions::default(), events).unwrap_err();
        assert_eq!(err.emitter_kind(), Some(EmitterErrorKind::Emitter));
    }

    #[test]
    fn test_nul_in_tag_is_rejected() {
        let events = document(vec![Event::Scalar {
            anchor: None,
            tag: Some(Cow::Borrowed("tag:\0")),
            value: Cow::Borrowed("x"),
            plain_implicit: false,
            quoted_implicit: false,
            style: ScalarStyle::Any,
        }]);
        let err = emit_all(EmitterOptions::default(), events).unwrap_err();
        assert_eq!(err.emitter_kind(), Some(EmitterErrorKind::Emitter));
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_a_writer_error() {
        let mut emitter = YamlEmitter::new(BrokenPipe);
        emitter.emit(Event::stream_start(Encoding::Utf8)).unwrap();
        emitter.emit(Event::document_start(true)).unwrap();
        emitter.emit(scalar("value")).unwrap();
        let err = emitter.emit(Event::document_end(true)).unwrap_err();
        assert_eq!(err, Error::writer("write error: pipe closed"));
    }

    #[test]
    fn test_options_are_kept() {
        let options = EmitterOptions::new().with_indent(4).with_unicode(true);
        let emitter = YamlEmitter::with_options(Vec::new(), options.clone());
        assert_eq!(emitter.options(), &options);
    }

    #[test]
    fn test_wider_indent() {
        let yaml = emit_all(
            EmitterOptions::new().with_indent(4),
            document(vec![
                Event::block_mapping_start(),
                scalar("core"),
                Event::block_mapping_start(),
                scalar("nick"),
                scalar("wolf"),
                Event::mapping_end(),
                Event::mapping_end(),
            ]),
        )
        .unwrap();
        assert_eq!(yaml, "core:\n    nick: wolf\n");
    }
}
