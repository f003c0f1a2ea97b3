//! Error types for configuration parsing and YAML emission.
//!
//! ## Error Categories
//!
//! - **Input errors**: the configuration file could not be opened or parsed.
//!   These happen before any YAML is produced.
//! - **Emitter errors**: the YAML emitter rejected an event. The category
//!   ([`EmitterErrorKind`]) tells a memory problem apart from a failing output
//!   sink and from an event stream the emitter refuses to serialize.
//!
//! Errors are plain values; nothing in the library prints them. The command
//! line front end formats them once, at the outermost boundary.
//!
//! ## Examples
//!
//! ```rust
//! use iconfig2yaml::{Error, EmitterErrorKind};
//!
//! let err = Error::writer("broken pipe");
//! assert_eq!(err.emitter_kind(), Some(EmitterErrorKind::Writer));
//! assert_eq!(err.to_string(), "Writer error: broken pipe");
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Category of a failure reported by the YAML emitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmitterErrorKind {
    /// The emitter could not allocate what it needed.
    Memory,
    /// The output sink failed.
    Writer,
    /// The event stream was rejected (out-of-order events, invalid anchors, ...).
    Emitter,
}

impl fmt::Display for EmitterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmitterErrorKind::Memory => "Memory error",
            EmitterErrorKind::Writer => "Writer error",
            EmitterErrorKind::Emitter => "Emitter error",
        })
    }
}

/// Represents all possible errors raised while converting a configuration to YAML.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The emitter rejected an event.
    #[error("{kind}: {problem}")]
    Emitter {
        kind: EmitterErrorKind,
        problem: String,
    },

    /// The configuration file could not be opened.
    #[error("Unable to read configuration file: {}", path.display())]
    Open { path: PathBuf, reason: String },

    /// Syntax error in the configuration source.
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// IO error outside of the emitter's output sink.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an emitter error of the given category.
    pub fn emitter(kind: EmitterErrorKind, problem: &str) -> Self {
        Error::Emitter {
            kind,
            problem: problem.to_string(),
        }
    }

    /// Creates a memory error, the only problem text libyaml ever reports for it.
    pub fn memory() -> Self {
        Self::emitter(EmitterErrorKind::Memory, "Not enough memory for emitting")
    }

    /// Creates a writer error for a failing output sink.
    pub fn writer(problem: &str) -> Self {
        Self::emitter(EmitterErrorKind::Writer, problem)
    }

    /// Creates an error for an event the emitter refuses to serialize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iconfig2yaml::Error;
    ///
    /// let err = Error::rejected("expected STREAM-START");
    /// assert!(err.to_string().starts_with("Emitter error"));
    /// ```
    pub fn rejected(problem: &str) -> Self {
        Self::emitter(EmitterErrorKind::Emitter, problem)
    }

    /// Creates an error for a configuration file that cannot be opened.
    pub fn open(path: impl Into<PathBuf>, reason: &str) -> Self {
        Error::Open {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iconfig2yaml::Error;
    ///
    /// let err = Error::syntax(10, 5, "expected '='");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the emitter category when this error came from the emitter.
    #[must_use]
    pub fn emitter_kind(&self) -> Option<EmitterErrorKind> {
        match self {
            Error::Emitter { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` for errors detected before any YAML was produced.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Open { .. } | Error::Syntax { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitter_messages() {
        assert_eq!(
            Error::memory().to_string(),
            "Memory error: Not enough memory for emitting"
        );
        assert_eq!(
            Error::writer("write error").to_string(),
            "Writer error: write error"
        );
        assert_eq!(
            Error::rejected("expected SCALAR").to_string(),
            "Emitter error: expected SCALAR"
        );
    }

    #[test]
    fn test_emitter_kind() {
        assert_eq!(Error::memory().emitter_kind(), Some(EmitterErrorKind::Memory));
        assert_eq!(Error::syntax(1, 1, "x").emitter_kind(), None);
        assert!(Error::open("/nope", "missing").is_input_error());
        assert!(!Error::rejected("x").is_input_error());
    }

    #[test]
    fn test_open_message_names_path() {
        let err = Error::open("/etc/irssi.conf", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Unable to read configuration file: /etc/irssi.conf"
        );
    }
}
