//! Configuration options for the YAML emitter.
//!
//! ## Examples
//!
//! ```rust
//! use iconfig2yaml::{to_string_with_options, ConfigNode, EmitterOptions};
//!
//! let root = ConfigNode::anonymous_block(vec![ConfigNode::key("a", "1")]);
//!
//! let yaml = to_string_with_options(&root, EmitterOptions::new()).unwrap();
//! assert_eq!(yaml, "a: 1\n");
//!
//! let canonical = to_string_with_options(&root, EmitterOptions::canonical()).unwrap();
//! assert!(canonical.starts_with("---"));
//! ```

/// Configuration options for YAML emission.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::EmitterOptions;
///
/// // Block style, ASCII-only output
/// let options = EmitterOptions::new();
///
/// // Fully explicit output
/// let options = EmitterOptions::canonical();
///
/// // Custom configuration
/// let options = EmitterOptions::new()
///     .with_unicode(true)
///     .with_indent(4)
///     .with_width(120);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Emit YAML's canonical form: explicit `---`, flow collections, tags, quoted scalars.
    pub canonical: bool,
    /// Write non-ASCII characters as-is instead of escaping them.
    pub unicode: bool,
    pub indent: usize,
    /// Preferred line width; long scalars are folded at spaces past it.
    pub width: usize,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        EmitterOptions {
            canonical: false,
            unicode: false,
            indent: 2,
            width: 80,
        }
    }
}

impl EmitterOptions {
    /// Creates default options (block style, 2-space indent, width 80, ASCII output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iconfig2yaml::EmitterOptions;
    ///
    /// let options = EmitterOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.canonical);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for canonical output.
    #[must_use]
    pub fn canonical() -> Self {
        EmitterOptions {
            canonical: true,
            ..Default::default()
        }
    }

    /// Turns canonical output on or off.
    #[must_use]
    pub fn with_canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    /// Writes non-ASCII characters unescaped when set.
    #[must_use]
    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    /// Sets the indentation size. Values outside `2..=9` fall back to 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iconfig2yaml::EmitterOptions;
    ///
    /// assert_eq!(EmitterOptions::new().with_indent(4).indent, 4);
    /// assert_eq!(EmitterOptions::new().with_indent(12).indent, 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = if (2..=9).contains(&indent) { indent } else { 2 };
        self
    }

    /// Sets the preferred line width. Values not above twice the indent
    /// fall back to 80.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}
