//! Loading irssi configuration files.

use crate::parser::Parser;
use crate::{ConfigNode, Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What [`ConfigFile::open`] does when the file does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Fail with [`Error::Open`].
    #[default]
    Never,
    /// Create an empty file. `mode` holds the permission bits applied on unix.
    Create { mode: u32 },
}

/// The source text of a configuration, ready to be parsed.
///
/// # Examples
///
/// ```rust
/// use iconfig2yaml::{ConfigFile, ConfigNode};
///
/// let config = ConfigFile::from_source("inline", "nick = wolf;");
/// let root = config.parse().unwrap();
/// assert_eq!(root, ConfigNode::anonymous_block(vec![ConfigNode::key("nick", "wolf")]));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigFile {
    name: String,
    path: Option<PathBuf>,
    source: String,
}

impl ConfigFile {
    /// Reads the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] when the file cannot be read, or cannot be
    /// created under [`CreateMode::Create`].
    pub fn open(path: impl AsRef<Path>, mode: CreateMode) -> Result<Self> {
        let path = path.as_ref();
        let source = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => match mode {
                CreateMode::Never => return Err(Error::open(path, &e.to_string())),
                CreateMode::Create { mode } => {
                    create_empty(path, mode).map_err(|e| Error::open(path, &e.to_string()))?;
                    debug!("created empty configuration file {}", path.display());
                    String::new()
                }
            },
            Err(e) => return Err(Error::open(path, &e.to_string())),
        };

        debug!("read {} bytes from {}", source.len(), path.display());
        Ok(ConfigFile {
            name: path.display().to_string(),
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Wraps configuration text that did not come from a file.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        ConfigFile {
            name: name.into(),
            path: None,
            source: source.into(),
        }
    }

    /// Parses the source into a tree rooted at the main node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] for malformed input.
    pub fn parse(&self) -> Result<ConfigNode> {
        let root = Parser::from_str(&self.source).parse()?;
        debug!(
            "parsed {}: {} top-level entries",
            self.name,
            root.children().len()
        );
        Ok(root)
    }

    /// The file this configuration was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Display name: the path as given, or the name passed to `from_source`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(unix)]
fn create_empty(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(mode)
        .open(path)
        .map(drop)
}

#[cfg(not(unix))]
fn create_empty(path: &Path, _mode: u32) -> io::Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(drop)
}
