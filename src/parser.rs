//! Irssi configuration parsing.
//!
//! The [`Parser`] turns the text of an irssi configuration file into a
//! [`ConfigNode`] tree. The whole file is the body of the main node, an
//! anonymous block.
//!
//! ## Grammar
//!
//! ```text
//! block body:  { key "=" value [";" | ","] | comment }
//! list body:   { item [";" | ","] | comment }
//! value:       string | word | "{" block body "}" | "(" list body ")"
//! item:        string | word | "{" block body "}" | "(" list body ")"
//! key:         string | word
//! comment:     "#" to end of line
//! ```
//!
//! Strings are either double quoted, with `\\ \" \n \t \r \b \f` escapes, or
//! single quoted and taken verbatim. A word is any run of characters other
//! than whitespace and `= ; , { } ( ) # " '`.
//!
//! ## Usage
//!
//! ```rust
//! use iconfig2yaml::parser::parse;
//! use iconfig2yaml::ConfigNode;
//!
//! let root = parse("settings = { core = { nick = \"wolf\"; }; };").unwrap();
//! assert_eq!(
//!     root,
//!     ConfigNode::anonymous_block(vec![ConfigNode::block(
//!         "settings",
//!         vec![ConfigNode::block("core", vec![ConfigNode::key("nick", "wolf")])],
//!     )])
//! );
//! ```

use crate::{ConfigNode, Error, Result};

/// Parses a complete configuration source.
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the line and column of the first problem.
pub fn parse(input: &str) -> Result<ConfigNode> {
    Parser::from_str(input).parse()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Container {
    Block,
    List,
}

impl Container {
    fn opener(self) -> char {
        match self {
            Container::Block => '{',
            Container::List => '(',
        }
    }

    fn closer(self) -> char {
        match self {
            Container::Block => '}',
            Container::List => ')',
        }
    }
}

/// Result of parsing one block entry or list item.
enum Parsed {
    Node(ConfigNode),
    Open(Frame),
}

/// A container still being filled.
struct Frame {
    container: Container,
    key: Option<String>,
    children: Vec<ConfigNode>,
    line: usize,
    column: usize,
}

impl Frame {
    fn into_node(self) -> ConfigNode {
        match self.container {
            Container::Block => ConfigNode::Block {
                key: self.key,
                children: self.children,
            },
            Container::List => ConfigNode::List {
                key: self.key,
                children: self.children,
            },
        }
    }
}

/// The irssi configuration parser.
///
/// Tracks line and column for error reporting. Nested containers are kept on
/// an explicit stack, so nesting depth is bounded only by memory.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, char::is_whitespace) {
            self.next_char();
        }
    }

    /// Skips whitespace and the optional `;` and `,` separators.
    fn skip_separators(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() || ch == ';' || ch == ',' {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    fn describe(ch: Option<char>) -> String {
        match ch {
            Some(ch) => format!("'{}'", ch),
            None => "end of file".to_string(),
        }
    }

    fn is_word_char(ch: char) -> bool {
        !ch.is_whitespace() && !matches!(ch, '=' | ';' | ',' | '{' | '}' | '(' | ')' | '#' | '"' | '\'')
    }

    /// Reads a comment; the leading `#` has not been consumed yet.
    fn parse_comment(&mut self) -> ConfigNode {
        self.next_char();
        let start = self.position;
        while self.peek_char().map_or(false, |ch| ch != '\n') {
            self.next_char();
        }
        let text = self.input[start..self.position].trim_end_matches('\r');
        ConfigNode::comment(text)
    }

    fn parse_double_quoted(&mut self) -> Result<String> {
        let (line, column) = (self.line, self.column);
        self.next_char();

        let mut result = String::new();
        loop {
            match self.next_char() {
                Some('"') => return Ok(result),
                Some('\\') => match self.next_char() {
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('r') => result.push('\r'),
                    Some('b') => result.push('\u{08}'),
                    Some('f') => result.push('\u{0C}'),
                    Some(other) => result.push(other),
                    None => break,
                },
                Some(ch) => result.push(ch),
                None => break,
            }
        }
        Err(Error::syntax(line, column, "unterminated string"))
    }

    fn parse_single_quoted(&mut self) -> Result<String> {
        let (line, column) = (self.line, self.column);
        self.next_char();

        let start = self.position;
        while let Some(ch) = self.next_char() {
            if ch == '\'' {
                return Ok(self.input[start..self.position - 1].to_string());
            }
        }
        Err(Error::syntax(line, column, "unterminated string"))
    }

    fn parse_word(&mut self) -> String {
        let start = self.position;
        while self.peek_char().map_or(false, Self::is_word_char) {
            self.next_char();
        }
        self.input[start..self.position].to_string()
    }

    /// Reads a string or a bare word. Returns `None` when neither starts here.
    fn parse_scalar(&mut self) -> Result<Option<String>> {
        match self.peek_char() {
            Some('"') => self.parse_double_quoted().map(Some),
            Some('\'') => self.parse_single_quoted().map(Some),
            Some(ch) if Self::is_word_char(ch) => Ok(Some(self.parse_word())),
            _ => Ok(None),
        }
    }

    fn container_at(&self) -> Option<Container> {
        match self.peek_char() {
            Some('{') => Some(Container::Block),
            Some('(') => Some(Container::List),
            _ => None,
        }
    }

    /// Consumes the opening bracket of `container`.
    fn open(&mut self, container: Container, key: Option<String>) -> Frame {
        let frame = Frame {
            container,
            key,
            children: Vec::new(),
            line: self.line,
            column: self.column,
        };
        self.next_char();
        frame
    }

    /// Parses `key = value` inside a block.
    fn parse_entry(&mut self) -> Result<Parsed> {
        let Some(key) = self.parse_scalar()? else {
            return Err(self.error(&format!(
                "expected key, found {}",
                Self::describe(self.peek_char())
            )));
        };

        self.skip_whitespace();
        if self.peek_char() != Some('=') {
            return Err(self.error(&format!("expected '=' after key '{}'", key)));
        }
        self.next_char();
        self.skip_whitespace();

        if let Some(container) = self.container_at() {
            return Ok(Parsed::Open(self.open(container, Some(key))));
        }
        match self.parse_scalar()? {
            Some(value) => Ok(Parsed::Node(ConfigNode::Key { key, value })),
            None => Err(self.error(&format!("expected value for key '{}'", key))),
        }
    }

    /// Parses one element of a list.
    fn parse_item(&mut self) -> Result<Parsed> {
        if let Some(container) = self.container_at() {
            return Ok(Parsed::Open(self.open(container, None)));
        }
        match self.parse_scalar()? {
            Some(value) => Ok(Parsed::Node(ConfigNode::value(value))),
            None => Err(self.error(&format!(
                "unexpected {}",
                Self::describe(self.peek_char())
            ))),
        }
    }

    /// Parses the whole input as the body of the main node.
    pub fn parse(&mut self) -> Result<ConfigNode> {
        let mut stack = vec![Frame {
            container: Container::Block,
            key: None,
            children: Vec::new(),
            line: 1,
            column: 1,
        }];

        loop {
            self.skip_separators();
            let depth = stack.len();
            let Some(frame) = stack.last() else {
                return Err(self.error("parser stack is empty"));
            };
            let container = frame.container;

            let parsed = match self.peek_char() {
                Some('#') => Parsed::Node(self.parse_comment()),
                None if depth == 1 => break,
                None => {
                    return Err(Error::syntax(
                        frame.line,
                        frame.column,
                        &format!("unclosed '{}'", container.opener()),
                    ));
                }
                Some(close @ ('}' | ')')) => {
                    if depth == 1 || close != container.closer() {
                        return Err(self.error(&format!("unexpected '{}'", close)));
                    }
                    self.next_char();
                    match stack.pop() {
                        Some(done) => Parsed::Node(done.into_node()),
                        None => continue,
                    }
                }
                Some(_) => match container {
                    Container::Block => self.parse_entry()?,
                    Container::List => self.parse_item()?,
                },
            };

            match parsed {
                Parsed::Open(frame) => stack.push(frame),
                Parsed::Node(node) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    }
                }
            }
        }

        stack
            .pop()
            .map(Frame::into_node)
            .ok_or_else(|| self.error("parser stack is empty"))
    }
}
