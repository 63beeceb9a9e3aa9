use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

lazy_static::lazy_static! {
    /// Reserved words, matched against the whole identifier run
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut keywords = HashMap::new();
        keywords.insert("if", TokenKind::If);
        keywords.insert("else", TokenKind::Else);
        keywords.insert("while", TokenKind::While);
        keywords
    };
}

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Identifier/keyword text or decoded integer; `None` for punctuation and EOF
    pub value: Option<TokenValue>,
    /// Character offset of the first character (0-indexed)
    pub offset: usize,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(
        kind: TokenKind,
        value: Option<TokenValue>,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Token {
            kind,
            value,
            offset,
            line,
            column,
        }
    }

    /// Creates an end-of-input marker at the given position
    pub fn eof(offset: usize, line: usize, column: usize) -> Self {
        Token::new(TokenKind::Eof, None, offset, line, column)
    }

    /// Text value of an identifier or keyword token
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Decoded value of a number token
    pub fn integer(&self) -> Option<u64> {
        match self.value {
            Some(TokenValue::Integer(n)) => Some(n),
            _ => None,
        }
    }

    /// How the token is written in source. Numbers are rendered in decimal,
    /// EOF is empty.
    pub fn spelling(&self) -> Cow<'_, str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Cow::Borrowed(text.as_str()),
            Some(TokenValue::Integer(n)) => Cow::Owned(n.to_string()),
            None => Cow::Borrowed(self.kind.symbol().unwrap_or("")),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.kind, &self.value) {
            (TokenKind::Eof, _) => write!(f, "EOF"),
            (kind, Some(value)) => write!(f, "{} `{}`", kind, value),
            (kind, None) => write!(f, "{} `{}`", kind, self.spelling()),
        }
    }
}

/// Payload carried by value-bearing tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Identifier or keyword spelling
    Text(String),
    /// Decoded non-negative integer literal
    Integer(u64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// All possible token types. The upper-case names are part of the public
/// interface and are preserved in `Display` and serde output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    // Literals
    /// Identifier
    Identifier,
    /// Non-negative integer literal
    Number,

    // Keywords
    /// IF keyword
    If,
    /// ELSE keyword
    Else,
    /// WHILE keyword
    While,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Multiply operator (*)
    Multiply,
    /// Divide operator (/)
    Divide,
    /// Assignment operator (=)
    Equals,
    /// Equality operator (==)
    Eq,
    /// Inequality operator (!=)
    Neq,
    /// Less than operator (<)
    Less,
    /// Greater than operator (>)
    Greater,

    // Delimiters
    /// Comma delimiter
    Comma,
    /// Colon introducing a block
    Colon,
    /// Left parenthesis (
    LParen,
    /// Right parenthesis )
    RParen,

    // Special
    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Exact upper-case name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Equals => "EQUALS",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eof => "EOF",
        }
    }

    /// Fixed spelling of operator and delimiter kinds
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Multiply => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::Equals => Some("="),
            TokenKind::Eq => Some("=="),
            TokenKind::Neq => Some("!="),
            TokenKind::Less => Some("<"),
            TokenKind::Greater => Some(">"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Eof => None,
        }
    }

    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::If | TokenKind::Else | TokenKind::While)
    }

    /// `+` or `-`
    pub fn is_additive(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    /// `*` or `/`
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, TokenKind::Multiply | TokenKind::Divide)
    }

    /// Relational operators accepted in a condition
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Eq | TokenKind::Neq | TokenKind::Less | TokenKind::Greater
        )
    }

    /// Get keyword from string. Only an exact, case-sensitive match counts.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.get(s).copied()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
