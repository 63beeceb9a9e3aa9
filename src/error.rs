//! Error types for the Minnow front end

use crate::lexer::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// Scanner errors. The first one aborts tokenization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Character that cannot start any token
    ///
    /// **Triggered by:** Symbols outside the language, non-ASCII letters,
    /// or a `!` that is not followed by `=`
    /// **Example:** `x = 1 # 2`, `if !done:`
    #[error("Illegal character '{character}' at position {offset} (line {line}, column {column})")]
    IllegalCharacter {
        /// The offending character
        character: char,
        /// Character offset (0-indexed)
        offset: usize,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },

    /// Integer literal larger than `u64::MAX`
    #[error("Integer literal {literal} out of range at position {offset} (line {line}, column {column})")]
    IntegerOutOfRange {
        /// Digits as written in source
        literal: String,
        /// Character offset of the first digit (0-indexed)
        offset: usize,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },
}

impl LexError {
    /// Character offset where the error occurred
    pub fn offset(&self) -> usize {
        match self {
            LexError::IllegalCharacter { offset, .. } | LexError::IntegerOutOfRange { offset, .. } => {
                *offset
            }
        }
    }
}

/// Grammar production that rejected a token during dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    /// Start of a statement, or the token following a leading identifier
    Statement,
    /// Operand position inside an expression
    Factor,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Production::Statement => write!(f, "statement"),
            Production::Factor => write!(f, "factor"),
        }
    }
}

/// Parser errors. The first one aborts the parse; no partial tree is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Current token does not have the kind the production requires
    ///
    /// **Example:** `while x < 3 y = 1` (missing `:` after the condition)
    #[error("Syntax error at line {}, column {}: expected {expected}, found {found}", .found.line, .found.column)]
    Expected {
        /// Kind the production required
        expected: TokenKind,
        /// Token actually present
        found: Token,
    },

    /// No alternative of a production starts with the current token
    ///
    /// **Example:** `x + 1` at statement level, `y = * 2`
    #[error("Syntax error at line {}, column {}: unexpected {found} in {production}", .found.line, .found.column)]
    Unexpected {
        /// Production whose alternatives were exhausted
        production: Production,
        /// Token that matched none of them
        found: Token,
    },

    /// Blocks or parentheses nested deeper than the configured limit
    #[error("Syntax error at line {}, column {}: nesting exceeds the limit of {limit} levels", .found.line, .found.column)]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
        /// Token at which the limit was exceeded
        found: Token,
    },
}

impl SyntaxError {
    /// Token the error is reported at
    pub fn token(&self) -> &Token {
        match self {
            SyntaxError::Expected { found, .. }
            | SyntaxError::Unexpected { found, .. }
            | SyntaxError::NestingTooDeep { found, .. } => found,
        }
    }

    /// Hint for the most common mistakes, if one applies
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SyntaxError::Expected {
                expected: TokenKind::Colon,
                found,
            } if found.kind.is_comparison() => Some(
                "Comparisons cannot be chained: a condition holds at most one of `==`, `!=`, `<`, `>`.",
            ),
            SyntaxError::Expected {
                expected: TokenKind::Colon,
                ..
            } => Some("`if`, `else` and `while` must be followed by `:` before the block."),
            SyntaxError::Expected {
                expected: TokenKind::RParen,
                ..
            } => Some("Missing closing `)` for an earlier opening `(`."),
            SyntaxError::Unexpected {
                production: Production::Statement,
                ..
            } => Some(
                "A statement is an assignment `name = expr`, a call `name(args)`, `if` or `while`.",
            ),
            SyntaxError::Unexpected {
                production: Production::Factor,
                found,
            } if found.kind.is_comparison() => {
                Some("Comparisons are only allowed directly in `if` and `while` conditions.")
            }
            SyntaxError::Unexpected {
                production: Production::Factor,
                ..
            } => Some("Expected a number, a name or a parenthesized expression."),
            SyntaxError::Expected { .. } | SyntaxError::NestingTooDeep { .. } => None,
        }
    }
}

/// Any failure of the front end
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tokenization failed
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Line and column of the offending input
    pub fn position(&self) -> (usize, usize) {
        match self {
            Error::Lex(LexError::IllegalCharacter { line, column, .. })
            | Error::Lex(LexError::IntegerOutOfRange { line, column, .. }) => (*line, *column),
            Error::Syntax(err) => (err.token().line, err.token().column),
        }
    }
}

/// Result type for Minnow operations
pub type Result<T> = std::result::Result<T, Error>;
