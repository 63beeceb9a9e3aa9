//! # Minnow - front end for a small imperative language
//!
//! Minnow turns source text into an abstract syntax tree in two stages: a
//! scanner producing a flat token stream and a recursive-descent parser
//! building the tree. What happens to the tree afterwards (evaluation,
//! compilation, pretty printing) is up to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use minnow::{parse_source, Statement};
//!
//! # fn main() -> minnow::Result<()> {
//! let program = parse_source("x = 1\nprint(x + 2)")?;
//!
//! assert_eq!(program.statements.len(), 2);
//! assert!(matches!(program.statements[1], Statement::FunctionCall(_)));
//! # Ok(())
//! # }
//! ```
//!
//! ### Running the stages separately
//!
//! ```rust
//! use minnow::{Parser, Scanner, TokenKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scanner = Scanner::new("if x < 2:\n  y = x + 1\nelse:\n  y = x - 1\n");
//! let tokens = scanner.scan_tokens()?;
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//!
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse()?;
//! assert_eq!(program.statements.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Assignment**: `name = expression`
//! - **Call statement**: `name(arg, ...)`
//! - **Conditionals**: `if condition: block` with optional `else: block`
//! - **Loops**: `while condition: block`
//! - **Expressions**: non-negative integers, names, `+ - * /` with the usual
//!   precedence (left-associative) and parentheses
//! - **Conditions**: an expression, optionally compared once with `== != < >`
//!
//! Blocks have no closing keyword and indentation is not significant: a
//! block extends to the end of the input or to the next `else`.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST
//! ```
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Parser`] - Parses tokens into an Abstract Syntax Tree
//! - [`Program`] - The AST root handed to the caller
//!
//! ## Error Handling
//!
//! Both stages stop at the first problem. Scanner failures are [`LexError`]s,
//! parser failures are [`SyntaxError`]s; [`parse_source`] wraps either in
//! [`Error`]:
//!
//! ```rust
//! use minnow::{parse_source, Error};
//!
//! match parse_source("x = 1 !") {
//!     Err(Error::Lex(e)) => assert!(e.to_string().contains("Illegal character '!'")),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//!
//! match parse_source("if a < b < c:\n  x = 1") {
//!     Err(Error::Syntax(e)) => assert!(e.help().is_some()),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

/// Version of the Minnow front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, LexError, Production, Result, SyntaxError};
pub use lexer::{tokenize, Scanner, Token, TokenKind, TokenValue};
pub use parser::{
    parse, BinaryOperator, Block, ComparisonOperator, Expression, FunctionCall, ParseOptions,
    Parser, Program, Statement,
};

/// Tokenizes and parses source text with default options
pub fn parse_source(source: &str) -> Result<Program> {
    parse_source_with(source, ParseOptions::default())
}

/// Tokenizes and parses source text
pub fn parse_source_with(source: &str, options: ParseOptions) -> Result<Program> {
    let tokens = tokenize(source).map_err(|err| {
        tracing::debug!(error = %err, "tokenization failed");
        err
    })?;

    Parser::with_options(tokens, options).parse().map_err(|err| {
        tracing::debug!(error = %err, "parse failed");
        Error::from(err)
    })
}
