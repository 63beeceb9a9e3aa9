//! Lexical analysis for Minnow
//!
//! Converts source text into a flat stream of tokens terminated by `EOF`.

mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind, TokenValue};
