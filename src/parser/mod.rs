//! Minnow Parser Module
//!
//! Parses the token stream into an Abstract Syntax Tree (AST) by recursive descent.

mod ast;
mod descent_parser;
mod options;

pub use ast::{
    BinaryOperator, Block, ComparisonOperator, Expression, FunctionCall, Precedence, Program,
    Statement,
};
pub use descent_parser::{parse, Parser};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
