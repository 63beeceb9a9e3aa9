use crate::lexer::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete Minnow program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Program {
    /// Top-level statements in the program
    pub statements: Vec<Statement>,
}

/// Statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Variable assignment: x = expr
    Assignment {
        /// Identifier token being assigned to
        target: Token,
        /// Expression value to assign
        value: Expression,
    },

    /// If statement
    If {
        /// Condition: a plain expression or a single comparison
        condition: Expression,
        /// Statements to execute if condition is true
        then_block: Block,
        /// Optional statements to execute if condition is false
        else_block: Option<Block>,
    },

    /// While loop
    While {
        /// Loop condition: a plain expression or a single comparison
        condition: Expression,
        /// Statements to execute in loop body
        body: Block,
    },

    /// Call used as a statement: f(a, b)
    FunctionCall(FunctionCall),
}

/// Ordered statements of an `if`, `else` or `while` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// Statements in source order, possibly none
    pub statements: Vec<Statement>,
}

impl Block {
    /// Number of statements directly in this block
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True for a block without statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Function call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Identifier token naming the function
    pub name: Token,
    /// Argument expressions in source order, possibly none
    pub arguments: Vec<Expression>,
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// NUMBER token used as a leaf
    Number(Token),

    /// IDENTIFIER token used as a leaf
    Identifier(Token),

    /// Arithmetic: left (+|-|*|/) right
    BinaryOperation {
        /// Left operand
        left: Box<Expression>,
        /// PLUS, MINUS, MULTIPLY or DIVIDE token
        operator: Token,
        /// Right operand
        right: Box<Expression>,
    },

    /// Comparison, only produced as the condition of `if`/`while`
    BooleanExpression {
        /// Left operand
        left: Box<Expression>,
        /// EQ, NEQ, LESS or GREATER token
        operator: Token,
        /// Right operand
        right: Box<Expression>,
    },
}

impl Expression {
    /// Leaf token of a number or identifier expression
    pub fn token(&self) -> Option<&Token> {
        match self {
            Expression::Number(token) | Expression::Identifier(token) => Some(token),
            _ => None,
        }
    }

    /// Typed operator of a binary operation
    pub fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Expression::BinaryOperation { operator, .. } => BinaryOperator::from_kind(operator.kind),
            _ => None,
        }
    }

    /// Typed operator of a boolean expression
    pub fn comparison_operator(&self) -> Option<ComparisonOperator> {
        match self {
            Expression::BooleanExpression { operator, .. } => {
                ComparisonOperator::from_kind(operator.kind)
            }
            _ => None,
        }
    }
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

/// Binding strength of arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// + -
    Sum,
    /// * /
    Product,
}

impl BinaryOperator {
    /// Operator for a PLUS, MINUS, MULTIPLY or DIVIDE token kind
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Multiply => Some(BinaryOperator::Multiply),
            TokenKind::Divide => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    /// Get operator precedence
    pub fn precedence(&self) -> Precedence {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Sum,
            BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::Product,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

/// Relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// ==
    Equal,
    /// !=
    NotEqual,
    /// <
    Less,
    /// >
    Greater,
}

impl ComparisonOperator {
    /// Operator for an EQ, NEQ, LESS or GREATER token kind
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq => Some(ComparisonOperator::Equal),
            TokenKind::Neq => Some(ComparisonOperator::NotEqual),
            TokenKind::Less => Some(ComparisonOperator::Less),
            TokenKind::Greater => Some(ComparisonOperator::Greater),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComparisonOperator::Equal => write!(f, "=="),
            ComparisonOperator::NotEqual => write!(f, "!="),
            ComparisonOperator::Less => write!(f, "<"),
            ComparisonOperator::Greater => write!(f, ">"),
        }
    }
}

// ============================================================================
// Source rendering
// ============================================================================

const INDENT: &str = "  ";

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for statement in &self.statements {
            write_statement(f, statement, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_block(f, self, 0)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name.spelling())?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(token) | Expression::Identifier(token) => {
                write!(f, "{}", token.spelling())
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            }
            | Expression::BooleanExpression {
                left,
                operator,
                right,
            } => {
                write_operand(f, left)?;
                write!(f, " {} ", operator.spelling())?;
                write_operand(f, right)
            }
        }
    }
}

/// Binary operands are always parenthesized so the rendering re-parses into
/// the same tree regardless of associativity.
fn write_operand(f: &mut fmt::Formatter, operand: &Expression) -> fmt::Result {
    match operand {
        Expression::BinaryOperation { .. } | Expression::BooleanExpression { .. } => {
            write!(f, "({})", operand)
        }
        _ => write!(f, "{}", operand),
    }
}

fn write_block(f: &mut fmt::Formatter, block: &Block, depth: usize) -> fmt::Result {
    for statement in &block.statements {
        write_statement(f, statement, depth)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter, statement: &Statement, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    match statement {
        Statement::Assignment { target, value } => {
            writeln!(f, "{}{} = {}", indent, target.spelling(), value)
        }
        Statement::FunctionCall(call) => writeln!(f, "{}{}", indent, call),
        Statement::If {
            condition,
            then_block,
            else_block,
        } => {
            writeln!(f, "{}if {}:", indent, condition)?;
            write_block(f, then_block, depth + 1)?;
            if let Some(else_block) = else_block {
                writeln!(f, "{}else:", indent)?;
                write_block(f, else_block, depth + 1)?;
            }
            Ok(())
        }
        Statement::While { condition, body } => {
            writeln!(f, "{}while {}:", indent, condition)?;
            write_block(f, body, depth + 1)
        }
    }
}
