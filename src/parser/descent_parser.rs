use super::ast::{Block, Expression, FunctionCall, Program, Statement};
use super::options::ParseOptions;
use crate::error::{Production, SyntaxError};
use crate::lexer::{Token, TokenKind};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Recursive-descent parser, one method per grammar production
///
/// ```text
/// program            → statement*
/// statement          → assignment | function_call | if | while
/// assignment         → IDENTIFIER "=" expression
/// if                 → "if" boolean_expression ":" block ( "else" ":" block )?
/// while              → "while" boolean_expression ":" block
/// block              → statement*                    (until EOF or ELSE)
/// boolean_expression → expression ( ("==" | "!=" | "<" | ">") expression )?
/// expression         → term ( ("+" | "-") term )*
/// term               → factor ( ("*" | "/") factor )*
/// factor             → NUMBER | IDENTIFIER | "(" expression ")"
/// function_call      → IDENTIFIER "(" ( expression ( "," expression )* )? ")"
/// ```
///
/// A condition holds at most one comparison, so `a < b < c` is rejected.
/// Parentheses only group arithmetic; `(a < b)` is not an expression.
pub struct Parser {
    /// Tokens after the current one, consumed from the front
    tokens: VecDeque<Token>,
    /// One-token lookahead
    current: Token,
    /// Nesting of blocks and parentheses entered so far
    depth: usize,
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser over a token sequence with default options
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    /// Creates a parser over a token sequence
    pub fn with_options(tokens: Vec<Token>, options: ParseOptions) -> Self {
        let mut tokens = VecDeque::from(tokens);
        let current = tokens.pop_front().unwrap_or_else(|| Token::eof(0, 1, 1));
        Parser {
            tokens,
            current,
            depth: 0,
            options,
        }
    }

    /// Parses the tokens into a program. The first error aborts the parse.
    pub fn parse(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        while self.current.kind != TokenKind::Eof {
            let line = self.current.line;
            let statement = self.statement()?;
            tracing::trace!(line, "parsed top-level statement");
            statements.push(statement);
        }

        tracing::debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    /// Parses a single arithmetic expression spanning all remaining tokens
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let expression = self.expression()?;
        self.expect(TokenKind::Eof)?;
        Ok(expression)
    }

    /// Parses a single condition (expression with at most one comparison)
    /// spanning all remaining tokens
    pub fn parse_condition(&mut self) -> Result<Expression> {
        let condition = self.boolean_expression()?;
        self.expect(TokenKind::Eof)?;
        Ok(condition)
    }

    // Statements

    fn statement(&mut self) -> Result<Statement> {
        match self.current.kind {
            // An identifier starts both assignments and calls
            TokenKind::Identifier => match self.peek() {
                Some(TokenKind::Equals) => self.assignment(),
                Some(TokenKind::LParen) => Ok(Statement::FunctionCall(self.function_call()?)),
                _ => Err(SyntaxError::Unexpected {
                    production: Production::Statement,
                    found: self.following_token(),
                }),
            },
            TokenKind::If => {
                self.advance();
                self.if_statement()
            }
            TokenKind::While => {
                self.advance();
                self.while_statement()
            }
            _ => Err(SyntaxError::Unexpected {
                production: Production::Statement,
                found: self.current.clone(),
            }),
        }
    }

    fn assignment(&mut self) -> Result<Statement> {
        let target = self.advance();
        self.consume(TokenKind::Equals)?;
        let value = self.expression()?;
        Ok(Statement::Assignment { target, value })
    }

    fn if_statement(&mut self) -> Result<Statement> {
        let condition = self.boolean_expression()?;
        self.consume(TokenKind::Colon)?;
        let then_block = self.nested(Self::block)?;

        let else_block = if self.current.kind == TokenKind::Else {
            self.advance();
            self.consume(TokenKind::Colon)?;
            Some(self.nested(Self::block)?)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_block,
            else_block,
        })
    }

    fn while_statement(&mut self) -> Result<Statement> {
        let condition = self.boolean_expression()?;
        self.consume(TokenKind::Colon)?;
        let body = self.nested(Self::block)?;
        Ok(Statement::While { condition, body })
    }

    /// Blocks have no terminator of their own: they run to EOF or the next ELSE
    fn block(&mut self) -> Result<Block> {
        let mut statements = Vec::new();
        while !matches!(self.current.kind, TokenKind::Eof | TokenKind::Else) {
            statements.push(self.statement()?);
        }
        Ok(Block { statements })
    }

    fn function_call(&mut self) -> Result<FunctionCall> {
        let name = self.advance();
        self.consume(TokenKind::LParen)?;
        let arguments = self.arg_list()?;
        self.consume(TokenKind::RParen)?;
        Ok(FunctionCall { name, arguments })
    }

    fn arg_list(&mut self) -> Result<Vec<Expression>> {
        let mut arguments = Vec::new();
        if self.current.kind != TokenKind::RParen {
            arguments.push(self.expression()?);
            while self.current.kind == TokenKind::Comma {
                self.advance();
                arguments.push(self.expression()?);
            }
        }
        Ok(arguments)
    }

    // Expressions

    fn boolean_expression(&mut self) -> Result<Expression> {
        let left = self.expression()?;
        if !self.current.kind.is_comparison() {
            return Ok(left);
        }

        let operator = self.advance();
        let right = self.expression()?;
        Ok(Expression::BooleanExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut left = self.term()?;
        while self.current.kind.is_additive() {
            let operator = self.advance();
            let right = self.term()?;
            left = Expression::BinaryOperation {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expression> {
        let mut left = self.factor()?;
        while self.current.kind.is_multiplicative() {
            let operator = self.advance();
            let right = self.factor()?;
            left = Expression::BinaryOperation {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expression> {
        match self.current.kind {
            TokenKind::Number => Ok(Expression::Number(self.advance())),
            TokenKind::Identifier => Ok(Expression::Identifier(self.advance())),
            TokenKind::LParen => self.nested(|parser| {
                parser.advance();
                let expression = parser.expression()?;
                parser.consume(TokenKind::RParen)?;
                Ok(expression)
            }),
            _ => Err(SyntaxError::Unexpected {
                production: Production::Factor,
                found: self.current.clone(),
            }),
        }
    }

    // Helper methods

    /// Consumes the current token and loads the next one. Past the end of
    /// the sequence the current token stays EOF.
    fn advance(&mut self) -> Token {
        let next = match self.tokens.pop_front() {
            Some(token) => token,
            None => Token::eof(self.current.offset, self.current.line, self.current.column),
        };
        std::mem::replace(&mut self.current, next)
    }

    /// Kind of the token after the current one
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.front().map(|token| token.kind)
    }

    /// Token after the current one, or an EOF marker at the current position
    fn following_token(&self) -> Token {
        match self.tokens.front() {
            Some(token) => token.clone(),
            None => Token::eof(self.current.offset, self.current.line, self.current.column),
        }
    }

    /// Checks the current token's kind without consuming it
    fn expect(&self, kind: TokenKind) -> Result<()> {
        if self.current.kind == kind {
            Ok(())
        } else {
            Err(SyntaxError::Expected {
                expected: kind,
                found: self.current.clone(),
            })
        }
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token> {
        self.expect(kind)?;
        Ok(self.advance())
    }

    /// Runs a production one nesting level deeper
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.options.max_depth,
                found: self.current.clone(),
            });
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }
}

/// Parses a complete token sequence with default options
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse()
}
