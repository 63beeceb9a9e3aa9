use super::token::{Token, TokenKind, TokenValue};
use crate::error::LexError;

/// Scanner for Minnow source text
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Line where the current token starts
    start_line: usize,
    /// Column where the current token starts
    start_column: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Scans all remaining tokens. The result always ends with exactly one EOF.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tracing::debug!(tokens = tokens.len(), "scanned source");
        Ok(tokens)
    }

    /// Scans the next token. Once the input is exhausted every call returns EOF.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.mark_start();

        if self.is_at_end() {
            return Ok(Token::eof(self.current, self.line, self.column));
        }

        let c = self.advance();

        match c {
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.scan_identifier_or_keyword()),
            c if c.is_ascii_digit() => self.scan_number(),

            // Operators
            '+' => Ok(self.make_token(TokenKind::Plus)),
            '-' => Ok(self.make_token(TokenKind::Minus)),
            '*' => Ok(self.make_token(TokenKind::Multiply)),
            '/' => Ok(self.make_token(TokenKind::Divide)),
            '<' => Ok(self.make_token(TokenKind::Less)),
            '>' => Ok(self.make_token(TokenKind::Greater)),
            '=' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::Eq))
                } else {
                    Ok(self.make_token(TokenKind::Equals))
                }
            }
            '!' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::Neq))
                } else {
                    Err(self.illegal_character('!'))
                }
            }

            // Delimiters
            ',' => Ok(self.make_token(TokenKind::Comma)),
            ':' => Ok(self.make_token(TokenKind::Colon)),
            '(' => Ok(self.make_token(TokenKind::LParen)),
            ')' => Ok(self.make_token(TokenKind::RParen)),

            _ => Err(self.illegal_character(c)),
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_blank(self.peek()) {
            self.advance();
        }
    }

    fn scan_identifier_or_keyword(&mut self) -> Token {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = self.lexeme();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        self.make_valued_token(kind, TokenValue::Text(text))
    }

    fn scan_number(&mut self) -> Result<Token, LexError> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let text = self.lexeme();
        let value: u64 = text.parse().map_err(|_| LexError::IntegerOutOfRange {
            literal: text.clone(),
            offset: self.start,
            line: self.start_line,
            column: self.start_column,
        })?;

        Ok(self.make_valued_token(TokenKind::Number, TokenValue::Integer(value)))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    fn mark_start(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, None, self.start, self.start_line, self.start_column)
    }

    fn make_valued_token(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::new(
            kind,
            Some(value),
            self.start,
            self.start_line,
            self.start_column,
        )
    }

    fn illegal_character(&self, character: char) -> LexError {
        LexError::IllegalCharacter {
            character,
            offset: self.start,
            line: self.start_line,
            column: self.start_column,
        }
    }
}

/// ASCII whitespace, including vertical tab
fn is_blank(c: char) -> bool {
    c.is_ascii() && c.is_whitespace()
}

/// Tokenizes a complete source text
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).scan_tokens()
}
