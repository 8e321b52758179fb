//! Recursive descent parser for arithmetic expressions
//!
//! Grammar (left-associative binary operators, standard precedence):
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := NUMBER | '(' expression ')'
//! ```
//!
//! Precedence is encoded structurally (`term` nested inside `expression`,
//! `factor` inside `term`); associativity by the left-fold in each loop, so
//! `8 - 3 - 2` parses as `(8 - 3) - 2`. The parser holds one token of
//! lookahead, refilled from the [`Lexer`] on each successful consumption, and
//! requires the stream to land on `End` after the top-level expression —
//! trailing tokens are an error rather than silently ignored.

use crate::ast::{BinOp, Expr};
use crate::lexer::{LexError, Lexer, Token, TokenKind};
use std::fmt;

/// Parser error type
///
/// Every variant is terminal for the current parse; there is no recovery or
/// resynchronization past the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `consume` expected one token kind and found another.
    UnexpectedToken { expected: TokenKind, found: Token },
    /// Factor position held neither a number nor `(`.
    UnexpectedFactor { found: Token },
    /// A digit run too large for an `i64` literal.
    LiteralOutOfRange { text: String, position: usize },
    /// The lexer hit an unrecognized character.
    Lex(LexError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(
                    f,
                    "Parse error at offset {}: expected {}, found {}",
                    found.position, expected, found
                )
            }
            ParseError::UnexpectedFactor { found } => {
                write!(
                    f,
                    "Parse error at offset {}: expected a number or '(', found {}",
                    found.position, found
                )
            }
            ParseError::LiteralOutOfRange { text, position } => {
                write!(
                    f,
                    "Parse error at offset {}: integer literal '{}' out of range",
                    position, text
                )
            }
            ParseError::Lex(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// Recursive descent parser over a lazy token stream.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Create a parser for the given input, priming the one-token lookahead.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the input as a single expression.
    ///
    /// Consumes the full token stream: anything left after the top-level
    /// expression is a [`ParseError::UnexpectedToken`] naming `End`.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        self.consume(TokenKind::End)?;
        Ok(expr)
    }

    /// expression := term (('+' | '-') term)*
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.consume(self.current.kind)?;
            let right = self.parse_term()?;
            node = Expr::Binary {
                op,
                left: Box::new(node),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.consume(self.current.kind)?;
            let right = self.parse_factor()?;
            node = Expr::Binary {
                op,
                left: Box::new(node),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// factor := NUMBER | '(' expression ')'
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.consume(TokenKind::Number)?;
                let value = token.text.parse::<i64>().map_err(|_| {
                    ParseError::LiteralOutOfRange {
                        text: token.text.clone(),
                        position: token.position,
                    }
                })?;
                Ok(Expr::Literal(value))
            }
            TokenKind::LParen => {
                self.consume(TokenKind::LParen)?;
                let node = self.parse_expression()?;
                self.consume(TokenKind::RParen)?;
                Ok(node)
            }
            _ => Err(ParseError::UnexpectedFactor {
                found: self.current.clone(),
            }),
        }
    }

    /// Consume the current token if it matches `expected`, refilling the
    /// lookahead from the lexer; otherwise fail without advancing.
    fn consume(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: self.current.clone(),
            });
        }
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}
