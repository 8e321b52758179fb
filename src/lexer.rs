//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw input text into a lazy stream of [`Token`]s consumed one at a
//! time by the parser. The stream is terminated by a single [`TokenKind::End`]
//! token; once the input is exhausted every further call keeps returning
//! `End` without scanning past the input bound.

use std::fmt;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of one or more decimal digits.
    Number,
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    LParen, // (
    RParen, // )
    /// End of input.
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A classified lexical unit.
///
/// `text` holds the digit run for [`TokenKind::Number`] tokens and the lexeme
/// for operators and parentheses; it is empty for `End`. `position` is the
/// 0-based character offset where the token starts, so that parse errors can
/// report a location without a separate token→offset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number '{}'", self.text),
            TokenKind::End => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub character: char,
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lex error at offset {}: unexpected character '{}'",
            self.position, self.character
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer over a single expression string.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Produce the next token.
    ///
    /// Callable repeatedly; after the input is exhausted this keeps returning
    /// an [`TokenKind::End`] token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.position;

        if self.is_at_end() {
            return Ok(Token {
                kind: TokenKind::End,
                text: String::new(),
                position: start,
            });
        }

        let ch = self.input[self.position];

        if ch.is_ascii_digit() {
            return Ok(self.number(start));
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => {
                return Err(LexError {
                    character: ch,
                    position: start,
                });
            }
        };

        self.position += 1;
        Ok(Token {
            kind,
            text: ch.to_string(),
            position: start,
        })
    }

    /// Consume the maximal run of digits starting at the cursor.
    fn number(&mut self, start: usize) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.position += 1;
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Number,
            text,
            position: start,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Peek at the current character without consuming.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let kind = token.kind;
            kinds.push(kind);
            if kind == TokenKind::End {
                return kinds;
            }
        }
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("12 + 3 * (4 - 5) / 6"),
            vec![
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Star,
                TokenKind::LParen,
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Slash,
                TokenKind::Number,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_number_text_and_position() {
        let mut lexer = Lexer::new("  123 45");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.kind, TokenKind::Number);
        assert_eq!(first.text, "123");
        assert_eq!(first.position, 2);

        let second = lexer.next_token().unwrap();
        assert_eq!(second.text, "45");
        assert_eq!(second.position, 6);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut lexer = Lexer::new("7");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::End);
            assert_eq!(token.position, 1);
        }
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("1 & 2");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.character, '&');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_whitespace_only_input() {
        let mut lexer = Lexer::new("   \t ");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::End);
    }
}
