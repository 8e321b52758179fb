//! # Introduction
//!
//! `arith` parses a textual arithmetic expression (integers, `+ - * /`,
//! parentheses, standard precedence and left-associativity) into an abstract
//! syntax tree, then walks the tree twice: once to render it as a
//! fully-parenthesized string and once to reduce it to an integer value.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Lexer → Parser → AST → render / reduce
//! ```
//!
//! 1. [`lexer`] — tokenizes the input lazily, one token per call.
//! 2. [`parse`] — recursive descent over the token stream, one token of
//!    lookahead, builds the [`ast::Expr`] tree.
//! 3. [`ast`] — tree definitions plus the render and reduce walks.
//!
//! The whole pipeline runs to completion or to its first failure in one
//! pass; every error propagates unchanged to the caller.
//!
//! ## Example
//!
//! ```
//! use arith::parse::Parser;
//!
//! let expr = Parser::new("3 + 5 * (2 - 8)").unwrap().parse().unwrap();
//! assert_eq!(expr.render(), "(3 + (5 * (2 - 8)))");
//! assert_eq!(expr.reduce(), Ok(-27));
//! ```

pub mod ast;
pub mod lexer;
pub mod parse;

pub use ast::{BinOp, EvalError, Expr};
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parse::{ParseError, Parser};
