//! AST definitions and the dual tree walk (render + reduce)
//!
//! The parser builds a tree of [`Expr`] nodes: integer literals at the
//! leaves, binary operations at the interior. Nodes are immutable once built
//! and each child is owned exclusively by its parent, so the whole tree is
//! dropped with the root.

use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The source symbol for this operator.
    pub fn symbol(&self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant integer leaf.
    Literal(i64),
    /// An interior node applying `op` to two owned subtrees.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Evaluation errors raised while reducing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division reduced to zero.
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

impl Expr {
    /// Render the tree as a fully-parenthesized string.
    ///
    /// Every binary node is wrapped in parentheses with single spaces around
    /// the operator symbol, so `3 + 5 * (2 - 8)` renders as
    /// `(3 + (5 * (2 - 8)))`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Reduce the tree to a single integer.
    ///
    /// Arithmetic is two's-complement wrapping on `i64`; division truncates
    /// toward zero. A division whose right operand reduces to zero fails
    /// here, at evaluation time, since the operand may itself be a composite
    /// subexpression.
    pub fn reduce(&self) -> Result<i64, EvalError> {
        match self {
            Expr::Literal(value) => Ok(*value),
            Expr::Binary { op, left, right } => {
                let lhs = left.reduce()?;
                let rhs = right.reduce()?;
                match op {
                    BinOp::Add => Ok(lhs.wrapping_add(rhs)),
                    BinOp::Sub => Ok(lhs.wrapping_sub(rhs)),
                    BinOp::Mul => Ok(lhs.wrapping_mul(rhs)),
                    BinOp::Div => {
                        if rhs == 0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(lhs.wrapping_div(rhs))
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_render_literal() {
        assert_eq!(Expr::Literal(42).render(), "42");
    }

    #[test]
    fn test_render_nested() {
        let tree = binary(
            BinOp::Add,
            Expr::Literal(1),
            binary(BinOp::Mul, Expr::Literal(2), Expr::Literal(3)),
        );
        assert_eq!(tree.render(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_reduce_truncates_toward_zero() {
        let tree = binary(BinOp::Div, Expr::Literal(7), Expr::Literal(2));
        assert_eq!(tree.reduce(), Ok(3));

        // -7 is only reachable through subtraction in this grammar.
        let neg = binary(BinOp::Sub, Expr::Literal(0), Expr::Literal(7));
        let tree = binary(BinOp::Div, neg, Expr::Literal(2));
        assert_eq!(tree.reduce(), Ok(-3));
    }

    #[test]
    fn test_reduce_division_by_zero() {
        let zero = binary(BinOp::Sub, Expr::Literal(2), Expr::Literal(2));
        let tree = binary(BinOp::Div, Expr::Literal(4), zero);
        assert_eq!(tree.reduce(), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_reduce_wraps_on_overflow() {
        let tree = binary(
            BinOp::Mul,
            Expr::Literal(i64::MAX),
            Expr::Literal(2),
        );
        assert_eq!(tree.reduce(), Ok(i64::MAX.wrapping_mul(2)));
    }
}
