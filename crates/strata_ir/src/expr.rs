//! Expression nodes.
//!
//! Expressions are pure and deferred: constructing a node never evaluates
//! anything, and the evaluator walks the tree on demand. A [`MemCell`]'s
//! index expression is re-evaluated on every read and on every assignment
//! evaluation, so the addressed cell can change between invocations.
//!
//! [`MemCell`]: Expr::MemCell

use crate::ids::{ConstId, ExprId, PortId, VarId};
use serde::{Deserialize, Serialize};

/// A binary operator.
///
/// Comparison and logical operators produce `1` or `0`. Arithmetic wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`). Division by zero is a fatal evaluation error.
    Div,
    /// Modulo (`%`). Modulo by zero is a fatal evaluation error.
    Mod,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    Ne,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Logical AND over non-zero operands.
    And,
    /// Logical OR over non-zero operands.
    Or,
}

/// An expression node in the behavioral IR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expr {
    /// An integer literal.
    Const(i64),
    /// A reference to a declared named constant.
    NamedConst(ConstId),
    /// A reference to a declared variable; reads its current cell.
    Var(VarId),
    /// A reference to a declared port; reads its current cell.
    Port(PortId),
    /// A memory cell addressed by a dynamic index expression.
    MemCell {
        /// Index into the model's memory, re-evaluated at every use.
        index: ExprId,
    },
    /// A deferred binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left operand.
        lhs: ExprId,
        /// The right operand.
        rhs: ExprId,
    },
}

impl Expr {
    /// Whether this node may be the target of an assignment.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Port(_) | Expr::MemCell { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignable_kinds() {
        assert!(Expr::Var(VarId::from_raw(0)).is_assignable());
        assert!(Expr::Port(PortId::from_raw(0)).is_assignable());
        assert!(Expr::MemCell {
            index: ExprId::from_raw(0)
        }
        .is_assignable());
    }

    #[test]
    fn non_assignable_kinds() {
        assert!(!Expr::Const(5).is_assignable());
        assert!(!Expr::NamedConst(ConstId::from_raw(0)).is_assignable());
        assert!(!Expr::Binary {
            op: BinaryOp::Add,
            lhs: ExprId::from_raw(0),
            rhs: ExprId::from_raw(1),
        }
        .is_assignable());
    }

    #[test]
    fn ops_distinct() {
        let ops = [
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Mod,
            BinaryOp::Eq,
            BinaryOp::Ne,
            BinaryOp::Lt,
            BinaryOp::Le,
            BinaryOp::Gt,
            BinaryOp::Ge,
            BinaryOp::And,
            BinaryOp::Or,
        ];
        for (i, a) in ops.iter().enumerate() {
            for (j, b) in ops.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn expr_serde_roundtrip() {
        let e = Expr::Binary {
            op: BinaryOp::Lt,
            lhs: ExprId::from_raw(3),
            rhs: ExprId::from_raw(4),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        if let Expr::Binary { op, lhs, rhs } = back {
            assert_eq!(op, BinaryOp::Lt);
            assert_eq!(lhs.as_raw(), 3);
            assert_eq!(rhs.as_raw(), 4);
        } else {
            panic!("expected Binary");
        }
    }
}
