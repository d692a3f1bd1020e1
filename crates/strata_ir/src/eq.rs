//! Structural equality over arena-indexed IR trees.
//!
//! Two nodes are equal when their kinds match and their operands are
//! recursively equal, regardless of where they live in the arena. This is
//! the comparison lowering and deduplication passes need; it is entirely
//! separate from the comparison operators, which build new [`Expr::Binary`]
//! nodes instead of comparing anything.

use crate::arena::Arena;
use crate::expr::Expr;
use crate::ids::{ExprId, StmtId};
use crate::stmt::Stmt;

/// Structural equality of two expression trees.
pub fn expr_eq(exprs: &Arena<ExprId, Expr>, a: ExprId, b: ExprId) -> bool {
    match (&exprs[a], &exprs[b]) {
        (Expr::Const(x), Expr::Const(y)) => x == y,
        (Expr::NamedConst(x), Expr::NamedConst(y)) => x == y,
        (Expr::Var(x), Expr::Var(y)) => x == y,
        (Expr::Port(x), Expr::Port(y)) => x == y,
        (Expr::MemCell { index: x }, Expr::MemCell { index: y }) => expr_eq(exprs, *x, *y),
        (
            Expr::Binary {
                op: op_a,
                lhs: lhs_a,
                rhs: rhs_a,
            },
            Expr::Binary {
                op: op_b,
                lhs: lhs_b,
                rhs: rhs_b,
            },
        ) => op_a == op_b && expr_eq(exprs, *lhs_a, *lhs_b) && expr_eq(exprs, *rhs_a, *rhs_b),
        _ => false,
    }
}

/// Structural equality of two statement trees.
///
/// For conditionals, else-branch presence must match on both sides.
pub fn stmt_eq(
    stmts: &Arena<StmtId, Stmt>,
    exprs: &Arena<ExprId, Expr>,
    a: StmtId,
    b: StmtId,
) -> bool {
    match (&stmts[a], &stmts[b]) {
        (
            Stmt::Assign {
                target: target_a,
                value: value_a,
            },
            Stmt::Assign {
                target: target_b,
                value: value_b,
            },
        ) => expr_eq(exprs, *target_a, *target_b) && expr_eq(exprs, *value_a, *value_b),
        (
            Stmt::If {
                predicate: pred_a,
                then_stmt: then_a,
                else_stmt: else_a,
            },
            Stmt::If {
                predicate: pred_b,
                then_stmt: then_b,
                else_stmt: else_b,
            },
        ) => {
            if !expr_eq(exprs, *pred_a, *pred_b) || !stmt_eq(stmts, exprs, *then_a, *then_b) {
                return false;
            }
            match (else_a, else_b) {
                (None, None) => true,
                (Some(ea), Some(eb)) => stmt_eq(stmts, exprs, *ea, *eb),
                _ => false,
            }
        }
        (Stmt::Return { values: values_a }, Stmt::Return { values: values_b }) => {
            values_a.len() == values_b.len()
                && values_a
                    .iter()
                    .zip(values_b)
                    .all(|(x, y)| expr_eq(exprs, *x, *y))
        }
        _ => false,
    }
}
