//! Statement nodes.
//!
//! Statements are the side-effecting half of the IR: assignments, one-branch
//! or two-branch conditionals, and returns. A statement sequence captured for
//! an action is immutable once recorded and re-evaluated on every invocation.

use crate::ids::{ExprId, StmtId};
use serde::{Deserialize, Serialize};

/// A statement node in the behavioral IR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Stmt {
    /// Writes the evaluated `value` into the cell named by `target`.
    ///
    /// The target must be a variable, port, or memory-cell expression. For a
    /// memory cell the index is evaluated when the assignment runs, not when
    /// it was captured.
    Assign {
        /// The assignable target expression.
        target: ExprId,
        /// The value expression.
        value: ExprId,
    },
    /// Evaluates `predicate` once and executes exactly one branch.
    ///
    /// The else branch is optional at construction and attached afterwards.
    /// Evaluating a false predicate with no else branch is a fatal error.
    If {
        /// The branch selector, evaluated once per execution.
        predicate: ExprId,
        /// The branch taken on a non-zero predicate.
        then_stmt: StmtId,
        /// The branch taken on a zero predicate, if attached.
        else_stmt: Option<StmtId>,
    },
    /// Evaluates the held expressions in order and yields them to the caller.
    Return {
        /// The values produced for the action's caller.
        values: Vec<ExprId>,
    },
}
