//! Expression evaluation and statement execution.
//!
//! [`Evaluator`] walks the captured IR against the current runtime state.
//! Expressions are re-evaluated on every use and never cached; a memory
//! cell's index expression is resolved at each read or assignment, so a
//! mutated index variable moves the addressed cell between invocations.
//! Statement execution stops at the first `Return` and yields its payload.

use crate::error::ModelError;
use crate::state::ModelState;
use strata_ir::{BinaryOp, Expr, ExprId, ModelIr, Stmt, StmtId};

/// Walks IR nodes against one model's runtime state.
pub struct Evaluator<'a> {
    /// The captured IR being executed.
    pub ir: &'a ModelIr,
    /// The runtime cells being read and written.
    pub state: &'a mut ModelState,
}

impl Evaluator<'_> {
    /// Evaluates an expression tree to an integer.
    pub fn eval_expr(&self, id: ExprId) -> Result<i64, ModelError> {
        match &self.ir.exprs[id] {
            Expr::Const(value) => Ok(*value),
            Expr::NamedConst(konst) => Ok(self.ir.consts[*konst].value),
            Expr::Var(var) => Ok(self.state.var(*var)),
            Expr::Port(port) => Ok(self.state.port(*port)),
            Expr::MemCell { index } => {
                let index = self.eval_expr(*index)?;
                self.state.mem.read(index)
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval_expr(*lhs)?;
                let rhs = self.eval_expr(*rhs)?;
                eval_binary(*op, lhs, rhs)
            }
        }
    }

    /// Executes one statement.
    ///
    /// Returns `Some(payload)` when the statement (or the branch it took)
    /// was a `Return`.
    pub fn exec_stmt(&mut self, id: StmtId) -> Result<Option<Vec<i64>>, ModelError> {
        let ir = self.ir;
        match &ir.stmts[id] {
            Stmt::Assign { target, value } => {
                let value = self.eval_expr(*value)?;
                match &ir.exprs[*target] {
                    Expr::Var(var) => self.state.set_var(*var, value),
                    Expr::Port(port) => self.state.set_port(*port, value),
                    Expr::MemCell { index } => {
                        let index = self.eval_expr(*index)?;
                        self.state.mem.write(index, value)?;
                    }
                    _ => return Err(ModelError::InvalidAssignTarget),
                }
                Ok(None)
            }
            Stmt::If {
                predicate,
                then_stmt,
                else_stmt,
            } => {
                if self.eval_expr(*predicate)? != 0 {
                    self.exec_stmt(*then_stmt)
                } else {
                    match else_stmt {
                        Some(else_stmt) => self.exec_stmt(*else_stmt),
                        None => Err(ModelError::MissingElseBranch),
                    }
                }
            }
            Stmt::Return { values } => {
                let mut payload = Vec::with_capacity(values.len());
                for value in values {
                    payload.push(self.eval_expr(*value)?);
                }
                Ok(Some(payload))
            }
        }
    }

    /// Executes a statement sequence in order, stopping at the first
    /// yielded `Return` payload.
    pub fn run(&mut self, stmts: &[StmtId]) -> Result<Option<Vec<i64>>, ModelError> {
        for stmt in stmts {
            if let Some(payload) = self.exec_stmt(*stmt)? {
                return Ok(Some(payload));
            }
        }
        Ok(None)
    }
}

fn eval_binary(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, ModelError> {
    Ok(match op {
        BinaryOp::Add => lhs.wrapping_add(rhs),
        BinaryOp::Sub => lhs.wrapping_sub(rhs),
        BinaryOp::Mul => lhs.wrapping_mul(rhs),
        BinaryOp::Div => {
            if rhs == 0 {
                return Err(ModelError::DivisionByZero);
            }
            lhs.wrapping_div(rhs)
        }
        BinaryOp::Mod => {
            if rhs == 0 {
                return Err(ModelError::DivisionByZero);
            }
            lhs.wrapping_rem(rhs)
        }
        BinaryOp::Eq => i64::from(lhs == rhs),
        BinaryOp::Ne => i64::from(lhs != rhs),
        BinaryOp::Lt => i64::from(lhs < rhs),
        BinaryOp::Le => i64::from(lhs <= rhs),
        BinaryOp::Gt => i64::from(lhs > rhs),
        BinaryOp::Ge => i64::from(lhs >= rhs),
        BinaryOp::And => i64::from(lhs != 0 && rhs != 0),
        BinaryOp::Or => i64::from(lhs != 0 || rhs != 0),
    })
}
