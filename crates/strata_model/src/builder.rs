//! The authoring API used inside action bodies.
//!
//! An [`ActionBuilder`] is handed to the body closure exactly once, the first
//! time the action is invoked. Every call appends retained IR nodes; nothing
//! is evaluated while the body plays. Statements land in the builder's
//! sequence in call order, and [`ActionBuilder::if_stmt`] re-parents its
//! already-appended then-statement under the new if node, so each statement
//! appears exactly once in the captured sequence.
//!
//! Builder misuse (assigning to a non-assignable expression, attaching two
//! else branches) is a bug in the model definition, not a runtime condition,
//! and panics.

use strata_ir::{BinaryOp, Expr, ExprId, IntoOperand, ModelIr, Stmt, StmtId};

/// Captures one action body into retained IR.
pub struct ActionBuilder<'a> {
    ir: &'a mut ModelIr,
    stmts: Vec<StmtId>,
    conditions: Vec<ExprId>,
}

/// Handle to a captured if-statement, used to attach its else branch.
#[derive(Clone, Copy)]
pub struct IfHandle {
    stmt: StmtId,
}

impl IfHandle {
    /// The if-statement this handle refers to.
    pub fn id(self) -> StmtId {
        self.stmt
    }
}

impl<'a> ActionBuilder<'a> {
    pub(crate) fn new(ir: &'a mut ModelIr) -> Self {
        Self {
            ir,
            stmts: Vec::new(),
            conditions: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> (Vec<StmtId>, Vec<ExprId>) {
        (self.stmts, self.conditions)
    }

    /// Promotes a literal, declaration ID, or expression to an operand node.
    pub fn operand(&mut self, value: impl IntoOperand) -> ExprId {
        value.into_operand(self.ir)
    }

    /// An integer literal node.
    pub fn lit(&mut self, value: i64) -> ExprId {
        self.operand(value)
    }

    /// A memory-cell reference whose index is re-evaluated at every use.
    pub fn mem_cell(&mut self, index: impl IntoOperand) -> ExprId {
        let index = self.operand(index);
        self.ir.exprs.alloc(Expr::MemCell { index })
    }

    /// A binary expression node.
    pub fn binary(
        &mut self,
        op: BinaryOp,
        lhs: impl IntoOperand,
        rhs: impl IntoOperand,
    ) -> ExprId {
        let lhs = self.operand(lhs);
        let rhs = self.operand(rhs);
        self.ir.exprs.alloc(Expr::Binary { op, lhs, rhs })
    }

    /// `lhs + rhs`.
    pub fn add(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Add, lhs, rhs)
    }

    /// `lhs - rhs`.
    pub fn sub(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Sub, lhs, rhs)
    }

    /// `lhs * rhs`.
    pub fn mul(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Mul, lhs, rhs)
    }

    /// `lhs / rhs` (truncating).
    pub fn div(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Div, lhs, rhs)
    }

    /// `lhs % rhs`.
    pub fn modulo(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Mod, lhs, rhs)
    }

    /// `lhs == rhs`, producing 1 or 0.
    pub fn eq(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Eq, lhs, rhs)
    }

    /// `lhs != rhs`, producing 1 or 0.
    pub fn ne(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Ne, lhs, rhs)
    }

    /// `lhs < rhs`, producing 1 or 0.
    pub fn lt(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Lt, lhs, rhs)
    }

    /// `lhs <= rhs`, producing 1 or 0.
    pub fn le(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Le, lhs, rhs)
    }

    /// `lhs > rhs`, producing 1 or 0.
    pub fn gt(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Gt, lhs, rhs)
    }

    /// `lhs >= rhs`, producing 1 or 0.
    pub fn ge(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Ge, lhs, rhs)
    }

    /// Logical `lhs && rhs` over nonzero truth, producing 1 or 0.
    pub fn and_(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::And, lhs, rhs)
    }

    /// Logical `lhs || rhs` over nonzero truth, producing 1 or 0.
    pub fn or_(&mut self, lhs: impl IntoOperand, rhs: impl IntoOperand) -> ExprId {
        self.binary(BinaryOp::Or, lhs, rhs)
    }

    /// Appends an assignment statement.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not a variable, port, or memory cell.
    pub fn assign(&mut self, target: impl IntoOperand, value: impl IntoOperand) -> StmtId {
        let target = self.operand(target);
        assert!(
            self.ir.exprs[target].is_assignable(),
            "assignment target must be a variable, port, or memory cell"
        );
        let value = self.operand(value);
        let stmt = self.ir.stmts.alloc(Stmt::Assign { target, value });
        self.stmts.push(stmt);
        stmt
    }

    /// Wraps an already-appended statement in an if-statement.
    ///
    /// `then_stmt` is removed from the top-level sequence and becomes the
    /// then branch; the new if node takes its place at the end of the
    /// sequence. The else branch starts empty and is attached later with
    /// [`attach_else`](Self::attach_else).
    ///
    /// # Panics
    ///
    /// Panics if `then_stmt` is not in the builder's current sequence.
    pub fn if_stmt(&mut self, predicate: impl IntoOperand, then_stmt: StmtId) -> IfHandle {
        let predicate = self.operand(predicate);
        let pos = self
            .stmts
            .iter()
            .rposition(|s| *s == then_stmt)
            .unwrap_or_else(|| panic!("then branch is not a statement of this action body"));
        self.stmts.remove(pos);
        let stmt = self.ir.stmts.alloc(Stmt::If {
            predicate,
            then_stmt,
            else_stmt: None,
        });
        self.stmts.push(stmt);
        IfHandle { stmt }
    }

    /// Attaches an already-appended statement as an if-statement's else branch.
    ///
    /// Like the then branch in [`if_stmt`](Self::if_stmt), `else_stmt` is
    /// removed from the top-level sequence.
    ///
    /// # Panics
    ///
    /// Panics if `else_stmt` is not in the builder's current sequence, or if
    /// the handle already has an else branch.
    pub fn attach_else(&mut self, handle: IfHandle, else_stmt: StmtId) {
        let pos = self
            .stmts
            .iter()
            .rposition(|s| *s == else_stmt)
            .unwrap_or_else(|| panic!("else branch is not a statement of this action body"));
        self.stmts.remove(pos);
        match &mut self.ir.stmts[handle.stmt] {
            Stmt::If { else_stmt: slot, .. } => {
                assert!(slot.is_none(), "if-statement already has an else branch");
                *slot = Some(else_stmt);
            }
            _ => panic!("handle does not refer to an if-statement"),
        }
    }

    /// Appends a return statement yielding `values` in order.
    pub fn ret(&mut self, values: Vec<ExprId>) -> StmtId {
        let stmt = self.ir.stmts.alloc(Stmt::Return { values });
        self.stmts.push(stmt);
        stmt
    }

    /// Records an advisory guard condition for this action.
    ///
    /// Guards are captured alongside the body and reported on request; the
    /// evaluator never enforces them.
    pub fn expect(&mut self, guard: impl IntoOperand) {
        let guard = self.operand(guard);
        self.conditions.push(guard);
    }
}

/// Return values an action body may yield.
///
/// Implemented for `()` (no return), a single expression, and a vector of
/// expressions.
pub trait IntoReturnValues {
    /// The expressions to evaluate and yield, in order.
    fn into_return_values(self) -> Vec<ExprId>;
}

impl IntoReturnValues for () {
    fn into_return_values(self) -> Vec<ExprId> {
        Vec::new()
    }
}

impl IntoReturnValues for ExprId {
    fn into_return_values(self) -> Vec<ExprId> {
        vec![self]
    }
}

impl IntoReturnValues for Vec<ExprId> {
    fn into_return_values(self) -> Vec<ExprId> {
        self
    }
}
