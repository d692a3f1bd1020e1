//! The per-model IR container.
//!
//! [`ModelIr`] exclusively owns every node the builder API constructs:
//! declarations, expression and statement arenas, and the per-action records
//! with their cached statement sequences and guard lists. It is the structure
//! an external lowering stage consumes, and it carries no runtime state.

use crate::arena::Arena;
use crate::decl::{NamedConst, Port, PortDirection, Variable};
use crate::expr::Expr;
use crate::ident::Ident;
use crate::ids::{ActionId, ConstId, ExprId, PortId, StmtId, VarId};
use crate::stmt::Stmt;
use serde::{Deserialize, Serialize};

/// A named, guarded operation on a model.
///
/// `stmts` is `None` until the action body has been played once; after that
/// the cached sequence is immutable and reused by every later invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// The unique ID of this action.
    pub id: ActionId,
    /// The action name.
    pub name: Ident,
    /// The cached statement sequence, in authoring order.
    pub stmts: Option<Vec<StmtId>>,
    /// Advisory guard expressions recorded while the body was played.
    /// Never enforced by the evaluator.
    pub conditions: Vec<ExprId>,
}

/// The complete retained IR of one memory model.
///
/// Registries are small, so name lookups scan the owning arena. Names are
/// unique within a registry; re-declaring returns the existing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelIr {
    /// All expression nodes.
    pub exprs: Arena<ExprId, Expr>,
    /// All statement nodes.
    pub stmts: Arena<StmtId, Stmt>,
    /// Declared variables.
    pub vars: Arena<VarId, Variable>,
    /// Declared ports.
    pub ports: Arena<PortId, Port>,
    /// Declared named constants.
    pub consts: Arena<ConstId, NamedConst>,
    /// Registered actions.
    pub actions: Arena<ActionId, Action>,
    mem_size: usize,
}

impl ModelIr {
    /// Creates an empty IR for a model with `mem_size` memory cells.
    pub fn new(mem_size: usize) -> Self {
        Self {
            exprs: Arena::new(),
            stmts: Arena::new(),
            vars: Arena::new(),
            ports: Arena::new(),
            consts: Arena::new(),
            actions: Arena::new(),
            mem_size,
        }
    }

    /// Number of memory cells in the model's single memory.
    pub fn mem_size(&self) -> usize {
        self.mem_size
    }

    /// Declares a variable, or returns the existing one with this name.
    pub fn declare_variable(&mut self, name: Ident, width: u32, init: i64) -> VarId {
        if let Some(id) = self.find_var(name) {
            return id;
        }
        let id = VarId::from_raw(self.vars.len() as u32);
        self.vars.alloc(Variable {
            id,
            name,
            width,
            init,
        })
    }

    /// Declares a port, or returns the existing one with this name.
    pub fn declare_port(
        &mut self,
        name: Ident,
        width: u32,
        direction: PortDirection,
        init: i64,
    ) -> PortId {
        if let Some(id) = self.find_port(name) {
            return id;
        }
        let id = PortId::from_raw(self.ports.len() as u32);
        self.ports.alloc(Port {
            id,
            name,
            width,
            direction,
            init,
        })
    }

    /// Declares a named constant, or returns the existing one with this name.
    pub fn declare_const(&mut self, name: Ident, value: i64) -> ConstId {
        if let Some(id) = self.find_const(name) {
            return id;
        }
        let id = ConstId::from_raw(self.consts.len() as u32);
        self.consts.alloc(NamedConst { id, name, value })
    }

    /// Registers an action name, or returns the existing registration.
    pub fn declare_action(&mut self, name: Ident) -> ActionId {
        if let Some(id) = self.find_action(name) {
            return id;
        }
        let id = ActionId::from_raw(self.actions.len() as u32);
        self.actions.alloc(Action {
            id,
            name,
            stmts: None,
            conditions: Vec::new(),
        })
    }

    /// Looks up a variable by name.
    pub fn find_var(&self, name: Ident) -> Option<VarId> {
        self.vars.values().find(|v| v.name == name).map(|v| v.id)
    }

    /// Looks up a port by name.
    pub fn find_port(&self, name: Ident) -> Option<PortId> {
        self.ports.values().find(|p| p.name == name).map(|p| p.id)
    }

    /// Looks up a named constant by name.
    pub fn find_const(&self, name: Ident) -> Option<ConstId> {
        self.consts.values().find(|c| c.name == name).map(|c| c.id)
    }

    /// Looks up an action by name.
    pub fn find_action(&self, name: Ident) -> Option<ActionId> {
        self.actions.values().find(|a| a.name == name).map(|a| a.id)
    }

    /// Installs the captured statement sequence and guards for an action.
    pub fn record_action(&mut self, id: ActionId, stmts: Vec<StmtId>, conditions: Vec<ExprId>) {
        let action = &mut self.actions[id];
        action.stmts = Some(stmts);
        action.conditions = conditions;
    }

    /// Discards an action's cached sequence so a new body can be recorded.
    pub fn reset_action(&mut self, id: ActionId) {
        let action = &mut self.actions[id];
        action.stmts = None;
        action.conditions.clear();
    }

    /// Deep-copies an expression tree.
    ///
    /// The copy shares no nodes with the original, so a mutable index
    /// expression in the original cannot alias into the copy.
    pub fn copy_expr(&mut self, id: ExprId) -> ExprId {
        match self.exprs[id].clone() {
            Expr::MemCell { index } => {
                let index = self.copy_expr(index);
                self.exprs.alloc(Expr::MemCell { index })
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.copy_expr(lhs);
                let rhs = self.copy_expr(rhs);
                self.exprs.alloc(Expr::Binary { op, lhs, rhs })
            }
            leaf => self.exprs.alloc(leaf),
        }
    }
}

/// Anything usable as an operand when building expressions.
///
/// Literals and declaration IDs are promoted to fresh leaf nodes; an
/// [`ExprId`] passes through unchanged.
pub trait IntoOperand {
    /// Converts `self` into an expression node in `ir`.
    fn into_operand(self, ir: &mut ModelIr) -> ExprId;
}

impl IntoOperand for ExprId {
    fn into_operand(self, _ir: &mut ModelIr) -> ExprId {
        self
    }
}

impl IntoOperand for i64 {
    fn into_operand(self, ir: &mut ModelIr) -> ExprId {
        ir.exprs.alloc(Expr::Const(self))
    }
}

impl IntoOperand for VarId {
    fn into_operand(self, ir: &mut ModelIr) -> ExprId {
        ir.exprs.alloc(Expr::Var(self))
    }
}

impl IntoOperand for PortId {
    fn into_operand(self, ir: &mut ModelIr) -> ExprId {
        ir.exprs.alloc(Expr::Port(self))
    }
}

impl IntoOperand for ConstId {
    fn into_operand(self, ir: &mut ModelIr) -> ExprId {
        ir.exprs.alloc(Expr::NamedConst(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eq::expr_eq;
    use crate::expr::BinaryOp;

    #[test]
    fn declare_variable_is_idempotent() {
        let mut ir = ModelIr::new(8);
        let name = Ident::from_raw(0);
        let a = ir.declare_variable(name, 16, 0);
        let b = ir.declare_variable(name, 16, 0);
        assert_eq!(a, b);
        assert_eq!(ir.vars.len(), 1);
    }

    #[test]
    fn declare_port_is_idempotent() {
        let mut ir = ModelIr::new(8);
        let name = Ident::from_raw(0);
        let a = ir.declare_port(name, 1, PortDirection::In, 0);
        let b = ir.declare_port(name, 1, PortDirection::In, 0);
        assert_eq!(a, b);
        assert_eq!(ir.ports.len(), 1);
    }

    #[test]
    fn same_name_allowed_across_registries() {
        let mut ir = ModelIr::new(8);
        let name = Ident::from_raw(0);
        ir.declare_variable(name, 16, 0);
        ir.declare_port(name, 16, PortDirection::Out, 0);
        ir.declare_const(name, 7);
        assert_eq!(ir.vars.len(), 1);
        assert_eq!(ir.ports.len(), 1);
        assert_eq!(ir.consts.len(), 1);
    }

    #[test]
    fn record_then_reset_action() {
        let mut ir = ModelIr::new(8);
        let id = ir.declare_action(Ident::from_raw(0));
        assert!(ir.actions[id].stmts.is_none());
        ir.record_action(id, Vec::new(), Vec::new());
        assert!(ir.actions[id].stmts.is_some());
        ir.reset_action(id);
        assert!(ir.actions[id].stmts.is_none());
    }

    #[test]
    fn copy_expr_detaches_nodes() {
        let mut ir = ModelIr::new(8);
        let var = ir.declare_variable(Ident::from_raw(0), 16, 0);
        let index = var.into_operand(&mut ir);
        let cell = ir.exprs.alloc(Expr::MemCell { index });
        let copy = ir.copy_expr(cell);
        assert_ne!(cell, copy);
        assert!(expr_eq(&ir.exprs, cell, copy));
        if let (Expr::MemCell { index: a }, Expr::MemCell { index: b }) =
            (&ir.exprs[cell], &ir.exprs[copy])
        {
            assert_ne!(a, b);
        } else {
            panic!("expected MemCell nodes");
        }
    }

    #[test]
    fn operands_promote_to_leaves() {
        let mut ir = ModelIr::new(8);
        let lit = 5i64.into_operand(&mut ir);
        assert!(matches!(ir.exprs[lit], Expr::Const(5)));
        let konst = ir.declare_const(Ident::from_raw(0), 9);
        let node = konst.into_operand(&mut ir);
        assert!(matches!(ir.exprs[node], Expr::NamedConst(_)));
    }

    #[test]
    fn ir_serde_roundtrip() {
        let mut ir = ModelIr::new(16);
        let name = Ident::from_raw(0);
        let var = ir.declare_variable(name, 16, 3);
        let lhs = var.into_operand(&mut ir);
        let rhs = 1i64.into_operand(&mut ir);
        let sum = ir.exprs.alloc(Expr::Binary {
            op: BinaryOp::Add,
            lhs,
            rhs,
        });
        let target = var.into_operand(&mut ir);
        let assign = ir.stmts.alloc(Stmt::Assign { target, value: sum });
        let action = ir.declare_action(Ident::from_raw(1));
        ir.record_action(action, vec![assign], Vec::new());

        let json = serde_json::to_string(&ir).unwrap();
        let back: ModelIr = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mem_size(), 16);
        assert_eq!(back.vars.len(), 1);
        assert_eq!(back.actions[action].stmts.as_deref(), Some(&[assign][..]));
    }
}
