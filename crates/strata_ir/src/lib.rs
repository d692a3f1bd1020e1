//! StrataIR — the retained behavioral IR for small hardware memory elements.
//!
//! A memory element (SRAM, FIFO, line buffer) is described as a set of named
//! actions over declared variables, ports, constants, and one fixed-size
//! memory. The description is captured as a graph of expression and statement
//! nodes rather than run as host code, so the same IR can be evaluated as a
//! golden reference model and later consumed by an external lowering stage.
//!
//! This crate holds only the structure: arenas, IDs, interned names,
//! declarations, nodes, structural equality, and the [`ModelIr`] container.
//! Evaluation and the authoring API live in `strata_model`.

#![warn(missing_docs)]

pub mod arena;
pub mod decl;
pub mod eq;
pub mod expr;
pub mod ident;
pub mod ids;
pub mod model_ir;
pub mod stmt;

pub use arena::{Arena, ArenaId};
pub use decl::{NamedConst, Port, PortDirection, Variable};
pub use eq::{expr_eq, stmt_eq};
pub use expr::{BinaryOp, Expr};
pub use ident::{Ident, Interner};
pub use ids::{ActionId, ConstId, ExprId, PortId, StmtId, VarId};
pub use model_ir::{Action, IntoOperand, ModelIr};
pub use stmt::Stmt;
