//! Strata's model container and golden evaluator.
//!
//! This crate hosts everything that runs: the [`Model`] container with its
//! authoring API, the [`Evaluator`] that replays captured statement
//! sequences against live state, the stock SRAM/FIFO/line-buffer
//! definitions, and text rendering of captured IR. The IR itself lives in
//! `strata_ir`.
//!
//! The core discipline throughout is build-versus-evaluate: defining ports,
//! variables, constants, and actions only ever constructs IR nodes, and an
//! action body plays exactly once. All observable behavior comes from
//! explicitly invoking actions, which re-evaluates the cached sequence
//! against the current state.

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod eval;
pub mod memory;
pub mod model;
pub mod models;
pub mod render;
pub mod state;

pub use builder::{ActionBuilder, IfHandle, IntoReturnValues};
pub use error::ModelError;
pub use eval::Evaluator;
pub use memory::Memory;
pub use model::{ActionResult, Model, Resolved};
pub use models::{define_fifo, define_line_buffer, define_sram};
pub use render::{render_expr, render_stmt};
pub use state::ModelState;
