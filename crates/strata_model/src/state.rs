//! Runtime cells backing the IR's declarations.
//!
//! The IR carries declarations only; current values live here, indexed flat
//! by the declaration IDs. One `ModelState` belongs to exactly one model and
//! is mutated only through `Assign` evaluation or the model's direct-write
//! path.

use crate::memory::Memory;
use strata_ir::{PortId, VarId};

/// Current variable/port values and the memory array of one model.
#[derive(Debug)]
pub struct ModelState {
    vars: Vec<i64>,
    ports: Vec<i64>,
    /// The model's single memory.
    pub mem: Memory,
}

impl ModelState {
    /// Creates empty state with a memory of `mem_size` cells.
    pub fn new(mem_size: usize) -> Self {
        Self {
            vars: Vec::new(),
            ports: Vec::new(),
            mem: Memory::new(mem_size),
        }
    }

    /// Allocates the cell for a newly declared variable.
    pub fn push_var(&mut self, init: i64) {
        self.vars.push(init);
    }

    /// Allocates the cell for a newly declared port.
    pub fn push_port(&mut self, init: i64) {
        self.ports.push(init);
    }

    /// Current value of a variable.
    ///
    /// # Panics
    ///
    /// Panics if the ID belongs to a different model.
    pub fn var(&self, id: VarId) -> i64 {
        self.vars[id.as_raw() as usize]
    }

    /// Overwrites a variable's cell.
    pub fn set_var(&mut self, id: VarId, value: i64) {
        self.vars[id.as_raw() as usize] = value;
    }

    /// Current value of a port.
    ///
    /// # Panics
    ///
    /// Panics if the ID belongs to a different model.
    pub fn port(&self, id: PortId) -> i64 {
        self.ports[id.as_raw() as usize]
    }

    /// Overwrites a port's cell.
    pub fn set_port(&mut self, id: PortId, value: i64) {
        self.ports[id.as_raw() as usize] = value;
    }
}
