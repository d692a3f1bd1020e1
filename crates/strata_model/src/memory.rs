//! The model's single addressable memory.
//!
//! A fixed-length array of integer cells. Any index outside `[0, size)` is a
//! modeling bug and fails the whole invocation; there is no wrapping and no
//! clamping.

use crate::error::ModelError;

/// A fixed-size array of integer memory cells.
#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<i64>,
}

impl Memory {
    /// Creates a memory of `size` zeroed cells.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Reads the cell at `index`.
    pub fn read(&self, index: i64) -> Result<i64, ModelError> {
        Ok(self.cells[self.slot(index)?])
    }

    /// Writes `value` into the cell at `index`.
    pub fn write(&mut self, index: i64, value: i64) -> Result<(), ModelError> {
        let slot = self.slot(index)?;
        self.cells[slot] = value;
        Ok(())
    }

    fn slot(&self, index: i64) -> Result<usize, ModelError> {
        if index < 0 || index as usize >= self.cells.len() {
            return Err(ModelError::MemoryOutOfRange {
                index,
                size: self.cells.len(),
            });
        }
        Ok(index as usize)
    }
}
