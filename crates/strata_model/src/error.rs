//! Error types for model construction and action evaluation.
//!
//! Every fatal condition aborts the current invocation and surfaces as a
//! [`ModelError`]; there is no retry and no rollback of already-applied
//! statements.

/// Errors raised while building or evaluating a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A name was read or written that exists in no registry.
    #[error("unknown name: {0}")]
    UnknownName(String),

    /// An action was invoked that was never defined.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A name resolved to an entity that cannot be written directly.
    #[error("{0} is not writable")]
    NotWritable(String),

    /// A memory index evaluated outside `[0, size)`.
    #[error("memory index {index} out of range (size {size})")]
    MemoryOutOfRange {
        /// The evaluated index.
        index: i64,
        /// The memory size.
        size: usize,
    },

    /// An if-statement's predicate evaluated false with no else branch attached.
    #[error("if-statement predicate is false and no else branch is attached")]
    MissingElseBranch,

    /// An assignment's target expression is not a variable, port, or memory cell.
    #[error("assignment target is not a variable, port, or memory cell")]
    InvalidAssignTarget,

    /// Division or modulo by zero during expression evaluation.
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_display() {
        let e = ModelError::UnknownName("bogus".into());
        assert_eq!(e.to_string(), "unknown name: bogus");
    }

    #[test]
    fn out_of_range_display() {
        let e = ModelError::MemoryOutOfRange {
            index: 101,
            size: 100,
        };
        assert_eq!(e.to_string(), "memory index 101 out of range (size 100)");
    }

    #[test]
    fn missing_else_display() {
        let e = ModelError::MissingElseBranch;
        assert!(e.to_string().contains("no else branch"));
    }

    #[test]
    fn not_writable_display() {
        let e = ModelError::NotWritable("depth".into());
        assert_eq!(e.to_string(), "depth is not writable");
    }
}
