//! Opaque ID newtypes for IR entities.
//!
//! Each ID wraps a `u32` arena index and is `Copy`, `Hash`, and serde-derived.
//! IDs are handed out by [`Arena::alloc`](crate::arena::Arena::alloc) and stay
//! valid for the lifetime of the owning [`ModelIr`](crate::ModelIr).

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Builds an ID from a raw arena index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw arena index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// ID of an expression node.
    ExprId
);

define_id!(
    /// ID of a statement node.
    StmtId
);

define_id!(
    /// ID of a declared variable.
    VarId
);

define_id!(
    /// ID of a declared port.
    PortId
);

define_id!(
    /// ID of a declared named constant.
    ConstId
);

define_id!(
    /// ID of a registered action.
    ActionId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn raw_roundtrip() {
        let id = ExprId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
    }

    #[test]
    fn equality_is_by_index() {
        assert_eq!(StmtId::from_raw(3), StmtId::from_raw(3));
        assert_ne!(StmtId::from_raw(3), StmtId::from_raw(4));
    }

    #[test]
    fn usable_as_set_key() {
        let mut seen = HashSet::new();
        seen.insert(VarId::from_raw(0));
        seen.insert(VarId::from_raw(1));
        seen.insert(VarId::from_raw(0));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let id = ActionId::from_raw(12);
        let json = serde_json::to_string(&id).unwrap();
        let back: ActionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
