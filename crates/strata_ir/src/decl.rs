//! Declaration records for variables, ports, and named constants.
//!
//! Declarations are made once at model-definition time and live for the
//! model's entire lifetime. They carry no runtime value; current values are
//! held by the evaluating host, keyed by the declaration IDs.

use crate::ident::Ident;
use crate::ids::{ConstId, PortId, VarId};
use serde::{Deserialize, Serialize};

/// Direction of a port on the model boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// Written by the external environment before an action is invoked.
    In,
    /// Written by statements inside an action body.
    Out,
}

/// A named mutable register internal to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    /// The unique ID of this variable.
    pub id: VarId,
    /// The declared name.
    pub name: Ident,
    /// Declared bit width. Metadata for lowering; values are not masked.
    pub width: u32,
    /// Initial value of the backing cell.
    pub init: i64,
}

/// A named signal on the model boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// The unique ID of this port.
    pub id: PortId,
    /// The declared name.
    pub name: Ident,
    /// Declared bit width. Metadata for lowering; values are not masked.
    pub width: u32,
    /// Direction of data flow.
    pub direction: PortDirection,
    /// Initial value of the backing cell.
    pub init: i64,
}

/// A named immutable integer constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedConst {
    /// The unique ID of this constant.
    pub id: ConstId,
    /// The declared name.
    pub name: Ident,
    /// The constant value.
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_distinct() {
        assert_ne!(PortDirection::In, PortDirection::Out);
    }

    #[test]
    fn port_serde_roundtrip() {
        let port = Port {
            id: PortId::from_raw(0),
            name: Ident::from_raw(1),
            width: 16,
            direction: PortDirection::Out,
            init: 0,
        };
        let json = serde_json::to_string(&port).unwrap();
        let back: Port = serde_json::from_str(&json).unwrap();
        assert_eq!(back.direction, PortDirection::Out);
        assert_eq!(back.width, 16);
    }

    #[test]
    fn variable_keeps_init() {
        let var = Variable {
            id: VarId::from_raw(2),
            name: Ident::from_raw(3),
            width: 16,
            init: 42,
        };
        assert_eq!(var.init, 42);
    }
}
