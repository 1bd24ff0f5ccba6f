//! Typed expression tree.

use crate::lowering::LoweringResult;
use crate::typed::types::Type;
use crate::typed::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedExpr {
    /// Constant value
    Constant {
        data_type: Type,
        value: Variant,
        /// Pre-built constant vector. Lowering never fills this in.
        value_vector: Option<Vec<u8>>,
    },

    /// Engine function call
    Call {
        data_type: Type,
        inputs: Vec<TypedExpr>,
        function_name: String,
    },

    /// Column or struct field, resolved by name
    FieldAccess { data_type: Type, field_name: String },
}

impl TypedExpr {
    /// Create a constant without a value vector
    pub fn constant(data_type: Type, value: Variant) -> Self {
        TypedExpr::Constant {
            data_type,
            value,
            value_vector: None,
        }
    }

    pub fn call(data_type: Type, inputs: Vec<TypedExpr>, function_name: impl Into<String>) -> Self {
        TypedExpr::Call {
            data_type,
            inputs,
            function_name: function_name.into(),
        }
    }

    pub fn field_access(data_type: Type, field_name: impl Into<String>) -> Self {
        TypedExpr::FieldAccess {
            data_type,
            field_name: field_name.into(),
        }
    }

    /// Result type of this node
    pub fn data_type(&self) -> &Type {
        match self {
            TypedExpr::Constant { data_type, .. }
            | TypedExpr::Call { data_type, .. }
            | TypedExpr::FieldAccess { data_type, .. } => data_type,
        }
    }

    /// Encode this tree for the native engine
    pub fn to_bytes(&self) -> LoweringResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a tree produced by `to_bytes`
    pub fn from_bytes(bytes: &[u8]) -> LoweringResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl fmt::Display for TypedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedExpr::Constant { value, .. } => write!(f, "{}", value),
            TypedExpr::FieldAccess { field_name, .. } => f.write_str(field_name),
            TypedExpr::Call {
                inputs,
                function_name,
                ..
            } => {
                write!(f, "{}(", function_name)?;
                for (i, input) in inputs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", input)?;
                }
                f.write_str(")")
            }
        }
    }
}
