//! Error types for expression lowering.

use crate::logical::SqlTypeName;
use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while lowering a planner expression
#[derive(Error, Debug)]
pub enum LoweringError {
    #[error("Unsupported expression node: {kind}")]
    UnsupportedConstruct { kind: &'static str },

    #[error("Unsupported type: {type_name}")]
    UnsupportedType { type_name: SqlTypeName },

    #[error("Unsupported literal type: {type_name}")]
    UnsupportedLiteral { type_name: SqlTypeName },

    #[error("Decimal unscaled value {unscaled} does not fit in BIGINT (precision {precision})")]
    ExactConversion { unscaled: BigInt, precision: u32 },

    #[error("No engine function for operator '{operator}'")]
    FunctionResolution { operator: String },

    #[error("Invalid {type_name} literal: '{text}'")]
    InvalidLiteral { type_name: SqlTypeName, text: String },

    /// The caller supplied fewer column names than the tree references.
    #[error("Input reference {index} out of bounds for {columns} columns")]
    ColumnIndexOutOfBounds { index: usize, columns: usize },

    #[error("Typed expression encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Result type for lowering operations
pub type LoweringResult<T> = Result<T, LoweringError>;
