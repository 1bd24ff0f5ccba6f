//! Lowering of planner expressions into the typed execution IR.
//!
//! This module provides:
//! - Expression lowering (`lower_expr`, `lower_exprs`, `ExprLowerer`)
//! - Type descriptor lowering (`lower_type`)
//! - Literal value lowering (`lower_literal`)
//! - Operator-name resolution through an injected `FunctionResolver`
//!
//! Lowering is pure: it holds no state across calls and any failure aborts
//! the whole tree.

pub mod error;
pub mod expr;
pub mod function;
pub mod literal;
pub mod types;

pub use error::{LoweringError, LoweringResult};
pub use expr::{lower_expr, lower_exprs, ExprLowerer};
pub use function::{FunctionMappings, FunctionResolver};
pub use literal::{lower_literal, BIGINT_DECIMAL_MAX_PRECISION};
pub use types::lower_type;
