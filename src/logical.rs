//! Logical expression algebra produced by the query planner.
//!
//! This module provides:
//! - SQL type descriptors (`LogicalType`) and their tags (`SqlTypeName`)
//! - Literal payloads as the planner hands them over (`LiteralValue`, `Decimal`)
//! - The row-expression tree (`RexNode`) that lowering consumes

pub mod rex;
pub mod types;
pub mod value;

pub use rex::RexNode;
pub use types::{LogicalType, RowField, SqlTypeName};
pub use value::{Decimal, LiteralValue};
