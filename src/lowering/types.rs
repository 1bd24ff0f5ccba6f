//! Logical type to engine type lowering.

use crate::logical::LogicalType;
use crate::lowering::error::{LoweringError, LoweringResult};
use crate::typed::Type;

/// Lower a logical type descriptor into an engine type.
///
/// Decimal precision and scale are copied without range checks. Row types
/// keep their field names and order.
pub fn lower_type(data_type: &LogicalType) -> LoweringResult<Type> {
    match data_type {
        LogicalType::Boolean => Ok(Type::Boolean),
        LogicalType::Integer => Ok(Type::Integer),
        LogicalType::BigInt => Ok(Type::BigInt),
        LogicalType::VarChar(_) => Ok(Type::VarChar),
        LogicalType::Timestamp => Ok(Type::Timestamp),
        LogicalType::Decimal { precision, scale } => Ok(Type::Decimal {
            precision: *precision,
            scale: *scale,
        }),
        LogicalType::Row(fields) => {
            let children = fields
                .iter()
                .map(|field| lower_type(&field.data_type))
                .collect::<LoweringResult<Vec<_>>>()?;
            let names = fields.iter().map(|field| field.name.clone()).collect();
            Ok(Type::row(names, children))
        }
        other => Err(LoweringError::UnsupportedType {
            type_name: other.sql_type_name(),
        }),
    }
}
