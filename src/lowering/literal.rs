//! Literal value lowering.
//!
//! The output variant is chosen by the literal's declared type tag, not by
//! the shape of the stored value. Numeric tags are converted through the
//! value's text form, so an exact `5` and the text `"5"` lower alike.
//!
//! TINYINT and SMALLINT literals both surface as `Variant::Integer`; the
//! engine derives the storage width from the expression type.

use crate::logical::{Decimal, LiteralValue, LogicalType, SqlTypeName};
use crate::lowering::error::{LoweringError, LoweringResult};
use crate::typed::Variant;
use log::trace;
use num_traits::ToPrimitive;
use std::str::FromStr;

/// Largest decimal precision whose unscaled value is stored as a BIGINT.
/// Wider decimals are stored as HUGEINT.
pub const BIGINT_DECIMAL_MAX_PRECISION: u32 = 18;

/// Lower a literal value of the given declared type into an engine constant
pub fn lower_literal(value: &LiteralValue, data_type: &LogicalType) -> LoweringResult<Variant> {
    let type_name = data_type.sql_type_name();
    match type_name {
        SqlTypeName::Boolean => match value {
            LiteralValue::Boolean(b) => Ok(Variant::Boolean(*b)),
            other => Err(invalid_literal(type_name, other)),
        },
        SqlTypeName::TinyInt | SqlTypeName::SmallInt | SqlTypeName::Integer => {
            parse_text_form::<i32>(value, type_name).map(Variant::Integer)
        }
        SqlTypeName::BigInt => parse_text_form::<i64>(value, type_name).map(Variant::BigInt),
        SqlTypeName::Double => parse_text_form::<f64>(value, type_name).map(Variant::Double),
        SqlTypeName::VarChar => text_form(value, type_name).map(Variant::VarChar),
        // TODO: carry binary literals as bytes once Variant::VarBinary does
        SqlTypeName::Binary => text_form(value, type_name).map(Variant::VarBinary),
        SqlTypeName::Decimal => {
            let decimal = match value {
                LiteralValue::Decimal(decimal) => decimal.clone(),
                other => parse_text_form::<Decimal>(other, type_name)?,
            };
            lower_decimal(&decimal)
        }
        _ => Err(LoweringError::UnsupportedLiteral { type_name }),
    }
}

fn lower_decimal(decimal: &Decimal) -> LoweringResult<Variant> {
    if decimal.precision() <= BIGINT_DECIMAL_MAX_PRECISION {
        let unscaled = decimal
            .unscaled()
            .to_i64()
            .ok_or_else(|| LoweringError::ExactConversion {
                unscaled: decimal.unscaled().clone(),
                precision: decimal.precision(),
            })?;
        trace!(
            "Decimal literal {} (precision {}) stored as BIGINT",
            decimal,
            decimal.precision()
        );
        Ok(Variant::BigInt(unscaled))
    } else {
        trace!(
            "Decimal literal {} (precision {}) stored as HUGEINT",
            decimal,
            decimal.precision()
        );
        Ok(Variant::HugeInt(decimal.unscaled().clone()))
    }
}

fn text_form(value: &LiteralValue, type_name: SqlTypeName) -> LoweringResult<String> {
    match value {
        LiteralValue::Null => Err(invalid_literal(type_name, value)),
        other => Ok(other.to_string()),
    }
}

fn parse_text_form<T: FromStr>(value: &LiteralValue, type_name: SqlTypeName) -> LoweringResult<T> {
    text_form(value, type_name)?
        .parse()
        .map_err(|_| invalid_literal(type_name, value))
}

fn invalid_literal(type_name: SqlTypeName, value: &LiteralValue) -> LoweringError {
    LoweringError::InvalidLiteral {
        type_name,
        text: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_scalar_values_preserved() {
        assert_eq!(
            lower_literal(&LiteralValue::Boolean(true), &LogicalType::Boolean).unwrap(),
            Variant::Boolean(true)
        );
        assert_eq!(
            lower_literal(&LiteralValue::Exact(-42), &LogicalType::Integer).unwrap(),
            Variant::Integer(-42)
        );
        assert_eq!(
            lower_literal(&LiteralValue::Exact(i64::MIN), &LogicalType::BigInt).unwrap(),
            Variant::BigInt(i64::MIN)
        );
        assert_eq!(
            lower_literal(&LiteralValue::Approx(0.1), &LogicalType::Double).unwrap(),
            Variant::Double(0.1)
        );
        assert_eq!(
            lower_literal(&LiteralValue::from("héllo"), &LogicalType::varchar()).unwrap(),
            Variant::VarChar("héllo".to_string())
        );
    }

    #[test]
    fn test_narrow_integers_fold_to_integer() {
        assert_eq!(
            lower_literal(&LiteralValue::Exact(5), &LogicalType::TinyInt).unwrap(),
            Variant::Integer(5)
        );
        assert_eq!(
            lower_literal(&LiteralValue::Exact(-300), &LogicalType::SmallInt).unwrap(),
            Variant::Integer(-300)
        );
    }

    #[test]
    fn test_numeric_via_text_form() {
        assert_eq!(
            lower_literal(&LiteralValue::from("17"), &LogicalType::Integer).unwrap(),
            Variant::Integer(17)
        );
        assert_eq!(
            lower_literal(&LiteralValue::Exact(3), &LogicalType::Double).unwrap(),
            Variant::Double(3.0)
        );
        assert_eq!(
            lower_literal(
                &LiteralValue::Decimal(Decimal::new(12, 0)),
                &LogicalType::BigInt
            )
            .unwrap(),
            Variant::BigInt(12)
        );
    }

    #[test]
    fn test_integer_overflow_is_invalid() {
        let err = lower_literal(&LiteralValue::Exact(i64::from(i32::MAX) + 1), &LogicalType::Integer)
            .unwrap_err();
        assert!(matches!(
            err,
            LoweringError::InvalidLiteral {
                type_name: SqlTypeName::Integer,
                ref text
            } if text == "2147483648"
        ));
    }

    #[test]
    fn test_null_and_mismatched_values() {
        assert!(matches!(
            lower_literal(&LiteralValue::Null, &LogicalType::varchar()),
            Err(LoweringError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            lower_literal(&LiteralValue::Null, &LogicalType::Integer),
            Err(LoweringError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            lower_literal(&LiteralValue::Exact(1), &LogicalType::Boolean),
            Err(LoweringError::InvalidLiteral {
                type_name: SqlTypeName::Boolean,
                ..
            })
        ));
    }

    #[test]
    fn test_binary_as_text() {
        assert_eq!(
            lower_literal(&LiteralValue::Bytes(vec![0xde, 0xad]), &LogicalType::binary()).unwrap(),
            Variant::VarBinary("dead".to_string())
        );
    }

    #[test]
    fn test_decimal_bigint_path() {
        let decimal: Decimal = "123.45".parse().unwrap();
        assert_eq!(
            lower_literal(&decimal.into(), &LogicalType::decimal(5, 2)).unwrap(),
            Variant::BigInt(12345)
        );

        let max = Decimal::new(999_999_999_999_999_999i64, 4);
        assert_eq!(max.precision(), BIGINT_DECIMAL_MAX_PRECISION);
        assert_eq!(
            lower_literal(&max.into(), &LogicalType::decimal(18, 4)).unwrap(),
            Variant::BigInt(999_999_999_999_999_999)
        );
    }

    #[test]
    fn test_decimal_hugeint_path() {
        let wide: Decimal = "1234567890123456789.5".parse().unwrap();
        assert_eq!(wide.precision(), 20);
        assert_eq!(
            lower_literal(&wide.into(), &LogicalType::decimal(20, 1)).unwrap(),
            Variant::HugeInt(BigInt::from(12_345_678_901_234_567_895i128))
        );

        // Precision above the threshold uses HUGEINT even for small values
        let small = Decimal::new(7, 2).with_precision(19);
        assert_eq!(
            lower_literal(&small.into(), &LogicalType::decimal(19, 2)).unwrap(),
            Variant::HugeInt(BigInt::from(7))
        );
    }

    #[test]
    fn test_decimal_exact_conversion_failure() {
        let unscaled: BigInt = BigInt::from(i64::MAX) + 1i64;
        let decimal = Decimal::new(unscaled.clone(), 0).with_precision(18);
        let err = lower_literal(&decimal.into(), &LogicalType::decimal(18, 0)).unwrap_err();
        assert!(matches!(
            err,
            LoweringError::ExactConversion { unscaled: ref u, precision: 18 } if *u == unscaled
        ));
    }

    #[test]
    fn test_decimal_with_huge_negative_scale_as_integer() {
        let decimal = Decimal::new(1, -2_000_000_000);
        let err = lower_literal(&decimal.into(), &LogicalType::Integer).unwrap_err();
        assert!(matches!(
            err,
            LoweringError::InvalidLiteral {
                type_name: SqlTypeName::Integer,
                ref text
            } if text == "1E+2000000000"
        ));
    }

    #[test]
    fn test_decimal_from_text() {
        assert_eq!(
            lower_literal(&LiteralValue::from("-0.50"), &LogicalType::decimal(3, 2)).unwrap(),
            Variant::BigInt(-50)
        );
        assert!(matches!(
            lower_literal(&LiteralValue::from("1e5"), &LogicalType::decimal(3, 2)),
            Err(LoweringError::InvalidLiteral {
                type_name: SqlTypeName::Decimal,
                ..
            })
        ));
    }

    #[test]
    fn test_unsupported_literal_types() {
        for data_type in [
            LogicalType::Timestamp,
            LogicalType::Date,
            LogicalType::Float,
            LogicalType::VarBinary(None),
            LogicalType::row([("a", LogicalType::Integer)]),
        ] {
            let type_name = data_type.sql_type_name();
            assert!(matches!(
                lower_literal(&LiteralValue::Exact(1), &data_type),
                Err(LoweringError::UnsupportedLiteral { type_name: t }) if t == type_name
            ));
        }
    }
}
