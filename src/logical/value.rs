//! Literal payloads carried by planner literals.

use num_bigint::{BigInt, Sign};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a valid decimal number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid decimal literal: '{0}'")]
pub struct ParseDecimalError(pub String);

/// Arbitrary-precision fixed-point decimal.
///
/// The numeric value is `unscaled * 10^-scale`. `precision` is the number of
/// significant digits the planner attributes to the value; it defaults to the
/// digit count of `unscaled`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    precision: u32,
    scale: i32,
}

impl Decimal {
    pub fn new(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        let unscaled = unscaled.into();
        let precision = digit_count(&unscaled);
        Self {
            unscaled,
            precision,
            scale,
        }
    }

    /// Override the precision derived from the unscaled digits
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }
}

fn digit_count(value: &BigInt) -> u32 {
    value.magnitude().to_str_radix(10).len() as u32
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };
        Ok(Decimal::new(unscaled, frac_part.len() as i32))
    }
}

/// Plain notation while the scale is non-negative and the adjusted exponent
/// is at least -6, scientific notation (`1.23E+5`) otherwise.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let adjusted = digits.len() as i64 - 1 - i64::from(self.scale);

        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        if self.scale < 0 || adjusted < -6 {
            let (lead, rest) = digits.split_at(1);
            write!(f, "{}{}", sign, lead)?;
            if !rest.is_empty() {
                write!(f, ".{}", rest)?;
            }
            return write!(f, "E{}{}", if adjusted >= 0 { "+" } else { "" }, adjusted);
        }

        let scale = self.scale as usize;
        let digits = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

/// Value of a planner literal, before any typing decision is applied
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    /// Exact integral value
    Exact(i64),
    /// Approximate numeric value
    Approx(f64),
    Decimal(Decimal),
    Text(String),
    Bytes(Vec<u8>),
}

/// Text form of a literal. Byte strings render as lower-case hex.
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("NULL"),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Exact(i) => write!(f, "{}", i),
            LiteralValue::Approx(d) => write!(f, "{}", d),
            LiteralValue::Decimal(d) => write!(f, "{}", d),
            LiteralValue::Text(s) => f.write_str(s),
            LiteralValue::Bytes(bytes) => {
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Boolean(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Exact(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        LiteralValue::Exact(value.into())
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Approx(value)
    }
}

impl From<Decimal> for LiteralValue {
    fn from(value: Decimal) -> Self {
        LiteralValue::Decimal(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Text(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::Text(value)
    }
}

impl From<Vec<u8>> for LiteralValue {
    fn from(value: Vec<u8>) -> Self {
        LiteralValue::Bytes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_parse() {
        let d: Decimal = "123.45".parse().unwrap();
        assert_eq!(d.unscaled(), &BigInt::from(12345));
        assert_eq!(d.scale(), 2);
        assert_eq!(d.precision(), 5);

        let d: Decimal = "-0.05".parse().unwrap();
        assert_eq!(d.unscaled(), &BigInt::from(-5));
        assert_eq!(d.scale(), 2);
        assert_eq!(d.precision(), 1);

        let d: Decimal = "42".parse().unwrap();
        assert_eq!(d.scale(), 0);
        assert_eq!(d.precision(), 2);

        let d: Decimal = ".5".parse().unwrap();
        assert_eq!(d.unscaled(), &BigInt::from(5));
        assert_eq!(d.scale(), 1);
    }

    #[test]
    fn test_decimal_parse_invalid() {
        assert!("".parse::<Decimal>().is_err());
        assert!("-".parse::<Decimal>().is_err());
        assert!(".".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
        assert!("12a".parse::<Decimal>().is_err());
        assert_eq!(
            "x".parse::<Decimal>().unwrap_err().to_string(),
            "Invalid decimal literal: 'x'"
        );
    }

    #[test]
    fn test_decimal_display() {
        assert_eq!(Decimal::new(12345, 2).to_string(), "123.45");
        assert_eq!(Decimal::new(-5, 2).to_string(), "-0.05");
        assert_eq!(Decimal::new(7, 0).to_string(), "7");
        assert_eq!(Decimal::new(7, -2).to_string(), "7E+2");
        assert_eq!(Decimal::new(12345, -2).to_string(), "1.2345E+6");
        assert_eq!(Decimal::new(-5, 8).to_string(), "-5E-8");
        assert_eq!(Decimal::new(1, 6).to_string(), "0.000001");
    }

    #[test]
    fn test_with_precision() {
        let d = Decimal::new(1, 0).with_precision(18);
        assert_eq!(d.precision(), 18);
        assert_eq!(d.unscaled(), &BigInt::from(1));
    }

    #[test]
    fn test_literal_text_form() {
        assert_eq!(LiteralValue::Null.to_string(), "NULL");
        assert_eq!(LiteralValue::from(true).to_string(), "true");
        assert_eq!(LiteralValue::from(-17i64).to_string(), "-17");
        assert_eq!(LiteralValue::from(2.5f64).to_string(), "2.5");
        assert_eq!(LiteralValue::from("abc").to_string(), "abc");
        assert_eq!(
            LiteralValue::Bytes(vec![0x00, 0xab, 0x10]).to_string(),
            "00ab10"
        );
    }
}
