//! Constant values of the typed IR.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-native constant value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Double(f64),
    VarChar(String),
    /// Binary payload in its text form
    VarBinary(String),
    /// Integer wider than 64 bits
    HugeInt(BigInt),
}

impl Variant {
    /// Get the tag name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Boolean(_) => "BOOLEAN",
            Variant::TinyInt(_) => "TINYINT",
            Variant::SmallInt(_) => "SMALLINT",
            Variant::Integer(_) => "INTEGER",
            Variant::BigInt(_) => "BIGINT",
            Variant::Double(_) => "DOUBLE",
            Variant::VarChar(_) => "VARCHAR",
            Variant::VarBinary(_) => "VARBINARY",
            Variant::HugeInt(_) => "HUGEINT",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Boolean(b) => write!(f, "{}", b),
            Variant::TinyInt(i) => write!(f, "{}", i),
            Variant::SmallInt(i) => write!(f, "{}", i),
            Variant::Integer(i) => write!(f, "{}", i),
            Variant::BigInt(i) => write!(f, "{}", i),
            Variant::Double(d) => write!(f, "{}", d),
            Variant::VarChar(s) => write!(f, "'{}'", s),
            Variant::VarBinary(s) => write!(f, "X'{}'", s),
            Variant::HugeInt(i) => write!(f, "{}", i),
        }
    }
}
