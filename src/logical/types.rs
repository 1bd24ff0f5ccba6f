//! Logical SQL type descriptors.

use std::fmt;

/// Type tag of a logical type descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlTypeName {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Float,
    Real,
    Double,
    Char,
    VarChar,
    Binary,
    VarBinary,
    Date,
    Time,
    Timestamp,
    Array,
    Map,
    Row,
    Null,
}

impl SqlTypeName {
    /// Get the SQL spelling of this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlTypeName::Boolean => "BOOLEAN",
            SqlTypeName::TinyInt => "TINYINT",
            SqlTypeName::SmallInt => "SMALLINT",
            SqlTypeName::Integer => "INTEGER",
            SqlTypeName::BigInt => "BIGINT",
            SqlTypeName::Decimal => "DECIMAL",
            SqlTypeName::Float => "FLOAT",
            SqlTypeName::Real => "REAL",
            SqlTypeName::Double => "DOUBLE",
            SqlTypeName::Char => "CHAR",
            SqlTypeName::VarChar => "VARCHAR",
            SqlTypeName::Binary => "BINARY",
            SqlTypeName::VarBinary => "VARBINARY",
            SqlTypeName::Date => "DATE",
            SqlTypeName::Time => "TIME",
            SqlTypeName::Timestamp => "TIMESTAMP",
            SqlTypeName::Array => "ARRAY",
            SqlTypeName::Map => "MAP",
            SqlTypeName::Row => "ROW",
            SqlTypeName::Null => "NULL",
        }
    }
}

impl fmt::Display for SqlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of a row type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowField {
    pub name: String,
    pub data_type: LogicalType,
}

impl RowField {
    pub fn new(name: impl Into<String>, data_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Logical type descriptor attached to every planner expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal { precision: u32, scale: i32 },
    Float,
    Real,
    Double,
    Char(Option<u32>),
    VarChar(Option<u32>),
    Binary(Option<u32>),
    VarBinary(Option<u32>),
    Date,
    Time,
    Timestamp,
    Array(Box<LogicalType>),
    Map(Box<LogicalType>, Box<LogicalType>),
    Row(Vec<RowField>),
    Null,
}

impl LogicalType {
    /// Unbounded VARCHAR
    pub fn varchar() -> Self {
        LogicalType::VarChar(None)
    }

    /// Unbounded BINARY
    pub fn binary() -> Self {
        LogicalType::Binary(None)
    }

    pub fn decimal(precision: u32, scale: i32) -> Self {
        LogicalType::Decimal { precision, scale }
    }

    /// Build a row type from `(name, type)` pairs, keeping their order
    pub fn row<N: Into<String>>(fields: impl IntoIterator<Item = (N, LogicalType)>) -> Self {
        LogicalType::Row(
            fields
                .into_iter()
                .map(|(name, data_type)| RowField::new(name, data_type))
                .collect(),
        )
    }

    /// Get the type tag of this descriptor
    pub fn sql_type_name(&self) -> SqlTypeName {
        match self {
            LogicalType::Boolean => SqlTypeName::Boolean,
            LogicalType::TinyInt => SqlTypeName::TinyInt,
            LogicalType::SmallInt => SqlTypeName::SmallInt,
            LogicalType::Integer => SqlTypeName::Integer,
            LogicalType::BigInt => SqlTypeName::BigInt,
            LogicalType::Decimal { .. } => SqlTypeName::Decimal,
            LogicalType::Float => SqlTypeName::Float,
            LogicalType::Real => SqlTypeName::Real,
            LogicalType::Double => SqlTypeName::Double,
            LogicalType::Char(_) => SqlTypeName::Char,
            LogicalType::VarChar(_) => SqlTypeName::VarChar,
            LogicalType::Binary(_) => SqlTypeName::Binary,
            LogicalType::VarBinary(_) => SqlTypeName::VarBinary,
            LogicalType::Date => SqlTypeName::Date,
            LogicalType::Time => SqlTypeName::Time,
            LogicalType::Timestamp => SqlTypeName::Timestamp,
            LogicalType::Array(_) => SqlTypeName::Array,
            LogicalType::Map(..) => SqlTypeName::Map,
            LogicalType::Row(_) => SqlTypeName::Row,
            LogicalType::Null => SqlTypeName::Null,
        }
    }
}
