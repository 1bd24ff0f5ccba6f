//! Engine-native type descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Boolean,
    Integer,
    BigInt,
    VarChar,
    Timestamp,
    Decimal { precision: u32, scale: i32 },
    /// Struct type. `names` and `children` correspond one to one.
    Row {
        names: Vec<String>,
        children: Vec<Type>,
    },
}

impl Type {
    /// Create a row type from parallel name and child lists
    pub fn row(names: Vec<String>, children: Vec<Type>) -> Self {
        debug_assert_eq!(names.len(), children.len());
        Type::Row { names, children }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("BOOLEAN"),
            Type::Integer => f.write_str("INTEGER"),
            Type::BigInt => f.write_str("BIGINT"),
            Type::VarChar => f.write_str("VARCHAR"),
            Type::Timestamp => f.write_str("TIMESTAMP"),
            Type::Decimal { precision, scale } => write!(f, "DECIMAL({}, {})", precision, scale),
            Type::Row { names, children } => {
                f.write_str("ROW<")?;
                for (i, (name, child)) in names.iter().zip(children).enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", name, child)?;
                }
                f.write_str(">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Type::VarChar.to_string(), "VARCHAR");
        assert_eq!(
            Type::Decimal {
                precision: 10,
                scale: 2
            }
            .to_string(),
            "DECIMAL(10, 2)"
        );

        let row = Type::row(
            vec!["id".to_string(), "tags".to_string()],
            vec![
                Type::BigInt,
                Type::row(vec!["k".to_string()], vec![Type::VarChar]),
            ],
        );
        assert_eq!(row.to_string(), "ROW<id:BIGINT,tags:ROW<k:VARCHAR>>");
    }
}
