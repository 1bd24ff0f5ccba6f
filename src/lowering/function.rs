//! Operator-name to engine-function resolution.

use crate::lowering::error::{LoweringError, LoweringResult};
use std::collections::HashMap;

/// Resolves a planner operator name to the engine's function identifier
pub trait FunctionResolver {
    /// Look up the engine function for `operator`. Fails with
    /// `LoweringError::FunctionResolution` when there is none.
    fn resolve_function(&self, operator: &str) -> LoweringResult<String>;
}

const BUILTIN_MAPPINGS: &[(&str, &str)] = &[
    ("+", "add"),
    ("-", "subtract"),
    ("*", "multiply"),
    ("/", "divide"),
    ("%", "mod"),
    ("MOD", "mod"),
    ("=", "equalto"),
    ("<>", "notequalto"),
    (">", "greaterthan"),
    (">=", "greaterthanorequal"),
    ("<", "lessthan"),
    ("<=", "lessthanorequal"),
    ("AND", "and"),
    ("OR", "or"),
    ("NOT", "not"),
    ("CAST", "cast"),
    ("IS NULL", "isnull"),
    ("IS NOT NULL", "isnotnull"),
    ("LIKE", "like"),
    ("||", "concat"),
    ("CONCAT", "concat"),
];

/// Table-driven resolver. Operator names match case-insensitively.
#[derive(Debug, Clone)]
pub struct FunctionMappings {
    mappings: HashMap<String, String>,
}

impl FunctionMappings {
    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Add or replace the mapping for `operator`
    pub fn with_mapping(mut self, operator: &str, function: impl Into<String>) -> Self {
        self.mappings
            .insert(operator.to_ascii_uppercase(), function.into());
        self
    }

    pub fn get(&self, operator: &str) -> Option<&str> {
        self.mappings
            .get(&operator.to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for FunctionMappings {
    fn default() -> Self {
        BUILTIN_MAPPINGS
            .iter()
            .fold(Self::empty(), |table, (operator, function)| {
                table.with_mapping(operator, *function)
            })
    }
}

impl FunctionResolver for FunctionMappings {
    fn resolve_function(&self, operator: &str) -> LoweringResult<String> {
        self.get(operator)
            .map(str::to_string)
            .ok_or_else(|| LoweringError::FunctionResolution {
                operator: operator.to_string(),
            })
    }
}
