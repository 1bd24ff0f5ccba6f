//! Row-expression tree emitted by the planner.

use crate::logical::types::LogicalType;
use crate::logical::value::LiteralValue;

/// Logical expression node. Every node carries the result type the planner
/// derived for it.
#[derive(Debug, Clone, PartialEq)]
pub enum RexNode {
    /// Constant value
    Literal {
        value: LiteralValue,
        data_type: LogicalType,
    },

    /// Operator or function application
    Call {
        operator: String,
        operands: Vec<RexNode>,
        data_type: LogicalType,
    },

    /// Reference to an input column by position
    InputRef { index: usize, data_type: LogicalType },

    /// Access to a named field of a row-valued expression
    FieldAccess {
        expr: Box<RexNode>,
        field_name: String,
        data_type: LogicalType,
    },

    /// Query parameter placeholder (`?`)
    DynamicParam { index: usize, data_type: LogicalType },

    /// Reference to a common sub-expression of an enclosing program
    LocalRef { index: usize, data_type: LogicalType },

    /// Correlation variable of a correlated sub-query
    CorrelVariable { id: String, data_type: LogicalType },
}

impl RexNode {
    /// Create a literal node
    pub fn literal(value: impl Into<LiteralValue>, data_type: LogicalType) -> Self {
        RexNode::Literal {
            value: value.into(),
            data_type,
        }
    }

    /// Create a call node
    pub fn call(operator: impl Into<String>, operands: Vec<RexNode>, data_type: LogicalType) -> Self {
        RexNode::Call {
            operator: operator.into(),
            operands,
            data_type,
        }
    }

    /// Create an input reference
    pub fn input_ref(index: usize, data_type: LogicalType) -> Self {
        RexNode::InputRef { index, data_type }
    }

    /// Create a field access on `expr`
    pub fn field_access(expr: RexNode, field_name: impl Into<String>, data_type: LogicalType) -> Self {
        RexNode::FieldAccess {
            expr: Box::new(expr),
            field_name: field_name.into(),
            data_type,
        }
    }

    /// Name of this node's variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            RexNode::Literal { .. } => "Literal",
            RexNode::Call { .. } => "Call",
            RexNode::InputRef { .. } => "InputRef",
            RexNode::FieldAccess { .. } => "FieldAccess",
            RexNode::DynamicParam { .. } => "DynamicParam",
            RexNode::LocalRef { .. } => "LocalRef",
            RexNode::CorrelVariable { .. } => "CorrelVariable",
        }
    }

    /// Result type of this node
    pub fn data_type(&self) -> &LogicalType {
        match self {
            RexNode::Literal { data_type, .. }
            | RexNode::Call { data_type, .. }
            | RexNode::InputRef { data_type, .. }
            | RexNode::FieldAccess { data_type, .. }
            | RexNode::DynamicParam { data_type, .. }
            | RexNode::LocalRef { data_type, .. }
            | RexNode::CorrelVariable { data_type, .. } => data_type,
        }
    }

    /// Depth of the tree rooted at this node. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            RexNode::Call { operands, .. } => {
                1 + operands.iter().map(RexNode::depth).max().unwrap_or(0)
            }
            RexNode::FieldAccess { expr, .. } => 1 + expr.depth(),
            _ => 1,
        }
    }
}
