//! Expression tree lowering.

use crate::logical::RexNode;
use crate::lowering::error::{LoweringError, LoweringResult};
use crate::lowering::function::FunctionResolver;
use crate::lowering::literal::lower_literal;
use crate::lowering::types::lower_type;
use crate::typed::TypedExpr;
use log::debug;

/// Lowers planner expressions against one input schema.
///
/// `column_names` resolves `InputRef` positions to names; operator names go
/// through `resolver`.
pub struct ExprLowerer<'a> {
    column_names: &'a [String],
    resolver: &'a dyn FunctionResolver,
}

impl<'a> ExprLowerer<'a> {
    pub fn new(column_names: &'a [String], resolver: &'a dyn FunctionResolver) -> Self {
        Self {
            column_names,
            resolver,
        }
    }

    /// Lower one expression tree
    pub fn lower(&self, node: &RexNode) -> LoweringResult<TypedExpr> {
        match node {
            RexNode::Literal { value, data_type } => Ok(TypedExpr::constant(
                lower_type(data_type)?,
                lower_literal(value, data_type)?,
            )),

            RexNode::Call {
                operator,
                operands,
                data_type,
            } => {
                let inputs = self.lower_all(operands)?;
                let data_type = lower_type(data_type)?;
                let function_name = self.resolver.resolve_function(operator)?;
                Ok(TypedExpr::call(data_type, inputs, function_name))
            }

            RexNode::InputRef { index, data_type } => {
                let name = self.column_names.get(*index).ok_or(
                    LoweringError::ColumnIndexOutOfBounds {
                        index: *index,
                        columns: self.column_names.len(),
                    },
                )?;
                Ok(TypedExpr::field_access(lower_type(data_type)?, name.clone()))
            }

            // Only the field name is carried over; the parent expression is
            // not lowered.
            RexNode::FieldAccess {
                field_name,
                data_type,
                ..
            } => Ok(TypedExpr::field_access(
                lower_type(data_type)?,
                field_name.clone(),
            )),

            RexNode::DynamicParam { .. }
            | RexNode::LocalRef { .. }
            | RexNode::CorrelVariable { .. } => Err(LoweringError::UnsupportedConstruct {
                kind: node.kind(),
            }),
        }
    }

    /// Lower sibling expressions, preserving order
    pub fn lower_all(&self, nodes: &[RexNode]) -> LoweringResult<Vec<TypedExpr>> {
        nodes.iter().map(|node| self.lower(node)).collect()
    }
}

/// Lower a planner expression into the typed IR
pub fn lower_expr(
    node: &RexNode,
    column_names: &[String],
    resolver: &dyn FunctionResolver,
) -> LoweringResult<TypedExpr> {
    debug!(
        "Lowering {} expression (depth {}) over {} input columns",
        node.kind(),
        node.depth(),
        column_names.len()
    );
    ExprLowerer::new(column_names, resolver).lower(node)
}

/// Lower a list of planner expressions, preserving order and length
pub fn lower_exprs(
    nodes: &[RexNode],
    column_names: &[String],
    resolver: &dyn FunctionResolver,
) -> LoweringResult<Vec<TypedExpr>> {
    debug!(
        "Lowering {} expressions over {} input columns",
        nodes.len(),
        column_names.len()
    );
    ExprLowerer::new(column_names, resolver).lower_all(nodes)
}
