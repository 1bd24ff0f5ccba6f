//! Typed expression IR consumed by the native execution engine.
//!
//! Every node carries an engine-native `Type`; constants hold a `Variant`.
//! Trees serialize with bincode for handoff across the engine boundary.

pub mod expr;
pub mod types;
pub mod variant;

pub use expr::TypedExpr;
pub use types::Type;
pub use variant::Variant;
