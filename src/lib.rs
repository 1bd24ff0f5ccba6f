pub mod logical;
pub mod lowering;
pub mod typed;
