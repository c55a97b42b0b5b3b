//! Arithmetic operations and operand validation.

pub mod operands;
pub mod operation;

pub use operands::Operands;
pub use operation::{evaluate, Operation};
