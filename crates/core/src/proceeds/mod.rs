//! Proceeds module - what a seller walks away with after costs.

mod proceeds_calculator;
mod proceeds_model;

pub use proceeds_calculator::estimate_proceeds;
pub use proceeds_model::{ProceedsInput, ProceedsResult};
