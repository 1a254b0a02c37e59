//! Projection engine and cash-flow table structures

mod engine;
mod table;

pub use engine::ProjectionEngine;
pub use table::{CashflowRow, CashflowTable};
