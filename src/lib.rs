//! Discounted free-cash-flow projection and valuation for a small
//! manufacturing venture
//!
//! This library provides:
//! - A deterministic projection engine from a fixed assumption set to the
//!   consolidated six-year cash-flow table
//! - Valuation metrics over the free-cash-flow sequence (NPV, IRR, payback)
//! - A scenario runner for evaluating independent assumption sets

pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod valuation;

// Re-export commonly used types
pub use assumptions::{
    AssumptionError, Assumptions, CapexSchedule, DepreciationSchedule, EscalatingCost,
};
pub use projection::{CashflowRow, CashflowTable, ProjectionEngine};
pub use scenario::{ScenarioOutcome, ScenarioRunner};
pub use valuation::ValuationResult;
