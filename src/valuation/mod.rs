//! Valuation metrics derived from the free-cash-flow sequence

mod irr;

pub use irr::internal_rate_of_return;

use serde::{Deserialize, Serialize};

use crate::projection::CashflowTable;

/// Net present value of a cash-flow sequence at the given annual discount
/// rate. Year 0 is undiscounted at its own index.
pub fn net_present_value(rate: f64, cashflows: &[f64]) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(year, &cf)| cf / (1.0 + rate).powi(year as i32))
        .sum()
}

/// First year at which cumulative free cash flow turns non-negative,
/// scanning from year 0 upward. `None` when the cumulative sequence never
/// reaches zero within the horizon.
pub fn payback_year(cumulative_fcl: &[f64]) -> Option<u32> {
    cumulative_fcl
        .iter()
        .position(|&c| c >= 0.0)
        .map(|year| year as u32)
}

/// Value-creation metrics for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Net present value at the scenario discount rate
    pub npv: f64,

    /// Internal rate of return; `None` when the cash flows admit no root
    pub irr: Option<f64>,

    /// `None` when cumulative FCL never turns non-negative within the horizon
    pub payback_year: Option<u32>,
}

impl ValuationResult {
    /// Compute all three metrics from the free-cash-flow column of a table
    pub fn compute(table: &CashflowTable, discount_rate: f64) -> Self {
        let fcl = table.fcl_column();
        Self {
            npv: net_present_value(discount_rate, &fcl),
            irr: internal_rate_of_return(&fcl),
            payback_year: payback_year(&table.cumulative_fcl_column()),
        }
    }
}
