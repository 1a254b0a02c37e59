//! Cash-flow table output structures

use serde::{Deserialize, Serialize};

/// A single row of the consolidated cash-flow table for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    /// Year index, 0 through 5
    pub year: u32,

    // Operating results
    pub revenue: f64,
    pub variable_cost: f64,
    pub fixed_cost: f64,
    pub sga: f64,
    pub depreciation: f64,
    pub ebit: f64,
    pub tax: f64,
    /// After-tax operating profit (EBIT less taxes)
    pub uodi: f64,
    /// UODI with depreciation added back
    pub operating_cf: f64,

    // Investment flows
    pub capex: f64,
    pub working_capital: f64,
    pub salvage: f64,

    // Summary
    pub fcl: f64,
    pub cumulative_fcl: f64,
}

impl CashflowRow {
    /// Create a zeroed row for a year
    pub fn new(year: u32) -> Self {
        Self {
            year,
            revenue: 0.0,
            variable_cost: 0.0,
            fixed_cost: 0.0,
            sga: 0.0,
            depreciation: 0.0,
            ebit: 0.0,
            tax: 0.0,
            uodi: 0.0,
            operating_cf: 0.0,
            capex: 0.0,
            working_capital: 0.0,
            salvage: 0.0,
            fcl: 0.0,
            cumulative_fcl: 0.0,
        }
    }

    /// EBITDA margin (operating cash flow over revenue), for display only.
    /// `None` when the year has no revenue.
    pub fn ebitda_margin(&self) -> Option<f64> {
        (self.revenue != 0.0).then(|| self.operating_cf / self.revenue)
    }

    /// Net margin (free cash flow over revenue), for display only.
    /// `None` when the year has no revenue.
    pub fn net_margin(&self) -> Option<f64> {
        (self.revenue != 0.0).then(|| self.fcl / self.revenue)
    }
}

/// Complete projection result: one row per year 0-5
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowTable {
    pub rows: Vec<CashflowRow>,
}

impl CashflowTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a yearly row
    pub fn add_row(&mut self, row: CashflowRow) {
        self.rows.push(row);
    }

    /// Free-cash-flow column in year order
    pub fn fcl_column(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.fcl).collect()
    }

    /// Cumulative free-cash-flow column in year order
    pub fn cumulative_fcl_column(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.cumulative_fcl).collect()
    }

    /// Final cumulative free cash flow over the horizon
    pub fn final_cumulative_fcl(&self) -> f64 {
        self.rows.last().map(|r| r.cumulative_fcl).unwrap_or(0.0)
    }
}

impl Default for CashflowTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_undefined_without_revenue() {
        let mut row = CashflowRow::new(0);
        row.fcl = -110_000_000.0;
        assert_eq!(row.ebitda_margin(), None);
        assert_eq!(row.net_margin(), None);
    }

    #[test]
    fn test_margins_with_revenue() {
        let mut row = CashflowRow::new(1);
        row.revenue = 330_000_000.0;
        row.operating_cf = 40_720_000.0;
        row.fcl = 36_553_333.0;

        let ebitda = row.ebitda_margin().unwrap();
        let net = row.net_margin().unwrap();
        assert!((ebitda - 40_720_000.0 / 330_000_000.0).abs() < 1e-12);
        assert!((net - 36_553_333.0 / 330_000_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_column_accessors() {
        let mut table = CashflowTable::new();
        for (year, fcl) in [(0_u32, -100.0), (1, 60.0), (2, 70.0)] {
            let mut row = CashflowRow::new(year);
            row.fcl = fcl;
            row.cumulative_fcl = table.final_cumulative_fcl() + fcl;
            table.add_row(row);
        }

        assert_eq!(table.fcl_column(), vec![-100.0, 60.0, 70.0]);
        assert_eq!(table.cumulative_fcl_column(), vec![-100.0, -40.0, 30.0]);
        assert_eq!(table.final_cumulative_fcl(), 30.0);
    }
}
