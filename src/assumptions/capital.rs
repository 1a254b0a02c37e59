//! Capital expenditure and depreciation schedules

use serde::{Deserialize, Serialize};

/// Initial outlay per asset category, all incurred at year 0
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapexSchedule {
    pub land: f64,
    pub office: f64,
    pub vehicles: f64,
    pub machinery: f64,
}

impl CapexSchedule {
    /// Total year-0 outlay across every category
    pub fn total(&self) -> f64 {
        self.land + self.office + self.vehicles + self.machinery
    }
}

/// Annual straight-line depreciation per depreciable asset category.
///
/// Supplied independently of the CapEx amounts for the same categories (e.g.
/// office CapEx 20M with 2M/yr implies a 10-year life). The two are
/// deliberately decoupled inputs; depreciation is never re-derived from CapEx.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    pub office: f64,
    pub vehicles: f64,
    pub machinery: f64,
}

impl DepreciationSchedule {
    /// Total annual depreciation, applied uniformly to each operating year
    pub fn annual_total(&self) -> f64 {
        self.office + self.vehicles + self.machinery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capex_total() {
        let capex = CapexSchedule {
            land: 50_000_000.0,
            office: 20_000_000.0,
            vehicles: 30_000_000.0,
            machinery: 10_000_000.0,
        };
        assert!((capex.total() - 110_000_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_depreciation_total() {
        let depr = DepreciationSchedule {
            office: 2_000_000.0,
            vehicles: 6_000_000.0,
            machinery: 1_000_000.0,
        };
        assert!((depr.annual_total() - 9_000_000.0).abs() < 1e-10);
    }
}
