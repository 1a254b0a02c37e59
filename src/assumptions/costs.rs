//! Escalating cost series for variable and overhead cost categories

use serde::{Deserialize, Serialize};

use super::OPERATING_YEARS;

/// A cost that compounds from a base value at a fixed annual rate.
///
/// The first operating year takes the base value unchanged; each later year
/// applies one more year of compounding, so operating year `y` is
/// `base * (1 + rate)^(y - 1)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EscalatingCost {
    /// Value in the first operating year
    pub base: f64,
    /// Annual compounding rate (inflation, possibly plus a category spread)
    pub rate: f64,
}

impl EscalatingCost {
    pub fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    /// Value for an operating year (1-indexed, 1..=5)
    pub fn for_year(&self, operating_year: u32) -> f64 {
        self.base * (1.0 + self.rate).powi(operating_year as i32 - 1)
    }

    /// Full series over the operating horizon, index 0 = operating year 1
    pub fn series(&self) -> [f64; OPERATING_YEARS] {
        std::array::from_fn(|i| self.for_year(i as u32 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_is_base() {
        let cost = EscalatingCost::new(8_000.0, 0.05);
        assert!((cost.for_year(1) - 8_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_compounding() {
        let cost = EscalatingCost::new(8_000.0, 0.05);
        assert!((cost.for_year(2) - 8_400.0).abs() < 1e-6);
        assert!((cost.for_year(3) - 8_820.0).abs() < 1e-6);
    }

    #[test]
    fn test_series_alignment() {
        let cost = EscalatingCost::new(20_000_000.0, 0.06);
        let series = cost.series();
        assert_eq!(series.len(), OPERATING_YEARS);
        for (i, value) in series.iter().enumerate() {
            assert!((value - cost.for_year(i as u32 + 1)).abs() < 1e-10);
        }
    }
}
