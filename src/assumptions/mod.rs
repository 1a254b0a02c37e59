//! Projection assumptions: demand, pricing, cost escalation, and capital schedules

mod capital;
mod costs;

pub use capital::{CapexSchedule, DepreciationSchedule};
pub use costs::EscalatingCost;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of modeled years including year 0
pub const HORIZON_YEARS: usize = 6;

/// Operating years (1 through 5)
pub const OPERATING_YEARS: usize = 5;

/// Spread over inflation applied to fixed cost escalation
pub const FIXED_COST_SPREAD: f64 = 0.01;

/// Spread over inflation applied to SG&A escalation
pub const SGA_SPREAD: f64 = 0.02;

/// Rejection reasons for an out-of-domain assumption set
#[derive(Debug, Error, PartialEq)]
pub enum AssumptionError {
    #[error("tax rate {0} is outside [0, 1]")]
    TaxRateOutOfRange(f64),

    #[error("negative unit volume {value} in year {year}")]
    NegativeUnits { year: usize, value: f64 },

    #[error("negative unit price {value} in year {year}")]
    NegativePrice { year: usize, value: f64 },

    #[error("year 0 must carry zero units and price")]
    NonZeroYearZero,

    #[error("discount rate {0} must be greater than -100%")]
    DiscountRateOutOfRange(f64),
}

/// Complete immutable assumption set for one scenario.
///
/// Per-year sequences are aligned by index: `units` and `prices` carry a zero
/// year-0 placeholder at index 0, while `working_capital` covers operating
/// years 1-5 only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    /// Annual inflation rate feeding the cost escalators
    pub inflation: f64,

    /// Annual demand growth rate underlying the unit volume sequence
    pub demand_growth: f64,

    /// Corporate tax rate applied to positive EBIT
    pub tax_rate: f64,

    /// Discount rate (WACC) used for NPV
    pub discount_rate: f64,

    /// Unit volume per year, index 0 = year 0 (always zero)
    pub units: [f64; HORIZON_YEARS],

    /// Unit sales price per year, index 0 = year 0 (always zero)
    pub prices: [f64; HORIZON_YEARS],

    /// Per-unit jar cost, constant across the horizon
    pub unit_cost_jar: f64,

    /// Per-unit fruit cost, compounded by inflation
    pub unit_cost_fruit: EscalatingCost,

    /// Per-unit energy cost, compounded by inflation
    pub unit_cost_energy: EscalatingCost,

    /// Annual fixed costs, compounded by inflation plus [`FIXED_COST_SPREAD`]
    pub fixed_costs: EscalatingCost,

    /// Annual SG&A, compounded by inflation plus [`SGA_SPREAD`]
    pub sga_costs: EscalatingCost,

    /// Capital outlays, all incurred at year 0
    pub capex: CapexSchedule,

    /// Annual depreciation amounts, decoupled from CapEx
    pub depreciation: DepreciationSchedule,

    /// Incremental working-capital investment for years 1-5
    /// (negative = cash outflow)
    pub working_capital: [f64; OPERATING_YEARS],

    /// Salvage value realized only in year 5
    pub salvage: f64,
}

impl Assumptions {
    /// Base-case scenario carried over from the reference spreadsheet
    pub fn base_case() -> Self {
        let inflation = 0.05;
        Self {
            inflation,
            demand_growth: 0.06,
            tax_rate: 0.35,
            discount_rate: 0.14,
            units: [0.0, 22_000.0, 23_320.0, 24_719.0, 26_202.0, 27_774.0],
            prices: [0.0, 15_000.0, 15_750.0, 16_538.0, 17_364.0, 18_233.0],
            unit_cost_jar: 1_000.0,
            unit_cost_fruit: EscalatingCost::new(8_000.0, inflation),
            unit_cost_energy: EscalatingCost::new(1_100.0, inflation),
            fixed_costs: EscalatingCost::new(20_000_000.0, inflation + FIXED_COST_SPREAD),
            sga_costs: EscalatingCost::new(30_000_000.0, inflation + SGA_SPREAD),
            capex: CapexSchedule {
                land: 50_000_000.0,
                office: 20_000_000.0,
                vehicles: 30_000_000.0,
                machinery: 10_000_000.0,
            },
            depreciation: DepreciationSchedule {
                office: 2_000_000.0,    // 20M over 10 years
                vehicles: 6_000_000.0,  // 30M over 5 years
                machinery: 1_000_000.0, // 10M over 10 years
            },
            working_capital: [
                -4_166_667.0,
                -275_000.0,
                -293_250.0,
                -312_718.0,
                -333_484.0,
            ],
            salvage: 90_000_000.0, // land 60M + office 10M + vehicles 15M + machinery 5M
        }
    }

    /// One-time recovery posted in year 5: cumulative working capital is
    /// fully unwound in the terminal year.
    pub fn working_capital_recovery(&self) -> f64 {
        -self.working_capital.iter().sum::<f64>()
    }

    /// Check the assumption set against its domain constraints.
    ///
    /// The projection engine calls this before computing anything, so an
    /// invalid set is rejected without partial output.
    pub fn validate(&self) -> Result<(), AssumptionError> {
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(AssumptionError::TaxRateOutOfRange(self.tax_rate));
        }
        if self.discount_rate <= -1.0 {
            return Err(AssumptionError::DiscountRateOutOfRange(self.discount_rate));
        }
        for year in 0..HORIZON_YEARS {
            if self.units[year] < 0.0 {
                return Err(AssumptionError::NegativeUnits {
                    year,
                    value: self.units[year],
                });
            }
            if self.prices[year] < 0.0 {
                return Err(AssumptionError::NegativePrice {
                    year,
                    value: self.prices[year],
                });
            }
        }
        if self.units[0] != 0.0 || self.prices[0] != 0.0 {
            return Err(AssumptionError::NonZeroYearZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_case_is_valid() {
        assert_eq!(Assumptions::base_case().validate(), Ok(()));
    }

    #[test]
    fn test_tax_rate_out_of_range_rejected() {
        let mut assumptions = Assumptions::base_case();
        assumptions.tax_rate = 1.35;
        assert_eq!(
            assumptions.validate(),
            Err(AssumptionError::TaxRateOutOfRange(1.35))
        );
    }

    #[test]
    fn test_negative_units_rejected() {
        let mut assumptions = Assumptions::base_case();
        assumptions.units[3] = -100.0;
        assert_eq!(
            assumptions.validate(),
            Err(AssumptionError::NegativeUnits {
                year: 3,
                value: -100.0
            })
        );
    }

    #[test]
    fn test_nonzero_year_zero_rejected() {
        let mut assumptions = Assumptions::base_case();
        assumptions.units[0] = 1_000.0;
        assert_eq!(assumptions.validate(), Err(AssumptionError::NonZeroYearZero));
    }

    #[test]
    fn test_working_capital_recovery_negates_vector_sum() {
        let assumptions = Assumptions::base_case();
        let vector_sum: f64 = assumptions.working_capital.iter().sum();
        assert_eq!(assumptions.working_capital_recovery(), -vector_sum);
        assert!((assumptions.working_capital_recovery() - 5_381_119.0).abs() < 1e-6);
    }
}
