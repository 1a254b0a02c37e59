//! Scenario runner bundling projection and valuation
//!
//! Holds a base assumption set and evaluates it, or caller-supplied variants,
//! as independent runs with no shared state between them.

use crate::assumptions::{AssumptionError, Assumptions};
use crate::projection::{CashflowTable, ProjectionEngine};
use crate::valuation::ValuationResult;

/// Combined output of one scenario run
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub table: CashflowTable,
    pub valuation: ValuationResult,
}

/// Runs projections and valuations from a base assumption set
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner over the base-case assumption set
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::base_case(),
        }
    }

    /// Create runner with a pre-built assumption set
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Project and value the base assumption set
    pub fn run(&self) -> Result<ScenarioOutcome, AssumptionError> {
        self.run_with(self.base_assumptions.clone())
    }

    /// Project and value a caller-supplied assumption set.
    /// Each run is independent; the runner's base set is untouched.
    pub fn run_with(&self, assumptions: Assumptions) -> Result<ScenarioOutcome, AssumptionError> {
        let discount_rate = assumptions.discount_rate;
        log::debug!(
            "projecting scenario: discount rate {:.2}%, tax rate {:.2}%",
            discount_rate * 100.0,
            assumptions.tax_rate * 100.0,
        );

        let table = ProjectionEngine::new(assumptions).project()?;
        let valuation = ValuationResult::compute(&table, discount_rate);
        Ok(ScenarioOutcome { table, valuation })
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_case_valuation() {
        let outcome = ScenarioRunner::new().run().unwrap();

        // NPV at 14% WACC; IRR well above it; payback in year 3
        assert_relative_eq!(outcome.valuation.npv, 119_139_528.80, epsilon = 1.0);
        let irr = outcome.valuation.irr.unwrap();
        assert!((irr - 0.4308).abs() < 1e-3, "got {}", irr);
        assert_eq!(outcome.valuation.payback_year, Some(3));
    }

    #[test]
    fn test_no_payback_reports_none() {
        // Land outlay large enough that cumulative FCL never recovers
        let mut assumptions = Assumptions::base_case();
        assumptions.capex.land = 5_000_000_000.0;

        let outcome = ScenarioRunner::with_assumptions(assumptions).run().unwrap();
        assert_eq!(outcome.valuation.payback_year, None);
        assert!(outcome.valuation.npv < 0.0);
    }

    #[test]
    fn test_runs_do_not_interfere() {
        let runner = ScenarioRunner::new();

        let mut stressed = runner.assumptions().clone();
        stressed.tax_rate = 0.50;
        let stressed_outcome = runner.run_with(stressed).unwrap();

        let base_outcome = runner.run().unwrap();
        assert!(stressed_outcome.valuation.npv < base_outcome.valuation.npv);
        // Base runner state unchanged by the stressed run
        assert_eq!(runner.assumptions().tax_rate, 0.35);
    }

    #[test]
    fn test_invalid_scenario_is_rejected() {
        let mut assumptions = Assumptions::base_case();
        assumptions.tax_rate = -0.10;

        let result = ScenarioRunner::with_assumptions(assumptions).run();
        assert!(matches!(
            result,
            Err(AssumptionError::TaxRateOutOfRange(_))
        ));
    }
}
