//! Core projection engine: yearly free-cash-flow derivation from an assumption set

use crate::assumptions::{AssumptionError, Assumptions, HORIZON_YEARS};

use super::table::{CashflowRow, CashflowTable};

/// Main projection engine.
///
/// Holds one immutable assumption set and derives the consolidated cash-flow
/// table from it. The derivation is a pure function of the assumptions: two
/// invocations produce identical tables.
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine over the given assumption set
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Run the projection over years 0-5.
    ///
    /// Validates the assumption set first and computes nothing on invalid
    /// input.
    pub fn project(&self) -> Result<CashflowTable, AssumptionError> {
        self.assumptions.validate()?;

        let a = &self.assumptions;
        let annual_depreciation = a.depreciation.annual_total();
        let terminal_year = HORIZON_YEARS - 1;

        let mut table = CashflowTable::new();
        let mut cumulative = 0.0;

        for year in 0..HORIZON_YEARS {
            let mut row = CashflowRow::new(year as u32);

            // Operating flows exist only in years 1-5; year 0 keeps the
            // zeroed placeholders so EBIT and taxes come out zero.
            if year > 0 {
                let op_year = year as u32;
                row.revenue = a.units[year] * a.prices[year];

                let unit_cost = a.unit_cost_jar
                    + a.unit_cost_fruit.for_year(op_year)
                    + a.unit_cost_energy.for_year(op_year);
                row.variable_cost = a.units[year] * unit_cost;

                row.fixed_cost = a.fixed_costs.for_year(op_year);
                row.sga = a.sga_costs.for_year(op_year);
                row.depreciation = annual_depreciation;
                row.working_capital = a.working_capital[year - 1];
            }

            row.ebit =
                row.revenue - row.variable_cost - row.fixed_cost - row.sga - row.depreciation;

            // No tax benefit on negative EBIT (no loss carryforward)
            row.tax = row.ebit.max(0.0) * a.tax_rate;
            row.uodi = row.ebit - row.tax;

            // Depreciation added back: non-cash
            row.operating_cf = row.uodi + row.depreciation;

            if year == 0 {
                row.capex = -a.capex.total();
            }
            if year == terminal_year {
                row.working_capital += a.working_capital_recovery();
                row.salvage = a.salvage;
            }

            row.fcl = row.operating_cf + row.capex + row.working_capital + row.salvage;
            cumulative += row.fcl;
            row.cumulative_fcl = cumulative;

            table.add_row(row);
        }

        Ok(table)
    }

    /// Assumption set this engine projects from
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }
}
