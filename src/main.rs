//! Free-cash-flow valuation CLI
//!
//! Prints the consolidated cash-flow table, display margins, and
//! value-creation indicators for the base-case scenario, with optional
//! CSV/JSON export. Presentation only: every number comes from the
//! projection engine and valuation calculator.

use anyhow::Context;
use clap::Parser;
use dcf_valuation::{Assumptions, ScenarioOutcome, ScenarioRunner};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dcf_valuation",
    about = "Five-year discounted free-cash-flow projection and valuation"
)]
struct Args {
    /// Write the cash-flow table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the table and valuation to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Override the discount rate (WACC) for this run, e.g. 0.12
    #[arg(long)]
    discount_rate: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut assumptions = Assumptions::base_case();
    if let Some(rate) = args.discount_rate {
        assumptions.discount_rate = rate;
    }
    let discount_rate = assumptions.discount_rate;

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let outcome = runner.run().context("projection rejected the assumption set")?;

    print_table(&outcome);
    print_margins(&outcome);
    print_valuation(&outcome, discount_rate);

    if let Some(path) = &args.csv {
        write_csv(path, &outcome)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        println!("\nCash-flow table written to: {}", path.display());
    }

    if let Some(path) = &args.json {
        write_json(path, &outcome)
            .with_context(|| format!("failed to write JSON to {}", path.display()))?;
        println!("Table and valuation written to: {}", path.display());
    }

    Ok(())
}

fn print_table(outcome: &ScenarioOutcome) {
    println!("Consolidated cash-flow table");
    println!(
        "{:>4} {:>14} {:>14} {:>12} {:>12} {:>12} {:>13} {:>12} {:>13} {:>14} {:>13} {:>11} {:>12} {:>14} {:>15}",
        "Year", "Revenue", "VarCost", "FixedCost", "SG&A", "Depr", "EBIT", "Tax", "UODI",
        "OperCF", "CapEx", "dWC", "Salvage", "FCL", "CumFCL",
    );
    println!("{}", "-".repeat(195));

    for row in &outcome.table.rows {
        println!(
            "{:>4} {:>14.0} {:>14.0} {:>12.0} {:>12.0} {:>12.0} {:>13.0} {:>12.0} {:>13.0} {:>14.0} {:>13.0} {:>11.0} {:>12.0} {:>14.0} {:>15.0}",
            row.year,
            row.revenue,
            row.variable_cost,
            row.fixed_cost,
            row.sga,
            row.depreciation,
            row.ebit,
            row.tax,
            row.uodi,
            row.operating_cf,
            row.capex,
            row.working_capital,
            row.salvage,
            row.fcl,
            row.cumulative_fcl,
        );
    }
}

fn print_margins(outcome: &ScenarioOutcome) {
    println!("\nDisplay margins (undefined when the year has no revenue)");
    println!("{:>4} {:>14} {:>12}", "Year", "EBITDA margin", "Net margin");
    for row in &outcome.table.rows {
        println!(
            "{:>4} {:>14} {:>12}",
            row.year,
            format_margin(row.ebitda_margin()),
            format_margin(row.net_margin()),
        );
    }
}

fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(m) => format!("{:.1}%", m * 100.0),
        None => "n/a".to_string(),
    }
}

fn print_valuation(outcome: &ScenarioOutcome, discount_rate: f64) {
    let valuation = &outcome.valuation;

    println!("\nValue-creation indicators");
    println!(
        "  NPV (WACC {:.1}%): ${:.0} ({})",
        discount_rate * 100.0,
        valuation.npv,
        if valuation.npv > 0.0 { "positive" } else { "negative" },
    );
    match valuation.irr {
        Some(irr) => println!(
            "  IRR: {:.2}% ({} WACC)",
            irr * 100.0,
            if irr > discount_rate { ">" } else { "<" },
        ),
        None => println!("  IRR: n/a (no internal rate of return exists)"),
    }
    match valuation.payback_year {
        Some(year) => println!("  Payback: year {}", year),
        None => println!("  Payback: not reached within the horizon"),
    }
}

fn write_csv(path: &PathBuf, outcome: &ScenarioOutcome) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &outcome.table.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &PathBuf, outcome: &ScenarioOutcome) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let payload = serde_json::json!({
        "table": outcome.table,
        "valuation": outcome.valuation,
    });
    serde_json::to_writer_pretty(file, &payload)?;
    Ok(())
}
