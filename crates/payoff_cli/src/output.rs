//! Rendering of engine results as table, JSON or CSV.

use std::io::Write;

use payoff_models::analytical::Greeks;
use payoff_models::strategies::{Bound, PayoffCurve, StrategyAnalytics, StrategyKind};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::input::Expiry;
use crate::Result;

/// Everything `analyze` reports for one strategy
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Catalogue entry analysed
    pub strategy: StrategyKind,
    /// Number of contracts after clamping
    pub quantity: u32,
    /// Resolved expiry
    pub expiry: Expiry,
    /// One-line description of the legs
    pub summary: String,
    /// Distance between adjacent strikes, for condors and butterflies
    pub wing_width: Option<f64>,
    /// Breakeven, limits and Greeks
    pub analytics: StrategyAnalytics,
}

/// One catalogue row for `strategies`
#[derive(Debug, Clone, Serialize)]
struct CatalogueEntry {
    name: &'static str,
    id: String,
    strikes: usize,
    inputs: &'static str,
}

fn greek_rows(greeks: &Greeks<f64>) -> [(&'static str, f64); 6] {
    [
        ("Price", greeks.price),
        ("Delta", greeks.delta),
        ("Gamma", greeks.gamma),
        ("Theta", greeks.theta),
        ("Vega", greeks.vega),
        ("Rho", greeks.rho),
    ]
}

fn write_greeks_table<W: Write>(out: &mut W, greeks: &Greeks<f64>) -> Result<()> {
    writeln!(out, "┌────────┬──────────────┐")?;
    writeln!(out, "│ Greek  │ Value        │")?;
    writeln!(out, "├────────┼──────────────┤")?;
    for (name, value) in greek_rows(greeks) {
        writeln!(out, "│ {:<6} │ {:>12.4} │", name, value)?;
    }
    writeln!(out, "└────────┴──────────────┘")?;
    Ok(())
}

/// Writes a strategy analysis
pub fn write_analysis<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    format: OutputFormat,
) -> Result<()> {
    let a = &report.analytics;
    match format {
        OutputFormat::Table => {
            writeln!(out, "Strategy:    {}", report.strategy)?;
            writeln!(out, "Quantity:    {}", report.quantity)?;
            writeln!(
                out,
                "Expiry:      {} ({} days)",
                report.expiry.date, report.expiry.days
            )?;
            writeln!(out, "Breakeven:   {}", a.breakeven)?;
            writeln!(out, "Max Profit:  {}", a.max_profit)?;
            writeln!(out, "Max Loss:    {}", a.max_loss)?;
            if let Some(width) = report.wing_width {
                writeln!(out, "Wing Width:  ${:.2}", width)?;
            }
            writeln!(out, "Position:    {}", report.summary)?;
            writeln!(out)?;
            write_greeks_table(out, &a.greeks)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["field", "value"])?;
            writer.write_record(["strategy", report.strategy.name()])?;
            writer.write_record(["quantity", report.quantity.to_string().as_str()])?;
            writer.write_record(["expiry", report.expiry.date.to_string().as_str()])?;
            writer.write_record(["days_to_expiry", report.expiry.days.to_string().as_str()])?;
            for (i, level) in a.breakeven.levels().iter().enumerate() {
                writer.write_record([format!("breakeven_{}", i + 1), level.to_string()])?;
            }
            let bound = |b: Bound| match b.value() {
                Some(v) => v.to_string(),
                None => "unbounded".to_string(),
            };
            writer.write_record(["max_profit", bound(a.max_profit).as_str()])?;
            writer.write_record(["max_loss", bound(a.max_loss).as_str()])?;
            if let Some(width) = report.wing_width {
                writer.write_record(["wing_width", width.to_string().as_str()])?;
            }
            for (name, value) in greek_rows(&a.greeks) {
                writer.write_record([name.to_lowercase(), value.to_string()])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes a payoff curve
pub fn write_curve<W: Write>(out: &mut W, curve: &PayoffCurve, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{:>12}  {:>14}", "Price", "Profit/Loss")?;
            for point in curve {
                writeln!(out, "{:>12.2}  {:>14.2}", point.price, point.profit_loss)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, curve)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for point in curve {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes single-leg Greeks
pub fn write_greeks<W: Write>(out: &mut W, greeks: &Greeks<f64>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_greeks_table(out, greeks)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, greeks)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(greeks)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes the strategy catalogue
pub fn write_catalogue<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    let entries: Vec<CatalogueEntry> = StrategyKind::ALL
        .iter()
        .map(|kind| CatalogueEntry {
            name: kind.name(),
            id: kind.name().to_lowercase().replace(' ', "-"),
            strikes: kind.strike_count(),
            inputs: kind.required_inputs(),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            for entry in &entries {
                writeln!(out, "{:<24} {:<24} {}", entry.name, entry.id, entry.inputs)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for entry in &entries {
                writer.serialize(entry)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
