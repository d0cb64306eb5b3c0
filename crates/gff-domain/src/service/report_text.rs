//! Flat-text cost report
//!
//! Plain `Key: value` lines at two-decimal precision, readable by
//! `parse_text_report`.

use chrono::NaiveDateTime;
use gff_types::{Error, Result};
use serde::Serialize;

use crate::model::{normalize_batch_no, CostReport, PRIMARY_BOX_PROFILE};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const KEY_DATE: &str = "Date";
const KEY_BATCH: &str = "Batch";
const KEY_BATCH_SIZE: &str = "Batch Size (kg)";
const KEY_INGREDIENT_TOTAL: &str = "Ingredients Total";
const KEY_OIL: &str = "Oil Phase";
const KEY_WATER: &str = "Water Phase";
const KEY_INGREDIENT_PER_KG: &str = "Ingredient Cost / Kg";
const KEY_PACKAGING: &str = "Packaging Cost per Batch";
const KEY_OVERHEAD: &str = "Overhead per Batch";
const KEY_GRAND_TOTAL: &str = "Grand Total";
const KEY_FINAL_PER_KG: &str = "Final Cost / Kg";

/// Figures recovered from a text report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReport {
    pub generated_at: Option<NaiveDateTime>,
    pub batch_no: String,
    pub batch_size_kg: f64,
    pub ingredient_total: f64,
    pub oil_phase: f64,
    pub water_phase: f64,
    pub packaging_cost: f64,
    pub grand_total: f64,
    pub final_cost_per_kg: f64,
}

pub fn render_text_report(report: &CostReport, generated_at: NaiveDateTime) -> String {
    let phases = report.phase_totals();
    let rule = "-".repeat(50);

    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("                GFF COSTING REPORT                \n");
    out.push_str("==================================================\n");
    out.push_str(&format!("{}: {}\n", KEY_DATE, generated_at.format(DATE_FORMAT)));
    out.push_str(&format!("{}: {}\n", KEY_BATCH, normalize_batch_no(&report.batch_no)));
    out.push_str(&format!("{}: {}\n", KEY_BATCH_SIZE, report.batch_size_kg));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{}: {:.2}\n", KEY_INGREDIENT_TOTAL, report.ingredient_total()));
    out.push_str(&format!("{}: {:.2}\n", KEY_OIL, phases.oil));
    out.push_str(&format!("{}: {:.2}\n", KEY_WATER, phases.water));
    out.push_str(&format!("{}: {:.2}\n", KEY_INGREDIENT_PER_KG, report.ingredient_cost_per_kg()));
    out.push('\n');

    out.push_str(&format!(
        "Packaging ({}, {}, 1 Outer, 1 Tape + Misc)\n",
        PRIMARY_BOX_PROFILE.title(),
        PRIMARY_BOX_PROFILE.rules()
    ));
    out.push_str(&format!("{}: {:.2}\n", KEY_PACKAGING, report.batch.packaging_cost));
    out.push_str(&format!("{}: {:.2}\n", KEY_OVERHEAD, report.batch.overhead_cost));
    for scenario in &report.scenarios {
        out.push_str(&format!(
            "  {} / {}: box {:.2}, per pc {:.2}\n",
            scenario.profile.title(),
            scenario.profile.rules(),
            scenario.total_cost,
            scenario.cost_per_unit
        ));
    }
    out.push('\n');

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{}: {:.2}\n", KEY_GRAND_TOTAL, report.grand_total()));
    out.push_str(&format!("{}: {:.2}\n", KEY_FINAL_PER_KG, report.final_cost_per_kg()));
    out.push_str(&rule);
    out.push('\n');

    for warning in &report.warnings {
        out.push_str(&format!("WARNING: {}\n", warning));
    }
    out
}

/// Read back the figures of a report written by `render_text_report`
///
/// Lines without a known key are skipped.
pub fn parse_text_report(text: &str) -> Result<ParsedReport> {
    let mut generated_at = None;
    let mut batch_no = None;
    let mut batch_size_kg = None;
    let mut ingredient_total = None;
    let mut oil_phase = None;
    let mut water_phase = None;
    let mut packaging_cost = None;
    let mut grand_total = None;
    let mut final_cost_per_kg = None;

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            KEY_DATE => {
                generated_at = NaiveDateTime::parse_from_str(value, DATE_FORMAT).ok();
            }
            KEY_BATCH => batch_no = Some(value.to_string()),
            KEY_BATCH_SIZE => batch_size_kg = Some(parse_amount(KEY_BATCH_SIZE, value)?),
            KEY_INGREDIENT_TOTAL => ingredient_total = Some(parse_amount(KEY_INGREDIENT_TOTAL, value)?),
            KEY_OIL => oil_phase = Some(parse_amount(KEY_OIL, value)?),
            KEY_WATER => water_phase = Some(parse_amount(KEY_WATER, value)?),
            KEY_PACKAGING => packaging_cost = Some(parse_amount(KEY_PACKAGING, value)?),
            KEY_GRAND_TOTAL => grand_total = Some(parse_amount(KEY_GRAND_TOTAL, value)?),
            KEY_FINAL_PER_KG => final_cost_per_kg = Some(parse_amount(KEY_FINAL_PER_KG, value)?),
            _ => {}
        }
    }

    Ok(ParsedReport {
        generated_at,
        batch_no: batch_no.ok_or_else(|| missing(KEY_BATCH))?,
        batch_size_kg: batch_size_kg.ok_or_else(|| missing(KEY_BATCH_SIZE))?,
        ingredient_total: ingredient_total.ok_or_else(|| missing(KEY_INGREDIENT_TOTAL))?,
        oil_phase: oil_phase.ok_or_else(|| missing(KEY_OIL))?,
        water_phase: water_phase.ok_or_else(|| missing(KEY_WATER))?,
        packaging_cost: packaging_cost.ok_or_else(|| missing(KEY_PACKAGING))?,
        grand_total: grand_total.ok_or_else(|| missing(KEY_GRAND_TOTAL))?,
        final_cost_per_kg: final_cost_per_kg.ok_or_else(|| missing(KEY_FINAL_PER_KG))?,
    })
}

fn parse_amount(key: &str, value: &str) -> Result<f64> {
    value
        .replace(',', "")
        .parse()
        .map_err(|_| Error::ReportParse(format!("'{}' is not a number: {}", key, value)))
}

fn missing(key: &str) -> Error {
    Error::ReportParse(format!("missing line '{}'", key))
}
