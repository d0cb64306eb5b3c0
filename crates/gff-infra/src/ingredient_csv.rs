//! CSV loader for the ingredient table
//!
//! Expected header (column order free, `auto_balanced` optional):
//! name,percent,rate,tax_rate,phase,auto_balanced

use std::io::Read;
use std::path::Path;

use gff_domain::model::{IngredientRecord, Phase};
use gff_types::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IngredientRow {
    name: String,
    #[serde(default)]
    percent: Option<f64>,
    rate: f64,
    #[serde(default)]
    tax_rate: Option<f64>,
    phase: String,
    #[serde(default)]
    auto_balanced: Option<String>,
}

/// Load ingredient records from a CSV file
pub fn load_ingredients_from_csv(path: &Path) -> Result<Vec<IngredientRecord>> {
    let file = std::fs::File::open(path)?;
    read_ingredients(file)
}

/// Read ingredient records from any CSV source
pub fn read_ingredients<R: Read>(source: R) -> Result<Vec<IngredientRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for (row_idx, result) in reader.deserialize::<IngredientRow>().enumerate() {
        let row = result?;
        let row_num = row_idx + 2; // header is row 1
        records.push(parse_row(row, row_num)?);
    }

    if records.is_empty() {
        return Err(Error::RecipeFormat("ingredient CSV has no rows".to_string()));
    }
    Ok(records)
}

fn parse_row(row: IngredientRow, row_num: usize) -> Result<IngredientRecord> {
    if row.name.is_empty() {
        return Err(Error::RecipeFormat(format!("row {}: empty ingredient name", row_num)));
    }
    for (field, value) in [
        ("percent", row.percent),
        ("rate", Some(row.rate)),
        ("tax_rate", row.tax_rate),
    ] {
        if let Some(value) = value.filter(|v| !v.is_finite()) {
            return Err(Error::RecipeFormat(format!(
                "row {}: {} must be a finite number, got {}",
                row_num, field, value
            )));
        }
    }
    let phase: Phase = row
        .phase
        .parse()
        .map_err(|e| Error::RecipeFormat(format!("row {}: {}", row_num, e)))?;
    let auto_balanced = match row.auto_balanced.as_deref() {
        None => false,
        Some(flag) => parse_flag(flag)
            .ok_or_else(|| Error::RecipeFormat(format!("row {}: invalid auto_balanced value '{}'", row_num, flag)))?,
    };

    Ok(IngredientRecord {
        name: row.name,
        percent: row.percent.unwrap_or(0.0),
        rate: row.rate,
        tax_rate: row.tax_rate.unwrap_or(0.0),
        auto_balanced,
        phase,
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "false" | "no" | "0" => Some(false),
        "true" | "yes" | "1" | "auto" => Some(true),
        _ => None,
    }
}
