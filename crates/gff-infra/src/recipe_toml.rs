//! Recipe loader from TOML
//!
//! ```toml
//! [batch]
//! batch_no = "GFF-B-001"
//! batch_size_kg = 2700.0
//! overhead_percent = 1.0
//! misc = { labour = 40.0, electricity = 30.0, transport = 80.0 }
//!
//! [[ingredients]]
//! name = "Palm Oil"
//! percent = 43.0
//! rate = 120.0
//! tax_rate = 5.0
//! phase = "oil"
//!
//! [[ingredients]]
//! name = "Water"
//! rate = 0.01
//! auto_balanced = true
//! phase = "water"
//!
//! [[packaging]]
//! kind = "wrapper"
//! label = "Butter Paper"
//! unit_cost = 148.0
//! tax_rate = 18.0
//! ```
//!
//! `[batch]` and `[[packaging]]` may be omitted; they are then taken from
//! a fallback recipe.

use std::fs;
use std::path::Path;

use gff_domain::model::{normalize_batch_no, BatchContext, IngredientRecord, PackagingItem, Recipe};
use gff_types::{Error, Result};
use serde::Deserialize;

/// Recipe file contents before defaults are applied
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeFile {
    #[serde(default)]
    pub batch: Option<BatchContext>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    #[serde(default)]
    pub packaging: Vec<PackagingItem>,
}

impl RecipeFile {
    /// Fill the missing sections from `fallback`
    pub fn into_recipe(self, fallback: &Recipe) -> Recipe {
        Recipe {
            batch: self.batch.unwrap_or_else(|| fallback.batch.clone()),
            ingredients: if self.ingredients.is_empty() {
                fallback.ingredients.clone()
            } else {
                self.ingredients
            },
            packaging: if self.packaging.is_empty() {
                fallback.packaging.clone()
            } else {
                self.packaging
            },
        }
    }
}

/// Load a recipe file from disk
pub fn load_recipe_file(path: &Path) -> Result<RecipeFile> {
    let content = fs::read_to_string(path)?;
    parse_recipe_toml(&content)
}

/// Parse recipe TOML
pub fn parse_recipe_toml(content: &str) -> Result<RecipeFile> {
    let mut file: RecipeFile = toml::from_str(content)?;
    if let Some(name) = file
        .ingredients
        .iter()
        .find(|i| i.name.trim().is_empty())
        .map(|i| i.name.clone())
    {
        return Err(Error::RecipeFormat(format!("ingredient with empty name '{}'", name)));
    }

    for ingredient in &file.ingredients {
        ensure_finite(&ingredient.name, "percent", ingredient.percent)?;
        ensure_finite(&ingredient.name, "rate", ingredient.rate)?;
        ensure_finite(&ingredient.name, "tax_rate", ingredient.tax_rate)?;
    }
    for item in &file.packaging {
        ensure_finite(&item.label, "unit_cost", item.unit_cost)?;
        ensure_finite(&item.label, "tax_rate", item.tax_rate)?;
    }
    if let Some(ref mut batch) = file.batch {
        ensure_finite("batch", "batch_size_kg", batch.batch_size_kg)?;
        ensure_finite("batch", "overhead_percent", batch.overhead_percent)?;
        ensure_finite("batch", "misc", batch.misc_cost_per_box())?;
        batch.batch_no = normalize_batch_no(&batch.batch_no);
    }
    Ok(file)
}

fn ensure_finite(owner: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::RecipeFormat(format!("{}: {} must be a finite number, got {}", owner, field, value)))
    }
}

/// Serialize a full recipe as TOML
pub fn recipe_to_toml(recipe: &Recipe) -> Result<String> {
    Ok(toml::to_string_pretty(recipe)?)
}

/// Write a full recipe to a TOML file
pub fn save_recipe_toml(recipe: &Recipe, path: &Path) -> Result<()> {
    fs::write(path, recipe_to_toml(recipe)?)?;
    Ok(())
}
