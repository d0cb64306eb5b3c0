//! Costing Service - use cases around the costing engine
//!
//! 1. Resolve the recipe snapshot (saved, file, or built-in defaults)
//! 2. Apply user edits and persist the snapshot
//! 3. Run the engine on the snapshot and log the outcome
//!
//! The engine itself stays pure; persistence and logging live here.

use std::path::{Path, PathBuf};

use gff_domain::model::{normalize_batch_no, BatchContext, CostReport, MiscCharges, PackagingKind, Recipe};
use gff_domain::repository::RecipeRepository;
use gff_domain::service::calculate_recipe;
use gff_infra::ingredient_csv::load_ingredients_from_csv;
use gff_infra::recipe_toml::load_recipe_file;
use gff_types::{Error, Result};
use tracing::{debug, info, warn};

use crate::constants::default_recipe;

/// Where a recipe snapshot came from
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeSource {
    /// Snapshot saved by an earlier edit
    Stored,
    /// Recipe file given by the user or config
    File(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl std::fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeSource::Stored => write!(f, "saved recipe"),
            RecipeSource::File(path) => write!(f, "{}", path.display()),
            RecipeSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Changes to one ingredient; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct IngredientEdit {
    pub percent: Option<f64>,
    pub rate: Option<f64>,
    pub tax_rate: Option<f64>,
}

/// Changes to the batch context; `None` keeps the current value
///
/// Setting any itemised misc charge replaces a flat misc figure.
#[derive(Debug, Clone, Default)]
pub struct BatchEdit {
    pub batch_no: Option<String>,
    pub batch_size_kg: Option<f64>,
    pub overhead_percent: Option<f64>,
    pub misc_flat: Option<f64>,
    pub labour: Option<f64>,
    pub electricity: Option<f64>,
    pub transport: Option<f64>,
}

impl BatchEdit {
    pub fn is_empty(&self) -> bool {
        self.batch_no.is_none()
            && self.batch_size_kg.is_none()
            && self.overhead_percent.is_none()
            && self.misc_flat.is_none()
            && self.labour.is_none()
            && self.electricity.is_none()
            && self.transport.is_none()
    }

    /// Apply the edit to a batch context; nothing changes on error
    pub fn apply(&self, batch: &mut BatchContext) -> Result<()> {
        let mut next = batch.clone();

        if let Some(ref batch_no) = self.batch_no {
            next.batch_no = normalize_batch_no(batch_no);
        }
        if let Some(size) = self.batch_size_kg {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::RecipeFormat(format!("batch size must be positive, got {}", size)));
            }
            next.batch_size_kg = size;
        }
        if let Some(overhead) = self.overhead_percent {
            next.overhead_percent = non_negative("overhead percent", overhead)?;
        }
        if let Some(flat) = self.misc_flat {
            next.misc = MiscCharges::Flat(non_negative("misc cost", flat)?);
        }
        if self.labour.is_some() || self.electricity.is_some() || self.transport.is_some() {
            let (labour, electricity, transport) = match next.misc {
                MiscCharges::Itemised {
                    labour,
                    electricity,
                    transport,
                } => (labour, electricity, transport),
                MiscCharges::Flat(_) => (0.0, 0.0, 0.0),
            };
            next.misc = MiscCharges::Itemised {
                labour: non_negative("labour", self.labour.unwrap_or(labour))?,
                electricity: non_negative("electricity", self.electricity.unwrap_or(electricity))?,
                transport: non_negative("transport", self.transport.unwrap_or(transport))?,
            };
        }

        *batch = next;
        Ok(())
    }
}

pub struct CostingService<R: RecipeRepository> {
    repo: R,
    default_recipe_path: Option<PathBuf>,
}

impl<R: RecipeRepository> CostingService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            default_recipe_path: None,
        }
    }

    /// Recipe file to start from when nothing has been saved
    pub fn with_default_recipe(mut self, path: Option<PathBuf>) -> Self {
        self.default_recipe_path = path;
        self
    }

    /// Current snapshot: saved recipe, else configured default file, else built-in defaults
    pub fn current_recipe(&self) -> Result<(Recipe, RecipeSource)> {
        if let Some(recipe) = self.repo.load()? {
            return Ok((recipe, RecipeSource::Stored));
        }
        if let Some(ref path) = self.default_recipe_path {
            let recipe = read_recipe(path, &default_recipe())?;
            return Ok((recipe, RecipeSource::File(path.clone())));
        }
        Ok((default_recipe(), RecipeSource::Defaults))
    }

    /// Read a recipe file, filling missing sections from the current snapshot
    ///
    /// `.csv` files hold the ingredient table only; anything else is read as TOML.
    pub fn load_recipe(&self, path: &Path) -> Result<Recipe> {
        let (current, _) = self.current_recipe()?;
        let recipe = read_recipe(path, &current)?;
        info!("Loaded recipe from {}", path.display());
        Ok(recipe)
    }

    /// Run the engine on a snapshot
    pub fn calculate(&self, recipe: &Recipe) -> Result<CostReport> {
        debug!(
            batch_no = %recipe.batch.batch_no,
            batch_size_kg = recipe.batch.batch_size_kg,
            ingredients = recipe.ingredients.len(),
            "Calculating batch cost"
        );

        let report = calculate_recipe(recipe)?;

        debug!(
            auto_balanced_percent = report.auto_balanced_percent,
            ingredient_total = report.ingredient_total(),
            "Ingredients costed"
        );
        for warning in &report.warnings {
            warn!("{}", warning);
        }
        info!(
            grand_total = report.grand_total(),
            final_cost_per_kg = report.final_cost_per_kg(),
            "Batch {} costed",
            report.batch_no
        );
        Ok(report)
    }

    /// Calculate the current snapshot
    pub fn calculate_current(&self) -> Result<(CostReport, RecipeSource)> {
        let (recipe, source) = self.current_recipe()?;
        debug!("Using {}", source);
        Ok((self.calculate(&recipe)?, source))
    }

    /// Replace the saved snapshot with a recipe file
    pub fn import(&self, path: &Path) -> Result<Recipe> {
        let recipe = self.load_recipe(path)?;
        self.repo.save(&recipe)?;
        info!("Imported recipe from {}", path.display());
        Ok(recipe)
    }

    pub fn set_ingredient(&self, name: &str, edit: &IngredientEdit) -> Result<Recipe> {
        let (mut recipe, _) = self.current_recipe()?;
        let record = recipe
            .ingredient_mut(name)
            .ok_or_else(|| Error::UnknownIngredient(name.to_string()))?;

        if let Some(percent) = edit.percent {
            if record.auto_balanced {
                return Err(Error::RecipeFormat(format!(
                    "percentage of {} is derived automatically",
                    record.name
                )));
            }
            record.percent = non_negative("percent", percent)?;
        }
        if let Some(rate) = edit.rate {
            record.rate = non_negative("rate", rate)?;
        }
        if let Some(tax_rate) = edit.tax_rate {
            record.tax_rate = non_negative("tax rate", tax_rate)?;
        }
        debug!(ingredient = %record.name, "Ingredient updated");

        self.repo.save(&recipe)?;
        Ok(recipe)
    }

    pub fn set_packaging(
        &self,
        kind: PackagingKind,
        unit_cost: Option<f64>,
        tax_rate: Option<f64>,
    ) -> Result<Recipe> {
        let (mut recipe, _) = self.current_recipe()?;
        let item = recipe
            .packaging_item_mut(kind)
            .ok_or_else(|| Error::RecipeFormat(format!("recipe has no {} packaging item", kind)))?;

        if let Some(cost) = unit_cost {
            item.unit_cost = non_negative("unit cost", cost)?;
        }
        if let Some(tax) = tax_rate {
            item.tax_rate = non_negative("tax rate", tax)?;
        }
        debug!(packaging = %kind, rate = item.tax_inclusive_rate(), "Packaging updated");

        self.repo.save(&recipe)?;
        Ok(recipe)
    }

    pub fn set_batch(&self, edit: &BatchEdit) -> Result<Recipe> {
        let (mut recipe, _) = self.current_recipe()?;
        edit.apply(&mut recipe.batch)?;
        debug!(
            batch_no = %recipe.batch.batch_no,
            misc_per_box = recipe.batch.misc_cost_per_box(),
            "Batch updated"
        );

        self.repo.save(&recipe)?;
        Ok(recipe)
    }

    /// Drop the saved snapshot and return the recipe now in effect
    pub fn reset(&self) -> Result<Recipe> {
        self.repo.clear()?;
        info!("Saved recipe cleared");
        let (recipe, _) = self.current_recipe()?;
        Ok(recipe)
    }
}

fn read_recipe(path: &Path, fallback: &Recipe) -> Result<Recipe> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Ok(Recipe {
            ingredients: load_ingredients_from_csv(path)?,
            ..fallback.clone()
        })
    } else {
        Ok(load_recipe_file(path)?.into_recipe(fallback))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        Err(Error::RecipeFormat(format!("{} must be a non-negative number, got {}", field, value)))
    } else {
        Ok(value)
    }
}
