//! Ingredient records

use serde::{Deserialize, Serialize};

/// Cost phase an ingredient is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Fat-soluble / oil-based components
    Oil,
    /// Water-soluble / aqueous components
    Water,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Oil => "Oil",
            Phase::Water => "Water",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oil" => Ok(Phase::Oil),
            "water" => Ok(Phase::Water),
            other => Err(format!("unknown phase '{}' (expected oil or water)", other)),
        }
    }
}

/// One line of the recipe as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Unique name within the batch (e.g. "Palm Oil")
    pub name: String,
    /// Share of batch weight in percent. Derived when `auto_balanced` is set.
    #[serde(default)]
    pub percent: f64,
    /// Cost per kilogram
    pub rate: f64,
    /// Tax (GST) percentage applied to the basic cost
    #[serde(default)]
    pub tax_rate: f64,
    /// Percentage is the complement to 100 instead of user input
    #[serde(default)]
    pub auto_balanced: bool,
    pub phase: Phase,
}

impl IngredientRecord {
    pub fn new(name: impl Into<String>, percent: f64, rate: f64, tax_rate: f64, phase: Phase) -> Self {
        Self {
            name: name.into(),
            percent,
            rate,
            tax_rate,
            auto_balanced: false,
            phase,
        }
    }

    /// Record whose percentage is filled in by the balancer
    pub fn auto(name: impl Into<String>, rate: f64, tax_rate: f64, phase: Phase) -> Self {
        Self {
            name: name.into(),
            percent: 0.0,
            rate,
            tax_rate,
            auto_balanced: true,
            phase,
        }
    }
}
