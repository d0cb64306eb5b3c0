//! Calculation outputs

use serde::Serialize;

use super::{BoxProfile, Phase};

/// Non-fatal findings reported next to the figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// Fixed percentages exceed 100; the auto-balanced share was clamped to 0
    FixedPercentOverflow { fixed_sum: f64 },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::FixedPercentOverflow { fixed_sum } => write!(
                f,
                "fixed ingredient percentages sum to {:.3}% (over 100%); auto-balanced share set to 0",
                fixed_sum
            ),
        }
    }
}

/// Costed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    pub phase: Phase,
    pub auto_balanced: bool,
    pub percent: f64,
    pub weight_kg: f64,
    pub rate: f64,
    pub tax_rate: f64,
    /// weight x rate
    pub basic: f64,
    /// basic x tax_rate / 100
    pub tax: f64,
    /// basic + tax
    pub total: f64,
}

/// Ingredient cost split by phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PhaseTotals {
    pub oil: f64,
    pub water: f64,
}

impl PhaseTotals {
    pub fn get(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Oil => self.oil,
            Phase::Water => self.water,
        }
    }

    pub fn add(&mut self, phase: Phase, amount: f64) {
        match phase {
            Phase::Oil => self.oil += amount,
            Phase::Water => self.water += amount,
        }
    }
}

/// Output of the ingredient costing stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientCosting {
    pub lines: Vec<IngredientLine>,
    pub phase_totals: PhaseTotals,
    pub total_basic: f64,
    pub total_tax: f64,
    pub total_cost: f64,
    pub cost_per_kg: f64,
}

/// One box profile costed against the current ingredient cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxScenario {
    pub profile: BoxProfile,
    /// ingredient cost per kg x net weight
    pub product_cost: f64,
    /// Wrapper, cartons, tape and misc charges for one box
    pub packaging_cost: f64,
    /// Overhead on product cost
    pub overhead_cost: f64,
    pub total_cost: f64,
    /// total_cost / inner units
    pub cost_per_unit: f64,
}

/// Whole-batch projection from the primary box profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchProjection {
    /// Profile the projection packs into
    pub packing_profile: &'static str,
    pub boxes_needed: f64,
    pub packaging_cost: f64,
    /// Overhead on total ingredient cost, separate from the per-box overhead
    pub overhead_cost: f64,
    pub grand_total: f64,
    pub final_cost_per_kg: f64,
}

/// Labelled amount for chart groupings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostShare {
    pub label: &'static str,
    pub amount: f64,
}

/// Complete result of one calculation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    pub batch_no: String,
    pub batch_size_kg: f64,
    pub overhead_percent: f64,
    pub misc_cost_per_box: f64,
    /// Percentage assigned to the auto-balanced ingredient
    pub auto_balanced_percent: f64,
    pub ingredients: IngredientCosting,
    /// One scenario per standard box profile, in profile order
    pub scenarios: Vec<BoxScenario>,
    pub batch: BatchProjection,
    pub warnings: Vec<ValidationWarning>,
}

impl CostReport {
    pub fn ingredient_total(&self) -> f64 {
        self.ingredients.total_cost
    }

    pub fn ingredient_cost_per_kg(&self) -> f64 {
        self.ingredients.cost_per_kg
    }

    pub fn phase_totals(&self) -> PhaseTotals {
        self.ingredients.phase_totals
    }

    pub fn grand_total(&self) -> f64 {
        self.batch.grand_total
    }

    pub fn final_cost_per_kg(&self) -> f64 {
        self.batch.final_cost_per_kg
    }

    pub fn scenario(&self, profile_name: &str) -> Option<&BoxScenario> {
        self.scenarios
            .iter()
            .find(|s| s.profile.name.eq_ignore_ascii_case(profile_name))
    }

    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Oil / water split of ingredient cost
    pub fn phase_breakdown(&self) -> [CostShare; 2] {
        let phases = self.phase_totals();
        [
            CostShare { label: "Oil", amount: phases.oil },
            CostShare { label: "Water", amount: phases.water },
        ]
    }

    /// Batch cost split into oil, water, packaging and overhead
    pub fn cost_breakdown(&self) -> [CostShare; 4] {
        let phases = self.phase_totals();
        [
            CostShare { label: "Oil", amount: phases.oil },
            CostShare { label: "Water", amount: phases.water },
            CostShare { label: "Packaging", amount: self.batch.packaging_cost },
            CostShare { label: "Overhead", amount: self.batch.overhead_cost },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_totals_accumulate() {
        let mut totals = PhaseTotals::default();
        totals.add(Phase::Oil, 10.0);
        totals.add(Phase::Water, 2.5);
        totals.add(Phase::Oil, 1.0);
        assert_eq!(totals.get(Phase::Oil), 11.0);
        assert_eq!(totals.get(Phase::Water), 2.5);
    }

    #[test]
    fn test_warning_message() {
        let warning = ValidationWarning::FixedPercentOverflow { fixed_sum: 101.5 };
        assert!(warning.to_string().contains("101.500%"));
    }

    #[test]
    fn test_warning_serializes_with_kind() {
        let warning = ValidationWarning::FixedPercentOverflow { fixed_sum: 101.5 };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "fixed_percent_overflow");
        assert_eq!(json["fixed_sum"], 101.5);
    }
}
