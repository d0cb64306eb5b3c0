//! Ingredient balancer
//!
//! Fills in the auto-balanced ingredient (normally Water) so the batch
//! percentages add up to 100.

use gff_types::{ConfigurationError, CostingError};

use crate::model::{IngredientRecord, ValidationWarning};

/// Balanced copy of the recipe's ingredient list
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedIngredients {
    pub records: Vec<IngredientRecord>,
    /// Sum of every non-auto percentage
    pub fixed_sum: f64,
    /// Percentage assigned to the auto-balanced record
    pub auto_percent: f64,
    pub warning: Option<ValidationWarning>,
}

impl BalancedIngredients {
    pub fn is_valid(&self) -> bool {
        self.warning.is_none()
    }
}

/// Sum of percentages over records that are not auto-balanced
pub fn fixed_percent_sum(records: &[IngredientRecord]) -> f64 {
    records
        .iter()
        .filter(|r| !r.auto_balanced)
        .map(|r| r.percent)
        .sum()
}

/// Derive the auto-balanced percentage as `max(0, 100 - fixed_sum)`
///
/// Exactly one record must carry the auto flag. An over-100 fixed sum is
/// not an error: the auto share is clamped to zero and a warning is attached.
/// The input slice is left untouched.
pub fn balance(records: &[IngredientRecord]) -> Result<BalancedIngredients, CostingError> {
    let auto: Vec<&IngredientRecord> = records.iter().filter(|r| r.auto_balanced).collect();
    match auto.len() {
        0 => return Err(ConfigurationError::NoAutoBalanced.into()),
        1 => {}
        _ => {
            let names = auto.iter().map(|r| r.name.clone()).collect();
            return Err(ConfigurationError::MultipleAutoBalanced(names).into());
        }
    }

    let fixed_sum = fixed_percent_sum(records);
    let auto_percent = (100.0 - fixed_sum).max(0.0);
    let warning = (fixed_sum > 100.0).then_some(ValidationWarning::FixedPercentOverflow { fixed_sum });

    let records = records
        .iter()
        .map(|r| {
            if r.auto_balanced {
                IngredientRecord {
                    percent: auto_percent,
                    ..r.clone()
                }
            } else {
                r.clone()
            }
        })
        .collect();

    Ok(BalancedIngredients {
        records,
        fixed_sum,
        auto_percent,
        warning,
    })
}
