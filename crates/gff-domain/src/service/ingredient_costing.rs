//! Ingredient costing
//!
//! weight = percent / 100 x batch size, basic = weight x rate,
//! tax = basic x tax_rate / 100, total = basic + tax.
//! No rounding happens here; formatting is left to the caller.

use gff_types::{CostingError, DivisionError};

use crate::model::{IngredientCosting, IngredientLine, IngredientRecord, PhaseTotals};

/// Cost a single ingredient for the given batch size
pub fn cost_ingredient(record: &IngredientRecord, batch_size_kg: f64) -> IngredientLine {
    let weight_kg = (record.percent / 100.0) * batch_size_kg;
    let basic = weight_kg * record.rate;
    let tax = basic * (record.tax_rate / 100.0);

    IngredientLine {
        name: record.name.clone(),
        phase: record.phase,
        auto_balanced: record.auto_balanced,
        percent: record.percent,
        weight_kg,
        rate: record.rate,
        tax_rate: record.tax_rate,
        basic,
        tax,
        total: basic + tax,
    }
}

/// Cost every ingredient and total them overall and per phase
///
/// Expects balanced records. Fails when the batch size is not positive.
pub fn cost_ingredients(
    records: &[IngredientRecord],
    batch_size_kg: f64,
) -> Result<IngredientCosting, CostingError> {
    if batch_size_kg <= 0.0 || batch_size_kg.is_nan() {
        return Err(DivisionError::NonPositiveBatchSize(batch_size_kg).into());
    }

    let lines: Vec<IngredientLine> = records
        .iter()
        .map(|r| cost_ingredient(r, batch_size_kg))
        .collect();

    let mut phase_totals = PhaseTotals::default();
    let mut total_basic = 0.0;
    let mut total_tax = 0.0;
    let mut total_cost = 0.0;
    for line in &lines {
        phase_totals.add(line.phase, line.total);
        total_basic += line.basic;
        total_tax += line.tax;
        total_cost += line.total;
    }

    Ok(IngredientCosting {
        lines,
        phase_totals,
        total_basic,
        total_tax,
        total_cost,
        cost_per_kg: total_cost / batch_size_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phase;

    fn palm_oil() -> IngredientRecord {
        IngredientRecord::new("Palm Oil", 43.0, 120.0, 5.0, Phase::Oil)
    }

    // ==========================================
    // Single line
    // ==========================================

    #[test]
    fn test_palm_oil_line() {
        // 2700kg x 43% = 1161kg, x 120 = 139320, 5% GST = 6966, total 146286
        let line = cost_ingredient(&palm_oil(), 2700.0);
        assert!((line.weight_kg - 1161.0).abs() < 1e-9);
        assert!((line.basic - 139_320.0).abs() < 1e-6);
        assert!((line.tax - 6_966.0).abs() < 1e-6);
        assert!((line.total - 146_286.0).abs() < 1e-6);
        assert_eq!(line.phase, Phase::Oil);
    }

    #[test]
    fn test_zero_percent_line() {
        let record = IngredientRecord::new("Starch", 0.0, 50.0, 18.0, Phase::Water);
        let line = cost_ingredient(&record, 2700.0);
        assert_eq!(line.weight_kg, 0.0);
        assert_eq!(line.total, 0.0);
    }

    #[test]
    fn test_zero_tax_line() {
        let record = IngredientRecord::new("Salt", 3.7, 5.0, 0.0, Phase::Water);
        let line = cost_ingredient(&record, 1000.0);
        assert!((line.basic - 185.0).abs() < 1e-9);
        assert_eq!(line.tax, 0.0);
        assert_eq!(line.total, line.basic);
    }

    // ==========================================
    // Totals
    // ==========================================

    #[test]
    fn test_phase_totals_and_cost_per_kg() {
        let records = vec![
            palm_oil(),
            IngredientRecord::new("Salt", 3.7, 5.0, 0.0, Phase::Water),
            IngredientRecord::new("Water", 53.3, 0.01, 0.0, Phase::Water),
        ];
        let costing = cost_ingredients(&records, 2700.0).unwrap();

        let salt = 0.037 * 2700.0 * 5.0;
        let water = 0.533 * 2700.0 * 0.01;
        assert!((costing.phase_totals.oil - 146_286.0).abs() < 1e-6);
        assert!((costing.phase_totals.water - (salt + water)).abs() < 1e-6);
        assert!((costing.total_cost - (146_286.0 + salt + water)).abs() < 1e-6);
        assert!((costing.total_basic + costing.total_tax - costing.total_cost).abs() < 1e-6);
        assert!((costing.cost_per_kg - costing.total_cost / 2700.0).abs() < 1e-12);
        assert_eq!(costing.lines.len(), 3);
    }

    #[test]
    fn test_phase_totals_sum_to_total() {
        let records = vec![
            palm_oil(),
            IngredientRecord::new("PGPR", 0.3, 290.0, 18.0, Phase::Oil),
            IngredientRecord::new("SB", 0.1, 95.0, 18.0, Phase::Water),
        ];
        let costing = cost_ingredients(&records, 500.0).unwrap();
        let phases = costing.phase_totals.oil + costing.phase_totals.water;
        assert!((phases - costing.total_cost).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![palm_oil(), IngredientRecord::new("Salt", 3.7, 5.0, 0.0, Phase::Water)];
        let first = cost_ingredients(&records, 2700.0).unwrap();
        let second = cost_ingredients(&records, 2700.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_records() {
        let costing = cost_ingredients(&[], 100.0).unwrap();
        assert_eq!(costing.total_cost, 0.0);
        assert_eq!(costing.cost_per_kg, 0.0);
    }

    // ==========================================
    // Batch size errors
    // ==========================================

    #[test]
    fn test_zero_batch_size() {
        let err = cost_ingredients(&[palm_oil()], 0.0).unwrap_err();
        assert_eq!(err, CostingError::Division(DivisionError::NonPositiveBatchSize(0.0)));
    }

    #[test]
    fn test_negative_batch_size() {
        assert!(cost_ingredients(&[palm_oil()], -10.0).is_err());
    }
}
