//! Batch aggregation
//!
//! Projects packaging over the whole batch using the primary box profile
//! and adds a batch-level overhead on ingredient cost. That overhead is
//! applied independently of the overhead already inside each box scenario.

use gff_types::{CostingError, DivisionError};

use crate::model::{BatchProjection, BoxScenario};

pub fn aggregate(
    ingredient_total: f64,
    primary: &BoxScenario,
    batch_size_kg: f64,
    overhead_percent: f64,
) -> Result<BatchProjection, CostingError> {
    if batch_size_kg <= 0.0 || batch_size_kg.is_nan() {
        return Err(DivisionError::NonPositiveBatchSize(batch_size_kg).into());
    }
    if primary.profile.net_weight_kg <= 0.0 {
        return Err(DivisionError::NonPositiveNetWeight(primary.profile.name.to_string()).into());
    }

    let boxes_needed = batch_size_kg / primary.profile.net_weight_kg;
    let packaging_cost = boxes_needed * primary.packaging_cost;
    let overhead_cost = ingredient_total * (overhead_percent / 100.0);
    let grand_total = ingredient_total + packaging_cost + overhead_cost;

    Ok(BatchProjection {
        packing_profile: primary.profile.name,
        boxes_needed,
        packaging_cost,
        overhead_cost,
        grand_total,
        final_cost_per_kg: grand_total / batch_size_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoxProfile, BOX_PROFILE_A};

    fn scenario(profile: BoxProfile, packaging_cost: f64) -> BoxScenario {
        BoxScenario {
            profile,
            product_cost: 0.0,
            packaging_cost,
            overhead_cost: 0.0,
            total_cost: packaging_cost,
            cost_per_unit: 0.0,
        }
    }

    #[test]
    fn test_default_batch_projection() {
        // 2700 / 15 = 180 boxes x 238.958 = 43012.44
        let primary = scenario(BOX_PROFILE_A, 238.958);
        let batch = aggregate(100_000.0, &primary, 2700.0, 1.0).unwrap();
        assert!((batch.boxes_needed - 180.0).abs() < 1e-9);
        assert!((batch.packaging_cost - 43_012.44).abs() < 1e-6);
        assert!((batch.overhead_cost - 1_000.0).abs() < 1e-9);
        assert!((batch.grand_total - 144_012.44).abs() < 1e-6);
        assert!((batch.final_cost_per_kg - 144_012.44 / 2700.0).abs() < 1e-9);
        assert_eq!(batch.packing_profile, "A");
    }

    #[test]
    fn test_fractional_boxes_not_rounded() {
        let primary = scenario(BOX_PROFILE_A, 10.0);
        let batch = aggregate(0.0, &primary, 100.0, 0.0).unwrap();
        assert!((batch.boxes_needed - 100.0 / 15.0).abs() < 1e-12);
        assert!((batch.packaging_cost - 1000.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_grand_total_is_sum_of_parts() {
        let primary = scenario(BOX_PROFILE_A, 200.0);
        let batch = aggregate(5_000.0, &primary, 300.0, 2.5).unwrap();
        assert_eq!(
            batch.grand_total,
            5_000.0 + batch.packaging_cost + batch.overhead_cost
        );
    }

    #[test]
    fn test_zero_batch_size() {
        let primary = scenario(BOX_PROFILE_A, 200.0);
        let err = aggregate(5_000.0, &primary, 0.0, 1.0).unwrap_err();
        assert_eq!(err, CostingError::Division(DivisionError::NonPositiveBatchSize(0.0)));
    }

    #[test]
    fn test_zero_net_weight() {
        let profile = BoxProfile {
            net_weight_kg: 0.0,
            ..BOX_PROFILE_A
        };
        let err = aggregate(5_000.0, &scenario(profile, 200.0), 100.0, 1.0).unwrap_err();
        assert!(matches!(err, CostingError::Division(DivisionError::NonPositiveNetWeight(_))));
    }
}
