//! Packaging costing per box profile

use gff_types::{CostingError, DivisionError};

use crate::model::{BatchContext, BoxProfile, BoxScenario, PackagingItem, PackagingRates};

/// Packaging and misc charges for one box of the given profile
///
/// Wrapper is charged per kg of paper consumed, inner cartons per piece,
/// outer carton and tape once per box.
pub fn box_packaging_cost(rates: &PackagingRates, profile: &BoxProfile, misc_cost_per_box: f64) -> f64 {
    profile.wrapper_weight_kg * rates.wrapper
        + f64::from(profile.inner_units_per_box) * rates.inner_carton
        + rates.outer_carton
        + rates.tape
        + misc_cost_per_box
}

/// Cost one box profile from resolved packaging rates
pub fn cost_box(
    rates: &PackagingRates,
    profile: &BoxProfile,
    ingredient_cost_per_kg: f64,
    overhead_percent: f64,
    misc_cost_per_box: f64,
) -> Result<BoxScenario, CostingError> {
    if profile.inner_units_per_box == 0 {
        return Err(DivisionError::ZeroInnerUnits(profile.name.to_string()).into());
    }

    let product_cost = ingredient_cost_per_kg * profile.net_weight_kg;
    let packaging_cost = box_packaging_cost(rates, profile, misc_cost_per_box);
    let overhead_cost = product_cost * (overhead_percent / 100.0);
    let total_cost = product_cost + packaging_cost + overhead_cost;

    Ok(BoxScenario {
        profile: *profile,
        product_cost,
        packaging_cost,
        overhead_cost,
        total_cost,
        cost_per_unit: total_cost / f64::from(profile.inner_units_per_box),
    })
}

/// Cost one box profile straight from the packaging item list
pub fn cost_packaging(
    items: &[PackagingItem],
    profile: &BoxProfile,
    ingredient_cost_per_kg: f64,
    context: &BatchContext,
) -> Result<BoxScenario, CostingError> {
    let rates = PackagingRates::from_items(items)?;
    cost_box(
        &rates,
        profile,
        ingredient_cost_per_kg,
        context.overhead_percent,
        context.misc_cost_per_box(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MiscCharges, PackagingKind, BOX_PROFILE_A, BOX_PROFILE_B};

    fn items() -> Vec<PackagingItem> {
        vec![
            PackagingItem::new(PackagingKind::Wrapper, "Butter Paper", 148.0, 18.0),
            PackagingItem::new(PackagingKind::InnerCarton, "Mono Carton", 1.5, 5.0),
            PackagingItem::new(PackagingKind::OuterCarton, "Outer Carton", 25.0, 5.0),
            PackagingItem::new(PackagingKind::Tape, "Tape", 2.0, 18.0),
        ]
    }

    fn rates() -> PackagingRates {
        PackagingRates::from_items(&items()).unwrap()
    }

    fn context() -> BatchContext {
        BatchContext::new(
            "GFF-B-001",
            2700.0,
            1.0,
            MiscCharges::Itemised {
                labour: 40.0,
                electricity: 30.0,
                transport: 80.0,
            },
        )
    }

    // ==========================================
    // Packaging cost per box
    // ==========================================

    #[test]
    fn test_packaging_cost_profile_a() {
        // 0.075 x 174.64 + 30 x 1.575 + 26.25 + 2.36 + 150 = 238.958
        let cost = box_packaging_cost(&rates(), &BOX_PROFILE_A, 150.0);
        assert!((cost - 238.958).abs() < 1e-9);
    }

    #[test]
    fn test_packaging_cost_profile_b() {
        // 0.25 x 174.64 + 32 x 1.575 + 26.25 + 2.36 + 150 = 272.67
        let cost = box_packaging_cost(&rates(), &BOX_PROFILE_B, 150.0);
        assert!((cost - 272.67).abs() < 1e-9);
    }

    // ==========================================
    // Full scenario
    // ==========================================

    #[test]
    fn test_scenario_a_additive() {
        let x = 57.5;
        let scenario = cost_box(&rates(), &BOX_PROFILE_A, x, 1.0, 150.0).unwrap();
        assert!((scenario.product_cost - 15.0 * x).abs() < 1e-12);
        assert!((scenario.overhead_cost - 15.0 * x * 0.01).abs() < 1e-12);
        assert_eq!(
            scenario.total_cost,
            scenario.product_cost + scenario.packaging_cost + scenario.overhead_cost
        );
        assert!((scenario.cost_per_unit - scenario.total_cost / 30.0).abs() < 1e-12);
        assert_eq!(scenario.profile, BOX_PROFILE_A);
    }

    #[test]
    fn test_cost_packaging_matches_cost_box() {
        let from_items = cost_packaging(&items(), &BOX_PROFILE_B, 60.0, &context()).unwrap();
        let from_rates = cost_box(&rates(), &BOX_PROFILE_B, 60.0, 1.0, 150.0).unwrap();
        assert_eq!(from_items, from_rates);
    }

    #[test]
    fn test_zero_overhead() {
        let scenario = cost_box(&rates(), &BOX_PROFILE_A, 50.0, 0.0, 0.0).unwrap();
        assert_eq!(scenario.overhead_cost, 0.0);
        assert!((scenario.total_cost - (750.0 + scenario.packaging_cost)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_inner_units() {
        let profile = BoxProfile {
            name: "Z",
            net_weight_kg: 10.0,
            wrapper_weight_kg: 0.1,
            inner_units_per_box: 0,
        };
        let err = cost_box(&rates(), &profile, 50.0, 1.0, 0.0).unwrap_err();
        assert_eq!(err, CostingError::Division(DivisionError::ZeroInnerUnits("Z".to_string())));
    }

    #[test]
    fn test_missing_packaging_item() {
        let partial = &items()[..3];
        assert!(cost_packaging(partial, &BOX_PROFILE_A, 50.0, &context()).is_err());
    }
}
