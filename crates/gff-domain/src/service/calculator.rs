//! Single entry point for a costing run
//!
//! raw records -> balanced records -> line costs -> box scenarios -> batch totals

use gff_types::CostingError;

use super::{aggregate, balance, cost_box, cost_ingredients};
use crate::model::{
    BatchContext, BoxProfile, CostReport, IngredientRecord, PackagingItem, PackagingRates, Recipe,
    PRIMARY_BOX_PROFILE, STANDARD_BOX_PROFILES,
};

/// Run the whole costing chain
///
/// Pure: inputs are only read and a fresh report is returned. A fixed
/// percentage sum over 100 is reported in `CostReport::warnings` instead
/// of failing.
pub fn calculate(
    ingredients: &[IngredientRecord],
    packaging: &[PackagingItem],
    context: &BatchContext,
) -> Result<CostReport, CostingError> {
    let balanced = balance(ingredients)?;
    let costing = cost_ingredients(&balanced.records, context.batch_size_kg)?;

    let rates = PackagingRates::from_items(packaging)?;
    let misc_cost_per_box = context.misc_cost_per_box();
    let scenario_for = |profile: &BoxProfile| {
        cost_box(
            &rates,
            profile,
            costing.cost_per_kg,
            context.overhead_percent,
            misc_cost_per_box,
        )
    };

    let scenarios = STANDARD_BOX_PROFILES
        .iter()
        .map(scenario_for)
        .collect::<Result<Vec<_>, _>>()?;
    let primary = match scenarios
        .iter()
        .find(|s| s.profile.name == PRIMARY_BOX_PROFILE.name)
    {
        Some(scenario) => scenario.clone(),
        None => scenario_for(&PRIMARY_BOX_PROFILE)?,
    };

    let batch = aggregate(
        costing.total_cost,
        &primary,
        context.batch_size_kg,
        context.overhead_percent,
    )?;

    Ok(CostReport {
        batch_no: context.batch_no.clone(),
        batch_size_kg: context.batch_size_kg,
        overhead_percent: context.overhead_percent,
        misc_cost_per_box,
        auto_balanced_percent: balanced.auto_percent,
        ingredients: costing,
        scenarios,
        batch,
        warnings: balanced.warning.into_iter().collect(),
    })
}

pub fn calculate_recipe(recipe: &Recipe) -> Result<CostReport, CostingError> {
    calculate(&recipe.ingredients, &recipe.packaging, &recipe.batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MiscCharges, PackagingKind, Phase, ValidationWarning};
    use gff_types::{ConfigurationError, DivisionError};

    fn ingredients() -> Vec<IngredientRecord> {
        use Phase::{Oil, Water};
        vec![
            IngredientRecord::new("Palm Oil", 43.0, 120.0, 5.0, Oil),
            IngredientRecord::new("MDP", 1.0, 50.0, 5.0, Oil),
            IngredientRecord::auto("Water", 0.01, 0.0, Water),
            IngredientRecord::new("Salt", 3.7, 5.0, 0.0, Water),
            IngredientRecord::new("DMG", 0.3, 155.0, 18.0, Oil),
            IngredientRecord::new("Soya Leci", 0.3, 85.0, 18.0, Oil),
            IngredientRecord::new("PGPR", 0.3, 290.0, 18.0, Oil),
            IngredientRecord::new("CA", 0.15, 65.0, 18.0, Water),
            IngredientRecord::new("SC", 0.1, 83.0, 18.0, Water),
            IngredientRecord::new("PS", 0.1, 230.0, 18.0, Water),
            IngredientRecord::new("SB", 0.1, 95.0, 18.0, Water),
            IngredientRecord::new("EDTA", 0.02, 270.0, 18.0, Water),
            IngredientRecord::new("Starch", 0.001, 50.0, 18.0, Water),
            IngredientRecord::new("Flav", 0.01, 600.0, 18.0, Oil),
            IngredientRecord::new("B-Carotin", 0.001, 4800.0, 18.0, Oil),
        ]
    }

    fn packaging() -> Vec<PackagingItem> {
        vec![
            PackagingItem::new(PackagingKind::Wrapper, "Butter Paper", 148.0, 18.0),
            PackagingItem::new(PackagingKind::InnerCarton, "Mono Carton", 1.5, 5.0),
            PackagingItem::new(PackagingKind::OuterCarton, "Outer Carton", 25.0, 5.0),
            PackagingItem::new(PackagingKind::Tape, "Tape", 2.0, 18.0),
        ]
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
    // Default recipe end to end
    // ==========================================

    #[test]
    fn test_default_recipe_report() {
        let report = calculate(&ingredients(), &packaging(), &context()).unwrap();

        assert!((report.auto_balanced_percent - 50.918).abs() < 1e-9);
        assert!((report.ingredient_total() - 155_410.73586).abs() < 1e-4);
        assert!((report.phase_totals().oil - 153_113.328).abs() < 1e-4);
        assert!((report.phase_totals().water - 2_297.40786).abs() < 1e-4);
        assert!((report.ingredient_cost_per_kg() - 57.5595318).abs() < 1e-6);

        let a = report.scenario("A").unwrap();
        assert!((a.packaging_cost - 238.958).abs() < 1e-9);
        assert!((a.total_cost - 1_110.98490677).abs() < 1e-6);
        assert!((a.cost_per_unit - 37.0328302257).abs() < 1e-6);

        let b = report.scenario("B").unwrap();
        assert!((b.packaging_cost - 272.67).abs() < 1e-9);
        assert!((b.total_cost - 1_202.832033888).abs() < 1e-6);

        assert!((report.batch.packaging_cost - 43_012.44).abs() < 1e-6);
        assert!((report.batch.overhead_cost - 1_554.1073586).abs() < 1e-6);
        assert!((report.grand_total() - 199_977.2832186).abs() < 1e-4);
        assert!((report.final_cost_per_kg() - 74.0656604513).abs() < 1e-6);
        assert!(report.is_valid());
        assert_eq!(report.batch_no, "GFF-B-001");
        assert_eq!(report.misc_cost_per_box, 150.0);
    }

    #[test]
    fn test_batch_projection_uses_reported_primary_scenario() {
        let report = calculate(&ingredients(), &packaging(), &context()).unwrap();
        let primary = report.scenario(report.batch.packing_profile).unwrap();
        assert_eq!(primary.profile, PRIMARY_BOX_PROFILE);
        assert_eq!(
            report.batch.packaging_cost,
            report.batch.boxes_needed * primary.packaging_cost
        );
    }

    #[test]
    fn test_water_line_uses_balanced_share() {
        let report = calculate(&ingredients(), &packaging(), &context()).unwrap();
        let water = report
            .ingredients
            .lines
            .iter()
            .find(|l| l.auto_balanced)
            .unwrap();
        assert_eq!(water.name, "Water");
        assert!((water.weight_kg - 0.50918 * 2700.0).abs() < 1e-6);
    }

    #[test]
    fn test_both_overheads_kept_separate() {
        let report = calculate(&ingredients(), &packaging(), &context()).unwrap();
        let a = report.scenario("A").unwrap();
        assert!((a.overhead_cost - a.product_cost * 0.01).abs() < 1e-12);
        assert!((report.batch.overhead_cost - report.ingredient_total() * 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_breakdowns() {
        let report = calculate(&ingredients(), &packaging(), &context()).unwrap();
        let phases = report.phase_breakdown();
        assert_eq!(phases[0].label, "Oil");
        assert_eq!(phases[1].amount, report.phase_totals().water);

        let parts: f64 = report.cost_breakdown().iter().map(|s| s.amount).sum();
        assert!((parts - report.grand_total()).abs() < 1e-6);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let records = ingredients();
        let before = records.clone();
        calculate(&records, &packaging(), &context()).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn test_calculate_recipe_matches_calculate() {
        let recipe = Recipe {
            batch: context(),
            ingredients: ingredients(),
            packaging: packaging(),
        };
        assert_eq!(
            calculate_recipe(&recipe).unwrap(),
            calculate(&ingredients(), &packaging(), &context()).unwrap()
        );
    }

    // ==========================================
    // Warnings and errors
    // ==========================================

    #[test]
    fn test_overflow_reported_not_fatal() {
        let mut records = ingredients();
        records[0].percent = 99.0;
        let report = calculate(&records, &packaging(), &context()).unwrap();
        assert_eq!(report.auto_balanced_percent, 0.0);
        assert!(!report.is_valid());
        assert!(matches!(
            report.warnings[0],
            ValidationWarning::FixedPercentOverflow { .. }
        ));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut ctx = context();
        ctx.batch_size_kg = 0.0;
        let err = calculate(&ingredients(), &packaging(), &ctx).unwrap_err();
        assert_eq!(err, CostingError::Division(DivisionError::NonPositiveBatchSize(0.0)));
    }

    #[test]
    fn test_missing_auto_rejected() {
        let records: Vec<_> = ingredients().into_iter().filter(|r| !r.auto_balanced).collect();
        let err = calculate(&records, &packaging(), &context()).unwrap_err();
        assert_eq!(err, CostingError::Configuration(ConfigurationError::NoAutoBalanced));
    }
}
