//! Default recipe used when nothing has been saved or loaded

use gff_domain::model::{
    BatchContext, IngredientRecord, MiscCharges, PackagingItem, PackagingKind, Phase, Recipe,
};

/// name, percent, rate (/kg), GST %, phase
const INGREDIENTS: [(&str, f64, f64, f64, Phase); 14] = [
    ("Palm Oil", 43.0, 120.0, 5.0, Phase::Oil),
    ("MDP", 1.0, 50.0, 5.0, Phase::Oil),
    ("Salt", 3.7, 5.0, 0.0, Phase::Water),
    ("DMG", 0.3, 155.0, 18.0, Phase::Oil),
    ("Soya Leci", 0.3, 85.0, 18.0, Phase::Oil),
    ("PGPR", 0.3, 290.0, 18.0, Phase::Oil),
    ("CA", 0.15, 65.0, 18.0, Phase::Water),
    ("SC", 0.1, 83.0, 18.0, Phase::Water),
    ("PS", 0.1, 230.0, 18.0, Phase::Water),
    ("SB", 0.1, 95.0, 18.0, Phase::Water),
    ("EDTA", 0.02, 270.0, 18.0, Phase::Water),
    ("Starch", 0.001, 50.0, 18.0, Phase::Water),
    ("Flav", 0.01, 600.0, 18.0, Phase::Oil),
    ("B-Carotin", 0.001, 4800.0, 18.0, Phase::Oil),
];

/// Water sits third in the ingredient table
const WATER_POSITION: usize = 2;

pub const DEFAULT_BATCH_NO: &str = "GFF-B-001";
pub const DEFAULT_BATCH_SIZE_KG: f64 = 2700.0;
pub const DEFAULT_OVERHEAD_PERCENT: f64 = 1.0;

pub fn default_ingredients() -> Vec<IngredientRecord> {
    let mut records: Vec<IngredientRecord> = INGREDIENTS
        .iter()
        .map(|&(name, percent, rate, tax_rate, phase)| {
            IngredientRecord::new(name, percent, rate, tax_rate, phase)
        })
        .collect();
    records.insert(
        WATER_POSITION,
        IngredientRecord::auto("Water", 0.01, 0.0, Phase::Water),
    );
    records
}

pub fn default_packaging() -> Vec<PackagingItem> {
    vec![
        PackagingItem::new(PackagingKind::Wrapper, "Butter Paper", 148.0, 18.0),
        PackagingItem::new(PackagingKind::InnerCarton, "Mono Carton", 1.50, 5.0),
        PackagingItem::new(PackagingKind::OuterCarton, "Outer Carton", 25.0, 5.0),
        PackagingItem::new(PackagingKind::Tape, "Tape", 2.0, 18.0),
    ]
}

pub fn default_batch_context() -> BatchContext {
    BatchContext::new(
        DEFAULT_BATCH_NO,
        DEFAULT_BATCH_SIZE_KG,
        DEFAULT_OVERHEAD_PERCENT,
        MiscCharges::Itemised {
            labour: 40.0,
            electricity: 30.0,
            transport: 80.0,
        },
    )
}

pub fn default_recipe() -> Recipe {
    Recipe {
        batch: default_batch_context(),
        ingredients: default_ingredients(),
        packaging: default_packaging(),
    }
}
