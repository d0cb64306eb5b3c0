//! Domain model types

pub mod batch;
pub mod box_profile;
pub mod ingredient;
pub mod packaging;
pub mod recipe;
pub mod report;

pub use batch::{normalize_batch_no, BatchContext, MiscCharges};
pub use box_profile::{get_box_profile, BoxProfile, BOX_PROFILE_A, BOX_PROFILE_B, PRIMARY_BOX_PROFILE, STANDARD_BOX_PROFILES};
pub use ingredient::{IngredientRecord, Phase};
pub use packaging::{PackagingItem, PackagingKind, PackagingRates};
pub use recipe::Recipe;
pub use report::{
    BatchProjection, BoxScenario, CostReport, CostShare, IngredientCosting, IngredientLine,
    PhaseTotals, ValidationWarning,
};
