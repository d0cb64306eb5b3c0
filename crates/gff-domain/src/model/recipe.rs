//! Recipe snapshot: everything one calculation needs

use serde::{Deserialize, Serialize};

use super::{BatchContext, IngredientRecord, PackagingItem, PackagingKind};

/// Input snapshot for one calculation run
///
/// Owned by the caller (session store, loaded file); the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub batch: BatchContext,
    pub ingredients: Vec<IngredientRecord>,
    pub packaging: Vec<PackagingItem>,
}

impl Recipe {
    /// Find an ingredient by name, ignoring case and surrounding whitespace
    pub fn ingredient(&self, name: &str) -> Option<&IngredientRecord> {
        let name = name.trim();
        self.ingredients.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }

    pub fn ingredient_mut(&mut self, name: &str) -> Option<&mut IngredientRecord> {
        let name = name.trim();
        self.ingredients
            .iter_mut()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    pub fn packaging_item(&self, kind: PackagingKind) -> Option<&PackagingItem> {
        self.packaging.iter().find(|p| p.kind == kind)
    }

    pub fn packaging_item_mut(&mut self, kind: PackagingKind) -> Option<&mut PackagingItem> {
        self.packaging.iter_mut().find(|p| p.kind == kind)
    }
}
