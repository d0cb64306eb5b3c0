//! Repository trait definitions for data persistence

use gff_types::Error;

use crate::model::Recipe;

/// Store for the user's current recipe snapshot
///
/// Holds only the latest edited recipe. The costing engine never reads
/// from it directly; callers load a snapshot and pass it in.
pub trait RecipeRepository {
    /// Load the stored recipe, if any
    fn load(&self) -> Result<Option<Recipe>, Error>;

    /// Replace the stored recipe
    fn save(&self, recipe: &Recipe) -> Result<(), Error>;

    /// Remove the stored recipe
    fn clear(&self) -> Result<(), Error>;
}
