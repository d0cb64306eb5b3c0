//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_recipe_repo;

pub use file_recipe_repo::FileRecipeRepository;
