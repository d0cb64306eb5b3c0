//! Infrastructure layer - recipe loaders and persistence implementations

pub mod ingredient_csv;
pub mod persistence;
pub mod recipe_toml;
