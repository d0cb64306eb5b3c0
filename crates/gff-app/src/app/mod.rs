//! Application use cases

pub mod costing_service;

pub use costing_service::{BatchEdit, CostingService, IngredientEdit, RecipeSource};
