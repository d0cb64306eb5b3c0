//! Built-in recipe defaults

pub mod default_recipe;

pub use default_recipe::{
    default_batch_context, default_ingredients, default_packaging, default_recipe,
};
