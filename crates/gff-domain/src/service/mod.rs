//! Domain services

pub mod balancer;
pub mod batch_aggregator;
pub mod calculator;
pub mod ingredient_costing;
pub mod packaging_costing;
pub mod report_text;

pub use balancer::{balance, BalancedIngredients};
pub use batch_aggregator::aggregate;
pub use calculator::{calculate, calculate_recipe};
pub use ingredient_costing::{cost_ingredient, cost_ingredients};
pub use packaging_costing::{cost_box, cost_packaging};
pub use report_text::{parse_text_report, render_text_report, ParsedReport};
