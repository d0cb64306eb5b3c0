//! Costing engine for blended emulsion products
//!
//! Pure calculation stages: ingredient balancing, ingredient costing,
//! packaging costing per box profile, and batch aggregation. Nothing in
//! this crate performs I/O or logging.

pub mod model;
pub mod repository;
pub mod service;
