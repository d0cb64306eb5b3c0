//! Standard box profiles
//!
//! Each profile fixes the net product weight, the wrapper paper consumed,
//! and the number of inner cartons per outer box. The formulas in
//! `service::packaging_costing` are the same for every profile.

use serde::Serialize;

/// Physical packing profile for one outer box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxProfile {
    /// Short identifier ("A", "B")
    pub name: &'static str,
    /// Net product weight per box (kg)
    pub net_weight_kg: f64,
    /// Wrapper paper consumed per box (kg)
    pub wrapper_weight_kg: f64,
    /// Inner cartons per box
    pub inner_units_per_box: u32,
}

/// 15 kg box, 75 g paper, 30 inner cartons
pub const BOX_PROFILE_A: BoxProfile = BoxProfile {
    name: "A",
    net_weight_kg: 15.0,
    wrapper_weight_kg: 0.075,
    inner_units_per_box: 30,
};

/// 16 kg box, 250 g paper, 32 inner cartons
pub const BOX_PROFILE_B: BoxProfile = BoxProfile {
    name: "B",
    net_weight_kg: 16.0,
    wrapper_weight_kg: 0.250,
    inner_units_per_box: 32,
};

/// Profiles costed for every report, in display order
pub const STANDARD_BOX_PROFILES: [BoxProfile; 2] = [BOX_PROFILE_A, BOX_PROFILE_B];

/// Profile used to project packaging cost over the whole batch
pub const PRIMARY_BOX_PROFILE: BoxProfile = BOX_PROFILE_A;

impl BoxProfile {
    /// e.g. "15kg Box (30pc)"
    pub fn title(&self) -> String {
        format!("{}kg Box ({}pc)", self.net_weight_kg, self.inner_units_per_box)
    }

    /// e.g. "75g Paper"
    pub fn rules(&self) -> String {
        format!("{}g Paper", (self.wrapper_weight_kg * 1000.0).round())
    }
}

/// Look up a standard profile by name (case-insensitive)
pub fn get_box_profile(name: &str) -> Option<BoxProfile> {
    STANDARD_BOX_PROFILES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}
