//! Per-run batch context

use serde::{Deserialize, Serialize};

/// Flat charges added to every box
///
/// Either a single figure or the labour / electricity / transport split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MiscCharges {
    Itemised {
        #[serde(default)]
        labour: f64,
        #[serde(default)]
        electricity: f64,
        #[serde(default)]
        transport: f64,
    },
    Flat(f64),
}

impl MiscCharges {
    pub fn per_box(&self) -> f64 {
        match *self {
            MiscCharges::Itemised {
                labour,
                electricity,
                transport,
            } => labour + electricity + transport,
            MiscCharges::Flat(amount) => amount,
        }
    }
}

impl Default for MiscCharges {
    fn default() -> Self {
        MiscCharges::Flat(0.0)
    }
}

/// Batch id as it appears in reports: trimmed, with inner whitespace
/// (including line breaks) collapsed to single spaces
pub fn normalize_batch_no(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// User-supplied values held constant for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchContext {
    /// Batch identifier shown in reports (e.g. "GFF-B-001")
    #[serde(default)]
    pub batch_no: String,
    pub batch_size_kg: f64,
    /// Overhead as a percentage of ingredient cost
    #[serde(default)]
    pub overhead_percent: f64,
    #[serde(default)]
    pub misc: MiscCharges,
}

impl BatchContext {
    pub fn new(batch_no: impl Into<String>, batch_size_kg: f64, overhead_percent: f64, misc: MiscCharges) -> Self {
        Self {
            batch_no: batch_no.into(),
            batch_size_kg,
            overhead_percent,
            misc,
        }
    }

    pub fn misc_cost_per_box(&self) -> f64 {
        self.misc.per_box()
    }
}
