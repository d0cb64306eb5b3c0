//! Packaging items and their tax-inclusive rates

use gff_types::{ConfigurationError, CostingError};
use serde::{Deserialize, Serialize};

/// The four packaging materials consumed per box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingKind {
    /// Wrapper (butter) paper, priced per kilogram of paper
    Wrapper,
    /// Inner (mono) carton, priced per piece
    InnerCarton,
    /// Outer carton, one per box
    OuterCarton,
    /// Tape, one allowance per box
    Tape,
}

impl PackagingKind {
    pub const ALL: [PackagingKind; 4] = [
        PackagingKind::Wrapper,
        PackagingKind::InnerCarton,
        PackagingKind::OuterCarton,
        PackagingKind::Tape,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PackagingKind::Wrapper => "wrapper",
            PackagingKind::InnerCarton => "inner_carton",
            PackagingKind::OuterCarton => "outer_carton",
            PackagingKind::Tape => "tape",
        }
    }

    /// Unit the cost is quoted in
    pub fn unit(&self) -> &'static str {
        match self {
            PackagingKind::Wrapper => "kg",
            PackagingKind::InnerCarton => "pc",
            PackagingKind::OuterCarton | PackagingKind::Tape => "box",
        }
    }
}

impl std::fmt::Display for PackagingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PackagingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "wrapper" | "paper" | "butter_paper" => Ok(PackagingKind::Wrapper),
            "inner_carton" | "inner" | "mono" | "mono_carton" => Ok(PackagingKind::InnerCarton),
            "outer_carton" | "outer" => Ok(PackagingKind::OuterCarton),
            "tape" => Ok(PackagingKind::Tape),
            other => Err(format!(
                "unknown packaging kind '{}' (expected wrapper, inner_carton, outer_carton or tape)",
                other
            )),
        }
    }
}

/// A packaging material with its pre-tax cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingItem {
    pub kind: PackagingKind,
    /// Display label (e.g. "Butter Paper")
    pub label: String,
    /// Cost excluding tax, per `kind.unit()`
    pub unit_cost: f64,
    /// Tax percentage
    #[serde(default)]
    pub tax_rate: f64,
}

impl PackagingItem {
    pub fn new(kind: PackagingKind, label: impl Into<String>, unit_cost: f64, tax_rate: f64) -> Self {
        Self {
            kind,
            label: label.into(),
            unit_cost,
            tax_rate,
        }
    }

    /// unit_cost x (1 + tax_rate / 100)
    pub fn tax_inclusive_rate(&self) -> f64 {
        self.unit_cost * (1.0 + self.tax_rate / 100.0)
    }
}

/// Tax-inclusive rate for each packaging kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackagingRates {
    pub wrapper: f64,
    pub inner_carton: f64,
    pub outer_carton: f64,
    pub tape: f64,
}

impl PackagingRates {
    /// Resolve one rate per kind. Every kind must appear exactly once.
    pub fn from_items(items: &[PackagingItem]) -> Result<Self, CostingError> {
        let rate_for = |kind: PackagingKind| -> Result<f64, CostingError> {
            let mut matching = items.iter().filter(|item| item.kind == kind);
            let item = matching
                .next()
                .ok_or_else(|| ConfigurationError::MissingPackagingItem(kind.label().to_string()))?;
            if matching.next().is_some() {
                return Err(ConfigurationError::DuplicatePackagingItem(kind.label().to_string()).into());
            }
            Ok(item.tax_inclusive_rate())
        };

        Ok(Self {
            wrapper: rate_for(PackagingKind::Wrapper)?,
            inner_carton: rate_for(PackagingKind::InnerCarton)?,
            outer_carton: rate_for(PackagingKind::OuterCarton)?,
            tape: rate_for(PackagingKind::Tape)?,
        })
    }

    pub fn get(&self, kind: PackagingKind) -> f64 {
        match kind {
            PackagingKind::Wrapper => self.wrapper,
            PackagingKind::InnerCarton => self.inner_carton,
            PackagingKind::OuterCarton => self.outer_carton,
            PackagingKind::Tape => self.tape,
        }
    }
}
