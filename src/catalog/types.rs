//! Crop definition types
//!
//! A catalog entry records where a crop grows best (temperature, rainfall,
//! pH, soil, season) and what it earns. Entries are read-only once the
//! catalog has been built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::{Season, SoilType};

/// Inclusive numeric range, written as `[low, high]` in catalog JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

impl ValueRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Both bounds finite and ordered
    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }
}

impl From<[f64; 2]> for ValueRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<ValueRange> for [f64; 2] {
    fn from(range: ValueRange) -> Self {
        [range.low, range.high]
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Ordinal market rating used for profit margin and demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Rating {
    pub fn display_text(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Moderate => "Moderate",
            Rating::High => "High",
            Rating::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Conditions under which the crop earns full credit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalConditions {
    /// Growing-season temperature (°C)
    pub temperature: ValueRange,

    /// Annual rainfall (mm)
    pub rainfall: ValueRange,

    pub ph: ValueRange,

    pub soil_types: Vec<SoilType>,

    pub seasons: Vec<Season>,
}

impl OptimalConditions {
    pub fn accepts_soil(&self, soil: SoilType) -> bool {
        self.soil_types.contains(&soil)
    }

    pub fn accepts_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }
}

/// Market economics shown alongside a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    /// Currency units per quintal
    pub market_price: f64,

    /// Tons per hectare
    pub yield_range: ValueRange,

    pub profit_margin: Rating,

    pub market_demand: Rating,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropDefinition {
    /// Stable identifier (e.g., "maize")
    pub key: String,

    /// Display name (e.g., "Maize (Hybrid)")
    pub name: String,

    /// Recommended varieties, best first
    pub varieties: Vec<String>,

    pub optimal_conditions: OptimalConditions,

    pub economics: Economics,
}

impl CropDefinition {
    /// Top variety, shown as "Best Variety"
    pub fn primary_variety(&self) -> Option<&str> {
        self.varieties.first().map(String::as_str)
    }

    /// Up to three varieties, best first
    pub fn best_varieties(&self) -> &[String] {
        let n = self.varieties.len().min(3);
        &self.varieties[..n]
    }

    /// E.g., "4.5-6 tons/hectare"
    pub fn expected_yield_label(&self) -> String {
        format!("{} tons/hectare", self.economics.yield_range)
    }

    /// Card icon
    pub fn icon(&self) -> &'static str {
        let name = self.name.to_lowercase();
        if name.contains("rice") || name.contains("wheat") {
            "🌾"
        } else if name.contains("maize") {
            "🌽"
        } else if name.contains("tomato") {
            "🍅"
        } else if name.contains("potato") {
            "🥔"
        } else if name.contains("sugarcane") {
            "🎋"
        } else {
            "🌱"
        }
    }
}
