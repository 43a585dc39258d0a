//! Compatibility Scorer
//!
//! Weighted partial-credit score between one farm profile and one crop.
//!
//! Each criterion adds its weight to the max-possible total and its earned
//! points to the achieved total. A criterion whose profile attribute is
//! absent is skipped entirely, so the denominator shrinks with the profile:
//!
//! | Criterion   | Weight | Full credit              | Partial                 |
//! |-------------|--------|--------------------------|-------------------------|
//! | Temperature | 20     | within range             | within 5 °C → 10        |
//! | Rainfall    | 20     | within range             | within 200 mm → 10      |
//! | pH          | 15     | within range             | within 0.5 → 7          |
//! | Soil type   | 15     | accepted soil            | -                       |
//! | Season      | 10     | accepted season          | -                       |
//! | Farm size   | 10     | ≥ 5 ha                   | 2-5 ha → 5              |
//! | Budget      | 10     | -                        | any budget → 8          |
//!
//! The budget row never awards full credit. Only the presence of a budget is
//! checked; matching it against crop costs is not implemented.

pub mod comparator;

use std::fmt;

use serde::Serialize;

use crate::catalog::{CropDefinition, ValueRange};
use crate::profile::FarmProfile;

pub use comparator::{compare_to_range, RangeComparison, RangeFit};

const TEMPERATURE_TOLERANCE: f64 = 5.0;
const RAINFALL_TOLERANCE: f64 = 200.0;
const PH_TOLERANCE: f64 = 0.5;

const LARGE_FARM_HECTARES: f64 = 5.0;
const MEDIUM_FARM_HECTARES: f64 = 2.0;

const BUDGET_PRESENT_POINTS: u32 = 8;

/// Scored criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Temperature,
    Rainfall,
    Ph,
    SoilType,
    Season,
    FarmSize,
    Budget,
}

impl Criterion {
    /// Evaluation order
    pub const ALL: [Criterion; 7] = [
        Criterion::Temperature,
        Criterion::Rainfall,
        Criterion::Ph,
        Criterion::SoilType,
        Criterion::Season,
        Criterion::FarmSize,
        Criterion::Budget,
    ];

    /// Max points this criterion contributes when evaluated
    pub fn weight(&self) -> u32 {
        match self {
            Criterion::Temperature => 20,
            Criterion::Rainfall => 20,
            Criterion::Ph => 15,
            Criterion::SoilType => 15,
            Criterion::Season => 10,
            Criterion::FarmSize => 10,
            Criterion::Budget => 10,
        }
    }

    /// Points for a near miss on a range criterion
    fn partial_points(&self) -> u32 {
        match self {
            Criterion::Temperature | Criterion::Rainfall => 10,
            Criterion::Ph => 7,
            _ => 0,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Criterion::Temperature => "Temperature",
            Criterion::Rainfall => "Rainfall",
            Criterion::Ph => "Soil pH",
            Criterion::SoilType => "Soil type",
            Criterion::Season => "Season",
            Criterion::FarmSize => "Farm size",
            Criterion::Budget => "Budget",
        }
    }
}

/// Points earned on one evaluated criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub achieved: u32,
    pub max: u32,
}

impl CriterionScore {
    fn new(criterion: Criterion, achieved: u32) -> Self {
        Self {
            criterion,
            achieved,
            max: criterion.weight(),
        }
    }

    pub fn is_full_credit(&self) -> bool {
        self.achieved == self.max
    }
}

/// Per-criterion points for one profile/crop pair.
///
/// Only evaluated criteria appear, in [`Criterion::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub criteria: Vec<CriterionScore>,
}

impl ScoreBreakdown {
    pub fn achieved(&self) -> u32 {
        self.criteria.iter().map(|c| c.achieved).sum()
    }

    pub fn max_possible(&self) -> u32 {
        self.criteria.iter().map(|c| c.max).sum()
    }

    /// Unrounded percentage, 0 when nothing was evaluated
    pub fn raw_percentage(&self) -> f64 {
        let max = self.max_possible();
        if max == 0 {
            return 0.0;
        }
        100.0 * self.achieved() as f64 / max as f64
    }

    /// Rounded percentage in 0-100
    pub fn match_percentage(&self) -> u8 {
        self.raw_percentage().round().clamp(0.0, 100.0) as u8
    }

    pub fn get(&self, criterion: Criterion) -> Option<&CriterionScore> {
        self.criteria.iter().find(|c| c.criterion == criterion)
    }
}

/// E.g., "Temperature 20/20, Soil pH 7/15"
impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.criteria.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}/{}", c.criterion.display_text(), c.achieved, c.max)?;
        }
        Ok(())
    }
}

/// Match percentage (0-100) of a farm profile against one crop
pub fn score(profile: &FarmProfile, crop: &CropDefinition) -> u8 {
    score_breakdown(profile, crop).match_percentage()
}

/// Evaluate every criterion the profile supplies
pub fn score_breakdown(profile: &FarmProfile, crop: &CropDefinition) -> ScoreBreakdown {
    let conditions = &crop.optimal_conditions;
    let mut criteria = Vec::with_capacity(Criterion::ALL.len());

    if let Some(temp) = profile.temperature_c {
        criteria.push(score_range(
            Criterion::Temperature,
            temp,
            conditions.temperature,
            TEMPERATURE_TOLERANCE,
        ));
    }

    if let Some(rainfall) = profile.rainfall_mm {
        criteria.push(score_range(
            Criterion::Rainfall,
            rainfall,
            conditions.rainfall,
            RAINFALL_TOLERANCE,
        ));
    }

    if let Some(ph) = profile.ph_level {
        criteria.push(score_range(Criterion::Ph, ph, conditions.ph, PH_TOLERANCE));
    }

    if let Some(soil) = profile.soil_type {
        let points = if conditions.accepts_soil(soil) {
            Criterion::SoilType.weight()
        } else {
            0
        };
        criteria.push(CriterionScore::new(Criterion::SoilType, points));
    }

    if let Some(season) = profile.season {
        let points = if conditions.accepts_season(season) {
            Criterion::Season.weight()
        } else {
            0
        };
        criteria.push(CriterionScore::new(Criterion::Season, points));
    }

    if let Some(size) = profile.farm_size_hectares {
        let points = if size >= LARGE_FARM_HECTARES {
            Criterion::FarmSize.weight()
        } else if size >= MEDIUM_FARM_HECTARES {
            5
        } else {
            0
        };
        criteria.push(CriterionScore::new(Criterion::FarmSize, points));
    }

    if profile.budget.is_some() {
        criteria.push(CriterionScore::new(Criterion::Budget, BUDGET_PRESENT_POINTS));
    }

    ScoreBreakdown { criteria }
}

fn score_range(
    criterion: Criterion,
    value: f64,
    range: ValueRange,
    tolerance: f64,
) -> CriterionScore {
    let comp = compare_to_range(value, range);
    let points = if comp.is_within_range() {
        criterion.weight()
    } else if comp.is_near_range(tolerance) {
        criterion.partial_points()
    } else {
        0
    };
    CriterionScore::new(criterion, points)
}
