//! Suitability reason
//!
//! One clause per full-credit match on soil, season and pH, in that order.

use crate::catalog::CropDefinition;
use crate::profile::FarmProfile;
use crate::scorer::compare_to_range;

use super::NarrativeRule;

pub const FALLBACK_REASON: &str = "Basic compatibility with your farm conditions";

const REASON_RULES: [NarrativeRule; 3] = [soil_clause, season_clause, ph_clause];

/// E.g., "Suitable due to: excellent soil compatibility (loamy), ideal pH conditions"
pub fn suitability_reason(profile: &FarmProfile, crop: &CropDefinition) -> String {
    let clauses = super::apply_rules(&REASON_RULES, profile, crop);

    if clauses.is_empty() {
        return FALLBACK_REASON.to_string();
    }

    format!("Suitable due to: {}", clauses.join(", "))
}

fn soil_clause(profile: &FarmProfile, crop: &CropDefinition) -> Option<String> {
    let soil = profile.soil_type?;
    crop.optimal_conditions
        .accepts_soil(soil)
        .then(|| format!("excellent soil compatibility ({})", soil))
}

fn season_clause(profile: &FarmProfile, crop: &CropDefinition) -> Option<String> {
    let season = profile.season?;
    crop.optimal_conditions
        .accepts_season(season)
        .then(|| format!("optimal planting season ({})", season))
}

fn ph_clause(profile: &FarmProfile, crop: &CropDefinition) -> Option<String> {
    let ph = profile.ph_level?;
    compare_to_range(ph, crop.optimal_conditions.ph)
        .is_within_range()
        .then(|| "ideal pH conditions".to_string())
}
