//! Narrative Generator
//!
//! Turns a scored match into the text shown on a recommendation card.
//! Every piece of text is an ordered list of independent rules; each rule
//! yields zero or one clause and rules never reorder.
//!
//! - `reasons.rs` - Suitability reason (soil, season, pH)
//! - `tips.rs` - Growing tips (season, pH, soil, rainfall, market)
//! - `summary.rs` - Whole-result analysis summary

pub mod reasons;
pub mod tips;
pub mod summary;

use crate::catalog::CropDefinition;
use crate::profile::FarmProfile;

pub use reasons::{suitability_reason, FALLBACK_REASON};
pub use tips::growing_tips;
pub use summary::{analysis_summary, NO_MATCH_SUMMARY};

/// A single profile/crop rule producing at most one clause
pub type NarrativeRule = fn(&FarmProfile, &CropDefinition) -> Option<String>;

/// Evaluate rules in order, keeping the clauses that fire
pub fn apply_rules(
    rules: &[NarrativeRule],
    profile: &FarmProfile,
    crop: &CropDefinition,
) -> Vec<String> {
    rules.iter().filter_map(|rule| rule(profile, crop)).collect()
}
