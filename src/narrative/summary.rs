//! Analysis summary
//!
//! Whole-result narrative: headline for the best match, a soil sentence for
//! clay, sandy and loamy farms, and a rotation suggestion when there is a
//! runner-up. An empty candidate list gets the expert-consultation text.

use crate::profile::{FarmProfile, SoilType};
use crate::ranker::ScoredCandidate;

pub const NO_MATCH_SUMMARY: &str = "Based on your farm conditions, we recommend consulting with local agricultural experts for specialized crop selection advice.";

type SummaryRule = for<'a> fn(&FarmProfile, &[ScoredCandidate<'a>]) -> Option<String>;

const SUMMARY_RULES: [SummaryRule; 3] = [headline, soil_sentence, rotation_sentence];

pub fn analysis_summary(profile: &FarmProfile, candidates: &[ScoredCandidate<'_>]) -> String {
    if candidates.is_empty() {
        return NO_MATCH_SUMMARY.to_string();
    }

    SUMMARY_RULES
        .iter()
        .filter_map(|rule| rule(profile, candidates))
        .collect::<Vec<_>>()
        .join(" ")
}

fn headline(_profile: &FarmProfile, candidates: &[ScoredCandidate<'_>]) -> Option<String> {
    let best = candidates.first()?;
    Some(format!(
        "Based on your farm conditions, {} shows the highest compatibility ({}% match).",
        best.crop.name, best.match_percentage
    ))
}

fn soil_sentence(profile: &FarmProfile, _candidates: &[ScoredCandidate<'_>]) -> Option<String> {
    let text = match profile.soil_type? {
        SoilType::Clay => {
            "Your clay soil provides good water retention suitable for water-loving crops."
        }
        SoilType::Sandy => {
            "Sandy soil offers good drainage, ideal for root crops and those sensitive to waterlogging."
        }
        SoilType::Loamy => {
            "Loamy soil provides the best of both worlds - good drainage and water retention."
        }
        _ => return None,
    };
    Some(text.to_string())
}

fn rotation_sentence(_profile: &FarmProfile, candidates: &[ScoredCandidate<'_>]) -> Option<String> {
    let second = candidates.get(1)?;
    Some(format!(
        "Consider crop rotation with {} for soil health benefits.",
        second.crop.name
    ))
}
