//! Ranker Types
//!
//! Config, annotated candidates and the result of one recommendation request.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::CropDefinition;
use crate::narrative::{growing_tips, suitability_reason};
use crate::profile::FarmProfile;
use crate::scorer::{score_breakdown, ScoreBreakdown};

const REQUEST_ID_PREFIX: &str = "crop_";
const REQUEST_ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Ranking knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Candidates must score strictly above this raw percentage
    pub min_match_percentage: f64,

    /// Length of the top-N list
    pub max_candidates: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_match_percentage: 40.0,
            max_candidates: 3,
        }
    }
}

/// A catalog entry scored against one profile and annotated for display
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate<'a> {
    /// Catalog entry, borrowed and never modified
    pub crop: &'a CropDefinition,

    /// Rounded score (0-100)
    pub match_percentage: u8,

    /// Unrounded score, compared against the threshold
    pub raw_score: f64,

    pub breakdown: ScoreBreakdown,

    /// Best variety
    pub variety: String,

    /// Up to 3 varieties, best first
    pub best_varieties: Vec<String>,

    /// E.g., "3-5 tons/hectare"
    pub expected_yield_label: String,

    pub suitability_reason: String,

    pub growing_tips: Vec<String>,
}

impl<'a> ScoredCandidate<'a> {
    /// Score and annotate in one step
    pub fn build(profile: &FarmProfile, crop: &'a CropDefinition) -> Self {
        Self::from_breakdown(profile, crop, score_breakdown(profile, crop))
    }

    /// Annotate an already computed breakdown
    pub fn from_breakdown(
        profile: &FarmProfile,
        crop: &'a CropDefinition,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            crop,
            match_percentage: breakdown.match_percentage(),
            raw_score: breakdown.raw_percentage(),
            breakdown,
            variety: crop.primary_variety().unwrap_or_default().to_string(),
            best_varieties: crop.best_varieties().to_vec(),
            expected_yield_label: crop.expected_yield_label(),
            suitability_reason: suitability_reason(profile, crop),
            growing_tips: growing_tips(profile, crop),
        }
    }
}

/// Output of one recommendation request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult<'a> {
    /// Request-scoped id, e.g. "crop_k3j9x0a2b"
    pub id: String,

    /// Input echoed back
    pub profile: FarmProfile,

    /// Best match first
    pub candidates: Vec<ScoredCandidate<'a>>,

    pub analysis_summary: String,
}

impl<'a> RecommendationResult<'a> {
    pub fn best(&self) -> Option<&ScoredCandidate<'a>> {
        self.candidates.first()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// "crop_" followed by 9 base-36 characters
pub fn generate_request_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..REQUEST_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}", REQUEST_ID_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::maize;
    use crate::profile::punjab_loamy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_candidate_fields() {
        let crop = maize();
        let candidate = ScoredCandidate::build(&punjab_loamy(), &crop);
        assert_eq!(candidate.match_percentage, 100);
        assert_eq!(candidate.variety, "NK-6240");
        assert_eq!(candidate.best_varieties, ["NK-6240", "DKC-9108", "P-3396"]);
        assert_eq!(candidate.expected_yield_label, "3-5 tons/hectare");
        assert!(std::ptr::eq(candidate.crop, &crop));
    }

    #[test]
    fn test_request_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_request_id(&mut rng);
        assert!(id.starts_with("crop_"));
        assert_eq!(id.len(), 14);
        assert!(id[5..].bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_default_config() {
        let config: RankerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RankerConfig::default());
        assert_eq!(config.max_candidates, 3);
    }
}
