//! Recommendation Ranker - Main coordinator for crop recommendations
//!
//! Scores every catalog entry against a farm profile, keeps entries above
//! the threshold, sorts best first and truncates to the top N. Ties keep
//! catalog order. Survivors are then annotated by the narrative generator.
//!
//! The catalog is always passed in by reference. `RecommendationEngine`
//! bundles a catalog with a `RankerConfig` and adds a parallel batch mode.

pub mod types;

use rayon::prelude::*;

use crate::catalog::CropCatalog;
use crate::error::ProfileError;
use crate::narrative::analysis_summary;
use crate::profile::FarmProfile;
use crate::scorer::score_breakdown;

pub use types::{generate_request_id, RankerConfig, RecommendationResult, ScoredCandidate};

/// Rank the catalog for one profile under a fresh request id
pub fn rank<'c>(
    profile: &FarmProfile,
    catalog: &'c CropCatalog,
    config: &RankerConfig,
) -> Result<RecommendationResult<'c>, ProfileError> {
    let id = generate_request_id(&mut rand::thread_rng());
    rank_with_id(profile, catalog, config, id)
}

/// Rank the catalog for one profile. Deterministic for a given id.
pub fn rank_with_id<'c>(
    profile: &FarmProfile,
    catalog: &'c CropCatalog,
    config: &RankerConfig,
    id: String,
) -> Result<RecommendationResult<'c>, ProfileError> {
    profile.validate()?;

    // Step 1: Score every entry, keep those above threshold
    let mut scored: Vec<_> = catalog
        .iter()
        .map(|crop| (crop, score_breakdown(profile, crop)))
        .inspect(|(crop, breakdown)| {
            tracing::debug!(
                crop = %crop.key,
                achieved = breakdown.achieved(),
                max = breakdown.max_possible(),
                raw_score = breakdown.raw_percentage(),
                criteria = %breakdown,
                "scored crop"
            );
        })
        .filter(|(_, breakdown)| breakdown.raw_percentage() > config.min_match_percentage)
        .collect();

    // Step 2: Stable sort keeps catalog order among equal percentages
    scored.sort_by(|(_, a), (_, b)| b.match_percentage().cmp(&a.match_percentage()));
    scored.truncate(config.max_candidates);

    // Step 3: Annotate survivors
    let candidates: Vec<ScoredCandidate<'c>> = scored
        .into_iter()
        .map(|(crop, breakdown)| ScoredCandidate::from_breakdown(profile, crop, breakdown))
        .collect();

    let summary = analysis_summary(profile, &candidates);

    match candidates.first() {
        Some(best) => tracing::info!(
            request = %id,
            candidates = candidates.len(),
            best = %best.crop.key,
            match_percentage = best.match_percentage,
            "ranked crops"
        ),
        None => tracing::warn!(
            request = %id,
            threshold = config.min_match_percentage,
            "no crop cleared the match threshold"
        ),
    }

    Ok(RecommendationResult {
        id,
        profile: profile.clone(),
        candidates,
        analysis_summary: summary,
    })
}

/// Catalog plus ranking configuration
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'c> {
    catalog: &'c CropCatalog,
    config: RankerConfig,
}

impl<'c> RecommendationEngine<'c> {
    pub fn new(catalog: &'c CropCatalog) -> Self {
        Self::with_config(catalog, RankerConfig::default())
    }

    pub fn with_config(catalog: &'c CropCatalog, config: RankerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'c CropCatalog {
        self.catalog
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn recommend(
        &self,
        profile: &FarmProfile,
    ) -> Result<RecommendationResult<'c>, ProfileError> {
        rank(profile, self.catalog, &self.config)
    }

    /// Recommend for many profiles in parallel (Rayon). Output order matches input.
    pub fn recommend_batch(
        &self,
        profiles: &[FarmProfile],
    ) -> Vec<Result<RecommendationResult<'c>, ProfileError>> {
        profiles
            .par_iter()
            .map(|profile| self.recommend(profile))
            .collect()
    }
}
