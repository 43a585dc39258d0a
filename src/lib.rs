//! Crop Scorer Rust Implementation
//!
//! Crop recommendation engine: scores a farm profile against a catalog of
//! crop definitions, ranks the matches and writes the narrative shown to
//! the grower.
//!
//! Module layout:
//! - `catalog/`: Crop definitions, built-in catalog, JSON loading
//! - `profile`: Farm profile input model and form guidance
//! - `scorer/`: Six-criterion weighted compatibility score
//! - `ranker`: Threshold, stable sort, top-N truncation
//! - `narrative/`: Suitability reasons, growing tips, analysis summary
//! - `error`: Catalog and profile errors

pub mod error;
pub mod catalog;
pub mod profile;
pub mod scorer;
pub mod narrative;
pub mod ranker;

// Re-export commonly used types
pub use error::{CatalogError, ProfileError};
pub use catalog::{CropCatalog, CropDefinition, Economics, OptimalConditions, Rating, ValueRange};
pub use profile::{FarmProfile, FarmScale, PhGuidance, Season, SoilType};
pub use scorer::{score, score_breakdown, Criterion, CriterionScore, ScoreBreakdown};
pub use ranker::{
    rank, rank_with_id, RankerConfig, RecommendationEngine, RecommendationResult, ScoredCandidate,
};
