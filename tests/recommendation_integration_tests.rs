//! Recommendation Integration Tests
//!
//! Runs the full pipeline (catalog → scorer → ranker → narrative) for the
//! sample farms and a handful of edge-case profiles against the built-in
//! catalog.

use approx::assert_relative_eq;
use crop_scorer_rust::narrative::{FALLBACK_REASON, NO_MATCH_SUMMARY};
use crop_scorer_rust::profile::{coastal_clay, punjab_loamy, rajasthan_sandy, sample_profiles};
use crop_scorer_rust::{
    rank, rank_with_id, score, CropCatalog, FarmProfile, RankerConfig, RecommendationEngine,
    Season, SoilType,
};

fn engine_catalog() -> CropCatalog {
    CropCatalog::builtin()
}

/// Every combination of attributes present/absent across a small value grid
fn profile_grid() -> Vec<FarmProfile> {
    let temps = [None, Some(10.0), Some(25.0), Some(40.0)];
    let rains = [None, Some(150.0), Some(900.0), Some(2500.0)];
    let phs = [None, Some(4.8), Some(6.5), Some(8.4)];
    let soils = [None, Some(SoilType::Clay), Some(SoilType::Sandy), Some(SoilType::Silt)];
    let seasons = [None, Some(Season::Kharif), Some(Season::Zaid)];
    let sizes = [None, Some(0.5), Some(3.0), Some(12.0)];

    let mut profiles = Vec::new();
    for &temperature_c in &temps {
        for &rainfall_mm in &rains {
            for &ph_level in &phs {
                for &soil_type in &soils {
                    for &season in &seasons {
                        for &farm_size_hectares in &sizes {
                            profiles.push(FarmProfile {
                                location: "Grid".to_string(),
                                farm_size_hectares,
                                soil_type,
                                temperature_c,
                                rainfall_mm,
                                ph_level,
                                season,
                                budget: farm_size_hectares.map(|_| 25_000.0),
                            });
                        }
                    }
                }
            }
        }
    }
    profiles
}

#[test]
fn test_score_always_in_range() {
    let catalog = engine_catalog();
    for profile in profile_grid() {
        for crop in &catalog {
            let s = score(&profile, crop);
            assert!(s <= 100, "{} scored {} for {:?}", crop.key, s, profile);
        }
    }
}

#[test]
fn test_profile_without_attributes_scores_zero_everywhere() {
    let catalog = engine_catalog();
    let profile = FarmProfile {
        location: "Nowhere".to_string(),
        ..FarmProfile::default()
    };
    assert!(catalog.iter().all(|crop| score(&profile, crop) == 0));
}

#[test]
fn test_ranking_invariants_hold_across_grid() {
    let catalog = engine_catalog();
    let config = RankerConfig::default();
    for profile in profile_grid().into_iter().filter(|p| p.validate().is_ok()) {
        let result = rank(&profile, &catalog, &config).unwrap();
        assert!(result.candidates.len() <= 3);
        assert!(result.candidates.iter().all(|c| c.match_percentage > 40));
        assert!(result
            .candidates
            .windows(2)
            .all(|w| w[0].match_percentage >= w[1].match_percentage));
        if result.is_empty() {
            assert_eq!(result.analysis_summary, NO_MATCH_SUMMARY);
        }
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let catalog = engine_catalog();
    let config = RankerConfig::default();
    for profile in sample_profiles() {
        let a = rank_with_id(&profile, &catalog, &config, "crop_fixed0001".into()).unwrap();
        let b = rank_with_id(&profile, &catalog, &config, "crop_fixed0001".into()).unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}

#[test]
fn test_maize_example_scores_100() {
    let catalog = engine_catalog();
    let maize = catalog.get("maize").unwrap();
    assert_eq!(score(&punjab_loamy(), maize), 100);
}

#[test]
fn test_loamy_farm_end_to_end() {
    let catalog = engine_catalog();
    let engine = RecommendationEngine::new(&catalog);
    let result = engine.recommend(&punjab_loamy()).unwrap();

    let best = result.best().unwrap();
    assert_eq!(best.crop.name, "Maize (Hybrid)");
    assert_eq!(best.variety, "NK-6240");
    assert_relative_eq!(best.raw_score, 100.0);
    assert_eq!(
        best.suitability_reason,
        "Suitable due to: excellent soil compatibility (loamy), optimal planting season (kharif), ideal pH conditions"
    );
    assert_eq!(
        result.analysis_summary,
        "Based on your farm conditions, Maize (Hybrid) shows the highest compatibility (100% match). \
         Loamy soil provides the best of both worlds - good drainage and water retention. \
         Consider crop rotation with Tomato (Hybrid) for soil health benefits."
    );
    assert_eq!(result.profile, punjab_loamy());
    assert!(result.id.starts_with("crop_"));
}

#[test]
fn test_clay_farm_end_to_end() {
    let catalog = engine_catalog();
    let result = RecommendationEngine::new(&catalog)
        .recommend(&coastal_clay())
        .unwrap();

    let best = result.best().unwrap();
    assert_eq!(best.crop.key, "rice");
    assert_eq!(best.expected_yield_label, "4.5-6 tons/hectare");
    assert_eq!(best.growing_tips.len(), 5);
    assert_eq!(best.growing_tips[2], "Ensure proper drainage to prevent waterlogging");
    assert!(result
        .analysis_summary
        .contains("Your clay soil provides good water retention suitable for water-loving crops."));
    assert!(result
        .analysis_summary
        .ends_with("Consider crop rotation with Sugarcane for soil health benefits."));
}

#[test]
fn test_sandy_farm_end_to_end() {
    let catalog = engine_catalog();
    let result = RecommendationEngine::new(&catalog)
        .recommend(&rajasthan_sandy())
        .unwrap();

    let names: Vec<&str> = result.candidates.iter().map(|c| c.crop.name.as_str()).collect();
    assert_eq!(names, ["Maize (Hybrid)", "Tomato (Hybrid)", "Sugarcane"]);
    assert!(result.analysis_summary.contains("(75% match)"));
    assert!(result.analysis_summary.contains("Sandy soil offers good drainage"));
}

#[test]
fn test_unmatched_farm_gets_fallback() {
    let catalog = engine_catalog();
    let profile = FarmProfile {
        location: "Thar".to_string(),
        farm_size_hectares: Some(1.0),
        soil_type: Some(SoilType::Silt),
        temperature_c: Some(45.0),
        rainfall_mm: Some(50.0),
        ph_level: Some(9.5),
        season: Some(Season::Zaid),
        budget: None,
    };
    let result = RecommendationEngine::new(&catalog).recommend(&profile).unwrap();
    assert!(result.candidates.is_empty());
    assert_eq!(result.analysis_summary, NO_MATCH_SUMMARY);
}

#[test]
fn test_fallback_reason_on_low_match_candidate() {
    // Only farm size and budget earn points: 18/35
    let profile = FarmProfile {
        location: "Test".to_string(),
        farm_size_hectares: Some(10.0),
        soil_type: Some(SoilType::Black),
        budget: Some(1.0),
        ..FarmProfile::default()
    };
    let catalog = engine_catalog();
    let result = rank(&profile, &catalog, &RankerConfig::default()).unwrap();
    let best = result.best().unwrap();
    assert_eq!(best.crop.key, "rice");
    assert_eq!(best.match_percentage, 51);
    assert_eq!(best.suitability_reason, FALLBACK_REASON);
}

#[test]
fn test_result_serializes_with_crop_details() {
    let catalog = engine_catalog();
    let result = rank_with_id(
        &punjab_loamy(),
        &catalog,
        &RankerConfig::default(),
        "crop_abc123xyz".into(),
    )
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["id"], "crop_abc123xyz");
    assert_eq!(json["candidates"][0]["crop"]["key"], "maize");
    assert_eq!(json["candidates"][0]["crop"]["economics"]["market_demand"], "High");
    assert_eq!(json["candidates"][0]["match_percentage"], 100);
    assert_eq!(json["profile"]["soil_type"], "loamy");
}
