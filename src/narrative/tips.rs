//! Growing tips
//!
//! Fixed order: season, pH, soil, rainfall, market. The season and pH tips
//! quote the crop's stored conditions; soil and rainfall tips depend on the
//! farm and may be absent.

use crate::catalog::CropDefinition;
use crate::profile::{FarmProfile, SoilType};

use super::NarrativeRule;

const DRY_RAINFALL_MM: f64 = 500.0;
const WET_RAINFALL_MM: f64 = 1500.0;

const TIP_RULES: [NarrativeRule; 5] = [season_tip, ph_tip, soil_tip, rainfall_tip, market_tip];

pub fn growing_tips(profile: &FarmProfile, crop: &CropDefinition) -> Vec<String> {
    super::apply_rules(&TIP_RULES, profile, crop)
}

fn season_tip(_profile: &FarmProfile, crop: &CropDefinition) -> Option<String> {
    let seasons: Vec<&str> = crop.optimal_conditions
        .seasons
        .iter()
        .map(|s| s.as_str())
        .collect();
    Some(format!("Plant during {} season", seasons.join(" or ")))
}

fn ph_tip(_profile: &FarmProfile, crop: &CropDefinition) -> Option<String> {
    Some(format!("Maintain soil pH between {}", crop.optimal_conditions.ph))
}

fn soil_tip(profile: &FarmProfile, _crop: &CropDefinition) -> Option<String> {
    match profile.soil_type? {
        SoilType::Clay => Some("Ensure proper drainage to prevent waterlogging".to_string()),
        SoilType::Sandy => {
            Some("Regular irrigation and organic matter addition recommended".to_string())
        }
        _ => None,
    }
}

fn rainfall_tip(profile: &FarmProfile, _crop: &CropDefinition) -> Option<String> {
    let rainfall = profile.rainfall_mm?;
    if rainfall < DRY_RAINFALL_MM {
        Some("Supplemental irrigation will be necessary".to_string())
    } else if rainfall > WET_RAINFALL_MM {
        Some("Focus on drainage and disease prevention".to_string())
    } else {
        None
    }
}

fn market_tip(_profile: &FarmProfile, _crop: &CropDefinition) -> Option<String> {
    Some("Monitor market prices for optimal selling time".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{maize, rice};
    use crate::profile::{coastal_clay, punjab_loamy, rajasthan_sandy};

    #[test]
    fn test_minimal_tips() {
        assert_eq!(
            growing_tips(&punjab_loamy(), &maize()),
            [
                "Plant during kharif or rabi season",
                "Maintain soil pH between 6-7.5",
                "Monitor market prices for optimal selling time",
            ]
        );
    }

    #[test]
    fn test_sandy_dry_farm_tips() {
        assert_eq!(
            growing_tips(&rajasthan_sandy(), &maize()),
            [
                "Plant during kharif or rabi season",
                "Maintain soil pH between 6-7.5",
                "Regular irrigation and organic matter addition recommended",
                "Supplemental irrigation will be necessary",
                "Monitor market prices for optimal selling time",
            ]
        );
    }

    #[test]
    fn test_clay_wet_farm_tips() {
        assert_eq!(
            growing_tips(&coastal_clay(), &rice()),
            [
                "Plant during kharif season",
                "Maintain soil pH between 5.5-7",
                "Ensure proper drainage to prevent waterlogging",
                "Focus on drainage and disease prevention",
                "Monitor market prices for optimal selling time",
            ]
        );
    }

    #[test]
    fn test_rainfall_thresholds_are_exclusive() {
        let mut profile = FarmProfile::default();
        profile.rainfall_mm = Some(500.0);
        assert!(rainfall_tip(&profile, &maize()).is_none());
        profile.rainfall_mm = Some(1500.0);
        assert!(rainfall_tip(&profile, &maize()).is_none());
        profile.rainfall_mm = None;
        assert!(rainfall_tip(&profile, &maize()).is_none());
    }

    #[test]
    fn test_empty_profile_keeps_fixed_tips() {
        let tips = growing_tips(&FarmProfile::default(), &maize());
        assert_eq!(tips.len(), 3);
        assert_eq!(
            tips.last().map(String::as_str),
            Some("Monitor market prices for optimal selling time")
        );
    }
}
