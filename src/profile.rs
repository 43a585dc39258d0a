//! Farm profile definition and sample profiles
//!
//! Defines the FarmProfile struct describing a grower's conditions, the
//! closed soil/season vocabularies, the input hints shown next to the pH and
//! farm-size fields, plus 3 hardcoded sample farms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Soil classes a grower can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loamy,
    Sandy,
    Silt,
    Black,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
            SoilType::Sandy => "sandy",
            SoilType::Silt => "silt",
            SoilType::Black => "black",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon sowing (June-October)
    Kharif,
    /// Winter sowing (October-March)
    Rabi,
    /// Short summer season between rabi and kharif
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grower's farm conditions for one recommendation request.
///
/// Every attribute except `location` is optional in the model. A missing
/// attribute means the matching criterion is not evaluated. Farm size and
/// soil type are nevertheless required for a request to be accepted; see
/// [`FarmProfile::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmProfile {
    /// Free-text location, display only (e.g., "Ludhiana, Punjab")
    pub location: String,

    /// Farm area in hectares
    pub farm_size_hectares: Option<f64>,

    pub soil_type: Option<SoilType>,

    /// Average growing-season temperature (°C)
    pub temperature_c: Option<f64>,

    /// Annual rainfall (mm)
    pub rainfall_mm: Option<f64>,

    /// Soil pH (H2O)
    pub ph_level: Option<f64>,

    pub season: Option<Season>,

    /// Only presence is scored, the amount is not compared to crop costs
    pub budget: Option<f64>,
}

impl FarmProfile {
    /// Check the fields a recommendation request cannot do without
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.location.trim().is_empty() {
            return Err(ProfileError::MissingLocation);
        }

        match self.farm_size_hectares {
            None => return Err(ProfileError::MissingFarmSize),
            Some(size) if !size.is_finite() || size <= 0.0 => {
                return Err(ProfileError::InvalidFarmSize(size));
            }
            Some(_) => {}
        }

        if self.soil_type.is_none() {
            return Err(ProfileError::MissingSoilType);
        }

        let measurements = [
            ("temperature", self.temperature_c),
            ("rainfall", self.rainfall_mm),
            ("pH", self.ph_level),
            ("budget", self.budget),
        ];
        for (field, value) in measurements {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(ProfileError::NonFiniteValue { field, value });
            }
        }

        Ok(())
    }

    /// Hint for the pH field, if a pH was entered
    pub fn ph_guidance(&self) -> Option<PhGuidance> {
        self.ph_level.map(PhGuidance::from_ph)
    }

    /// Hint for the farm size field, if a size was entered
    pub fn farm_scale(&self) -> Option<FarmScale> {
        self.farm_size_hectares.map(FarmScale::from_hectares)
    }
}

// ============================================================================
// Input Guidance
// ============================================================================

/// pH band shown as a hint while the grower types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhGuidance {
    VeryAcidic,
    Acidic,
    Optimal,
    SlightlyAlkaline,
    VeryAlkaline,
}

impl PhGuidance {
    pub fn from_ph(ph: f64) -> Self {
        if ph < 5.5 {
            PhGuidance::VeryAcidic
        } else if ph < 6.0 {
            PhGuidance::Acidic
        } else if ph <= 7.0 {
            PhGuidance::Optimal
        } else if ph <= 8.0 {
            PhGuidance::SlightlyAlkaline
        } else {
            PhGuidance::VeryAlkaline
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PhGuidance::VeryAcidic => "Very acidic - may need lime treatment",
            PhGuidance::Acidic => "Acidic - suitable for acid-loving crops",
            PhGuidance::Optimal => "Optimal pH for most crops",
            PhGuidance::SlightlyAlkaline => "Slightly alkaline - good for many crops",
            PhGuidance::VeryAlkaline => "Very alkaline - may limit crop options",
        }
    }

    /// Whether the hint should be shown as a warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, PhGuidance::Optimal)
    }
}

/// Farm scale band shown as a hint while the grower types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmScale {
    Small,
    Medium,
    Large,
}

impl FarmScale {
    pub fn from_hectares(hectares: f64) -> Self {
        if hectares < 1.0 {
            FarmScale::Small
        } else if hectares <= 5.0 {
            FarmScale::Medium
        } else {
            FarmScale::Large
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FarmScale::Small => "Small scale - focus on high-value crops",
            FarmScale::Medium => "Medium scale - diverse crop options",
            FarmScale::Large => "Large scale - consider mechanization-friendly crops",
        }
    }
}

// ============================================================================
// Hardcoded Sample Farms
// ============================================================================

/// Ludhiana, Punjab - loamy plains, kharif sowing
pub fn punjab_loamy() -> FarmProfile {
    FarmProfile {
        location: "Ludhiana, Punjab".to_string(),
        farm_size_hectares: Some(6.0),
        soil_type: Some(SoilType::Loamy),
        temperature_c: Some(25.0),
        rainfall_mm: Some(700.0),
        ph_level: Some(6.5),
        season: Some(Season::Kharif),
        budget: None,
    }
}

/// Coastal Andhra - heavy clay, high monsoon rainfall
pub fn coastal_clay() -> FarmProfile {
    FarmProfile {
        location: "Guntur, Andhra Pradesh".to_string(),
        farm_size_hectares: Some(8.0),
        soil_type: Some(SoilType::Clay),
        temperature_c: Some(28.0),
        rainfall_mm: Some(1800.0),
        ph_level: Some(6.2),
        season: Some(Season::Kharif),
        budget: None,
    }
}

/// Western Rajasthan - sandy, dry, alkaline, smallholding
pub fn rajasthan_sandy() -> FarmProfile {
    FarmProfile {
        location: "Jodhpur, Rajasthan".to_string(),
        farm_size_hectares: Some(3.0),
        soil_type: Some(SoilType::Sandy),
        temperature_c: Some(30.0),
        rainfall_mm: Some(400.0),
        ph_level: Some(7.8),
        season: Some(Season::Kharif),
        budget: Some(50_000.0),
    }
}

/// Get all sample farms
pub fn sample_profiles() -> Vec<FarmProfile> {
    vec![punjab_loamy(), coastal_clay(), rajasthan_sandy()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_valid() {
        for profile in sample_profiles() {
            assert_eq!(profile.validate(), Ok(()), "{}", profile.location);
        }
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut profile = punjab_loamy();
        profile.location = "   ".to_string();
        assert_eq!(profile.validate(), Err(ProfileError::MissingLocation));

        let mut profile = punjab_loamy();
        profile.farm_size_hectares = None;
        assert_eq!(profile.validate(), Err(ProfileError::MissingFarmSize));

        let mut profile = punjab_loamy();
        profile.soil_type = None;
        assert_eq!(profile.validate(), Err(ProfileError::MissingSoilType));
    }

    #[test]
    fn test_validate_rejects_non_positive_size() {
        let mut profile = punjab_loamy();
        profile.farm_size_hectares = Some(0.0);
        assert_eq!(profile.validate(), Err(ProfileError::InvalidFarmSize(0.0)));

        profile.farm_size_hectares = Some(f64::NAN);
        assert!(matches!(profile.validate(), Err(ProfileError::InvalidFarmSize(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_measurements() {
        let mut profile = punjab_loamy();
        profile.ph_level = Some(f64::NAN);
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::NonFiniteValue { field: "pH", .. })
        ));

        let mut profile = punjab_loamy();
        profile.temperature_c = Some(f64::NEG_INFINITY);
        assert_eq!(
            profile.validate(),
            Err(ProfileError::NonFiniteValue {
                field: "temperature",
                value: f64::NEG_INFINITY,
            })
        );

        let mut profile = punjab_loamy();
        profile.rainfall_mm = None;
        profile.budget = Some(f64::INFINITY);
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::NonFiniteValue { field: "budget", .. })
        ));
    }

    #[test]
    fn test_ph_guidance_bands() {
        assert_eq!(PhGuidance::from_ph(5.0), PhGuidance::VeryAcidic);
        assert_eq!(PhGuidance::from_ph(5.5), PhGuidance::Acidic);
        assert_eq!(PhGuidance::from_ph(6.0), PhGuidance::Optimal);
        assert_eq!(PhGuidance::from_ph(7.0), PhGuidance::Optimal);
        assert_eq!(PhGuidance::from_ph(7.5), PhGuidance::SlightlyAlkaline);
        assert_eq!(PhGuidance::from_ph(8.1), PhGuidance::VeryAlkaline);
        assert!(!PhGuidance::Optimal.is_warning());
    }

    #[test]
    fn test_farm_scale_bands() {
        assert_eq!(FarmScale::from_hectares(0.5), FarmScale::Small);
        assert_eq!(FarmScale::from_hectares(5.0), FarmScale::Medium);
        assert_eq!(FarmScale::from_hectares(5.5), FarmScale::Large);
        assert_eq!(
            rajasthan_sandy().farm_scale().map(|s| s.message()),
            Some("Medium scale - diverse crop options")
        );
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{
            "location": "Nashik",
            "farm_size_hectares": 2.5,
            "soil_type": "black",
            "season": "rabi"
        }"#;
        let profile: FarmProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.soil_type, Some(SoilType::Black));
        assert_eq!(profile.season, Some(Season::Rabi));
        assert_eq!(profile.ph_level, None);
        assert!(profile.validate().is_ok());
    }
}
