//! Built-in crop catalog
//!
//! Six field and vegetable crops common to North and Central Indian farms.
//! Definition order is the ranking tie-break order.

use super::types::{CropDefinition, Economics, OptimalConditions, Rating, ValueRange};
use crate::profile::{Season, SoilType};

fn varieties(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn rice() -> CropDefinition {
    CropDefinition {
        key: "rice".to_string(),
        name: "Rice (Basmati)".to_string(),
        varieties: varieties(&["Basmati 385", "Pusa Basmati 1121", "Traditional Basmati"]),
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(20.0, 35.0),
            rainfall: ValueRange::new(1000.0, 2000.0),
            ph: ValueRange::new(5.5, 7.0),
            soil_types: vec![SoilType::Clay, SoilType::Loamy],
            seasons: vec![Season::Kharif],
        },
        economics: Economics {
            market_price: 2850.0,
            yield_range: ValueRange::new(4.5, 6.0),
            profit_margin: Rating::High,
            market_demand: Rating::VeryHigh,
        },
    }
}

pub fn wheat() -> CropDefinition {
    CropDefinition {
        key: "wheat".to_string(),
        name: "Wheat (Durum)".to_string(),
        varieties: varieties(&["HD-2967", "PBW-343", "WH-542"]),
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(15.0, 25.0),
            rainfall: ValueRange::new(300.0, 800.0),
            ph: ValueRange::new(6.0, 7.5),
            soil_types: vec![SoilType::Loamy, SoilType::Clay],
            seasons: vec![Season::Rabi],
        },
        economics: Economics {
            market_price: 2250.0,
            yield_range: ValueRange::new(2.5, 4.0),
            profit_margin: Rating::Moderate,
            market_demand: Rating::High,
        },
    }
}

pub fn maize() -> CropDefinition {
    CropDefinition {
        key: "maize".to_string(),
        name: "Maize (Hybrid)".to_string(),
        varieties: varieties(&["NK-6240", "DKC-9108", "P-3396"]),
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(18.0, 32.0),
            rainfall: ValueRange::new(500.0, 1200.0),
            ph: ValueRange::new(6.0, 7.5),
            soil_types: vec![SoilType::Loamy, SoilType::Sandy],
            seasons: vec![Season::Kharif, Season::Rabi],
        },
        economics: Economics {
            market_price: 1950.0,
            yield_range: ValueRange::new(3.0, 5.0),
            profit_margin: Rating::Moderate,
            market_demand: Rating::High,
        },
    }
}

pub fn tomato() -> CropDefinition {
    CropDefinition {
        key: "tomato".to_string(),
        name: "Tomato (Hybrid)".to_string(),
        varieties: varieties(&["Arka Rakshak", "Pusa Ruby", "Himsona"]),
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(18.0, 28.0),
            rainfall: ValueRange::new(600.0, 1000.0),
            ph: ValueRange::new(6.0, 7.0),
            soil_types: vec![SoilType::Loamy, SoilType::Sandy],
            seasons: vec![Season::Kharif, Season::Rabi, Season::Zaid],
        },
        economics: Economics {
            market_price: 4200.0,
            yield_range: ValueRange::new(25.0, 40.0),
            profit_margin: Rating::VeryHigh,
            market_demand: Rating::VeryHigh,
        },
    }
}

pub fn potato() -> CropDefinition {
    CropDefinition {
        key: "potato".to_string(),
        name: "Potato".to_string(),
        varieties: varieties(&["Kufri Pukhraj", "Kufri Badshah", "Kufri Chipsona"]),
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(15.0, 25.0),
            rainfall: ValueRange::new(500.0, 800.0),
            ph: ValueRange::new(5.5, 6.5),
            soil_types: vec![SoilType::Loamy, SoilType::Sandy],
            seasons: vec![Season::Rabi],
        },
        economics: Economics {
            market_price: 1850.0,
            yield_range: ValueRange::new(15.0, 25.0),
            profit_margin: Rating::Moderate,
            market_demand: Rating::High,
        },
    }
}

pub fn sugarcane() -> CropDefinition {
    CropDefinition {
        key: "sugarcane".to_string(),
        name: "Sugarcane".to_string(),
        varieties: varieties(&["Co-86032", "Co-0238", "Co-1148"]),
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(20.0, 35.0),
            rainfall: ValueRange::new(1000.0, 1500.0),
            ph: ValueRange::new(6.0, 8.0),
            soil_types: vec![SoilType::Loamy, SoilType::Clay],
            seasons: vec![Season::Kharif],
        },
        economics: Economics {
            market_price: 3200.0,
            yield_range: ValueRange::new(60.0, 80.0),
            profit_margin: Rating::High,
            market_demand: Rating::High,
        },
    }
}

/// All built-in crops in catalog order
pub fn builtin_crops() -> Vec<CropDefinition> {
    vec![rice(), wheat(), maize(), tomato(), potato(), sugarcane()]
}
