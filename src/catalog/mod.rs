//! Crop Catalog
//!
//! Ordered, read-only set of crop definitions. A catalog is built once,
//! validated, and then shared by reference with every ranking call; it is
//! never a process-wide global.
//!
//! ## Architecture
//! - `types.rs` - CropDefinition and its range/rating building blocks
//! - `builtin.rs` - The six compiled-in crops

pub mod types;
pub mod builtin;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use crate::error::CatalogError;

pub use types::{CropDefinition, Economics, OptimalConditions, Rating, ValueRange};

/// Validated crop catalog in definition order
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<CropDefinition>,
}

impl CropCatalog {
    /// Build a catalog, checking every entry's invariants
    pub fn new(crops: Vec<CropDefinition>) -> Result<Self, CatalogError> {
        if crops.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = FxHashSet::default();
        for crop in &crops {
            if !seen.insert(crop.key.as_str()) {
                return Err(CatalogError::DuplicateKey(crop.key.clone()));
            }
            validate_crop(crop)?;
        }

        Ok(Self { crops })
    }

    /// Compiled-in catalog
    pub fn builtin() -> Self {
        // Built-in data satisfies every invariant checked in `new`
        Self {
            crops: builtin::builtin_crops(),
        }
    }

    /// Parse a JSON array of crop definitions
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let crops: Vec<CropDefinition> = serde_json::from_str(json)?;
        Self::new(crops)
    }

    /// Load catalog from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crop catalog: {:?}", path))?;

        let catalog = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid crop catalog: {:?}", path))?;

        tracing::info!(crops = catalog.len(), path = ?path, "loaded crop catalog");
        Ok(catalog)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CropDefinition> {
        self.crops.iter()
    }

    pub fn as_slice(&self) -> &[CropDefinition] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Look up a crop by key
    pub fn get(&self, key: &str) -> Option<&CropDefinition> {
        self.crops.iter().find(|c| c.key == key)
    }
}

impl<'a> IntoIterator for &'a CropCatalog {
    type Item = &'a CropDefinition;
    type IntoIter = std::slice::Iter<'a, CropDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.crops.iter()
    }
}

fn validate_crop(crop: &CropDefinition) -> Result<(), CatalogError> {
    if crop.varieties.is_empty() {
        return Err(CatalogError::NoVarieties(crop.key.clone()));
    }

    let conditions = &crop.optimal_conditions;
    let ranges = [
        ("temperature", conditions.temperature),
        ("rainfall", conditions.rainfall),
        ("pH", conditions.ph),
        ("yield", crop.economics.yield_range),
    ];
    for (field, range) in ranges {
        if !range.is_valid() {
            return Err(CatalogError::InvalidRange {
                crop: crop.key.clone(),
                field,
                low: range.low,
                high: range.high,
            });
        }
    }

    if conditions.soil_types.is_empty() {
        return Err(CatalogError::NoSoilTypes(crop.key.clone()));
    }
    if conditions.seasons.is_empty() {
        return Err(CatalogError::NoSeasons(crop.key.clone()));
    }

    Ok(())
}
