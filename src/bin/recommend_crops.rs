//! Recommend Crops
//!
//! Ranks the crop catalog for a farm profile and prints the result as JSON.
//! Without a profile path, runs the 3 sample farms.
//!
//! Run with: cargo run --features cli --bin recommend_crops -- [PROFILE_JSON] [--catalog CATALOG_JSON]
//! Log level: RUST_LOG=debug for per-crop scores
//! Sample input: data/sample_profile.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_scorer_rust::profile::sample_profiles;
use crop_scorer_rust::{CropCatalog, FarmProfile, RecommendationEngine};

struct Args {
    profile: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut profile = None;
    let mut catalog = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                let path = args.next().context("--catalog needs a path")?;
                catalog = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            path => {
                if profile.is_some() {
                    bail!("only one profile path may be given");
                }
                profile = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Args { profile, catalog })
}

fn load_profile(path: &Path) -> Result<FarmProfile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read farm profile: {:?}", path))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid farm profile JSON: {:?}", path))
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_scorer_rust=info,recommend_crops=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let catalog = match &args.catalog {
        Some(path) => CropCatalog::load(path)?,
        None => CropCatalog::builtin(),
    };
    let engine = RecommendationEngine::new(&catalog);

    let profiles = match &args.profile {
        Some(path) => vec![load_profile(path)?],
        None => sample_profiles(),
    };

    for profile in &profiles {
        if let Some(hint) = profile.ph_guidance() {
            tracing::info!(location = %profile.location, "pH: {}", hint.message());
        }
        if let Some(scale) = profile.farm_scale() {
            tracing::info!(location = %profile.location, "Farm size: {}", scale.message());
        }
    }

    let mut failed = 0;
    for (profile, result) in profiles.iter().zip(engine.recommend_batch(&profiles)) {
        match result {
            Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            Err(e) => {
                tracing::error!(location = %profile.location, "rejected farm profile: {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} profiles rejected", failed, profiles.len());
    }

    Ok(())
}
