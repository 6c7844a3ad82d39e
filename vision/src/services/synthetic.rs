//! Deterministic synthetic analysis provider
//!
//! The terminal fallback: seeded from the reference list, no external
//! dependency, never fails.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use shared::{
    ContinuousDimensions, DiscreteAttributes, ProductAnalysisResponse, ProviderFailure,
    VisualMetadata, FRAME_SHAPES,
};

use crate::traits::AnalysisProvider;

/// Palette for dominant color draws
pub const COLOR_PALETTE: [&str; 8] = [
    "Black", "Silver", "Gold", "Tortoise", "Blue", "Red", "Clear", "Grey",
];

/// Texture vocabulary
pub const TEXTURE_PATTERNS: [&str; 5] = [
    "Matte", "Glossy", "Translucent", "Tortoise Pattern", "Metallic",
];

/// Quality note vocabulary
pub const QUALITY_NOTES: [&str; 2] = ["Average", "Below Average"];

/// Provider that generates a full response from a seed derived from the
/// image references. Identical ordered reference lists always produce
/// identical responses; reordering may change the seed.
#[derive(Debug, Clone, Default)]
pub struct SyntheticProvider;

impl SyntheticProvider {
    pub fn new() -> Self {
        Self
    }

    /// Seed from the concatenation of the references in given order
    fn seed_for(image_refs: &[String]) -> u64 {
        let combined = image_refs.concat();
        let mut hasher = DefaultHasher::new();
        hasher.write(combined.as_bytes());
        hasher.finish()
    }

    /// Generate a full response with a generator scoped to this call.
    ///
    /// The generator is constructed fresh here and every draw happens in
    /// one fixed order, so a fixed seed reproduces the output bit for bit
    /// and concurrent requests cannot interfere.
    pub fn generate(image_refs: &[String]) -> ProductAnalysisResponse {
        let mut rng = StdRng::seed_from_u64(Self::seed_for(image_refs));

        let continuous_dimensions = ContinuousDimensions {
            gender_expression: score(&mut rng),
            visual_weight: score(&mut rng),
            embellishment: score(&mut rng),
            unconventionality: score(&mut rng),
            formality: score(&mut rng),
        };

        let has_wirecore = rng.gen_bool(0.5);
        let is_transparent = rng.gen_bool(0.5);

        let color_count = rng.gen_range(1..=3);
        let dominant_colors = COLOR_PALETTE
            .choose_multiple(&mut rng, color_count)
            .map(|color| color.to_string())
            .collect();

        let discrete_attributes = DiscreteAttributes {
            has_wirecore,
            is_transparent,
            dominant_colors,
            frame_shape: pick(&mut rng, &FRAME_SHAPES).to_string(),
            texture_pattern: Some(pick(&mut rng, &TEXTURE_PATTERNS).to_string()),
            looks_like_kids_product: rng.gen_bool(0.5),
        };

        let metadata = VisualMetadata {
            image_quality_notes: pick(&mut rng, &QUALITY_NOTES).to_string(),
            is_occluded_or_ambiguous: rng.gen_bool(0.10),
            confidence_score: round_to(rng.gen_range(0.50..=0.70), 2),
        };

        ProductAnalysisResponse {
            product_id: None,
            continuous_dimensions,
            discrete_attributes,
            metadata,
        }
    }
}

/// One bipolar score draw in [-5.0, 5.0], rounded to one decimal
fn score(rng: &mut StdRng) -> f64 {
    round_to(rng.gen_range(-5.0..=5.0), 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn pick<'a>(rng: &mut StdRng, options: &'a [&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

#[async_trait]
impl AnalysisProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn analyze(
        &self,
        image_refs: &[String],
    ) -> Result<ProductAnalysisResponse, ProviderFailure> {
        Ok(Self::generate(image_refs))
    }
}
