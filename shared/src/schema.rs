//! Analysis request/response schema shared by both tiers

use serde::{Deserialize, Serialize};

/// Closed vocabulary for frame shapes
pub const FRAME_SHAPES: [&str; 7] = [
    "Rectangular",
    "Round",
    "Aviator",
    "Cat-eye",
    "Square",
    "Oval",
    "Geometric",
];

/// Inbound analysis request
///
/// `image_refs` is an ordered list of absolute URLs or
/// `data:<mime>;base64,<payload>` data URIs. Order is preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub image_refs: Vec<String>,
    pub product_id: Option<String>,
}

/// Five bipolar visual scores, each in [-5.0, 5.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousDimensions {
    /// Masculine (-5.0) to Feminine (+5.0)
    pub gender_expression: f64,
    /// Sleek/Light (-5.0) to Bold/Heavy (+5.0)
    pub visual_weight: f64,
    /// Simple (-5.0) to Ornate (+5.0)
    pub embellishment: f64,
    /// Classic (-5.0) to Avant-garde (+5.0)
    pub unconventionality: f64,
    /// Casual (-5.0) to Formal (+5.0)
    pub formality: f64,
}

/// Categorical and boolean visual properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscreteAttributes {
    /// Visible wirecore in the temples
    pub has_wirecore: bool,
    /// Frame material allows light through
    pub is_transparent: bool,
    /// 1 to 3 visually dominant colors, no duplicates
    pub dominant_colors: Vec<String>,
    /// One of [`FRAME_SHAPES`]
    pub frame_shape: String,
    /// Visible surface texture or pattern, when identifiable
    pub texture_pattern: Option<String>,
    /// Proportions or styling obviously sized for children
    pub looks_like_kids_product: bool,
}

/// Observations about the images themselves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualMetadata {
    pub image_quality_notes: String,
    /// Essential parts hidden or unclear
    pub is_occluded_or_ambiguous: bool,
    /// Overall confidence in [0.0, 1.0]
    pub confidence_score: f64,
}

/// Complete analysis result for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAnalysisResponse {
    pub product_id: Option<String>,
    pub continuous_dimensions: ContinuousDimensions,
    pub discrete_attributes: DiscreteAttributes,
    pub metadata: VisualMetadata,
}

impl ProductAnalysisResponse {
    /// Check the bounds the schema promises
    ///
    /// Used to judge remote-provider replies: a reply that parses but
    /// breaks any of these is rejected wholesale.
    pub fn validate(&self) -> Result<(), String> {
        let dims = &self.continuous_dimensions;
        for (name, value) in [
            ("gender_expression", dims.gender_expression),
            ("visual_weight", dims.visual_weight),
            ("embellishment", dims.embellishment),
            ("unconventionality", dims.unconventionality),
            ("formality", dims.formality),
        ] {
            if !(-5.0..=5.0).contains(&value) {
                return Err(format!("{name} out of range: {value}"));
            }
        }

        let colors = &self.discrete_attributes.dominant_colors;
        if colors.is_empty() || colors.len() > 3 {
            return Err(format!("dominant_colors must have 1-3 entries, got {}", colors.len()));
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(format!("duplicate dominant color: {color}"));
            }
        }

        let shape = self.discrete_attributes.frame_shape.as_str();
        if !FRAME_SHAPES.contains(&shape) {
            return Err(format!("unknown frame shape: {shape}"));
        }

        let confidence = self.metadata.confidence_score;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(format!("confidence_score out of range: {confidence}"));
        }

        Ok(())
    }
}
