//! Prompt construction for remote vision providers

use serde_json::{json, Value};

/// Fixed scoring rubric sent as the system message
pub const SYSTEM_PROMPT: &str = r#"You are a highly advanced Visual Product Measurement System.
Your goal is to analyze product images and output strictly visual, objective measurements.
Output must be a valid JSON object matching the specified schema.

# CORE RULES
1. VISUAL ONLY: Do not infer brand, price, season, or intended use unless visually obvious. Do NOT use merchandising fluff.
2. SCORING (-5.0 to +5.0):
   - gender_expression: -5.0 (Masculine) <--> +5.0 (Feminine). 0.0 is Neutral/Unisex.
   - visual_weight: -5.0 (Sleek/Light) <--> +5.0 (Bold/Heavy).
   - embellishment: -5.0 (Simple/Minimal) <--> +5.0 (Ornate/Decorated).
   - unconventionality: -5.0 (Classic/Timeless) <--> +5.0 (Avant-garde/Unique).
   - formality: -5.0 (Casual) <--> +5.0 (Formal).
3. DISCRETE ATTRIBUTES:
   - Only mark true if clearly visible.
   - looks_like_kids_product: only if proportions/colors strongly suggest child sizing.
4. METADATA:
   - confidence_score: estimate your confidence (0.0 to 1.0) from image quality, clarity, and ambiguity. Low quality or ambiguous images get lower confidence.
5. FORMAT:
   - Respond with raw JSON only. No markdown formatting.
   - Use exact snake_case keys for the nested objects: continuous_dimensions, discrete_attributes, metadata."#;

/// Build the user message content: one text segment plus one image segment
/// per reference, preserving reference order.
pub fn build_user_content(image_refs: &[String]) -> Value {
    let mut content = vec![json!({
        "type": "text",
        "text": "Analyze these product images and extract the visual measurements."
    })];

    for reference in image_refs {
        content.push(json!({
            "type": "image_url",
            "image_url": { "url": reference }
        }));
    }

    Value::Array(content)
}
