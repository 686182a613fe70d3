//! Prompt variants and the three-variant generation result.

use serde::{Deserialize, Serialize};

/// Defect list used whenever the model does not supply a negative prompt.
pub const DEFAULT_NEGATIVE: &str = "blurry, low quality, distorted, deformed, disfigured, bad anatomy, extra limbs, watermark, text, signature, jpeg artifacts, oversaturated";

/// A positive/negative prompt pair.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{DEFAULT_NEGATIVE, PromptVariant};
///
/// let variant = PromptVariant::new("a cat on the moon", "");
/// assert_eq!(variant.negative(), DEFAULT_NEGATIVE);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PromptVariant {
    /// What to include
    positive: String,
    /// What to exclude
    negative: String,
}

impl PromptVariant {
    /// Creates a variant, substituting [`DEFAULT_NEGATIVE`] for a blank negative.
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        let negative = negative.into();
        let negative = if negative.trim().is_empty() {
            DEFAULT_NEGATIVE.to_string()
        } else {
            negative
        };
        Self {
            positive: positive.into(),
            negative,
        }
    }

    /// The placeholder used for a variant that failed validation.
    pub fn empty() -> Self {
        Self {
            positive: String::new(),
            negative: DEFAULT_NEGATIVE.to_string(),
        }
    }

    /// True when there is no positive prompt.
    pub fn is_empty(&self) -> bool {
        self.positive.trim().is_empty()
    }
}

/// The fixed variant names, in presentation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VariantKey {
    /// Faithful to the idea
    Balanced,
    /// Takes liberties with the idea
    Creative,
    /// Leans on artistic style
    Artistic,
}

/// One variant per [`VariantKey`]; all three are always present.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{GenerationResult, PromptVariant, VariantKey};
///
/// let single = PromptVariant::new("neon koi pond", "text");
/// let result = GenerationResult::uniform(single.clone());
/// assert_eq!(result.get(VariantKey::Artistic), &single);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct GenerationResult {
    /// Faithful rendering
    balanced: PromptVariant,
    /// Inventive rendering
    creative: PromptVariant,
    /// Stylised rendering
    artistic: PromptVariant,
}

impl GenerationResult {
    /// Creates a result from the three variants.
    pub fn new(balanced: PromptVariant, creative: PromptVariant, artistic: PromptVariant) -> Self {
        Self {
            balanced,
            creative,
            artistic,
        }
    }

    /// Duplicates a single variant across all three keys.
    pub fn uniform(variant: PromptVariant) -> Self {
        Self {
            balanced: variant.clone(),
            creative: variant.clone(),
            artistic: variant,
        }
    }

    /// Variant stored under `key`.
    pub fn get(&self, key: VariantKey) -> &PromptVariant {
        match key {
            VariantKey::Balanced => &self.balanced,
            VariantKey::Creative => &self.creative,
            VariantKey::Artistic => &self.artistic,
        }
    }

    /// Iterates `(key, variant)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (VariantKey, &PromptVariant)> {
        [
            (VariantKey::Balanced, &self.balanced),
            (VariantKey::Creative, &self.creative),
            (VariantKey::Artistic, &self.artistic),
        ]
        .into_iter()
    }

    /// Serialises to the JSON object shape the model is asked to emit.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "balanced": self.balanced,
            "creative": self.creative,
            "artistic": self.artistic,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn blank_negative_falls_back_to_default() {
        let variant = PromptVariant::new("castle", "   ");
        assert_eq!(variant.negative(), DEFAULT_NEGATIVE);
        assert!(!variant.is_empty());
    }

    #[test]
    fn empty_placeholder_keeps_default_negative() {
        let variant = PromptVariant::empty();
        assert!(variant.is_empty());
        assert_eq!(variant.negative(), DEFAULT_NEGATIVE);
    }

    #[test]
    fn iter_visits_every_key_once() {
        let result = GenerationResult::uniform(PromptVariant::new("a", "b"));
        let keys: Vec<VariantKey> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, VariantKey::iter().collect::<Vec<_>>());
    }

    #[test]
    fn json_shape_uses_lowercase_keys() {
        let result = GenerationResult::uniform(PromptVariant::new("a", "b"));
        let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(value["creative"]["positive"], "a");
        assert_eq!(value["artistic"]["negative"], "b");
    }
}
