//! Quick style presets that append a phrase to the idea.

/// A one-click style phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StylePreset {
    /// Menu label
    pub label: &'static str,
    /// Phrase appended to the idea
    pub value: &'static str,
}

impl StylePreset {
    /// The preset catalog, in menu order.
    pub const ALL: [StylePreset; 5] = [
        StylePreset { label: "Cyberpunk", value: "cyberpunk style" },
        StylePreset { label: "Photorealistic", value: "photorealistic" },
        StylePreset { label: "Studio Lighting", value: "studio lighting" },
        StylePreset { label: "Oil Painting", value: "oil painting style" },
        StylePreset { label: "Macro", value: "macro photography" },
    ];

    /// Looks a preset up by label, ignoring case.
    pub fn find(label: &str) -> Option<StylePreset> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.label.eq_ignore_ascii_case(label.trim()))
    }
}

/// Appends a preset phrase to an idea.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{StylePreset, apply_preset};
///
/// let macro_preset = StylePreset::find("macro").unwrap();
/// assert_eq!(apply_preset(" a dew drop ", macro_preset), "a dew drop, macro photography");
/// assert_eq!(apply_preset("", macro_preset), "macro photography");
/// ```
pub fn apply_preset(idea: &str, preset: StylePreset) -> String {
    let trimmed = idea.trim();
    if trimmed.is_empty() {
        preset.value.to_string()
    } else {
        format!("{}, {}", trimmed, preset.value)
    }
}
