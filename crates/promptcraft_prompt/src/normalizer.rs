//! Response normalization.
//!
//! Model output is untrusted text. Parsing goes raw text → `serde_json::Value`
//! → per-key validation → [`GenerationResult`], and never fails: malformed
//! keys are replaced individually, and a response without a usable
//! `balanced` prompt degrades to the raw text itself.

use promptcraft_core::{DEFAULT_NEGATIVE, GenerationResult, PromptVariant, VariantKey};
use serde_json::Value as JsonValue;
use strum::IntoEnumIterator;

/// Separator between positive and negative halves in single-prompt output.
pub const DELIMITER: &str = "|||";

/// Positive prompt used when the model returns nothing but whitespace.
pub const EMPTY_RESPONSE_PROMPT: &str = "The model returned an empty prompt. Please try again.";

/// Parses a three-variant response.
///
/// # Examples
///
/// ```
/// use promptcraft_core::VariantKey;
/// use promptcraft_prompt::parse_variants;
///
/// let raw = r#"```json
/// {"balanced":{"positive":"a fox","negative":"blur"},
///  "creative":{"positive":"a fox astronaut","negative":"blur"},
///  "artistic":{"positive":"a fox, ukiyo-e","negative":"blur"}}
/// ```"#;
///
/// let result = parse_variants(raw);
/// assert_eq!(result.get(VariantKey::Creative).positive(), "a fox astronaut");
/// ```
pub fn parse_variants(raw: &str) -> GenerationResult {
    let body = strip_code_fences(raw);

    let Some(value) = parse_object(body) else {
        tracing::warn!(
            response_length = raw.len(),
            "Response is not a JSON object, using degraded fallback"
        );
        return degraded(raw);
    };

    let mut variants = VariantKey::iter().map(|key| validate_variant(&value, key));
    let (Some(balanced), Some(creative), Some(artistic)) =
        (variants.next(), variants.next(), variants.next())
    else {
        return degraded(raw);
    };

    // A whitespace-only prompt is as unusable as an empty one.
    if balanced.is_empty() {
        tracing::warn!("Balanced variant missing or invalid, using degraded fallback");
        return degraded(raw);
    }

    GenerationResult::new(balanced, creative, artistic)
}

/// Parses single-prompt output of the form `positive ||| negative`.
///
/// Splits on the first delimiter only. A missing or blank negative becomes
/// [`DEFAULT_NEGATIVE`].
///
/// # Examples
///
/// ```
/// use promptcraft_core::DEFAULT_NEGATIVE;
/// use promptcraft_prompt::parse_delimited;
///
/// let variant = parse_delimited(" neon alley at night ||| people, text ");
/// assert_eq!(variant.positive(), "neon alley at night");
/// assert_eq!(variant.negative(), "people, text");
///
/// let bare = parse_delimited("neon alley at night");
/// assert_eq!(bare.negative(), DEFAULT_NEGATIVE);
/// ```
pub fn parse_delimited(raw: &str) -> PromptVariant {
    let raw = strip_code_fences(raw);
    match raw.split_once(DELIMITER) {
        Some((positive, negative)) => PromptVariant::new(positive.trim(), negative.trim()),
        None => PromptVariant::new(raw.trim(), ""),
    }
}

/// Removes a surrounding markdown code fence, with or without a `json` tag.
///
/// # Examples
///
/// ```
/// use promptcraft_prompt::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
/// assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
/// assert_eq!(strip_code_fences("  {} "), "{}");
/// ```
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        let rest = rest.strip_prefix("JSON").unwrap_or(rest);
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

/// Strict parse first, then the first balanced `{...}` block in the text.
fn parse_object(body: &str) -> Option<JsonValue> {
    if let Ok(value @ JsonValue::Object(_)) = serde_json::from_str::<JsonValue>(body) {
        return Some(value);
    }

    let candidate = extract_balanced(body, '{', '}')?;
    match serde_json::from_str::<JsonValue>(candidate) {
        Ok(value @ JsonValue::Object(_)) => {
            tracing::debug!("Recovered JSON object embedded in surrounding text");
            Some(value)
        }
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "Embedded JSON candidate failed to parse");
            None
        }
    }
}

/// Validates one key; any deviation yields [`PromptVariant::empty`].
fn validate_variant(value: &JsonValue, key: VariantKey) -> PromptVariant {
    let Some(entry) = value.get(key.as_ref()) else {
        tracing::debug!(key = %key, "Variant missing");
        return PromptVariant::empty();
    };

    let positive = entry.get("positive").and_then(JsonValue::as_str);
    let negative = match entry.get("negative") {
        None | Some(JsonValue::Null) => Some(""),
        Some(other) => other.as_str(),
    };

    match (positive, negative) {
        (Some(positive), Some(negative)) => PromptVariant::new(positive, negative),
        _ => {
            tracing::debug!(key = %key, "Variant fields are not strings");
            PromptVariant::empty()
        }
    }
}

/// The raw text stripped of JSON punctuation, duplicated across all keys.
///
/// Blank output falls back to [`EMPTY_RESPONSE_PROMPT`] so the positive
/// prompt is never empty.
fn degraded(raw: &str) -> GenerationResult {
    let stripped = raw.replace("```json", " ").replace("```", " ");
    let cleaned = stripped
        .chars()
        .map(|c| match c {
            '{' | '}' | '[' | ']' | '"' | ':' | '`' => ' ',
            other => other,
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let positive = if !cleaned.is_empty() {
        cleaned
    } else if !raw.trim().is_empty() {
        raw.trim().to_string()
    } else {
        tracing::warn!("Model returned blank output");
        EMPTY_RESPONSE_PROMPT.to_string()
    };
    GenerationResult::uniform(PromptVariant::new(positive, DEFAULT_NEGATIVE))
}

/// First `open ... close` block with matching nesting, ignoring delimiters
/// inside string literals.
fn extract_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
