use std::collections::HashMap;

use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;

/// Language utilities for language tag handling
///
/// Callers hand the pipeline loose language tags: ISO 639-1 ("en"),
/// ISO 639-2/T or /B ("eng", "ger") or plain English names ("english").
/// Everything is normalized to ISO 639-3 before comparison.

/// ISO 639-2/B codes that differ from their ISO 639-2/T form
static PART2B_TO_PART2T: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("fre", "fra"),
        ("ger", "deu"),
        ("dut", "nld"),
        ("gre", "ell"),
        ("chi", "zho"),
        ("cze", "ces"),
        ("ice", "isl"),
        ("alb", "sqi"),
        ("arm", "hye"),
        ("baq", "eus"),
        ("bur", "mya"),
        ("per", "fas"),
        ("geo", "kat"),
        ("may", "msa"),
        ("mac", "mkd"),
        ("rum", "ron"),
        ("slo", "slk"),
        ("wel", "cym"),
    ])
});

/// Capitalize each word so "english" matches isolang's "English"
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Resolve a language tag to an isolang language
fn lookup_language(tag: &str) -> Option<Language> {
    let normalized = tag.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => {
            let part2t = PART2B_TO_PART2T
                .get(normalized.as_str())
                .copied()
                .unwrap_or(normalized.as_str());
            Language::from_639_3(part2t)
        }
        _ => Language::from_name(&title_case(&normalized)),
    }
}

/// Normalize a language tag (code or English name) to ISO 639-3
pub fn normalize_language_tag(tag: &str) -> Result<String> {
    lookup_language(tag)
        .map(|lang| lang.to_639_3().to_string())
        .ok_or_else(|| anyhow!("Unknown language tag: {}", tag))
}

/// Check if two language tags name the same language
///
/// Unknown tags fall back to a case-insensitive string comparison, so a
/// custom tag still matches itself.
pub fn same_language(tag1: &str, tag2: &str) -> bool {
    match (normalize_language_tag(tag1), normalize_language_tag(tag2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => tag1.trim().eq_ignore_ascii_case(tag2.trim()),
    }
}

/// Get the English language name for a tag
pub fn get_language_name(tag: &str) -> Result<String> {
    let lang = lookup_language(tag)
        .ok_or_else(|| anyhow!("Failed to get language from tag: {}", tag))?;

    Ok(lang.to_name().to_string())
}

/// Get the ISO 639-1 code for a tag, falling back to ISO 639-3
///
/// Translation services generally want the short form.
pub fn service_code(tag: &str) -> Result<String> {
    let lang = lookup_language(tag)
        .ok_or_else(|| anyhow!("Cannot derive a service code for: {}", tag))?;

    Ok(lang
        .to_639_1()
        .map(str::to_string)
        .unwrap_or_else(|| lang.to_639_3().to_string()))
}
