use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for locale tags
///
/// This module validates the locale tags naming the sibling tree of the
/// secondary edition (`locales/<tag>/`), e.g. `zh-TW` or `ja`.
/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part1);
    }

    if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part3);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Split a locale tag like `zh-TW` or `pt_BR` into language and region subtags
pub fn split_locale_tag(tag: &str) -> (&str, Option<&str>) {
    let tag = tag.trim();
    match tag.split_once(['-', '_']) {
        Some((language, region)) => (language, Some(region)),
        None => (tag, None),
    }
}

/// Validate a locale tag: a valid language subtag, optionally followed by an alphanumeric region
pub fn validate_locale_tag(tag: &str) -> Result<LanguageCodeType> {
    let (language, region) = split_locale_tag(tag);

    if let Some(region) = region {
        if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid region in locale tag: {}", tag));
        }
    }

    validate_language_code(language)
}

/// Get the English language name for a locale tag
pub fn get_language_name(tag: &str) -> Result<String> {
    let (language, _) = split_locale_tag(tag);
    let language = language.to_lowercase();
    let lang = match language.len() {
        2 => Language::from_639_1(&language),
        3 => Language::from_639_3(&language),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Failed to get language from tag: {}", tag))?;

    Ok(lang.to_name().to_string())
}
