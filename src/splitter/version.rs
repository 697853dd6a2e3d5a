/*!
 * Version marker extraction.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Version used when the document carries no marker
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Labeled `MAJOR.MINOR.PATCH` marker, e.g. `**Version**: 2.3.1`
static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Version\*\*:\s*(\d+\.\d+\.\d+)").expect("Invalid version regex")
});

/// Extract the first version marker from a document, or the default
pub fn extract_version(text: &str) -> String {
    VERSION_REGEX
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}
