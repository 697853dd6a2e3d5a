/*!
 * Bilingual heading constructs such as `## Purpose | 目的`.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::script::ScriptClassifier;

/// Separator between the two language fragments
pub const SEPARATOR: char = '|';

/// Leading heading markers of a line
static HEADING_MARKERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#+)\s*").expect("Invalid heading marker regex")
});

/// A heading split into its two language fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualHeader<'a> {
    /// Heading markers of the original line, e.g. `##`
    pub markers: &'a str,
    /// Primary fragment, trimmed, still carrying its heading markers
    pub primary: &'a str,
    /// Secondary fragment, trimmed, without heading markers
    pub secondary: &'a str,
}

impl BilingualHeader<'_> {
    /// Primary-language heading line
    pub fn primary_line(&self) -> String {
        self.primary.to_string()
    }

    /// Secondary-language heading line, re-prefixed with the original markers
    pub fn secondary_line(&self) -> String {
        format!("{} {}", self.markers, self.secondary)
    }
}

/// Check if a line is a bilingual heading.
///
/// The line needs exactly one separator, leading heading markers and a
/// secondary-language second fragment.
pub fn is_bilingual_header(line: &str, classifier: &ScriptClassifier) -> bool {
    split_header(line, classifier).is_some()
}

/// Split a bilingual heading into its fragments, or `None` if the line is not one
pub fn split_header<'a>(line: &'a str, classifier: &ScriptClassifier) -> Option<BilingualHeader<'a>> {
    let (first, second) = line.split_once(SEPARATOR)?;
    if second.contains(SEPARATOR) {
        return None;
    }

    let markers = HEADING_MARKERS_REGEX.captures(line)?.get(1)?.as_str();
    if !classifier.is_secondary_language(second) {
        return None;
    }

    Some(BilingualHeader {
        markers,
        primary: first.trim(),
        secondary: second.trim(),
    })
}
