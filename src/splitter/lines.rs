/*!
 * Structural line predicates shared by both routing paths.
 */

use super::construct::is_bilingual_header;
use super::script::ScriptClassifier;

/// Callout glyphs marking a secondary-language line as important
pub const DEFAULT_IMPORTANT_MARKERS: [&str; 3] = ["✅", "❌", "⚠️"];

/// Leading characters of tree diagrams drawn with box-drawing glyphs
const BOX_DRAWING_PREFIXES: [char; 5] = ['│', '├', '└', '┌', '─'];

/// Classification of a single line, recomputed on every pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// Heading carrying both languages around a separator
    BilingualConstruct,
    /// Secondary-language line carrying a callout glyph
    MarkedImportant,
    /// Dominated by the secondary-language script
    SecondaryLanguage,
    /// Primary-language prose
    PrimaryLanguage,
    /// Blank lines and markdown syntax without language content
    Structural,
}

impl LineClass {
    /// Classify a line. Earlier variants take precedence over later ones.
    pub fn of(line: &str, classifier: &ScriptClassifier, important_markers: &[String]) -> Self {
        if is_bilingual_header(line, classifier) {
            Self::BilingualConstruct
        } else if classifier.is_secondary_language(line) {
            if is_marked_important(line, important_markers) {
                Self::MarkedImportant
            } else {
                Self::SecondaryLanguage
            }
        } else if classifier.is_primary_language(line) && !is_structural(line) {
            Self::PrimaryLanguage
        } else {
            Self::Structural
        }
    }
}

/// Check if a line carries one of the important callout glyphs
pub fn is_marked_important(line: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| line.contains(marker.as_str()))
}

/// Check if a line is a markdown table row
pub fn is_table_row(line: &str) -> bool {
    line.trim().starts_with('|')
}

/// Check if a line is code, a comment, a tree diagram or a bare top-level `#` line
pub fn is_code_or_example(line: &str) -> bool {
    let stripped = line.trim();
    stripped.starts_with("```")
        || stripped.starts_with("//")
        || (stripped.starts_with('#') && !stripped.starts_with("##"))
        || stripped.starts_with(BOX_DRAWING_PREFIXES)
}

/// Check if a line is purely structural markdown
pub fn is_structural(line: &str) -> bool {
    let stripped = line.trim();
    stripped.is_empty()
        || stripped.starts_with('-')
        || stripped.starts_with('*')
        || stripped.starts_with('|')
        || stripped == "---"
}
