/*!
 * Script classification for bilingual lines.
 *
 * Lines are classified by the density of secondary-script characters
 * (Han ideographs) among their non-whitespace characters. The two
 * predicates are intentionally asymmetric: a line can be both primary
 * and secondary language, or neither.
 */

/// Inclusive code point range treated as the secondary-language script
pub const SECONDARY_SCRIPT_RANGE: (char, char) = ('\u{4e00}', '\u{9fff}');

/// Check if a single character belongs to the secondary-language script
pub fn is_secondary_script_char(c: char) -> bool {
    (SECONDARY_SCRIPT_RANGE.0..=SECONDARY_SCRIPT_RANGE.1).contains(&c)
}

/// Count secondary-script characters in a text
pub fn count_secondary_script(text: &str) -> usize {
    text.chars().filter(|c| is_secondary_script_char(*c)).count()
}

/// Check if a text contains any secondary-script character
pub fn contains_secondary_script(text: &str) -> bool {
    text.chars().any(is_secondary_script_char)
}

/// Heuristic classifier deciding which language a line belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptClassifier {
    /// A line is secondary language when its ratio is strictly above this
    secondary_ratio_threshold: f64,
    /// A line is primary language when it has strictly fewer secondary-script characters than this
    primary_max_secondary_chars: usize,
}

impl ScriptClassifier {
    /// Default density threshold for secondary-language lines
    pub const DEFAULT_SECONDARY_RATIO_THRESHOLD: f64 = 0.3;

    /// Default exclusive bound on secondary-script characters in primary-language lines
    pub const DEFAULT_PRIMARY_MAX_SECONDARY_CHARS: usize = 3;

    /// Create a classifier with explicit thresholds
    pub fn new(secondary_ratio_threshold: f64, primary_max_secondary_chars: usize) -> Self {
        Self {
            secondary_ratio_threshold,
            primary_max_secondary_chars,
        }
    }

    /// Density threshold used by this classifier
    pub fn secondary_ratio_threshold(&self) -> f64 {
        self.secondary_ratio_threshold
    }

    /// Character bound used by this classifier
    pub fn primary_max_secondary_chars(&self) -> usize {
        self.primary_max_secondary_chars
    }

    /// Proportion of non-whitespace characters that are secondary script.
    ///
    /// Returns 0.0 for lines without any non-whitespace character.
    pub fn script_ratio(line: &str) -> f64 {
        let mut total = 0usize;
        let mut secondary = 0usize;
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            total += 1;
            if is_secondary_script_char(c) {
                secondary += 1;
            }
        }

        if total == 0 {
            return 0.0;
        }
        secondary as f64 / total as f64
    }

    /// Check if a line is dominated by the secondary-language script
    pub fn is_secondary_language(&self, line: &str) -> bool {
        if line.chars().all(char::is_whitespace) {
            return false;
        }
        Self::script_ratio(line) > self.secondary_ratio_threshold
    }

    /// Check if a line counts as primary-language content.
    ///
    /// Lenient on purpose: a couple of secondary-script characters, such as
    /// an inline example, still leave the line in the primary language.
    pub fn is_primary_language(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        count_secondary_script(line) < self.primary_max_secondary_chars
    }
}

impl Default for ScriptClassifier {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SECONDARY_RATIO_THRESHOLD,
            Self::DEFAULT_PRIMARY_MAX_SECONDARY_CHARS,
        )
    }
}
