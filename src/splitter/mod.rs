/*!
 * Bilingual markdown splitting.
 *
 * This module turns one bilingual markdown document into two monolingual
 * editions:
 * - `script`: script-ratio classification of lines
 * - `lines`: structural predicates and line classes
 * - `construct`: bilingual headings like `## Purpose | 目的`
 * - `primary` / `secondary`: per-edition line routing
 * - `assembler`: metadata block and cross-reference insertion
 * - `version`: version marker extraction
 */

pub mod assembler;
pub mod construct;
pub mod document;
pub mod lines;
pub mod primary;
pub mod script;
pub mod secondary;
pub mod version;

use serde::Serialize;

pub use assembler::{CrossLinks, SplitOutput, SyncMetadata, SyncStatus};
pub use construct::{BilingualHeader, is_bilingual_header, split_header};
pub use document::{Document, Edition, OutputDocument};
pub use lines::LineClass;
pub use script::ScriptClassifier;
pub use version::{DEFAULT_VERSION, extract_version};

use crate::app_config::Config;

/// Outcome of routing one line into one edition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Emit the line verbatim
    Keep,
    /// Emit a transformed line instead
    Replace(String),
    /// Leave the line out
    Drop,
}

impl Disposition {
    /// Output line for `line` under this disposition, if any
    pub fn apply(self, line: &str) -> Option<String> {
        match self {
            Self::Keep => Some(line.to_string()),
            Self::Replace(replacement) => Some(replacement),
            Self::Drop => None,
        }
    }
}

/// Display strings for the secondary language in cross-reference lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLabels {
    /// Name of the secondary language, e.g. `繁體中文`
    pub secondary_name: String,
    /// Word for "Language" in the secondary language, e.g. `語言`
    pub secondary_label: String,
}

impl Default for LanguageLabels {
    fn default() -> Self {
        Self {
            secondary_name: "繁體中文".to_string(),
            secondary_label: "語言".to_string(),
        }
    }
}

/// Line counts reported by `inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub version: String,
    pub total_lines: usize,
    pub secondary_lines: usize,
    pub primary_lines: usize,
}

/// Splits bilingual documents into primary and secondary editions
#[derive(Debug, Clone)]
pub struct Splitter {
    classifier: ScriptClassifier,
    important_markers: Vec<String>,
    labels: LanguageLabels,
}

impl Splitter {
    pub fn new(classifier: ScriptClassifier, important_markers: Vec<String>, labels: LanguageLabels) -> Self {
        Self {
            classifier,
            important_markers,
            labels,
        }
    }

    /// Build a splitter from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ScriptClassifier::new(
                config.classifier.secondary_ratio_threshold,
                config.classifier.primary_max_secondary_chars,
            ),
            config.important_markers.clone(),
            LanguageLabels {
                secondary_name: config.languages.secondary_name.clone(),
                secondary_label: config.languages.secondary_label.clone(),
            },
        )
    }

    pub fn classifier(&self) -> &ScriptClassifier {
        &self.classifier
    }

    pub fn important_markers(&self) -> &[String] {
        &self.important_markers
    }

    pub fn labels(&self) -> &LanguageLabels {
        &self.labels
    }

    /// Classify a single line
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass::of(line, &self.classifier, &self.important_markers)
    }

    /// Count lines per language without producing any output
    pub fn stats(&self, document: &Document) -> DocumentStats {
        let lines = document.lines();
        DocumentStats {
            version: extract_version(document.text()),
            total_lines: lines.len(),
            secondary_lines: lines
                .iter()
                .filter(|line| self.classifier.is_secondary_language(line))
                .count(),
            primary_lines: lines
                .iter()
                .filter(|line| self.classifier.is_primary_language(line) && !line.trim().is_empty())
                .count(),
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(
            ScriptClassifier::default(),
            lines::DEFAULT_IMPORTANT_MARKERS.iter().map(|m| m.to_string()).collect(),
            LanguageLabels::default(),
        )
    }
}
