use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::language_utils;
use crate::splitter::lines::DEFAULT_IMPORTANT_MARKERS;
use crate::splitter::script::ScriptClassifier;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Secondary language naming and locale tree
    #[serde(default)]
    pub languages: LanguageConfig,

    /// Script classification thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Glyphs keeping a secondary-language line in the primary edition
    #[serde(default = "default_important_markers")]
    pub important_markers: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: LanguageConfig::default(),
            classifier: ClassifierConfig::default(),
            important_markers: default_important_markers(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.classifier.secondary_ratio_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        if self.classifier.primary_max_secondary_chars == 0 {
            return Err(ConfigError::InvalidCharacterBound);
        }

        if self.important_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::EmptyMarker);
        }

        if language_utils::validate_locale_tag(&self.languages.locale_tag).is_err() {
            return Err(ConfigError::InvalidLocaleTag(self.languages.locale_tag.clone()));
        }

        Ok(())
    }
}

/// Secondary language naming
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LanguageConfig {
    /// Name shown in cross-reference lines, e.g. "繁體中文"
    #[serde(default = "default_secondary_name")]
    pub secondary_name: String,

    /// Word for "Language" in the secondary language, e.g. "語言"
    #[serde(default = "default_secondary_label")]
    pub secondary_label: String,

    /// Locale tag naming the sibling tree `locales/<tag>/`
    #[serde(default = "default_locale_tag")]
    pub locale_tag: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            secondary_name: default_secondary_name(),
            secondary_label: default_secondary_label(),
            locale_tag: default_locale_tag(),
        }
    }
}

/// Script classification thresholds
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Secondary-script density above which a line is secondary language
    #[serde(default = "default_secondary_ratio_threshold")]
    pub secondary_ratio_threshold: f64,

    /// Exclusive bound on secondary-script characters in a primary-language line
    #[serde(default = "default_primary_max_secondary_chars")]
    pub primary_max_secondary_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            secondary_ratio_threshold: default_secondary_ratio_threshold(),
            primary_max_secondary_chars: default_primary_max_secondary_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_secondary_name() -> String {
    "繁體中文".to_string()
}

fn default_secondary_label() -> String {
    "語言".to_string()
}

fn default_locale_tag() -> String {
    "zh-TW".to_string()
}

fn default_secondary_ratio_threshold() -> f64 {
    ScriptClassifier::DEFAULT_SECONDARY_RATIO_THRESHOLD
}

fn default_primary_max_secondary_chars() -> usize {
    ScriptClassifier::DEFAULT_PRIMARY_MAX_SECONDARY_CHARS
}

fn default_important_markers() -> Vec<String> {
    DEFAULT_IMPORTANT_MARKERS.iter().map(|m| m.to_string()).collect()
}
