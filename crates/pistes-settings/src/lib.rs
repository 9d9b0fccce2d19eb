//! # pistes-settings
//!
//! **Tier 1 (Pure Settings)**
//!
//! Settings for the hint and merge pipelines. Every field has a default, so
//! an empty TOML document or `{}` is a valid configuration.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Defaults, presets and validation
//! * TOML/JSON loading
//!
//! ## What does NOT belong here
//! * Analysis or rendering logic
//!
//! ## Example
//! ```toml
//! [hints]
//! diacritics = "basic"
//! totals_column = false
//!
//! [merge]
//! labeling = "missing_from_self"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export option enums for convenience
pub use pistes_types::{CounterOrder, DiacriticTable, MalformedPolicy, MergeLabeling};

use pistes_types::DEFAULT_TOP_PERCENT;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse settings JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Root settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PistesSettings {
    pub hints: HintSettings,
    pub merge: MergeSettings,
}

impl PistesSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file; `.json` files are read as JSON, anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.hints.validate()
    }
}

/// Settings for hint derivation and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSettings {
    /// Accent folding table used by the normalizer.
    #[serde(default)]
    pub diacritics: DiacriticTable,

    /// Rendering order of the two-letter prefix counter.
    #[serde(default = "default_prefix_order")]
    pub two_letter_prefix_order: CounterOrder,

    /// Rendering order of the letter-subset counter.
    #[serde(default = "default_subset_order")]
    pub subset_order: CounterOrder,

    /// Append a `∑` column with each row's total to the matrix.
    #[serde(default = "default_totals_column")]
    pub totals_column: bool,

    /// Share of three-letter prefixes/suffixes reported as most frequent.
    #[serde(default = "default_top_percent")]
    pub top_percent: u8,

    /// Handling of words without a main word.
    #[serde(default)]
    pub malformed: MalformedPolicy,
}

fn default_prefix_order() -> CounterOrder {
    CounterOrder::Sorted
}

fn default_subset_order() -> CounterOrder {
    CounterOrder::Insertion
}

fn default_totals_column() -> bool {
    true
}

fn default_top_percent() -> u8 {
    DEFAULT_TOP_PERCENT
}

impl Default for HintSettings {
    fn default() -> Self {
        Self::full()
    }
}

impl HintSettings {
    /// Extended accents, sorted prefixes, totals column.
    pub fn full() -> Self {
        Self {
            diacritics: DiacriticTable::Extended,
            two_letter_prefix_order: default_prefix_order(),
            subset_order: default_subset_order(),
            totals_column: default_totals_column(),
            top_percent: default_top_percent(),
            malformed: MalformedPolicy::Skip,
        }
    }

    /// Basic accents, insertion-ordered counters, no totals column.
    pub fn compact() -> Self {
        Self {
            diacritics: DiacriticTable::Basic,
            two_letter_prefix_order: CounterOrder::Insertion,
            subset_order: CounterOrder::Insertion,
            totals_column: false,
            ..Self::full()
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.top_percent > 100 {
            return Err(SettingsError::InvalidValue {
                field: "hints.top_percent".to_string(),
                reason: format!("{} is above 100", self.top_percent),
            });
        }
        Ok(())
    }
}

/// Settings for merging two players' results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSettings {
    #[serde(default)]
    pub labeling: MergeLabeling,
}
