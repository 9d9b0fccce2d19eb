//! # pistes-core
//!
//! **Tier 3 (Facade)**
//!
//! This crate is the **primary library interface** for `pistes`. It ties
//! analysis, merging and formatting together into workflows that return both
//! the structured report and the text shown to the player.
//!
//! ## What belongs here
//! * Workflows composing the tier 2 crates
//! * The JSON entry point ([`ffi::run_json`]) and its error envelope
//! * The clipboard [`session`] behind the page buttons
//!
//! ## What does NOT belong here
//! * Statistics or rendering details (use the tier 2 crates)
//! * Browser bindings (use pistes-wasm)
//!
//! ## Example
//!
//! ```
//! use pistes_core::hints_workflow;
//! use pistes_core::settings::HintSettings;
//!
//! let outcome = hints_workflow("casa, gos, peix.", &HintSettings::default()).unwrap();
//! assert_eq!(outcome.report.word_count, 3);
//! assert!(outcome.text.starts_with("Has trobat 3 paraules"));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod ffi;
pub mod session;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Re-export crates for convenience
pub use pistes_settings as settings;
pub use pistes_types as types;

use pistes_analysis::analyze;
use pistes_format::{render_hints, render_merge};
use pistes_merge::merge;
use pistes_settings::{HintSettings, MergeSettings, PistesSettings};
use pistes_types::{HintReport, MergeReport};

/// Hint report plus its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintsOutcome {
    pub report: HintReport,
    pub text: String,
}

/// Merge report plus its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub report: MergeReport,
    pub text: String,
}

/// One player's name and pasted word list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerWords {
    pub name: String,
    pub words: String,
}

impl PlayerWords {
    pub fn new(name: impl Into<String>, words: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: words.into(),
        }
    }
}

/// Validate settings, analyze `words` and render the hints text.
pub fn hints_workflow(words: &str, settings: &HintSettings) -> Result<HintsOutcome> {
    settings.validate()?;
    let report = analyze(words, settings)?;
    let text = render_hints(&report, settings);
    debug!(words = report.word_count, bytes = text.len(), "Hints rendered");
    Ok(HintsOutcome { report, text })
}

/// Merge two players' lists and render the result with the configured labeling.
pub fn merge_workflow(
    player1: &PlayerWords,
    player2: &PlayerWords,
    settings: &MergeSettings,
) -> MergeOutcome {
    let report = merge(&player1.words, &player2.words, &player1.name, &player2.name);
    let text = render_merge(&report, settings.labeling);
    MergeOutcome { report, text }
}

/// Load a settings file, falling back to defaults when `path` is `None`.
pub fn load_settings(path: Option<&Path>) -> Result<PistesSettings> {
    match path {
        Some(path) => PistesSettings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(PistesSettings::default()),
    }
}
