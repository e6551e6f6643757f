//! Preference-file loading and export.
//!
//! Accepts either a bare JSON array of preference objects or a
//! `{"preferences": [...]}` wrapper. Trait names parse loosely
//! ("Good With Children", "barking-level"); a missing importance
//! defaults to the middle of the scale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pawmatch_core::model::{Preference, Rating, ResponseSummary, TraitKey};

use crate::error::PreferenceError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PreferenceDoc {
    Wrapped {
        #[serde(default)]
        preferences: Vec<PreferenceEntry>,
    },
    Bare(Vec<PreferenceEntry>),
}

#[derive(Debug, Deserialize)]
struct PreferenceEntry {
    #[serde(rename = "trait", alias = "category", alias = "name")]
    trait_name: String,
    importance: Option<u8>,
}

impl PreferenceEntry {
    fn resolve(&self) -> Result<Preference, PreferenceError> {
        let trait_key = TraitKey::parse_loose(&self.trait_name).ok_or_else(|| {
            PreferenceError::UnknownTrait {
                raw: self.trait_name.clone(),
                known: known_trait_names(),
            }
        })?;
        let importance = Rating::from_u8(self.importance.unwrap_or(Rating::default().value()))?;
        Ok(Preference::new(trait_key, importance))
    }
}

fn known_trait_names() -> String {
    TraitKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse preferences from JSON text.
///
/// # Errors
///
/// Returns `PreferenceError` for malformed JSON, unknown trait names, or
/// importance values outside 1-5.
pub fn load_preferences_from_str(raw: &str) -> Result<Vec<Preference>, PreferenceError> {
    let doc: PreferenceDoc = serde_json::from_str(raw)?;
    let entries = match doc {
        PreferenceDoc::Wrapped { preferences } => preferences,
        PreferenceDoc::Bare(entries) => entries,
    };
    entries.iter().map(PreferenceEntry::resolve).collect()
}

/// Read and parse a preferences JSON file.
///
/// # Errors
///
/// Returns `PreferenceError` for I/O failures or any parse failure of
/// [`load_preferences_from_str`].
pub fn load_preferences_from_file(
    path: impl AsRef<Path>,
) -> Result<Vec<Preference>, PreferenceError> {
    let raw = std::fs::read_to_string(path)?;
    load_preferences_from_str(&raw)
}

#[derive(Debug, Serialize)]
struct PreferenceExport<'a> {
    preferences: &'a [Preference],
}

/// Serialize a completed questionnaire run as a preferences file.
///
/// The output loads back through [`load_preferences_from_str`].
///
/// # Errors
///
/// Returns `PreferenceError` if serialization fails.
pub fn export_preferences(summary: &ResponseSummary) -> Result<String, PreferenceError> {
    let preferences = summary.preferences();
    let export = PreferenceExport {
        preferences: &preferences,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
