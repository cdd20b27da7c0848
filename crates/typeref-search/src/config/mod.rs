//! Search settings.
//!
//! Settings are split into one file per category. [`SearchSettings`]
//! aggregates all categories and merges JSON payloads (direct or nested under
//! [`SETTINGS_SECTION_KEY`]) and `typeref-search.toml` files over defaults.

pub(crate) mod accuracy;
pub(crate) mod file;
pub(crate) mod logging;
pub(crate) mod matching;
pub(crate) mod text_search;

use std::collections::HashMap;

pub use accuracy::{AccuracySettings, DEFAULT_ALWAYS_ACCURATE_MARKER};
use accuracy::AccuracySettingsPatch;
pub use file::{CONFIG_FILENAME, ConfigError, find_config_file, load_config_file};
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
pub use matching::MatchingSettings;
use matching::MatchingSettingsPatch;
use serde::Deserialize;
use serde_json::Value;
pub use text_search::TextSearchSettings;
use text_search::TextSearchSettingsPatch;

pub const SETTINGS_SECTION_KEY: &str = "typeref-search";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSettings {
    pub matching: MatchingSettings,
    pub text_search: TextSearchSettings,
    pub accuracy: AccuracySettings,
    pub logging: LoggingSettings,
}

impl SearchSettings {
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<SearchSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: SearchSettingsPatch,
    ) {
        if let Some(p) = patch.matching {
            self.matching.apply_patch(p);
        }
        if let Some(p) = patch.text_search {
            self.text_search.apply_patch(p);
        }
        if let Some(p) = patch.accuracy {
            self.accuracy.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.accuracy.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SearchSettingsPatch {
    matching: Option<MatchingSettingsPatch>,
    text_search: Option<TextSearchSettingsPatch>,
    accuracy: Option<AccuracySettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
