use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_ALWAYS_ACCURATE_MARKER: &str = "refactoring";

#[derive(Debug, Clone, PartialEq)]
pub struct AccuracySettings {
    /// Requestors whose owning module contains this marker get every match
    /// reported as accurate.
    pub always_accurate_marker: String,
}

impl Default for AccuracySettings {
    fn default() -> Self {
        Self {
            always_accurate_marker: DEFAULT_ALWAYS_ACCURATE_MARKER.to_string(),
        }
    }
}

impl AccuracySettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: AccuracySettingsPatch,
    ) {
        if let Some(v) = patch.always_accurate_marker {
            self.always_accurate_marker = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        let trimmed = self.always_accurate_marker.trim();
        self.always_accurate_marker = if trimmed.is_empty() {
            DEFAULT_ALWAYS_ACCURATE_MARKER.to_string()
        } else {
            trimmed.to_string()
        };
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct AccuracySettingsPatch {
    pub(crate) always_accurate_marker: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
