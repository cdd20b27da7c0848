use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchingSettings {
    /// Resolve constructor nodes too. Off by default: the constructed class
    /// is already visited as a class reference.
    pub include_constructors: bool,
}

impl MatchingSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: MatchingSettingsPatch,
    ) {
        if let Some(v) = patch.include_constructors {
            self.include_constructors = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MatchingSettingsPatch {
    pub(crate) include_constructors: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
