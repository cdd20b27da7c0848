use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct TextSearchSettings {
    /// Exact-case scan for the type name. Off by default.
    pub case_sensitive: bool,
    /// Report the node's raw offsets when the element has no loaded unit.
    pub fallback_to_ast_offsets: bool,
}

impl Default for TextSearchSettings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            fallback_to_ast_offsets: true,
        }
    }
}

impl TextSearchSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: TextSearchSettingsPatch,
    ) {
        if let Some(v) = patch.case_sensitive {
            self.case_sensitive = v;
        }
        if let Some(v) = patch.fallback_to_ast_offsets {
            self.fallback_to_ast_offsets = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TextSearchSettingsPatch {
    pub(crate) case_sensitive: Option<bool>,
    pub(crate) fallback_to_ast_offsets: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
