use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::SearchSettings;

pub const CONFIG_FILENAME: &str = "typeref-search.toml";

/// Walks parent directories from `start` looking for `typeref-search.toml`.
/// Returns the path to the first one found, or `None`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Reads a TOML settings file and merges it over the defaults.
///
/// Keys use the same camelCase names as JSON payloads; a `[typeref-search]`
/// table is accepted as well as top-level sections.
pub fn load_config_file(path: &Path) -> Result<SearchSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    parse_config(&content).map_err(|reason| ConfigError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

pub(crate) fn parse_config(content: &str) -> Result<SearchSettings, String> {
    let table: toml::Table = toml::from_str(content).map_err(|error| error.to_string())?;
    let payload: Value = serde_json::to_value(table).map_err(|error| error.to_string())?;
    Ok(SearchSettings::from_payload(Some(&payload)))
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        reason: String,
    },
    Parse {
        path: PathBuf,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Io {
                path,
                reason,
            } => {
                write!(f, "failed to read {}: {reason}", path.display())
            },
            Self::Parse {
                path,
                reason,
            } => {
                write!(f, "invalid settings in {}: {reason}", path.display())
            },
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "../../tests/src/config/file_tests.rs"]
mod tests;
