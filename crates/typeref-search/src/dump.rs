//! Recorded visitor event dumps and the match reports printed for them.

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
    sync::Arc,
};

use lsp_types::Range;
use serde::Serialize;

use crate::search::{Accuracy, CompilationUnit, TypeReferenceMatch, VisitEvent};

#[derive(Debug)]
pub enum DumpError {
    Io {
        path: PathBuf,
        reason: String,
    },
    Json {
        path: PathBuf,
        reason: String,
    },
}

impl Display for DumpError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Io {
                path,
                reason,
            } => write!(f, "failed to read {}: {reason}", path.display()),
            Self::Json {
                path,
                reason,
            } => write!(f, "malformed events in {}: {reason}", path.display()),
        }
    }
}

impl std::error::Error for DumpError {}

/// Read a JSON array of [`VisitEvent`]s. When `unit` is given it becomes the
/// compilation unit of every event's element.
pub fn load_events(
    path: &Path,
    unit: Option<Arc<CompilationUnit>>,
) -> Result<Vec<VisitEvent>, DumpError> {
    let content = std::fs::read_to_string(path).map_err(|error| DumpError::Io {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    let mut events: Vec<VisitEvent> = serde_json::from_str(&content).map_err(|error| DumpError::Json {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    if let Some(unit) = unit {
        for event in &mut events {
            event.element.unit = Some(Arc::clone(&unit));
        }
    }
    Ok(events)
}

pub fn load_unit(path: &Path) -> Result<Arc<CompilationUnit>, DumpError> {
    CompilationUnit::load(path).map(Arc::new).map_err(|error| DumpError::Io {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}

/// Serializable view of a match, as printed by the replay tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub element: String,
    pub accuracy: Accuracy,
    pub offset: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl MatchReport {
    pub fn from_match(search_match: &TypeReferenceMatch) -> Self {
        let unit = search_match.element.compilation_unit();
        Self {
            element: search_match.element.handle.clone(),
            accuracy: search_match.accuracy,
            offset: search_match.offset,
            length: search_match.length,
            text: unit.map(|unit| unit.contents.slice(search_match.offset, search_match.length)),
            range: unit.map(|unit| search_match.lsp_range(&unit.contents)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/src/dump_tests.rs"]
mod tests;
