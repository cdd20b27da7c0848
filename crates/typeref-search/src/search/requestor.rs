use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
};

use lsp_types::Range;
use serde::{Deserialize, Serialize};

use crate::{
    search::element::{EnclosingElement, SourceText},
    text_pos::range_from_span,
};

/// How much a search consumer can trust a reported match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    Accurate,
    /// A "possible match": the type was inferred rather than known.
    Inaccurate,
}

/// Identifies the search participant that produced a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchParticipant(String);

impl SearchParticipant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SearchParticipant {
    fn default() -> Self {
        Self::new("typeref-search")
    }
}

impl Display for SearchParticipant {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exact `(offset, length)` span in a unit's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchSpan {
    pub offset: usize,
    pub length: usize,
}

impl MatchSpan {
    pub const fn new(
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            offset,
            length,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// A reference to the searched type, located in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReferenceMatch {
    pub element: EnclosingElement,
    pub accuracy: Accuracy,
    pub offset: usize,
    pub length: usize,
    /// Type references found by this search never come from doc comments.
    pub inside_doc_comment: bool,
    pub participant: SearchParticipant,
    pub resource: Option<PathBuf>,
}

impl TypeReferenceMatch {
    pub fn span(&self) -> MatchSpan {
        MatchSpan::new(self.offset, self.length)
    }

    /// Editor range of the match within `text`.
    pub fn lsp_range(
        &self,
        text: &SourceText,
    ) -> Range {
        range_from_span(text, self.span())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestorError {
    Rejected {
        reason: String,
    },
    Closed,
}

impl Display for RequestorError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Rejected {
                reason,
            } => write!(f, "match rejected: {reason}"),
            Self::Closed => f.write_str("requestor is closed"),
        }
    }
}

impl std::error::Error for RequestorError {}

/// Receives matches from a search.
pub trait SearchRequestor {
    fn accept_search_match(
        &mut self,
        search_match: TypeReferenceMatch,
    ) -> Result<(), RequestorError>;

    /// Path of the type consuming matches.
    ///
    /// Requestors that live in a refactoring module get every match reported
    /// as accurate; see [`owning_module`].
    fn origin(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Module path of a type path: generic arguments and the final segment are
/// dropped, so `app::refactoring::Rename<u8>` gives `app::refactoring`.
pub fn owning_module(type_path: &str) -> &str {
    let base = type_path.split('<').next().unwrap_or(type_path);
    base.rsplit_once("::").map_or("", |(module, _)| module)
}

/// Keeps every accepted match in memory.
#[derive(Debug, Default)]
pub struct CollectingRequestor {
    matches: Vec<TypeReferenceMatch>,
}

impl CollectingRequestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> &[TypeReferenceMatch] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<TypeReferenceMatch> {
        self.matches
    }
}

impl SearchRequestor for CollectingRequestor {
    fn accept_search_match(
        &mut self,
        search_match: TypeReferenceMatch,
    ) -> Result<(), RequestorError> {
        self.matches.push(search_match);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src/search/requestor_tests.rs"]
mod tests;
