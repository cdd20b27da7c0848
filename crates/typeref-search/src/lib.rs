pub mod ast;
pub mod config;
pub mod dump;
pub mod search;
pub mod text_pos;

pub use ast::{ClassRef, SourceRange, TypeConfidence, TypeLookupResult, VisitedNode};
pub use config::SearchSettings;
pub use search::{
    Accuracy, CollectingRequestor, CompilationUnit, EnclosingElement, MatchSpan, PatternAccess, RequestorError,
    SearchParticipant, SearchRequestor, SourceText, TypeReferenceMatch, TypeReferencePattern, TypeReferenceResolver,
    TypeRequestor, UnitId, VisitEvent, VisitStatus,
};
