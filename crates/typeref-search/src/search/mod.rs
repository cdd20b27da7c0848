//! Type-reference search: resolving visited nodes into located matches.

pub mod element;
pub mod locate;
pub mod pattern;
pub mod requestor;
mod resolver;
pub mod visit;

pub use element::{CompilationUnit, EnclosingElement, SourceText, UnitId};
pub use pattern::{PatternAccess, TypeReferencePattern, qualified_target};
pub use requestor::{
    Accuracy, CollectingRequestor, MatchSpan, RequestorError, SearchParticipant, SearchRequestor, TypeReferenceMatch,
    owning_module,
};
pub use resolver::TypeReferenceResolver;
pub use visit::{TypeRequestor, VisitEvent, VisitStatus, replay};
