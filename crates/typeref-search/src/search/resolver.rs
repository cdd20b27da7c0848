use std::collections::HashSet;

use tracing::{debug, error, warn};

use crate::{
    ast::{ClassRef, SourceRange, TypeConfidence, TypeLookupResult, VisitedNode, NO_OFFSET},
    config::SearchSettings,
    search::{
        element::EnclosingElement,
        locate::{locate_in_text, raw_span},
        pattern::{PatternAccess, qualified_target},
        requestor::{Accuracy, MatchSpan, SearchParticipant, SearchRequestor, TypeReferenceMatch, owning_module},
        visit::{TypeRequestor, VisitStatus},
    },
};

/// Where a node's reference probably sits, before text recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OffsetHint {
    Refine {
        start: i32,
        end: i32,
    },
    Skip(&'static str),
}

impl OffsetHint {
    fn from_range(range: Option<SourceRange>) -> Self {
        let range = range.unwrap_or(SourceRange::new(NO_OFFSET, NO_OFFSET));
        Self::Refine {
            start: range.start,
            end: range.end,
        }
    }
}

/// Turns visited nodes that reference one type into located search matches.
///
/// One resolver serves one search: it remembers every span it has reported,
/// per unit, and never reports the same span twice, since field and object
/// initializers are visited once per constructor they are pushed into.
pub struct TypeReferenceResolver<R> {
    requestor: R,
    participant: SearchParticipant,
    target: String,
    is_case_sensitive: bool,
    is_camel_case: bool,
    always_accurate: bool,
    settings: SearchSettings,
    accepted_spans: HashSet<(String, MatchSpan)>,
}

impl<R: SearchRequestor> TypeReferenceResolver<R> {
    pub fn new(
        pattern: &(impl PatternAccess + ?Sized),
        requestor: R,
        participant: SearchParticipant,
    ) -> Self {
        Self::with_settings(pattern, requestor, participant, SearchSettings::default())
    }

    pub fn with_settings(
        pattern: &(impl PatternAccess + ?Sized),
        requestor: R,
        participant: SearchParticipant,
        settings: SearchSettings,
    ) -> Self {
        let always_accurate =
            owning_module(requestor.origin()).contains(settings.accuracy.always_accurate_marker.as_str());
        Self {
            requestor,
            participant,
            target: qualified_target(pattern),
            is_case_sensitive: pattern.is_case_sensitive(),
            is_camel_case: pattern.is_camel_case(),
            always_accurate,
            settings,
            accepted_spans: HashSet::new(),
        }
    }

    pub fn requestor(&self) -> &R {
        &self.requestor
    }

    pub fn into_requestor(self) -> R {
        self.requestor
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.is_case_sensitive
    }

    pub fn is_camel_case(&self) -> bool {
        self.is_camel_case
    }

    pub fn accepted_span_count(&self) -> usize {
        self.accepted_spans.len()
    }

    fn resolve(
        &mut self,
        node: &VisitedNode,
        result: &TypeLookupResult,
        element: &EnclosingElement,
    ) {
        if !self.is_searchable(node) {
            return;
        }
        let Some(ty) = target_type(node, result) else {
            return;
        };
        let ty = ty.remove_array();
        if !self.qualified_name_matches(&ty.name) || !has_valid_source_location(node) {
            return;
        }

        let (start, end) = match offset_hint(node) {
            OffsetHint::Refine {
                start,
                end,
            } => (start, end),
            OffsetHint::Skip(reason) => {
                debug!("[typeref] skipping {} for '{}': {reason}", node.kind_name(), ty.name);
                return;
            },
        };

        let Some(span) = self.locate(ty, element, start, end) else {
            return;
        };
        if span.is_empty() {
            return;
        }
        let seen_key = (unit_key(element), span);
        if self.accepted_spans.contains(&seen_key) {
            return;
        }

        let search_match = TypeReferenceMatch {
            element: element.clone(),
            accuracy: self.accuracy(result.confidence),
            offset: span.offset,
            length: span.length,
            inside_doc_comment: false,
            participant: self.participant.clone(),
            resource: element.resource.clone(),
        };
        match self.requestor.accept_search_match(search_match) {
            Ok(()) => {
                debug!("[typeref] {} match for '{}' at {}+{}", node.kind_name(), ty.name, span.offset, span.length);
                self.accepted_spans.insert(seen_key);
            },
            Err(err) => error!("Error accepting search match for {element}: {err}"),
        }
    }

    fn is_searchable(
        &self,
        node: &VisitedNode,
    ) -> bool {
        match node {
            VisitedNode::ClassExpression {
                ..
            }
            | VisitedNode::ClassReference(_)
            | VisitedNode::Import {
                ..
            }
            | VisitedNode::Annotation {
                ..
            } => true,
            VisitedNode::Constructor {
                ..
            } => self.settings.matching.include_constructors,
            VisitedNode::Other => false,
        }
    }

    fn qualified_name_matches(
        &self,
        qualified_name: &str,
    ) -> bool {
        // No wildcard or camel-case matching yet. The case and camel-case flags
        // do not change the comparison either: matching is exact.
        qualified_name == self.target
    }

    fn locate(
        &self,
        ty: &ClassRef,
        element: &EnclosingElement,
        maybe_start: i32,
        maybe_end: i32,
    ) -> Option<MatchSpan> {
        match element.compilation_unit() {
            Some(unit) => locate_in_text(
                ty,
                &unit.contents,
                maybe_start,
                maybe_end,
                self.settings.text_search.case_sensitive,
            ),
            None if self.settings.text_search.fallback_to_ast_offsets => {
                warn!("[typeref] no source for {element}, using raw offsets of '{}'", ty.name);
                raw_span(ty)
            },
            None => None,
        }
    }

    fn accuracy(
        &self,
        confidence: TypeConfidence,
    ) -> Accuracy {
        if self.always_accurate {
            return Accuracy::Accurate;
        }
        match confidence {
            TypeConfidence::Exact => Accuracy::Accurate,
            _ => Accuracy::Inaccurate,
        }
    }
}

impl<R: SearchRequestor> TypeRequestor for TypeReferenceResolver<R> {
    fn accept_ast_node(
        &mut self,
        node: &VisitedNode,
        result: &TypeLookupResult,
        enclosing_element: &EnclosingElement,
    ) -> VisitStatus {
        self.resolve(node, result, enclosing_element);
        VisitStatus::Continue
    }
}

/// The type a node refers to. A `Foo.class` literal is inferred as the
/// metatype, but the reference being searched for is `Foo`.
fn target_type<'a>(
    node: &'a VisitedNode,
    result: &'a TypeLookupResult,
) -> Option<&'a ClassRef> {
    match node {
        VisitedNode::Annotation {
            class,
            ..
        } => Some(class),
        VisitedNode::Constructor {
            declaring_class,
            ..
        } => Some(declaring_class),
        VisitedNode::ClassExpression {
            operand,
            ..
        } if result.is_metatype() => Some(operand),
        _ => result.ty.as_ref(),
    }
}

/// The text a span indexes into: the owning unit, else the element's
/// resource. Elements with neither share one key.
fn unit_key(element: &EnclosingElement) -> String {
    match (element.compilation_unit(), &element.resource) {
        (Some(unit), _) => unit.id.as_str().to_string(),
        (None, Some(resource)) => resource.display().to_string(),
        (None, None) => String::new(),
    }
}

fn has_valid_source_location(node: &VisitedNode) -> bool {
    let end = match node {
        VisitedNode::ClassReference(class_ref) => class_ref.with_located_component().end(),
        _ => node.end(),
    };
    end > 0
}

fn offset_hint(node: &VisitedNode) -> OffsetHint {
    match node {
        VisitedNode::Import {
            range,
        } => import_hint(*range),
        VisitedNode::ClassExpression {
            range,
            ..
        } => class_expression_hint(*range),
        VisitedNode::ClassReference(class_ref) => class_reference_hint(class_ref),
        VisitedNode::Constructor {
            name_start,
            name_end,
            ..
        } => constructor_hint(*name_start, *name_end),
        VisitedNode::Annotation {
            class,
            ..
        } => annotation_hint(class),
        VisitedNode::Other => OffsetHint::Skip("not a type reference"),
    }
}

/// Import ranges span the whole statement; the scan narrows them.
fn import_hint(range: Option<SourceRange>) -> OffsetHint {
    OffsetHint::from_range(range)
}

fn class_expression_hint(range: Option<SourceRange>) -> OffsetHint {
    OffsetHint::from_range(range)
}

fn class_reference_hint(class_ref: &ClassRef) -> OffsetHint {
    if class_ref.is_declaration() {
        return OffsetHint::Skip("declaration site");
    }
    if class_ref.self_redirect {
        return OffsetHint::Skip("script class");
    }
    let located = class_ref.with_located_component();
    OffsetHint::Refine {
        start: located.start(),
        end: located.end(),
    }
}

fn constructor_hint(
    name_start: i32,
    name_end: i32,
) -> OffsetHint {
    let end = name_end.saturating_add(1);
    // Script constructors are synthesized with a 0..1 name.
    if name_start == 0 && end == 1 {
        return OffsetHint::Skip("synthetic script constructor");
    }
    OffsetHint::Refine {
        start: name_start,
        end,
    }
}

fn annotation_hint(class: &ClassRef) -> OffsetHint {
    OffsetHint::Refine {
        start: class.start(),
        end: class.end(),
    }
}

#[cfg(test)]
#[path = "../../tests/src/search/resolver_tests.rs"]
mod tests;
