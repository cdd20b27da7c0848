use super::*;

#[test]
fn owning_module_drops_type_and_generics() {
    assert_eq!(owning_module("app::refactoring::RenameRequestor"), "app::refactoring");
    assert_eq!(owning_module("app::refactoring::Rename<app::search::Match>"), "app::refactoring");
    assert_eq!(owning_module("Standalone"), "");
}

#[test]
fn default_origin_is_the_type_path() {
    let requestor = CollectingRequestor::new();
    assert_eq!(requestor.origin(), "typeref_search::search::requestor::CollectingRequestor");
    assert!(!owning_module(requestor.origin()).contains("refactoring"));
}

#[test]
fn match_exposes_span_and_editor_range() {
    let text = SourceText::new("import pkg.Foo\nclass Bar extends Foo {}");
    let search_match = TypeReferenceMatch {
        element: EnclosingElement::new("Bar.groovy/Bar"),
        accuracy: Accuracy::Accurate,
        offset: 33,
        length: 3,
        inside_doc_comment: false,
        participant: SearchParticipant::default(),
        resource: None,
    };

    assert_eq!(search_match.span(), MatchSpan::new(33, 3));
    assert_eq!(search_match.span().end(), 36);
    let range = search_match.lsp_range(&text);
    assert_eq!((range.start.line, range.start.character), (1, 18));
    assert_eq!((range.end.line, range.end.character), (1, 21));
}

#[test]
fn requestor_error_messages() {
    let rejected = RequestorError::Rejected {
        reason: "index locked".to_string(),
    };
    assert_eq!(rejected.to_string(), "match rejected: index locked");
    assert_eq!(RequestorError::Closed.to_string(), "requestor is closed");
}
