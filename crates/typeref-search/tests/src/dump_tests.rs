use std::{fs, path::PathBuf};

use serde_json::json;

use super::*;
use crate::search::{EnclosingElement, SearchParticipant};

fn temp_file(
    name: &str,
    contents: &str,
) -> PathBuf {
    let path = std::env::temp_dir().join(format!("typeref_search_dump_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn attaches_unit_to_every_event() {
    let events = json!([
        {
            "node": { "kind": "import", "range": { "start": 0, "end": 14 } },
            "result": { "type": { "name": "pkg.Foo" }, "confidence": "EXACT" },
            "element": { "handle": "Bar.groovy/Bar", "resource": "Bar.groovy" }
        },
        {
            "node": { "kind": "other" },
            "element": { "handle": "Bar.groovy/Bar#run" }
        }
    ]);
    let events_path = temp_file("events.json", &events.to_string());
    let source_path = temp_file("Bar.groovy", "import pkg.Foo; class Bar extends Foo {}");

    let unit = load_unit(&source_path).unwrap();
    let loaded = load_events(&events_path, Some(unit)).unwrap();

    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().all(|event| event.element.compilation_unit().is_some()));
    assert_eq!(loaded[1].result.ty, None);

    let _ = fs::remove_file(events_path);
    let _ = fs::remove_file(source_path);
}

#[test]
fn reports_malformed_events() {
    let path = temp_file("broken.json", "{ not json");

    let error = load_events(&path, None).unwrap_err();
    assert!(matches!(error, DumpError::Json { .. }));

    let _ = fs::remove_file(path);
}

#[test]
fn report_includes_text_and_range_when_unit_is_known() {
    let unit = Arc::new(CompilationUnit::new(
        crate::search::UnitId::new("Bar.groovy"),
        "import pkg.Foo\nclass Bar extends Foo {}",
    ));
    let search_match = TypeReferenceMatch {
        element: EnclosingElement::new("Bar.groovy/Bar").with_unit(unit),
        accuracy: Accuracy::Accurate,
        offset: 33,
        length: 3,
        inside_doc_comment: false,
        participant: SearchParticipant::default(),
        resource: None,
    };

    let report = MatchReport::from_match(&search_match);
    assert_eq!(report.text.as_deref(), Some("Foo"));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["accuracy"], "accurate");
    assert_eq!(json["range"]["start"], json!({ "line": 1, "character": 18 }));

    let without_unit = MatchReport::from_match(&TypeReferenceMatch {
        element: EnclosingElement::new("Bar.class/Bar"),
        ..search_match
    });
    assert_eq!(without_unit.text, None);
    assert!(serde_json::to_value(&without_unit).unwrap().get("range").is_none());
}
