use serde_json::json;

use super::*;

#[test]
fn remove_array_unwraps_every_dimension() {
    let foo = ClassRef::new("pkg.Foo").at(0, 3);
    let grid = ClassRef::array_of(ClassRef::array_of(foo.clone()));

    assert_eq!(grid.name, "pkg.Foo[][]");
    assert!(grid.is_array());
    assert_eq!(grid.remove_array(), &foo);
    assert_eq!(foo.remove_array(), &foo);
}

#[test]
fn located_component_is_only_one_level_deep() {
    let foo = ClassRef::new("pkg.Foo").at(0, 3);
    let array = ClassRef::array_of(foo.clone());
    assert_eq!(array.with_located_component(), &foo);

    let grid = ClassRef::array_of(array.clone());
    assert_eq!(grid.with_located_component(), &grid);
}

#[test]
fn missing_ranges_read_as_no_offset() {
    let foo = ClassRef::new("pkg.Foo");
    assert_eq!((foo.start(), foo.end()), (NO_OFFSET, NO_OFFSET));
    assert_eq!(VisitedNode::Import { range: None }.end(), NO_OFFSET);
    assert_eq!(VisitedNode::Other.start(), NO_OFFSET);
}

#[test]
fn declaration_marker_needs_positive_name_end() {
    assert!(ClassRef::new("pkg.Foo").declared(9).is_declaration());
    assert!(!ClassRef::new("pkg.Foo").declared(0).is_declaration());
    assert!(!ClassRef::new("pkg.Foo").is_declaration());
}

#[test]
fn deserializes_tagged_nodes() {
    let nodes: Vec<VisitedNode> = serde_json::from_value(json!([
        { "kind": "import", "range": { "start": 0, "end": 14 } },
        { "kind": "classReference", "name": "pkg.Foo", "range": { "start": 34, "end": 37 } },
        {
            "kind": "classExpression",
            "operand": { "name": "pkg.Foo" },
            "range": { "start": 11, "end": 20 }
        },
        {
            "kind": "constructor",
            "declaringClass": { "name": "pkg.Foo" },
            "nameStart": 12,
            "nameEnd": 14
        },
        { "kind": "methodCall" }
    ]))
    .expect("nodes deserialize");

    assert_eq!(nodes[0].kind_name(), "import");
    assert_eq!(nodes[1], VisitedNode::ClassReference(ClassRef::new("pkg.Foo").at(34, 37)));
    assert_eq!(nodes[2].end(), 20);
    assert_eq!(nodes[3].kind_name(), "constructor");
    assert_eq!(nodes[4], VisitedNode::Other);
}

#[test]
fn lookup_result_detects_metatype() {
    let result: TypeLookupResult =
        serde_json::from_value(json!({ "type": { "name": "java.lang.Class" }, "confidence": "EXACT" }))
            .expect("result deserializes");
    assert!(result.is_metatype());
    assert_eq!(result.confidence, TypeConfidence::Exact);

    let untyped = TypeLookupResult::untyped();
    assert!(!untyped.is_metatype());
    assert_eq!(untyped.confidence, TypeConfidence::Unknown);
}
