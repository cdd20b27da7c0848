use super::*;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn index_of_respects_bounds() {
    let haystack = utf16("Foo bar Foo");
    let needle = utf16("Foo");

    assert_eq!(index_of(&needle, &haystack, true, 0, 11), Some(0));
    assert_eq!(index_of(&needle, &haystack, true, 1, 11), Some(8));
    // The whole needle must fit before `end`.
    assert_eq!(index_of(&needle, &haystack, true, 1, 10), None);
    assert_eq!(index_of(&needle, &haystack, true, 8, 100), Some(8));
}

#[test]
fn index_of_rejects_negative_bounds_and_empty_needle() {
    let haystack = utf16("Foo");
    assert_eq!(index_of(&utf16("Foo"), &haystack, true, -1, 3), None);
    assert_eq!(index_of(&utf16("Foo"), &haystack, true, 0, -1), None);
    assert_eq!(index_of(&[], &haystack, true, 0, 3), None);
}

#[test]
fn index_of_case_folding() {
    let haystack = utf16("extends FOO");
    assert_eq!(index_of(&utf16("Foo"), &haystack, true, 0, 11), None);
    assert_eq!(index_of(&utf16("Foo"), &haystack, false, 0, 11), Some(8));
}

#[test]
fn prefers_qualified_name_when_hint_is_wide_enough() {
    let text = SourceText::new("import pkg.Foo");
    let ty = ClassRef::new("pkg.Foo");

    assert_eq!(locate_in_text(&ty, &text, 0, 14, false), Some(MatchSpan::new(7, 7)));
}

#[test]
fn falls_back_to_simple_name() {
    let text = SourceText::new("class Bar extends Foo {}");
    let ty = ClassRef::new("pkg.Foo");

    assert_eq!(locate_in_text(&ty, &text, 18, 21, false), Some(MatchSpan::new(18, 3)));
    // Wide hint, but only the simple name is written.
    assert_eq!(locate_in_text(&ty, &text, 0, 24, false), Some(MatchSpan::new(18, 3)));
}

#[test]
fn nested_class_keeps_outer_prefix() {
    let text = SourceText::new("Outer$Inner x");
    let ty = ClassRef::new("pkg.Outer$Inner");
    assert_eq!(ty.name_without_package(), "Outer$Inner");

    assert_eq!(locate_in_text(&ty, &text, 0, 11, true), Some(MatchSpan::new(0, 11)));
}

#[test]
fn aliased_name_is_not_found() {
    let text = SourceText::new("import pkg.Foo as F\nF x = null");
    let ty = ClassRef::new("pkg.Foo");

    assert_eq!(locate_in_text(&ty, &text, 20, 21, false), None);
}

#[test]
fn offsets_count_utf16_units_not_bytes() {
    let text = SourceText::new("// é\nFoo x");
    let ty = ClassRef::new("pkg.Foo");

    assert_eq!(locate_in_text(&ty, &text, 5, 8, true), Some(MatchSpan::new(5, 3)));
}

#[test]
fn astral_char_before_reference_takes_two_units() {
    let text = SourceText::new("// 😀\nclass Bar extends Foo {}");
    let ty = ClassRef::new("pkg.Foo");

    let span = locate_in_text(&ty, &text, 24, 27, true);

    assert_eq!(span, Some(MatchSpan::new(24, 3)));
    assert_eq!(text.slice(24, 3), "Foo");
    assert_eq!(text.len(), 30);
}

#[test]
fn case_folding_leaves_surrogates_alone() {
    let haystack = utf16("😀FOO");
    assert_eq!(index_of(&utf16("foo"), &haystack, false, 0, 5), Some(2));
    assert_eq!(index_of(&utf16("😀"), &haystack, false, 0, 5), Some(0));
}

#[test]
fn hint_past_end_of_text_is_clamped() {
    let text = SourceText::new("extends Foo");
    let ty = ClassRef::new("pkg.Foo");

    assert_eq!(locate_in_text(&ty, &text, 8, 40, true), Some(MatchSpan::new(8, 3)));
}

#[test]
fn raw_span_requires_a_positive_extent() {
    assert_eq!(raw_span(&ClassRef::new("pkg.Foo").at(4, 7)), Some(MatchSpan::new(4, 3)));
    assert_eq!(raw_span(&ClassRef::new("pkg.Foo").at(4, 4)), None);
    assert_eq!(raw_span(&ClassRef::new("pkg.Foo").at(-1, 7)), None);
    assert_eq!(raw_span(&ClassRef::new("pkg.Foo")), None);
}
