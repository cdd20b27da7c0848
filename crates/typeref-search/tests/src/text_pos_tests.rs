use super::*;

#[test]
fn positions_count_lines_and_utf16_columns() {
    let text = SourceText::new("import pkg.Foo\n// 🦀 Foo\nFoo x");

    assert_eq!(position_from_offset(&text, 0), Position::new(0, 0));
    assert_eq!(position_from_offset(&text, 7), Position::new(0, 7));
    // The crab takes two code units.
    assert_eq!(position_from_offset(&text, 21), Position::new(1, 6));
    assert_eq!(position_from_offset(&text, 25), Position::new(2, 0));
    assert_eq!(position_from_offset(&text, 1000), Position::new(2, 5));
}

#[test]
fn span_becomes_single_line_range() {
    let text = SourceText::new("class Bar\n  extends Foo {}");
    let range = range_from_span(&text, MatchSpan::new(20, 3));

    assert_eq!(range, Range::new(Position::new(1, 10), Position::new(1, 13)));
}

#[test]
fn span_after_astral_char_keeps_its_columns() {
    let text = SourceText::new("// 😀\nclass Bar extends Foo {}");
    let range = range_from_span(&text, MatchSpan::new(24, 3));

    assert_eq!(range, Range::new(Position::new(1, 18), Position::new(1, 21)));
}
