use lsp_types::{Position, Range};

use crate::search::{element::SourceText, requestor::MatchSpan};

const NEWLINE: u16 = b'\n' as u16;

/// LSP position (0-based line, UTF-16 column) of a UTF-16 offset. Offsets past
/// the end clamp to the end of the text.
pub fn position_from_offset(
    text: &SourceText,
    offset: usize,
) -> Position {
    let mut line = 0u32;
    let mut utf16_col = 0u32;

    for &unit in text.utf16().iter().take(offset) {
        if unit == NEWLINE {
            line += 1;
            utf16_col = 0;
        } else {
            utf16_col += 1;
        }
    }

    Position::new(line, utf16_col)
}

pub fn range_from_span(
    text: &SourceText,
    span: MatchSpan,
) -> Range {
    Range::new(position_from_offset(text, span.offset), position_from_offset(text, span.end()))
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
