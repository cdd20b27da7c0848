//! Text-based recovery of a reference's exact span.
//!
//! The parser's range for a type reference is only a hint: the reference may
//! be written fully qualified or simple, the hint may be off by one, or it may
//! cover a whole `import` statement. The hint bounds a scan of the unit text
//! for the type's name.

use tracing::debug;

use crate::{
    ast::ClassRef,
    search::{element::SourceText, requestor::MatchSpan},
};

/// First offset `i >= start` where `needle` occurs with `i + needle.len() <=
/// end`, over UTF-16 code units. `end` is clamped to the haystack. A negative
/// bound or an empty needle never matches.
pub fn index_of(
    needle: &[u16],
    haystack: &[u16],
    case_sensitive: bool,
    start: i64,
    end: i64,
) -> Option<usize> {
    if needle.is_empty() || start < 0 || end < 0 {
        return None;
    }
    let start = usize::try_from(start).ok()?;
    let end = usize::try_from(end).ok()?.min(haystack.len());
    if start >= end || needle.len() > end - start {
        return None;
    }

    haystack[start..end]
        .windows(needle.len())
        .position(|window| window.iter().zip(needle).all(|(&a, &b)| units_match(a, b, case_sensitive)))
        .map(|position| position + start)
}

fn units_match(
    a: u16,
    b: u16,
    case_sensitive: bool,
) -> bool {
    a == b || (!case_sensitive && fold_case(a) == fold_case(b))
}

/// Lowercase of a single code unit. Surrogates and characters whose lowercase
/// is more than one char fold to themselves.
fn fold_case(unit: u16) -> u32 {
    let Some(ch) = char::from_u32(u32::from(unit)) else {
        return u32::from(unit);
    };
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => u32::from(folded),
        _ => u32::from(unit),
    }
}

/// Locate `ty` in `text` between the hinted offsets.
///
/// The qualified name is tried when it fits in the hint, then the name without
/// package. `None` means the reference is spelled differently in source (an
/// import alias, typically) and cannot be placed.
pub fn locate_in_text(
    ty: &ClassRef,
    text: &SourceText,
    maybe_start: i32,
    maybe_end: i32,
    case_sensitive: bool,
) -> Option<MatchSpan> {
    let hint_len = i64::from(maybe_end) - i64::from(maybe_start);
    let scan_start = i64::from(maybe_start);
    let scan_end = i64::from(maybe_end) + 1;

    let qualified: Vec<u16> = ty.name.encode_utf16().collect();
    if qualified.len() as i64 <= hint_len
        && let Some(offset) = index_of(&qualified, text.utf16(), case_sensitive, scan_start, scan_end)
    {
        return Some(MatchSpan::new(offset, qualified.len()));
    }

    let simple: Vec<u16> = ty.name_without_package().encode_utf16().collect();
    let found = index_of(&simple, text.utf16(), case_sensitive, scan_start, scan_end)
        .map(|offset| MatchSpan::new(offset, simple.len()));
    if found.is_none() {
        debug!("[typeref] '{}' not present in {maybe_start}..={maybe_end}, likely aliased", ty.name);
    }
    found
}

/// Span from the node's raw offsets, used when there is no text to scan.
pub fn raw_span(ty: &ClassRef) -> Option<MatchSpan> {
    let start = usize::try_from(ty.start()).ok()?;
    let end = usize::try_from(ty.end()).ok()?;
    if end <= start {
        return None;
    }
    Some(MatchSpan::new(start, end - start))
}

#[cfg(test)]
#[path = "../../tests/src/search/locate_tests.rs"]
mod tests;
