//! Here-document delimiter marker processing.
//!
//! A raw delimiter token such as `'EOF'`, `\EOF`, `"EOF"` or `\t\tEOF` (after
//! `<<-`) carries decoration around the text that terminates the body. The
//! helpers here locate the clean marker inside the raw token, decide whether
//! the body is subject to expansion, and rewrite the marker while keeping its
//! decoration.
//!
//! Offsets are byte offsets. Every offset produced lies next to an ASCII byte
//! (`\`, `$`, quotes, tabs, newlines), so they always fall on char boundaries.

use std::ops::Range;

/// Removes one trailing `\n` from a raw marker token.
fn trim_newline(marker: &str) -> &str {
    marker.strip_suffix('\n').unwrap_or(marker)
}

/// Computes the half-open byte range of the clean marker inside `marker`.
///
/// Trailing newlines are excluded from the range. With
/// `ignore_leading_tabs` set (the `<<-` form), leading tabs are skipped too.
/// The result may be degenerate (`end <= start`) for unusual input; callers
/// fall back to the raw text in that case.
pub fn marker_offsets(marker: &str, ignore_leading_tabs: bool) -> Range<usize> {
    let bytes = marker.as_bytes();
    let mut length = bytes.len();

    match length {
        0 => return 0..0,
        1 => return 0..1,
        _ => {}
    }

    if bytes[0] == b'\\' {
        return 1..length;
    }

    let mut start = 0usize;
    let mut end = length - 1;

    while ignore_leading_tabs && start < length - 1 && bytes[start] == b'\t' {
        start += 1;
    }

    // `$"..."` and `$'...'`: the sigil is not part of the marker.
    if bytes[start] == b'$'
        && length > start + 2
        && (bytes[start + 1] == b'"' || bytes[end] == b'\'')
    {
        start += 1;
        length -= 1;
    }

    while end > 0 && bytes[end] == b'\n' {
        end -= 1;
    }

    if length > 0 && matches!(bytes[start], b'\'' | b'"') && bytes[end] == bytes[start] {
        // A lone quote leaves `end` below `start`; the range is then inverted.
        start += 1;
        match end.checked_sub(1) {
            Some(value) => end = value,
            None => return start..0,
        }
    }

    start..end + 1
}

/// Returns the start offset of the clean marker inside `marker`.
pub fn start_marker_offset(marker: &str, ignore_leading_tabs: bool) -> usize {
    marker_offsets(marker, ignore_leading_tabs).start
}

/// Returns the end offset of the clean marker inside `marker`.
pub fn end_marker_offset(marker: &str) -> usize {
    marker_offsets(marker, false).end
}

fn is_usable(range: &Range<usize>, len: usize) -> bool {
    range.start < range.end && range.end <= len
}

/// Returns the delimiter text with quoting, escaping and tabs removed.
///
/// `$` on its own is returned as-is. When the computed range is unusable
/// the raw `marker` (including any trailing newline) is returned unchanged.
pub fn clean_marker(marker: &str, ignore_leading_tabs: bool) -> &str {
    let text = trim_newline(marker);
    if text == "$" {
        return text;
    }

    let range = marker_offsets(text, ignore_leading_tabs);
    if !is_usable(&range, text.len()) {
        return marker;
    }

    text.get(range).unwrap_or(marker)
}

/// Returns `true` when the here-document body is subject to expansion.
///
/// Bodies of quoted (`'`, `"`), escaped (`\`) or `$`-prefixed delimiters are
/// taken literally.
pub fn is_evaluating_marker(marker: &str) -> bool {
    !matches!(
        trim_newline(marker).as_bytes().first(),
        Some(b'"' | b'\'' | b'\\' | b'$')
    )
}

/// Replaces the clean marker inside `original` with `new_name`.
///
/// Surrounding quotes, escape, tabs and trailing newline of `original` are
/// kept. Returns `new_name` alone when `original` has no usable marker range.
pub fn wrap_marker(new_name: &str, original: &str) -> String {
    let range = marker_offsets(original, true);
    if !is_usable(&range, original.len()) {
        return new_name.to_string();
    }

    match (original.get(..range.start), original.get(range.end..)) {
        (Some(prefix), Some(suffix)) => {
            let mut out = String::with_capacity(prefix.len() + new_name.len() + suffix.len());
            out.push_str(prefix);
            out.push_str(new_name);
            out.push_str(suffix);
            out
        }
        _ => new_name.to_string(),
    }
}
