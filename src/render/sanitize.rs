//! Bounded single-character escaping for markup embedding
//!
//! Capacities count one slot for a terminator, so a capacity of `n` yields at
//! most `n - 1` bytes of output. Output is never split inside a UTF-8
//! sequence and sanitizing never fails; it only truncates.

pub const TITLE_CAPACITY: usize = 100;
pub const CHANNEL_NAME_CAPACITY: usize = 100;
pub const DESCRIPTION_CAPACITY: usize = 4000;

/// Copy `text`, replacing every `target` with `replacement`, bounded by `capacity`
pub fn sanitize(text: &str, target: char, replacement: &str, capacity: usize) -> String {
    let limit = capacity.saturating_sub(1);
    let mut out = String::with_capacity(limit.min(text.len()));

    for c in text.chars() {
        if c == target {
            for r in replacement.chars() {
                if !push_bounded(&mut out, r, limit) {
                    return out;
                }
            }
        } else if !push_bounded(&mut out, c, limit) {
            return out;
        }
    }
    out
}

fn push_bounded(out: &mut String, c: char, limit: usize) -> bool {
    if out.len() + c.len_utf8() > limit {
        return false;
    }
    out.push(c);
    true
}

/// Titles go into double-quoted contexts: `"` becomes `'`
pub fn escape_title(title: &str) -> String {
    sanitize(title, '"', "'", TITLE_CAPACITY)
}

pub fn escape_channel_name(name: &str) -> String {
    sanitize(name, '"', "'", CHANNEL_NAME_CAPACITY)
}

/// Descriptions go into single-quoted hover text: apostrophes are dropped
pub fn escape_hover(description: &str) -> String {
    sanitize(description, '\'', "", DESCRIPTION_CAPACITY)
}
