//! Initial-letter normalization shared by every lookup
//!
//! Callers may pass any string: only its first character is significant and
//! the comparison is case-insensitive. An empty string has no initial and so
//! matches nothing.
//!
//! Upper-casing follows Unicode, so `ı` and `ſ` fold to `I` and `S`. A character
//! whose upper-case form is more than one character (`ß` -> `SS`) is kept as is,
//! since an initial is a single character.

/// Take the first character of `input` and upper-case it
pub fn normalize(input: &str) -> Option<char> {
    input.chars().next().map(upper)
}

fn upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
