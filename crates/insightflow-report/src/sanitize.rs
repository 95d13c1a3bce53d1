//! Punctuation normalization for constrained text renderers.
//!
//! Completion output is full of typographic dashes, curly quotes, and
//! ellipses that fixed-width document encoders cannot represent. This maps
//! them to plain-ASCII equivalents. The transform is pure, stateless, and
//! idempotent: every output character is ASCII, so a second pass finds
//! nothing left to replace.

/// Replaces extended punctuation with ASCII equivalents.
///
/// Mappings: en/em dash to `-`, curly double quotes to `"`, curly single
/// quotes to `'`, horizontal ellipsis to `...`. All other characters pass
/// through unchanged.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2026}' => out.push_str("..."),
            other => out.push(other),
        }
    }
    out
}
