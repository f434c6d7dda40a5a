//! Slot tokenizer for event specs.
//!
//! Specs have no punctuation between slots. The compiler looks at two things:
//!
//! - the **lead token**: the shortest non-empty prefix followed by a word
//!   boundary or a space. `"+k"` leads with `"+"`, `"=> 4c"` with `"=>"`,
//!   `"PI => 4c"` with `"PI"`.
//! - the **shape**: how many parts the text has when split on single
//!   spaces. Empty parts count, so `"a  b"` is a triple.

use smallvec::SmallVec;

/// Word characters for boundary detection.
fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// The lead token of `text`. The whole text when no boundary exists.
pub(crate) fn lead_token(text: &str) -> &str {
    let bytes = text.as_bytes();
    for end in 1..=bytes.len() {
        let before = is_word(bytes[end - 1]);
        let next = bytes.get(end).copied();
        let after = next.is_some_and(is_word);
        // One side is always an ASCII byte here, so `end` is a char boundary.
        if before != after || next == Some(b' ') {
            return &text[..end];
        }
    }
    text
}

/// Part layout of a slot text split on `' '`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape<'a> {
    Single,
    /// Exactly two parts: a head and a tail.
    Pair(&'a str, &'a str),
    Triple,
    /// Four or more parts.
    Many,
}

impl<'a> Shape<'a> {
    pub(crate) fn of(text: &'a str) -> Self {
        let parts: SmallVec<[&str; 4]> = text.splitn(4, ' ').collect();
        match *parts.as_slice() {
            [_] => Shape::Single,
            [head, tail] => Shape::Pair(head, tail),
            [_, _, _] => Shape::Triple,
            _ => Shape::Many,
        }
    }
}

/// Split a `"<digits><letters>"` head into its pick count and operator text.
///
/// A head with no digits picks 0. Digit runs too long for a `u32` also
/// pick 0.
pub(crate) fn split_pick_count(head: &str) -> (u32, &str) {
    let digits_end = head
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(head.len());
    let (digits, letters) = head.split_at(digits_end);
    (digits.parse().unwrap_or(0), letters)
}
