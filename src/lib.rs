pub mod error;
pub mod failure;
pub mod input;
pub mod kmp;

pub use error::{Error, Result};
pub use failure::build_failure_array;
pub use kmp::{Kmp, Matches};

/// Location of a match within some source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// Index of the first symbol of the match.
    pub start: usize,
    /// Index of the first non-pattern symbol that is discovered after a match.
    pub end: usize,
}

impl Location {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Return the start index of the leftmost occurrence of pattern in text.
///
/// An empty pattern matches at index 0 of any text, including an empty one.
pub fn find_first_match<T: PartialEq>(pattern: &[T], text: &[T]) -> Option<usize> {
    Kmp::new(pattern).find(text).map(|location| location.start)
}

/// Byte offset of the leftmost occurrence of pattern in text.
///
/// The result is a byte offset, not a character index: `v` is found at 4 in
/// `naïve`, like [`str::find`]. Search `Vec<char>` with [`find_first_match`]
/// for character indices.
///
/// Both strings are searched as UTF-8 bytes. A lead byte never equals a
/// continuation byte, so the returned offset is always a char boundary.
pub fn find_first_match_str(pattern: &str, text: &str) -> Option<usize> {
    find_first_match(pattern.as_bytes(), text.as_bytes())
}
