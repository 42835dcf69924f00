//! The value returned by every finder.

use std::fmt;

/// Longest palindromic substring located in a sequence.
///
/// Offsets are measured in code points of the *original* sequence, never in
/// the interleaved form used internally by the mirror scan. Invariants:
/// - `length == text.chars().count()`
/// - `text == sequence[start..start + length]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PalindromeMatch {
    text: String,
    start: usize,
    length: usize,
}

impl PalindromeMatch {
    /// Build a match by slicing `sequence[start..start + length]`.
    ///
    /// # Panics
    /// Panics if the range lies outside `sequence`.
    pub fn from_slice(sequence: &[char], start: usize, length: usize) -> Self {
        let text = sequence[start..start + length].iter().collect();
        Self {
            text,
            start,
            length,
        }
    }

    /// Result for a sequence of length 0 or 1: the whole input.
    pub(crate) fn whole(sequence: &[char]) -> Self {
        Self::from_slice(sequence, 0, sequence.len())
    }

    /// The match for an empty sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start offset, in code points.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length, in code points.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Exclusive end offset, in code points.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for PalindromeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::PalindromeMatch;

    #[test]
    fn slice_counts_code_points() {
        let seq: Vec<char> = "xéé".chars().collect();
        let m = PalindromeMatch::from_slice(&seq, 1, 2);
        assert_eq!(m.text(), "éé");
        assert_eq!(m.start(), 1);
        assert_eq!(m.len(), 2);
        assert_eq!(m.end(), 3);
        assert_eq!(m.text().len(), 4); // bytes differ from code points
    }

    #[test]
    fn empty_match() {
        let m = PalindromeMatch::empty();
        assert!(m.is_empty());
        assert_eq!((m.text(), m.start(), m.len()), ("", 0, 0));
        assert_eq!(PalindromeMatch::whole(&[]), m);
    }

    #[test]
    fn display_prints_text_only() {
        let seq: Vec<char> = "abba".chars().collect();
        let m = PalindromeMatch::from_slice(&seq, 0, 4);
        assert_eq!(m.to_string(), "abba");
        assert_eq!(m.into_text(), "abba");
    }
}
