//! Interleaving of a sequence with sentinels and separators.
//!
//! The mirror scan handles odd- and even-length palindromes uniformly by
//! working on a transformed sequence of length `2n + 3`:
//!
//! ```text
//! Start, Sep, c0, Sep, c1, ..., Sep, c(n-1), Sep, End
//! ```
//!
//! Original character `k` lands at index `2k + 2`; separators occupy the odd
//! indices. The two sentinels differ from each other, from the separator and
//! from every character, so an expansion step always stops before it can
//! leave the buffer.

/// One position of the transformed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Leading sentinel.
    Start,
    /// Gap between two original characters (and at both ends).
    Separator,
    /// An original character.
    Char(char),
    /// Trailing sentinel.
    End,
}

/// Builds the transformed sequence consumed by the mirror scan.
///
/// Implementations must honour the layout documented at module level: the
/// scan converts indices back to original coordinates assuming it.
pub trait Preprocessor: Send + Sync {
    fn transform(&self, sequence: &[char]) -> Vec<Marker>;
}

/// Default [`Preprocessor`] using dedicated marker variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentinelPreprocessor;

impl Preprocessor for SentinelPreprocessor {
    fn transform(&self, sequence: &[char]) -> Vec<Marker> {
        let mut out = Vec::with_capacity(transformed_len(sequence.len()));
        out.push(Marker::Start);
        for &c in sequence {
            out.push(Marker::Separator);
            out.push(Marker::Char(c));
        }
        out.push(Marker::Separator);
        out.push(Marker::End);
        out
    }
}

/// Length of the transformed form of an `n`-character sequence.
#[inline]
pub fn transformed_len(n: usize) -> usize {
    2 * n + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use Marker::*;

    #[test]
    fn empty_sequence_keeps_sentinels() {
        let t = SentinelPreprocessor.transform(&[]);
        assert_eq!(t, vec![Start, Separator, End]);
        assert_eq!(t.len(), transformed_len(0));
    }

    #[test]
    fn interleaves_characters() {
        let t = SentinelPreprocessor.transform(&['a', 'b']);
        assert_eq!(
            t,
            vec![Start, Separator, Char('a'), Separator, Char('b'), Separator, End]
        );
    }

    #[test]
    fn marker_characters_in_input_stay_distinct() {
        let seq = ['^', '#', '$'];
        let t = SentinelPreprocessor.transform(&seq);
        assert_eq!(t.len(), transformed_len(3));
        for (k, &c) in seq.iter().enumerate() {
            assert_eq!(t[2 * k + 2], Char(c));
            assert_ne!(t[2 * k + 2], Separator);
        }
        assert_eq!(t[0], Start);
        assert_eq!(t[t.len() - 1], End);
    }
}
