//! Core trait definition for longest-palindrome finders.
//!
//! To plug a new algorithm into [`PalindromeService`](crate::PalindromeService),
//! implement [`PalindromeFinder`] for a (usually stateless) struct.
//!
//! The trait encodes the contract every finder shares:
//! - Input is a sequence of code points, borrowed for the duration of the call.
//! - Output is the longest palindromic substring, in original coordinates.
//! - Ties between equal-length maxima resolve to the smallest start offset.
//! - Sequences of length 0 or 1 echo the input.
//! - All working state is allocated per call; nothing survives between calls.

use crate::error::{FindError, Result};
use crate::result::PalindromeMatch;

/// Trait for a longest-palindromic-substring algorithm.
///
/// `find` is total: every sequence, including an empty one, produces a
/// [`PalindromeMatch`]. An *absent* sequence is a different situation and is
/// handled by [`PalindromeFinder::find_checked`].
pub trait PalindromeFinder: Send + Sync {
    /// Short, stable name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Locate the leftmost longest palindromic substring of `sequence`.
    fn find(&self, sequence: &[char]) -> PalindromeMatch;

    /// Like [`find`](Self::find), but rejects a missing sequence with
    /// [`FindError::MissingInput`] instead of treating it as empty.
    fn find_checked(&self, sequence: Option<&[char]>) -> Result<PalindromeMatch> {
        sequence
            .map(|s| self.find(s))
            .ok_or(FindError::MissingInput)
    }
}
