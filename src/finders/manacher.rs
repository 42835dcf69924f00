//! Linear-time mirror scan (Manacher's algorithm).
//!
//! The sequence is first interleaved by a [`Preprocessor`] so that every
//! palindrome, odd or even, has a single center in the transformed buffer.
//! The scan then keeps the palindrome reaching furthest right (`center`,
//! `right`) and seeds each new radius from its mirror position
//! `2 * center - i`. Each successful expansion step advances `right`, and
//! `right` never moves back, so total expansion work is O(n).
//!
//! A radius in the transformed buffer equals the length of the matching
//! palindrome in the original sequence, which makes the conversion back to
//! original coordinates a single division (see [`to_original_span`]).

use crate::preprocess::{Preprocessor, SentinelPreprocessor};
use crate::result::PalindromeMatch;
use crate::traits::PalindromeFinder;

pub struct ManacherFinder {
    preprocessor: Box<dyn Preprocessor>,
}

impl ManacherFinder {
    /// Finder using the default [`SentinelPreprocessor`].
    pub fn new() -> Self {
        Self::with_preprocessor(Box::new(SentinelPreprocessor))
    }

    /// Finder using a caller-supplied preprocessor.
    ///
    /// The preprocessor must produce the `2n + 3` layout documented in
    /// [`crate::preprocess`].
    pub fn with_preprocessor(preprocessor: Box<dyn Preprocessor>) -> Self {
        Self { preprocessor }
    }
}

impl Default for ManacherFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ManacherFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManacherFinder").finish_non_exhaustive()
    }
}

impl PalindromeFinder for ManacherFinder {
    fn name(&self) -> &'static str {
        "manacher"
    }

    fn find(&self, sequence: &[char]) -> PalindromeMatch {
        if sequence.len() < 2 {
            return PalindromeMatch::whole(sequence);
        }

        let t = self.preprocessor.transform(sequence);
        debug_assert_eq!(t.len(), 2 * sequence.len() + 3);

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("mirror_scan", n = sequence.len(), n_t = t.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (best_center, best_radius) = scan(&t);
        let (start, length) = to_original_span(best_center, best_radius);
        PalindromeMatch::from_slice(sequence, start, length)
    }
}

/// Run the mirror scan over a transformed buffer.
///
/// Returns `(center, radius)` of the first position attaining the maximum
/// radius. Positions `0` and `len - 1` are the sentinels and are skipped.
fn scan<T: PartialEq>(t: &[T]) -> (usize, usize) {
    let n = t.len();
    let mut radius = vec![0usize; n];
    let mut center = 0usize;
    let mut right = 0usize;
    let mut best_center = 0usize;
    let mut best_radius = 0usize;

    for i in 1..n.saturating_sub(1) {
        if i < right {
            // i < right implies i > center, so the mirror is in bounds.
            let mirror = 2 * center - i;
            radius[i] = (right - i).min(radius[mirror]);
        }

        // Distinct sentinels stop this loop before either index leaves `t`.
        while t[i + 1 + radius[i]] == t[i - 1 - radius[i]] {
            radius[i] += 1;
        }

        if i + radius[i] > right {
            center = i;
            right = i + radius[i];
        }

        if radius[i] > best_radius {
            best_radius = radius[i];
            best_center = i;
        }
    }

    (best_center, best_radius)
}

/// Convert a transformed-space `(center, radius)` to `(start, length)` in the
/// original sequence. Relies on character `k` sitting at index `2k + 2`.
#[inline]
pub fn to_original_span(center: usize, radius: usize) -> (usize, usize) {
    ((center - radius) / 2, radius)
}
