//! Expand-around-center search.
//!
//! Every index `i` is tried as the center of an odd-length palindrome
//! (`expand(i, i)`) and as the left half of an even-length one
//! (`expand(i, i + 1)`). Each expansion grows outward while the characters
//! match, so the whole search is O(n²) time and O(1) extra space.

use crate::result::PalindromeMatch;
use crate::traits::PalindromeFinder;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandCenterFinder;

impl ExpandCenterFinder {
    pub fn new() -> Self {
        Self
    }
}

impl PalindromeFinder for ExpandCenterFinder {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn find(&self, sequence: &[char]) -> PalindromeMatch {
        let n = sequence.len();
        if n < 2 {
            return PalindromeMatch::whole(sequence);
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("expand_center", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // Inclusive bounds of the best palindrome so far.
        let mut best_start = 0usize;
        let mut best_end = 0usize;

        for i in 0..n {
            let odd = expand(sequence, i, i);
            let even = expand(sequence, i, i + 1);
            let len = odd.max(even);

            // Strict: an equal-length palindrome found later starts further right.
            if len > best_end - best_start + 1 {
                best_start = i - (len - 1) / 2;
                best_end = i + len / 2;
            }
        }

        PalindromeMatch::from_slice(sequence, best_start, best_end - best_start + 1)
    }
}

/// Grow `[left, right]` outward while the ends match; returns the length of
/// the palindrome found. The loop overshoots by one on each side, hence
/// `right - left - 1`.
fn expand(sequence: &[char], left: usize, right: usize) -> usize {
    let mut l = left as isize;
    let mut r = right;
    while l >= 0 && r < sequence.len() && sequence[l as usize] == sequence[r] {
        l -= 1;
        r += 1;
    }
    (r as isize - l - 1) as usize
}
