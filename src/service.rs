//! Selector that holds one active finder and delegates to it.
//!
//! The service carries no state besides the finder, so it can be reused for
//! any number of calls. Swapping the finder takes `&mut self`; sharing one
//! service across threads therefore requires the caller to serialize swaps
//! (e.g. behind a `Mutex` or `RwLock`), while read-only use through `&self`
//! is freely shareable.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{FindError, Result};
use crate::kind::FinderKind;
use crate::result::PalindromeMatch;
use crate::traits::PalindromeFinder;
use crate::utils::to_chars;

/// Longest-palindrome service backed by an interchangeable finder.
///
/// ```
/// use lps_engine::{FinderKind, PalindromeService};
///
/// let mut service = PalindromeService::manacher_default();
/// assert_eq!(service.find_longest("babad").text(), "bab");
///
/// service.set_kind(FinderKind::ExpandCenter);
/// let m = service.find_longest("cbbd");
/// assert_eq!((m.text(), m.start(), m.len()), ("bb", 1, 2));
/// ```
pub struct PalindromeService {
    finder: Box<dyn PalindromeFinder>,
}

impl PalindromeService {
    pub fn new(finder: Box<dyn PalindromeFinder>) -> Self {
        Self { finder }
    }

    pub fn from_kind(kind: FinderKind) -> Self {
        Self::new(kind.build())
    }

    /// Service using the linear-time mirror scan.
    pub fn manacher_default() -> Self {
        Self::from_kind(FinderKind::Manacher)
    }

    /// Service using the quadratic expand-around-center finder.
    pub fn expand_center() -> Self {
        Self::from_kind(FinderKind::ExpandCenter)
    }

    /// The active finder.
    pub fn finder(&self) -> &dyn PalindromeFinder {
        self.finder.as_ref()
    }

    /// Leftmost longest palindromic substring of `s`.
    pub fn find_longest(&self, s: &str) -> PalindromeMatch {
        self.find_longest_chars(&to_chars(s))
    }

    /// Same as [`find_longest`](Self::find_longest) on pre-decoded code points.
    pub fn find_longest_chars(&self, sequence: &[char]) -> PalindromeMatch {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("find_longest", finder = self.finder.name(), n = sequence.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let found = self.finder.find(sequence);

        #[cfg(feature = "tracing")]
        tracing::debug!(start = found.start(), len = found.len(), "palindrome located");

        found
    }

    /// Rejects an absent input with [`FindError::MissingInput`]; an empty
    /// string is valid and yields an empty match.
    pub fn try_find_longest(&self, s: Option<&str>) -> Result<PalindromeMatch> {
        let Some(s) = s else {
            #[cfg(feature = "tracing")]
            tracing::warn!("find_longest called without input");
            return self.finder.find_checked(None);
        };
        Ok(self.find_longest(s))
    }

    /// Evaluate many inputs, preserving order. Runs on the rayon pool when the
    /// `parallel` feature is enabled.
    pub fn find_longest_batch<S>(&self, inputs: &[S]) -> Vec<PalindromeMatch>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("find_longest_batch", items = inputs.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        #[cfg(feature = "parallel")]
        {
            inputs
                .par_iter()
                .map(|s| self.find_longest(s.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().map(|s| self.find_longest(s.as_ref())).collect()
        }
    }

    /// Replace the active finder.
    pub fn set_finder(&mut self, finder: Box<dyn PalindromeFinder>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.finder.name(), to = finder.name(), "finder swapped");
        self.finder = finder;
    }

    /// Replace the active finder, rejecting an absent one with
    /// [`FindError::MissingFinder`]. The current finder is kept on error.
    pub fn try_set_finder(&mut self, finder: Option<Box<dyn PalindromeFinder>>) -> Result<()> {
        let finder = finder.ok_or(FindError::MissingFinder)?;
        self.set_finder(finder);
        Ok(())
    }

    pub fn set_kind(&mut self, kind: FinderKind) {
        self.set_finder(kind.build());
    }
}

impl Default for PalindromeService {
    fn default() -> Self {
        Self::manacher_default()
    }
}

impl std::fmt::Debug for PalindromeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PalindromeService")
            .field("finder", &self.finder.name())
            .finish()
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn swap_and_lookup_are_logged() {
        let mut service = PalindromeService::manacher_default();
        service.set_kind(FinderKind::ExpandCenter);
        let _ = service.find_longest("level");
        assert!(logs_contain("finder swapped"));
        assert!(logs_contain("palindrome located"));
    }
}
