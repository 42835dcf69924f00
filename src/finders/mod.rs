//! Finder implementations.
//!
//! Both variants satisfy the same [`PalindromeFinder`](crate::traits::PalindromeFinder)
//! contract and agree on every input, including the leftmost tie-break:
//! - [`manacher`]      : linear-time mirror scan over the interleaved sequence.
//! - [`expand_center`] : quadratic expansion around each center, O(1) space.
//!   Serves as ground truth and fallback.

pub mod expand_center;
pub mod manacher;

pub use expand_center::ExpandCenterFinder;
pub use manacher::ManacherFinder;
