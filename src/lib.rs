//! Longest Palindromic Substring engine (LPS)
//!
//! Given a sequence of characters, this crate returns the longest contiguous
//! run that reads the same forwards and backwards, together with its
//! position in the input.
//!
//! ## Core idea
//! 1. Every algorithm implements the [`PalindromeFinder`] trait.
//! 2. [`ManacherFinder`] interleaves the input with sentinels and separators
//!    (see [`preprocess`]) and runs a linear-time mirror scan.
//! 3. [`ExpandCenterFinder`] is the quadratic, constant-space reference the
//!    scan is cross-checked against.
//! 4. [`PalindromeService`] holds one active finder and lets callers swap it.
//!
//! Characters are compared by raw code-point equality; offsets and lengths in
//! [`PalindromeMatch`] are counted in code points, not bytes. When several
//! palindromes share the maximal length, the leftmost one is returned.
//!
//! ## Quick start
//! ```
//! use lps_engine::PalindromeService;
//!
//! let service = PalindromeService::default();
//! let m = service.find_longest("forgeeksskeegfor");
//! assert_eq!(m.text(), "geeksskeeg");
//! assert_eq!(m.start(), 3);
//! assert_eq!(m.len(), 10);
//! ```
//!
//! ## Features
//! - `tracing`  : spans and events around lookups and finder swaps.
//! - `parallel` : evaluate [`PalindromeService::find_longest_batch`] on rayon.
//! - `heavy`    : enables long-running stress tests.

pub mod builder;
pub mod error;
pub mod finders;
pub mod kind;
pub mod preprocess;
pub mod result;
pub mod service;
pub mod traits;
pub mod utils;

pub use crate::builder::PalindromeServiceBuilder;
pub use crate::error::{FindError, Result};
pub use crate::finders::{ExpandCenterFinder, ManacherFinder};
pub use crate::kind::FinderKind;
pub use crate::result::PalindromeMatch;
pub use crate::service::PalindromeService;
pub use crate::traits::PalindromeFinder;
