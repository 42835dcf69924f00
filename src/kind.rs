//! Named finder variants, for configuration by name.

use std::fmt;
use std::str::FromStr;

use crate::error::FindError;
use crate::finders::{ExpandCenterFinder, ManacherFinder};
use crate::traits::PalindromeFinder;

/// The finder variants shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FinderKind {
    /// Linear-time mirror scan.
    #[default]
    Manacher,
    /// Quadratic expand-around-center.
    ExpandCenter,
}

impl FinderKind {
    pub const ALL: [FinderKind; 2] = [FinderKind::Manacher, FinderKind::ExpandCenter];

    /// Canonical name, matching [`PalindromeFinder::name`] of the built finder.
    pub fn as_str(self) -> &'static str {
        match self {
            FinderKind::Manacher => "manacher",
            FinderKind::ExpandCenter => "expand",
        }
    }

    /// Human-readable time/space bound.
    pub fn complexity(self) -> &'static str {
        match self {
            FinderKind::Manacher => "O(n) time, O(n) space",
            FinderKind::ExpandCenter => "O(n^2) time, O(1) space",
        }
    }

    pub fn build(self) -> Box<dyn PalindromeFinder> {
        match self {
            FinderKind::Manacher => Box::new(ManacherFinder::new()),
            FinderKind::ExpandCenter => Box::new(ExpandCenterFinder::new()),
        }
    }
}

impl fmt::Display for FinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinderKind {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manacher" | "m" => Ok(FinderKind::Manacher),
            "expand" | "expandcenter" | "expand-center" | "e" => Ok(FinderKind::ExpandCenter),
            _ => Err(FindError::UnknownFinder(s.to_string())),
        }
    }
}
