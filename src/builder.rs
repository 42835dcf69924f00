use crate::kind::FinderKind;
use crate::service::PalindromeService;
use crate::traits::PalindromeFinder;

/// Configures a [`PalindromeService`]. Without an explicit choice the
/// linear-time finder is used.
#[derive(Default)]
pub struct PalindromeServiceBuilder {
    finder: Option<Box<dyn PalindromeFinder>>,
}

impl PalindromeServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn kind(mut self, kind: FinderKind) -> Self {
        self.finder = Some(kind.build());
        self
    }
    pub fn finder(mut self, finder: Box<dyn PalindromeFinder>) -> Self {
        self.finder = Some(finder);
        self
    }
    pub fn build(self) -> PalindromeService {
        match self.finder {
            Some(f) => PalindromeService::new(f),
            None => PalindromeService::from_kind(FinderKind::default()),
        }
    }
}
