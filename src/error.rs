//! Error type shared by the finders, the service and configuration parsing.

use thiserror::Error;

/// Failures surfaced synchronously to the immediate caller.
///
/// Degenerate inputs (empty or single-character sequences) are never errors;
/// only an *absent* sequence or finder is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindError {
    /// No sequence was supplied at all (as opposed to an empty one).
    #[error("input is missing")]
    MissingInput,

    /// A finder swap was requested without a finder.
    #[error("finder is missing")]
    MissingFinder,

    /// A finder name did not match any known variant.
    #[error("unknown finder `{0}` (use: manacher|expand)")]
    UnknownFinder(String),
}

pub type Result<T> = std::result::Result<T, FindError>;

#[cfg(test)]
mod tests {
    use super::FindError;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(FindError::MissingInput.to_string(), "input is missing");
        assert_eq!(FindError::MissingFinder.to_string(), "finder is missing");
        assert_eq!(
            FindError::UnknownFinder("kmp".into()).to_string(),
            "unknown finder `kmp` (use: manacher|expand)"
        );
    }
}
