use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A string did not parse to a known artifact kind.
    #[error("unknown artifact kind: {0}")]
    UnknownArtifactKind(String),

    /// The scaffolder received a file name it cannot work with.
    #[error("invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    /// No route template label contains the given query.
    #[error("no route template matches '{query}'")]
    UnknownRouteTemplate { query: String },

    /// More than one route template label contains the given query.
    #[error("route template '{query}' is ambiguous, matches: {matches}")]
    AmbiguousRouteTemplate { query: String, matches: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownArtifactKind(kind) => vec![
                format!("'{kind}' is not a known artifact kind"),
                "Supported kinds: component, island, loader, action, section".into(),
            ],
            Self::InvalidFileName { name, reason } => vec![
                format!("File name '{name}' was rejected: {reason}"),
                "Example: my-section or sub/my-section.tsx".into(),
            ],
            Self::UnknownRouteTemplate { .. } => vec![
                "List available route templates: freshkit route list".into(),
                "Match is a case-insensitive substring of the label".into(),
            ],
            Self::AmbiguousRouteTemplate { matches, .. } => vec![
                format!("Matching templates: {matches}"),
                "Use a longer fragment of the label to disambiguate".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownArtifactKind(_) | Self::InvalidFileName { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownRouteTemplate { .. } => ErrorCategory::NotFound,
            Self::AmbiguousRouteTemplate { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
