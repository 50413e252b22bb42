//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. A search that runs and
//! finds nothing is not an error: it returns an unflagged tree and records
//! the reason in [`crate::graph::TerminationReason`].

/// Which end of the search a rejected configuration was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationRole {
    Initial,
    Goal,
}

impl ConfigurationRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Goal => "goal",
        }
    }
}

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded; no audit graph is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy budget is unusable (e.g., zero).
    UnsupportedPolicy { detail: String },
    /// A configuration is not valid under the requested population.
    ForeignConfiguration {
        role: ConfigurationRole,
        detail: String,
    },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPolicy { detail } => write!(f, "unsupported search policy: {detail}"),
            Self::ForeignConfiguration { role, detail } => {
                write!(f, "{} configuration rejected: {detail}", role.as_str())
            }
        }
    }
}

impl std::error::Error for SearchError {}
