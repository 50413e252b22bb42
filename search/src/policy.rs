//! Search policy types.

use crate::error::SearchError;

/// Search budgets.
///
/// The defaults are far above what any small population needs; they exist so
/// a caller can bound work explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Deepest tree level a child may be attached at (root = 0).
    pub max_depth: u32,
    /// Hard cap on node expansions.
    pub max_expansions: u64,
}

impl SearchPolicy {
    /// Reject budgets that would prevent any expansion.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicy`] if either budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_depth == 0 {
            return Err(SearchError::UnsupportedPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        if self.max_expansions == 0 {
            return Err(SearchError::UnsupportedPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo recorded in the audit graph.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_depth: 1_000,
            max_expansions: 100_000,
        }
    }
}
