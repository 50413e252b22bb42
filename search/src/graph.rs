//! `SearchGraph`: expansion-event audit log.
//!
//! The normative record of a search is the ordered list of [`ExpandEvent`]s.
//! Each event lists every catalog ride tried at that node and what became of
//! it, so pruning decisions can be reviewed without re-running the search.

use ferry_kernel::model::configuration::{Configuration, InvalidStateError};
use ferry_kernel::model::rider::Ride;
use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

use crate::policy::SearchPolicy;

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraph {
    /// Expansion events in the order nodes were expanded.
    pub expansions: Vec<ExpandEvent>,
    pub metadata: SearchGraphMetadata,
}

/// One node expansion: the candidates tried and their outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions (0-based).
    pub expansion_order: u64,
    /// Tree depth of the expanded node (root = 0).
    pub depth: u32,
    pub configuration: Configuration,
    /// Ordered candidate decision log, one record per catalog ride.
    pub candidates: Vec<CandidateRecord>,
}

impl ExpandEvent {
    /// True if no candidate produced a child.
    #[must_use]
    pub fn is_dead_end(&self) -> bool {
        !self
            .candidates
            .iter()
            .any(|c| matches!(c.outcome, CandidateOutcome::Attached { .. }))
    }
}

/// A catalog ride with its outcome at one expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Position in the ride catalog.
    pub index: u64,
    pub ride: Ride,
    pub outcome: CandidateOutcome,
}

/// What happened to a candidate ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Attached as the parent's `child_index`-th child.
    Attached {
        child_index: u64,
        configuration: Configuration,
    },
    /// Legal, but the configuration was already visited.
    DuplicateSuppressed { configuration: Configuration },
    /// The ride produced an invalid configuration.
    Rejected(RejectionKind),
    /// Legal and new, but the child would exceed `max_depth`.
    SkippedByDepthLimit { configuration: Configuration },
}

/// Mirror of [`InvalidStateError`] variants for graph serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    OutOfBounds,
    Unsafe,
}

impl From<&InvalidStateError> for RejectionKind {
    fn from(err: &InvalidStateError) -> Self {
        match err {
            InvalidStateError::OutOfBounds { .. } => Self::OutOfBounds,
            InvalidStateError::Unsafe { .. } => Self::Unsafe,
        }
    }
}

/// Aggregate metadata with input bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    // Input bindings
    pub per_class: u32,
    pub root_fingerprint: ContentHash,
    pub goal_fingerprint: ContentHash,
    pub policy: SearchPolicy,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_rejected: u64,
    pub total_duplicates_suppressed: u64,
    pub total_depth_skipped: u64,
    /// Nodes in the tree, root included.
    pub total_nodes: u64,
    pub max_depth_reached: u32,

    pub solution_crossings: Option<u64>,
    pub termination_reason: TerminationReason,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The goal was entered at `depth`.
    GoalReached { depth: u32 },
    /// Every reachable branch was explored without meeting the goal.
    Exhausted,
    /// `max_expansions` was hit before the goal was found.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::Exhausted => "exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `canonical_hash(DOMAIN_SEARCH_GRAPH, canonical bytes)`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "configuration": e.configuration.to_json_value(),
        "dead_end": e.is_dead_end(),
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "state_fingerprint": e.configuration.fingerprint().hex_digest(),
    })
}

fn candidate_record_to_json(r: &CandidateRecord) -> serde_json::Value {
    serde_json::json!({
        "index": r.index,
        "outcome": outcome_to_json(&r.outcome),
        "ride": r.ride.riders().iter().map(|k| k.as_str()).collect::<Vec<_>>(),
    })
}

fn outcome_to_json(o: &CandidateOutcome) -> serde_json::Value {
    match o {
        CandidateOutcome::Attached {
            child_index,
            configuration,
        } => serde_json::json!({
            "child_index": child_index,
            "configuration": configuration.to_json_value(),
            "type": "attached",
        }),
        CandidateOutcome::DuplicateSuppressed { configuration } => serde_json::json!({
            "configuration": configuration.to_json_value(),
            "type": "duplicate_suppressed",
        }),
        CandidateOutcome::Rejected(kind) => {
            serde_json::json!({"kind": rejection_kind_str(*kind), "type": "rejected"})
        }
        CandidateOutcome::SkippedByDepthLimit { configuration } => serde_json::json!({
            "configuration": configuration.to_json_value(),
            "type": "skipped_by_depth_limit",
        }),
    }
}

fn rejection_kind_str(k: RejectionKind) -> &'static str {
    match k {
        RejectionKind::OutOfBounds => "out_of_bounds",
        RejectionKind::Unsafe => "unsafe",
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "goal_fingerprint": m.goal_fingerprint.as_str(),
        "max_depth_reached": m.max_depth_reached,
        "per_class": m.per_class,
        "policy": m.policy.to_json_value(),
        "root_fingerprint": m.root_fingerprint.as_str(),
        "solution_crossings": m.solution_crossings,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_depth_skipped": m.total_depth_skipped,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes": m.total_nodes,
        "total_rejected": m.total_rejected,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { depth } => {
            serde_json::json!({"depth": depth, "type": r.as_str()})
        }
        TerminationReason::Exhausted | TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
