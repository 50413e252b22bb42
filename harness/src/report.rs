//! Run report: the solution transcript, the audit graph, and their digests.
//!
//! # Artifacts
//!
//! ```text
//! transcript.json     — canonical JSON: world, endpoints, solved flag, path
//! search_graph.json   — canonical JSON: expansion events + metadata
//! ```
//!
//! The report digest binds both artifact digests and the world id:
//! `canonical_hash(DOMAIN_RUN_REPORT, canonical_json({graph_digest, transcript_digest, world_id}))`.

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_RUN_REPORT, DOMAIN_SEARCH_GRAPH, DOMAIN_TRANSCRIPT,
};
use ferry_search::path::SolutionPath;
use ferry_search::search::SearchResult;

/// Artifact name for the solution transcript.
pub const TRANSCRIPT_ARTIFACT: &str = "transcript.json";

/// Artifact name for the search audit graph.
pub const SEARCH_GRAPH_ARTIFACT: &str = "search_graph.json";

/// A named artifact with its content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub name: &'static str,
    pub content: Vec<u8>,
    pub content_hash: ContentHash,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub world_id: String,
    pub initial: Configuration,
    pub goal: Configuration,
    pub result: SearchResult,
    /// The flagged path re-collected from the tree, if the goal was reached.
    pub path: Option<SolutionPath>,
    pub transcript: ReportArtifact,
    pub search_graph: ReportArtifact,
    pub digest: ContentHash,
}

impl RunReport {
    /// Assemble artifacts and digests for a finished search.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn build(
        world_id: &str,
        initial: Configuration,
        goal: Configuration,
        result: SearchResult,
    ) -> Result<Self, CanonError> {
        let path = SolutionPath::from_tree(&result.root);

        let transcript_value = serde_json::json!({
            "goal": goal.to_json_value(),
            "initial": initial.to_json_value(),
            "path": path.as_ref().map(SolutionPath::to_json_value),
            "per_class": result.graph.metadata.per_class,
            "solved": path.is_some(),
            "world_id": world_id,
        });
        let transcript_bytes = canonical_json_bytes(&transcript_value)?;
        let transcript = ReportArtifact {
            name: TRANSCRIPT_ARTIFACT,
            content_hash: canonical_hash(DOMAIN_TRANSCRIPT, &transcript_bytes),
            content: transcript_bytes,
        };

        let graph_bytes = result.graph.to_canonical_json_bytes()?;
        let search_graph = ReportArtifact {
            name: SEARCH_GRAPH_ARTIFACT,
            content_hash: result.graph.digest()?,
            content: graph_bytes,
        };

        let digest = report_digest(world_id, &transcript.content_hash, &search_graph.content_hash)?;

        Ok(Self {
            world_id: world_id.to_string(),
            initial,
            goal,
            result,
            path,
            transcript,
            search_graph,
            digest,
        })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Crossings in the reported solution, if any.
    #[must_use]
    pub fn crossings(&self) -> Option<usize> {
        self.path.as_ref().map(SolutionPath::crossings)
    }

    /// Artifacts in a fixed order.
    #[must_use]
    pub fn artifacts(&self) -> [&ReportArtifact; 2] {
        [&self.transcript, &self.search_graph]
    }

    /// Recompute the report digest from the stored artifacts.
    ///
    /// Returns `false` if any artifact was altered after the report was built.
    #[must_use]
    pub fn verify(&self) -> bool {
        let transcript_ok =
            canonical_hash(DOMAIN_TRANSCRIPT, &self.transcript.content) == self.transcript.content_hash;
        let graph_ok = canonical_hash(DOMAIN_SEARCH_GRAPH, &self.search_graph.content)
            == self.search_graph.content_hash;
        let digest_ok = report_digest(
            &self.world_id,
            &self.transcript.content_hash,
            &self.search_graph.content_hash,
        )
        .is_ok_and(|d| d == self.digest);
        transcript_ok && graph_ok && digest_ok
    }
}

fn report_digest(
    world_id: &str,
    transcript: &ContentHash,
    graph: &ContentHash,
) -> Result<ContentHash, CanonError> {
    let basis = serde_json::json!({
        "graph_digest": graph.as_str(),
        "transcript_digest": transcript.as_str(),
        "world_id": world_id,
    });
    let bytes = canonical_json_bytes(&basis)?;
    Ok(canonical_hash(DOMAIN_RUN_REPORT, &bytes))
}
