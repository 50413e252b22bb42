//! Hash domain lock: domain prefixes are fixed, distinct, and applied as
//! `sha256(domain || bytes)`.
//!
//! Recomputes digests with `sha2` directly so a change to the kernel's
//! hashing path is caught even if its own tests are updated alongside it.

use ferry_harness::report::TRANSCRIPT_ARTIFACT;
use ferry_harness::runner::run;
use ferry_harness::worlds::classic::Classic;
use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::location::Location;
use ferry_kernel::proof::hash::{
    DOMAIN_CONFIGURATION, DOMAIN_RUN_REPORT, DOMAIN_SEARCH_GRAPH, DOMAIN_TRANSCRIPT,
};
use ferry_search::policy::SearchPolicy;
use sha2::{Digest, Sha256};

fn independent_hash(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

#[test]
fn domain_prefixes_locked() {
    assert_eq!(DOMAIN_CONFIGURATION, b"FERRY::CONFIGURATION::V1\0");
    assert_eq!(DOMAIN_SEARCH_GRAPH, b"FERRY::SEARCH_GRAPH::V1\0");
    assert_eq!(DOMAIN_TRANSCRIPT, b"FERRY::TRANSCRIPT::V1\0");
    assert_eq!(DOMAIN_RUN_REPORT, b"FERRY::RUN_REPORT::V1\0");
}

#[test]
fn domain_prefixes_are_distinct_and_nul_terminated() {
    let domains = [
        DOMAIN_CONFIGURATION,
        DOMAIN_SEARCH_GRAPH,
        DOMAIN_TRANSCRIPT,
        DOMAIN_RUN_REPORT,
    ];
    for (i, a) in domains.iter().enumerate() {
        assert_eq!(a.last(), Some(&0u8));
        assert_eq!(a.iter().filter(|&&b| b == 0).count(), 1);
        for b in &domains[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn configuration_fingerprint_matches_independent_sha256() {
    let config = Configuration::new(3, 1, Location::Destination).unwrap();
    let expected = independent_hash(DOMAIN_CONFIGURATION, &config.identity_bytes());
    assert_eq!(config.fingerprint().as_str(), expected);
}

#[test]
fn report_artifact_digests_match_independent_sha256() {
    let report = run(&Classic::new(), &SearchPolicy::default()).unwrap();
    assert_eq!(report.transcript.name, TRANSCRIPT_ARTIFACT);
    assert_eq!(
        report.transcript.content_hash.as_str(),
        independent_hash(DOMAIN_TRANSCRIPT, &report.transcript.content)
    );
    assert_eq!(
        report.search_graph.content_hash.as_str(),
        independent_hash(DOMAIN_SEARCH_GRAPH, &report.search_graph.content)
    );
}
