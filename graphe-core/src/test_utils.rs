//! Proptest configuration for the graph property suites.
//!
//! The suites in `property::tests` generate random graphs, mutate them and
//! check storage, involution and traversal invariants. They all take their
//! runner configuration from here.

use graphe_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Runner configuration for a graph property suite.
///
/// `default_cases` is the case count for a local run; `PROGTEST_CASES`
/// and `GRAPHE_PBT_FORK` override it in CI.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
