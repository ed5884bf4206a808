//! Property runners for graph invariants.
//!
//! Each runner returns a [`TestCaseResult`] so it can back both the
//! proptest suites and the seeded rstest cases.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    derived::{complement, transpose},
    graph::{Graph, MutationOutcome},
    traversal::{components, traverse},
};

use super::types::GraphFixture;

fn link_set(graph: &Graph) -> BTreeSet<(usize, usize)> {
    graph.links().collect()
}

fn fail(fixture: &GraphFixture, message: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (sampler={:?}, p={}, seed={}, n={}, {})",
        fixture.sampler,
        fixture.probability,
        fixture.seed,
        fixture.graph.vertex_count(),
        fixture.graph.orientation(),
    ))
}

/// Storage agrees with the logical link count, lists hold no duplicates
/// and undirected lists mirror each other.
pub(super) fn run_storage_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let links: Vec<_> = graph.links().collect();
    if links.len() != graph.link_count() {
        return Err(fail(
            fixture,
            format!("links() yielded {} of {}", links.len(), graph.link_count()),
        ));
    }
    for vertex in 0..graph.vertex_count() {
        let targets: Vec<_> = graph.neighbours(vertex).collect();
        let unique: BTreeSet<_> = targets.iter().copied().collect();
        if unique.len() != targets.len() {
            return Err(fail(fixture, format!("vertex {vertex} has duplicate targets")));
        }
        if let Some(&target) = targets.iter().find(|&&target| target >= graph.vertex_count()) {
            return Err(fail(fixture, format!("vertex {vertex} links to unknown {target}")));
        }
        if !graph.is_directed()
            && let Some(&target) = targets
                .iter()
                .find(|&&target| !graph.link_exists(target, vertex))
        {
            return Err(fail(fixture, format!("edge {vertex}-{target} is not mirrored")));
        }
    }
    if graph.is_directed() {
        let out_total: usize = graph.degrees().out_degree().iter().sum();
        let in_total: usize = graph.degrees().in_degree().iter().sum();
        if out_total != graph.link_count() || in_total != graph.link_count() {
            return Err(fail(fixture, "degree totals disagree with the link count"));
        }
    }
    Ok(())
}

/// Inserting an existing link reports a duplicate and leaves the graph
/// unchanged; a fresh link becomes visible from both ends when undirected.
pub(super) fn run_add_link_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = fixture.graph.clone();
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Ok(());
    }
    let source = usize::try_from(fixture.seed % vertex_count as u64).unwrap_or(0);
    let target = (source + vertex_count / 2) % vertex_count;

    let first = graph
        .add_link(source, target)
        .map_err(|err| fail(fixture, format!("add_link failed: {err}")))?;
    if !graph.link_exists(source, target) {
        return Err(fail(fixture, format!("{source}->{target} missing after add")));
    }
    if !graph.is_directed() && !graph.link_exists(target, source) {
        return Err(fail(fixture, format!("{target}->{source} missing after add")));
    }
    let expected_first = if fixture.graph.link_exists(source, target) {
        MutationOutcome::DuplicateLink
    } else {
        MutationOutcome::Applied
    };
    if first != expected_first {
        return Err(fail(fixture, format!("first insert reported {first:?}")));
    }

    let snapshot = graph.clone();
    let second = graph
        .add_link(source, target)
        .map_err(|err| fail(fixture, format!("add_link failed: {err}")))?;
    if second != MutationOutcome::DuplicateLink || graph != snapshot {
        return Err(fail(fixture, "second insert mutated the graph"));
    }
    Ok(())
}

/// Generated graphs are loop-free, so complementing twice restores the
/// link set.
pub(super) fn run_complement_involution_property(fixture: &GraphFixture) -> TestCaseResult {
    let once = complement(&fixture.graph).map_err(|err| fail(fixture, err))?;
    let twice = complement(&once).map_err(|err| fail(fixture, err))?;
    if link_set(&twice) != link_set(&fixture.graph) {
        return Err(fail(fixture, "complement is not an involution"));
    }
    let pairs = fixture.graph.vertex_count() * fixture.graph.vertex_count().saturating_sub(1);
    let pairs = if fixture.graph.is_directed() {
        pairs
    } else {
        pairs / 2
    };
    if once.link_count() + fixture.graph.link_count() != pairs {
        return Err(fail(fixture, "graph and complement do not partition the pairs"));
    }
    Ok(())
}

/// Transposing twice restores the link set; undirected graphs are fixed
/// points.
pub(super) fn run_transpose_involution_property(fixture: &GraphFixture) -> TestCaseResult {
    let once = transpose(&fixture.graph).map_err(|err| fail(fixture, err))?;
    if !fixture.graph.is_directed() && once != fixture.graph {
        return Err(fail(fixture, "undirected transpose changed the graph"));
    }
    let twice = transpose(&once).map_err(|err| fail(fixture, err))?;
    if link_set(&twice) != link_set(&fixture.graph) {
        return Err(fail(fixture, "transpose is not an involution"));
    }
    let forward = fixture.graph.degrees();
    if once.degrees().in_degree() != forward.out_degree() {
        return Err(fail(fixture, "transpose did not swap degrees"));
    }
    Ok(())
}

/// Discovery precedes finish, tree edges nest and any two intervals are
/// either disjoint or nested.
pub(super) fn run_parenthesis_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    if graph.is_empty() {
        return Ok(());
    }
    let source = usize::try_from(fixture.seed % graph.vertex_count() as u64).unwrap_or(0);
    let forest = traverse(graph, source).map_err(|err| fail(fixture, err))?;

    let intervals: Vec<(usize, usize, usize)> = forest
        .reached()
        .filter_map(|vertex| Some((vertex, forest.discovery(vertex)?, forest.finish(vertex)?)))
        .collect();
    if intervals.len() != forest.reached().count() {
        return Err(fail(fixture, "reached vertex without a finish stamp"));
    }
    for &(vertex, discovered, finished) in &intervals {
        if discovered >= finished {
            return Err(fail(fixture, format!("vertex {vertex}: d={discovered} f={finished}")));
        }
        if let Some(parent) = forest.predecessor(vertex) {
            let nested = matches!(
                (forest.discovery(parent), forest.finish(parent)),
                (Some(pd), Some(pf)) if pd < discovered && finished < pf
            );
            if !nested {
                return Err(fail(fixture, format!("vertex {vertex} escapes parent {parent}")));
            }
        } else if vertex != source {
            return Err(fail(fixture, format!("reached vertex {vertex} has no parent")));
        }
    }
    for &(a, da, fa) in &intervals {
        for &(b, db, fb) in &intervals {
            let disjoint = fa < db || fb < da;
            let nested = (da < db && fb < fa) || (db < da && fa < fb) || a == b;
            if !disjoint && !nested {
                return Err(fail(fixture, format!("intervals of {a} and {b} overlap")));
            }
        }
    }
    Ok(())
}

/// Undirected labels match reachability and the label count equals the
/// number of roots.
pub(super) fn run_components_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let labels = components(graph);
    if labels.count() != labels.forest().roots().len() {
        return Err(fail(fixture, "label count differs from root count"));
    }
    let distinct: BTreeSet<_> = labels.labels().iter().copied().collect();
    if distinct.len() != labels.count() {
        return Err(fail(fixture, "labels are not contiguous"));
    }
    if graph.is_directed() {
        return Ok(());
    }
    for source in 0..graph.vertex_count() {
        let forest = traverse(graph, source).map_err(|err| fail(fixture, err))?;
        for target in 0..graph.vertex_count() {
            if forest.is_reached(target) != labels.same_component(source, target) {
                return Err(fail(
                    fixture,
                    format!("{source} and {target} disagree on connectivity"),
                ));
            }
        }
    }
    Ok(())
}
