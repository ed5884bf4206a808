//! End-to-end scenarios through the public API.

use graphe_core::{
    GenerationStrategy, GeneratorBuilder, Graph, MutationOutcome, Orientation, complement,
    components, induced_subgraph, line_graph, predecessor_graph, transpose, traverse,
};
use rstest::{fixture, rstest};

#[fixture]
fn path_with_isolated_vertex() -> Graph {
    let mut graph = Graph::new(4, Orientation::Undirected).expect("graph allocates");
    for (source, target) in [(0, 1), (1, 2)] {
        assert_eq!(
            graph.add_link(source, target),
            Ok(MutationOutcome::Applied)
        );
    }
    graph
}

#[rstest]
fn degrees_and_traversal_of_small_path(path_with_isolated_vertex: Graph) {
    let degrees = path_with_isolated_vertex.degrees();
    assert_eq!(degrees.out_degree(), &[1, 2, 1, 0]);
    assert_eq!(degrees.in_degree(), degrees.out_degree());

    let forest = traverse(&path_with_isolated_vertex, 0).expect("source is in range");
    assert_eq!(forest.discoveries(), &[Some(1), Some(2), Some(3), None]);
    assert_eq!(forest.predecessors(), &[None, Some(0), Some(1), None]);
    assert!(!forest.is_reached(3));
}

#[rstest]
fn complete_directed_generation_has_every_arc() {
    let graph = GeneratorBuilder::new()
        .with_vertex_count(5)
        .with_probability(1.0)
        .with_orientation(Orientation::Directed)
        .with_strategy(GenerationStrategy::FixedCount)
        .build()
        .expect("configuration is valid")
        .generate()
        .expect("generation must succeed");
    assert_eq!(graph.link_count(), 20);
    assert!(complement(&graph).expect("complement builds").link_count() == 0);
}

#[rstest]
fn derived_graphs_chain_without_aliasing(path_with_isolated_vertex: Graph) {
    let sub = induced_subgraph(&path_with_isolated_vertex, &[0, 1, 2, 3])
        .expect("every id fits the subset");
    assert_eq!(sub, path_with_isolated_vertex);

    let mut inverse = complement(&sub).expect("complement builds");
    assert_eq!(inverse.remove_link(0, 3), Ok(MutationOutcome::Applied));
    assert_eq!(inverse.add_link(0, 1), Ok(MutationOutcome::Applied));
    assert!(!path_with_isolated_vertex.link_exists(0, 3));
    assert_eq!(path_with_isolated_vertex.link_count(), 2);

    assert_eq!(
        transpose(&path_with_isolated_vertex).expect("transpose builds"),
        path_with_isolated_vertex
    );
    let line = line_graph(&path_with_isolated_vertex).expect("undirected graphs qualify");
    assert!(line.link_exists(0, 2));
}

#[rstest]
fn predecessor_forest_and_components_agree(path_with_isolated_vertex: Graph) {
    let labels = components(&path_with_isolated_vertex);
    let tree = predecessor_graph(
        &path_with_isolated_vertex,
        labels.forest().predecessors(),
    )
    .expect("forest matches the graph");
    // A spanning forest has one link fewer than vertices per component.
    assert_eq!(
        tree.link_count(),
        path_with_isolated_vertex.vertex_count() - labels.count()
    );
}
