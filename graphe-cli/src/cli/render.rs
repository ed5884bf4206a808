//! Plain-text rendering of command reports.

use std::io::{self, Write};

use graphe_core::{Components, DfsForest, Graph};

use super::commands::CommandReport;

/// Writes a human-readable rendering of `report` to `writer`.
///
/// # Errors
/// Returns any error reported by `writer`.
///
/// # Examples
/// ```
/// use graphe_cli::cli::{CommandReport, render_report};
/// use graphe_core::{Graph, Orientation};
///
/// let graph = Graph::from_links(2, Orientation::Directed, &[(0, 1)])?;
/// let mut out = Vec::new();
/// render_report(&CommandReport::Summary { graph }, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.contains("vertex 0: 1 -> null"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &CommandReport, mut writer: impl Write) -> io::Result<()> {
    match report {
        CommandReport::Generated { graph, output } => {
            render_summary(graph, &mut writer)?;
            if let Some(path) = output {
                writeln!(writer, "saved to {}", path.display())?;
            }
        }
        CommandReport::Summary { graph } => {
            render_summary(graph, &mut writer)?;
            render_degrees(graph, &mut writer)?;
        }
        CommandReport::Mutated {
            action,
            outcome,
            graph,
        } => {
            writeln!(writer, "{action}: {}", outcome.describe())?;
            render_summary(graph, &mut writer)?;
        }
        CommandReport::Derived {
            kind,
            graph,
            output,
        } => {
            writeln!(writer, "derived: {kind}")?;
            render_summary(graph, &mut writer)?;
            if let Some(path) = output {
                writeln!(writer, "saved to {}", path.display())?;
            }
        }
        CommandReport::Traversal {
            source,
            forest,
            tree,
        } => {
            writeln!(writer, "traversal from vertex {source}")?;
            render_forest(forest, &mut writer)?;
            writeln!(writer, "predecessor graph:")?;
            render_summary(tree, &mut writer)?;
        }
        CommandReport::Components { components } => render_components(components, &mut writer)?,
    }
    writer.flush()
}

/// Header lines followed by one adjacency line per vertex with
/// neighbours, in reporting order.
fn render_summary(graph: &Graph, writer: &mut impl Write) -> io::Result<()> {
    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "links: {}", graph.link_count())?;
    writeln!(writer, "type: {kind}")?;
    writeln!(writer, "adjacency:")?;
    for vertex in 0..graph.vertex_count() {
        if graph.out_degree(vertex) == Some(0) {
            continue;
        }
        write!(writer, "vertex {vertex}: ")?;
        for neighbour in graph.neighbours(vertex) {
            write!(writer, "{neighbour} -> ")?;
        }
        writeln!(writer, "null")?;
    }
    Ok(())
}

fn render_degrees(graph: &Graph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "vertex\tin\tout")?;
    for (vertex, in_degree, out_degree) in graph.degrees().iter() {
        writeln!(writer, "{vertex}\t{in_degree}\t{out_degree}")?;
    }
    Ok(())
}

fn render_forest(forest: &DfsForest, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "vertex\tdiscovery\tfinish\tpredecessor")?;
    for vertex in forest.reached() {
        let (Some(discovery), Some(finish)) = (forest.discovery(vertex), forest.finish(vertex))
        else {
            continue;
        };
        match forest.predecessor(vertex) {
            Some(parent) => writeln!(writer, "{vertex}\t{discovery}\t{finish}\t{parent}")?,
            None => writeln!(writer, "{vertex}\t{discovery}\t{finish}\t-")?,
        }
    }
    Ok(())
}

fn render_components(components: &Components, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "components: {}", components.count())?;
    writeln!(writer, "vertex\tcomponent")?;
    for (vertex, label) in components.labels().iter().enumerate() {
        writeln!(writer, "{vertex}\t{label}")?;
    }
    Ok(())
}
