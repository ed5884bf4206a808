//! Command implementations and argument parsing for the graphe CLI.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphe_core::{
    Components, DfsForest, GenerationStrategy, GeneratorBuilder, Graph, GraphError,
    MutationOutcome, VertexCount, complement, components, induced_subgraph, line_graph,
    predecessor_graph, transpose, traverse,
};
use graphe_providers_edgelist::{EdgeListError, read_edge_list, write_edge_list};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "graphe", about = "Generate, inspect and transform graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random G(n, p) graph.
    Generate(GenerateCommand),
    /// Print a graph's summary, adjacency lists and degrees.
    Show(ShowCommand),
    /// Add or remove a link and save the graph back.
    Link(LinkCommand),
    /// Append a vertex and save the graph back.
    Vertex(VertexCommand),
    /// Build a derived graph.
    Derive(DeriveCommand),
    /// Run a depth-first traversal from one vertex.
    Traverse(TraverseCommand),
    /// Label every vertex with its component.
    Components(ComponentsCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices.
    #[arg(long, allow_negative_numbers = true)]
    pub vertices: i64,

    /// Probability that a candidate link is kept; clamped to [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    pub probability: f64,

    /// Generate arcs instead of symmetric edges.
    #[arg(long)]
    pub directed: bool,

    /// Sampling strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::PerPair)]
    pub strategy: StrategyArg,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the graph to this edge-list file.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Sampling strategies exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Independent trial per ordered pair.
    PerPair,
    /// Exactly `round(p * pairs)` links.
    FixedCount,
}

impl From<StrategyArg> for GenerationStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::PerPair => Self::PerPair,
            StrategyArg::FixedCount => Self::FixedCount,
        }
    }
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Edge-list file to read.
    pub path: PathBuf,
}

/// Options accepted by the `link` command.
#[derive(Debug, Args, Clone)]
pub struct LinkCommand {
    /// Edge-list file to update in place.
    pub path: PathBuf,
    /// Whether to add or remove the link.
    #[arg(value_enum)]
    pub action: LinkAction,
    /// Source vertex.
    pub source: usize,
    /// Target vertex.
    pub target: usize,
}

/// Link mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkAction {
    /// Insert the link.
    Add,
    /// Delete the link.
    Remove,
}

impl LinkAction {
    const fn label(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// Options accepted by the `vertex` command.
#[derive(Debug, Args, Clone)]
pub struct VertexCommand {
    /// Edge-list file to update in place.
    pub path: PathBuf,
    /// Identifier of the new vertex; must equal the current vertex count.
    pub id: usize,
}

/// Options accepted by the `derive` command.
#[derive(Debug, Args, Clone)]
pub struct DeriveCommand {
    /// Edge-list file to read.
    pub path: PathBuf,

    /// Write the derived graph to this edge-list file.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Which graph to derive.
    #[command(subcommand)]
    pub kind: DeriveKind,
}

/// Derived graphs offered by the `derive` command.
#[derive(Debug, Subcommand, Clone)]
pub enum DeriveKind {
    /// Subgraph induced by a set of vertices.
    Subgraph {
        /// Comma-separated vertex ids.
        #[arg(long, value_delimiter = ',', required = true)]
        vertices: Vec<usize>,
    },
    /// Complement graph.
    Complement,
    /// Transposed graph.
    Transpose,
    /// Line graph of an undirected graph.
    Line,
}

impl DeriveKind {
    const fn label(&self) -> &'static str {
        match self {
            Self::Subgraph { .. } => "subgraph",
            Self::Complement => "complement",
            Self::Transpose => "transpose",
            Self::Line => "line",
        }
    }
}

/// Options accepted by the `traverse` command.
#[derive(Debug, Args, Clone)]
pub struct TraverseCommand {
    /// Edge-list file to read.
    pub path: PathBuf,
    /// Vertex the search starts from.
    #[arg(long)]
    pub source: usize,
}

/// Options accepted by the `components` command.
#[derive(Debug, Args, Clone)]
pub struct ComponentsCommand {
    /// Edge-list file to read.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening or creating an edge list.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed or written.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// A graph operation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// A vertex appeared more than once in a subgraph selection.
    #[error("vertex {vertex} is listed more than once in the subset")]
    InvalidSubset {
        /// The repeated vertex.
        vertex: usize,
    },
}

impl CliError {
    /// Stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::EdgeList(err) => Some(err.code()),
            Self::Core(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::InvalidSubset { .. } => None,
        }
    }
}

/// Result of a CLI command, ready for [`super::render_report`].
#[derive(Debug, Clone)]
pub enum CommandReport {
    /// A freshly generated graph.
    Generated {
        /// The generated graph.
        graph: Graph,
        /// Where it was written, if anywhere.
        output: Option<PathBuf>,
    },
    /// A graph loaded for inspection.
    Summary {
        /// The loaded graph.
        graph: Graph,
    },
    /// A link or vertex mutation, saved back to its file.
    Mutated {
        /// Human-readable description of the requested change.
        action: String,
        /// What the mutation did.
        outcome: MutationOutcome,
        /// The graph after the mutation.
        graph: Graph,
    },
    /// A derived graph.
    Derived {
        /// Which derivation ran.
        kind: &'static str,
        /// The derived graph.
        graph: Graph,
        /// Where it was written, if anywhere.
        output: Option<PathBuf>,
    },
    /// Depth-first traversal results.
    Traversal {
        /// Vertex the search started from.
        source: usize,
        /// Timestamps and predecessors.
        forest: DfsForest,
        /// Graph of predecessor links.
        tree: Graph,
    },
    /// Component labels.
    Components {
        /// Labels and the spanning forest.
        components: Components,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, transforming or writing a graph fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphe_cli::cli::{Cli, Command, CommandReport, GenerateCommand, StrategyArg, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         vertices: 5,
///         probability: 1.0,
///         directed: true,
///         strategy: StrategyArg::FixedCount,
///         seed: Some(1),
///         output: None,
///     }),
/// };
/// let CommandReport::Generated { graph, .. } = run_cli(cli)? else {
///     unreachable!("generate reports a generated graph");
/// };
/// assert_eq!(graph.link_count(), 20);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandReport, CliError> {
    let span = Span::current();
    let report = match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command)?
        }
        Command::Show(command) => {
            span.record("command", field::display("show"));
            CommandReport::Summary {
                graph: load_graph(&command.path)?,
            }
        }
        Command::Link(command) => {
            span.record("command", field::display("link"));
            run_link(command)?
        }
        Command::Vertex(command) => {
            span.record("command", field::display("vertex"));
            run_vertex(command)?
        }
        Command::Derive(command) => {
            span.record("command", field::display("derive"));
            run_derive(command)?
        }
        Command::Traverse(command) => {
            span.record("command", field::display("traverse"));
            run_traverse(&command)?
        }
        Command::Components(command) => {
            span.record("command", field::display("components"));
            CommandReport::Components {
                components: components(&load_graph(&command.path)?),
            }
        }
    };
    info!("command completed");
    Ok(report)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(vertices = command.vertices, strategy = ?command.strategy),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<CommandReport, CliError> {
    let vertex_count = VertexCount::try_from(command.vertices)?;
    let mut builder = GeneratorBuilder::new()
        .with_vertex_count(vertex_count.get())
        .with_probability(command.probability)
        .with_orientation(command.directed.into())
        .with_strategy(command.strategy.into());
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    let graph = builder.build()?.generate()?;
    if let Some(path) = &command.output {
        save_graph(&graph, path)?;
    }
    Ok(CommandReport::Generated {
        graph,
        output: command.output,
    })
}

#[instrument(
    name = "cli.link",
    err,
    skip(command),
    fields(action = command.action.label(), source = command.source, target = command.target),
)]
pub(super) fn run_link(command: LinkCommand) -> Result<CommandReport, CliError> {
    let mut graph = load_graph(&command.path)?;
    let outcome = match command.action {
        LinkAction::Add => graph.add_link(command.source, command.target)?,
        LinkAction::Remove => graph.remove_link(command.source, command.target)?,
    };
    persist_if_applied(&graph, &command.path, outcome)?;
    Ok(CommandReport::Mutated {
        action: format!(
            "{} link {} {}",
            command.action.label(),
            command.source,
            command.target
        ),
        outcome,
        graph,
    })
}

#[instrument(name = "cli.vertex", err, skip(command), fields(id = command.id))]
pub(super) fn run_vertex(command: VertexCommand) -> Result<CommandReport, CliError> {
    let mut graph = load_graph(&command.path)?;
    let outcome = graph.add_vertex(command.id)?;
    persist_if_applied(&graph, &command.path, outcome)?;
    Ok(CommandReport::Mutated {
        action: format!("add vertex {}", command.id),
        outcome,
        graph,
    })
}

#[instrument(
    name = "cli.derive",
    err,
    skip(command),
    fields(kind = command.kind.label()),
)]
pub(super) fn run_derive(command: DeriveCommand) -> Result<CommandReport, CliError> {
    let source = load_graph(&command.path)?;
    let graph = match &command.kind {
        DeriveKind::Subgraph { vertices } => {
            ensure_distinct(vertices)?;
            induced_subgraph(&source, vertices)?
        }
        DeriveKind::Complement => complement(&source)?,
        DeriveKind::Transpose => transpose(&source)?,
        DeriveKind::Line => line_graph(&source)?,
    };
    if let Some(path) = &command.output {
        save_graph(&graph, path)?;
    }
    Ok(CommandReport::Derived {
        kind: command.kind.label(),
        graph,
        output: command.output,
    })
}

#[instrument(name = "cli.traverse", err, skip(command), fields(source = command.source))]
pub(super) fn run_traverse(command: &TraverseCommand) -> Result<CommandReport, CliError> {
    let graph = load_graph(&command.path)?;
    let forest = traverse(&graph, command.source)?;
    let tree = predecessor_graph(&graph, forest.predecessors())?;
    Ok(CommandReport::Traversal {
        source: command.source,
        forest,
        tree,
    })
}

fn ensure_distinct(vertices: &[usize]) -> Result<(), CliError> {
    let mut seen = BTreeSet::new();
    match vertices.iter().find(|&&vertex| !seen.insert(vertex)) {
        Some(&vertex) => Err(CliError::InvalidSubset { vertex }),
        None => Ok(()),
    }
}

fn persist_if_applied(
    graph: &Graph,
    path: &Path,
    outcome: MutationOutcome,
) -> Result<(), CliError> {
    if outcome.is_applied() {
        save_graph(graph, path)
    } else {
        warn!(outcome = outcome.describe(), "nothing to save");
        Ok(())
    }
}

#[instrument(name = "cli.load_graph", err, skip(path), fields(path = field::Empty))]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_edge_list(BufReader::new(file))?;
    info!(
        vertices = graph.vertex_count(),
        links = graph.link_count(),
        "graph loaded"
    );
    Ok(graph)
}

#[instrument(name = "cli.save_graph", err, skip(graph, path), fields(path = field::Empty))]
pub(super) fn save_graph(graph: &Graph, path: &Path) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_edge_list(graph, BufWriter::new(file))?;
    Ok(())
}
