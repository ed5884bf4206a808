//! Command-line interface orchestration for graphe.
//!
//! Commands load graphs from edge-list files, run one core operation and
//! hand a [`CommandReport`] to [`render_report`] for plain-text output.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, CommandReport, ComponentsCommand, DeriveCommand, DeriveKind,
    GenerateCommand, LinkAction, LinkCommand, ShowCommand, StrategyArg, TraverseCommand,
    VertexCommand, run_cli,
};
pub use render::render_report;

#[cfg(test)]
mod test_helpers;
