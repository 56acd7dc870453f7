pub mod connect;
pub mod play;
pub mod show;
pub mod stats;
pub mod validate;

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};
use sd_core::{Actor, CastGraph};

/// Read and index a JSON graph snapshot.
fn load_graph(path: &Path) -> miette::Result<CastGraph> {
    let json = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read graph file {}", path.display()))?;
    let graph = CastGraph::from_json(&json)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot load graph file {}", path.display()))?;

    let stats = graph.stats();
    tracing::debug!(
        file = %path.display(),
        actors = stats.actors,
        movies = stats.movies,
        credits = stats.credits,
        "graph loaded"
    );
    Ok(graph)
}

/// Look up an actor by name, reporting unknown names as errors.
fn find_actor(graph: &CastGraph, name: &str) -> miette::Result<Actor> {
    graph.require_actor(name).cloned().into_diagnostic()
}
