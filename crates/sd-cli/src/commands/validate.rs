use std::path::Path;

use miette::IntoDiagnostic;
use sd_engine::validate_names;

pub fn run(graph_file: &Path, path: &[String]) -> miette::Result<()> {
    let graph = super::load_graph(graph_file)?;

    // Unknown names are reported as such, not as a broken link.
    for (i, item) in path.iter().enumerate() {
        if i % 2 == 0 {
            graph.require_actor(item).into_diagnostic()?;
        } else {
            graph.require_movie(item).into_diagnostic()?;
        }
    }

    if !validate_names(&graph, path) {
        return Err(miette::miette!(
            help = "paths alternate actor, movie, actor and every actor must be credited in the movies beside them",
            "invalid path: {}",
            path.join(" -> ")
        ));
    }

    let connections = (path.len() - 1) / 2;
    println!("  Valid path: {}", path.join(" -> "));
    println!(
        "  {connections} {}",
        if connections == 1 { "connection" } else { "connections" }
    );
    Ok(())
}
