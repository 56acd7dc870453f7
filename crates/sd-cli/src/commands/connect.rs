use std::path::Path;

use colored::Colorize;
use miette::IntoDiagnostic;
use sd_engine::shortest_path;

pub fn run(graph_file: &Path, from: &str, to: &str, ids: bool) -> miette::Result<()> {
    let graph = super::load_graph(graph_file)?;
    let start = super::find_actor(&graph, from)?;
    let end = super::find_actor(&graph, to)?;

    let Some(connection) = shortest_path(&graph, start.id, end.id).into_diagnostic()? else {
        println!("  No connection between {} and {}.", start.name, end.name);
        return Ok(());
    };

    if ids {
        let raw: Vec<String> = connection.to_ids().iter().map(u64::to_string).collect();
        println!("{}", raw.join(" "));
        return Ok(());
    }

    println!("  {}", connection.describe(&graph).join(" -> "));
    println!();
    let hops = connection.hop_count();
    println!(
        "  {} {}",
        hops.to_string().bold(),
        if hops == 1 { "connection" } else { "connections" }
    );
    Ok(())
}
