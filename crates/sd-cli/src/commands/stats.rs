use std::path::Path;

use colored::Colorize;

pub fn run(graph_file: &Path) -> miette::Result<()> {
    let graph = super::load_graph(graph_file)?;
    let stats = graph.stats();

    println!();
    println!("  {}", graph_file.display().to_string().bold());
    println!("  Actors:  {}", stats.actors);
    println!("  Movies:  {}", stats.movies);
    println!("  Credits: {}", stats.credits);
    Ok(())
}
