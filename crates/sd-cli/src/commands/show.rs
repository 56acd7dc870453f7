use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sd_core::GraphAccessor;

pub fn run(graph_file: &Path, name: &str) -> miette::Result<()> {
    let graph = super::load_graph(graph_file)?;
    let actor = super::find_actor(&graph, name)?;

    println!();
    println!("  {} (id {})", actor.name.bold(), actor.id);
    if let Some(popularity) = actor.popularity {
        println!("  Popularity: {popularity:.1}");
    }
    println!();

    let films = graph.filmography(actor.id);
    if films.is_empty() {
        println!("  No movies found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Released", "Costars"]);

    for movie in &films {
        let costars = graph.cast(movie.id).len().saturating_sub(1);
        table.add_row(vec![
            movie.title.clone(),
            movie.release_date.clone().unwrap_or_else(|| "-".to_string()),
            costars.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} movie{}",
        films.len(),
        if films.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
