use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use miette::IntoDiagnostic;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sd_core::GraphAccessor;
use sd_engine::{Effect, EngineConfig, EngineError, GameSession, Input, PathBuilder, Phase, validate};

const QUIT_WORDS: &[&str] = &["quit", "exit"];

pub fn run(
    graph_file: &Path,
    from: &str,
    to: &str,
    seed: Option<u64>,
    menu_size: usize,
    cutoff: f64,
) -> miette::Result<()> {
    let graph = super::load_graph(graph_file)?;
    let start = super::find_actor(&graph, from)?;
    let target = super::find_actor(&graph, to)?;

    let config = EngineConfig::default()
        .with_menu_size(menu_size)
        .with_fuzzy_cutoff(cutoff);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let builder = PathBuilder::new(&graph, config);
    let mut session = builder.start(start.id, target.id, &mut rng).into_diagnostic()?;

    println!(
        "  Connect {} to {}",
        start.name.bold(),
        target.name.bold()
    );
    println!("  Enter a number or a name, 'back' to undo, 'shuffle' for new options, 'quit' to stop.");

    let mut lines = io::stdin().lock().lines();
    while !session.is_won() {
        print_turn(&graph, &session);
        print!("> ");
        io::stdout().flush().into_diagnostic()?;

        let Some(line) = lines.next() else {
            println!();
            println!("  Game abandoned.");
            return Ok(());
        };
        let line = line.into_diagnostic()?;
        if QUIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
            println!("  Game abandoned.");
            return Ok(());
        }

        match builder.step(&mut session, Input::parse(&line), &mut rng) {
            Ok(Effect::Continue | Effect::Won(_)) => {}
            Ok(Effect::InvalidChoice(why)) => println!("  {}", why.to_string().yellow()),
            Err(EngineError::NoCandidates(dead_end)) => {
                println!("  {} Choose again or type 'back'.", format!("Dead end: {dead_end}.").red());
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }

    print_victory(&graph, &session);
    Ok(())
}

fn print_turn<G: GraphAccessor>(graph: &G, session: &GameSession) {
    println!();
    println!("  {}", session.path().render().dimmed());

    match session.phase() {
        Phase::ChoosingMovie => {
            println!("  Movies with {}:", session.current().name.bold());
        }
        Phase::ChoosingCostar { movie } => {
            let title = graph
                .movie(movie)
                .map_or_else(|| format!("Movie {movie}"), |m| m.title);
            println!("  Who else was in {}?", title.bold());
        }
        Phase::Won => return,
    }

    for (i, item) in session.menu().iter().enumerate() {
        println!("  {:>3}. {}", i + 1, item.label);
    }
}

fn print_victory<G: GraphAccessor>(graph: &G, session: &GameSession) {
    let path = session.path();
    println!();
    println!("  {}", format!("You reached {}!", session.target().name).green().bold());
    println!();
    for line in path.victory_lines() {
        println!("  {line}");
    }
    println!();
    println!("  {}", path.render());
    if path.connections() > 0 {
        if validate(graph, path) {
            println!("  Path verified against the credit graph.");
        } else {
            println!("  {}", "Path could not be verified against the credit graph.".red());
        }
    }
    println!("  {}", session.summary());
}
