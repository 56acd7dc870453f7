//! Builders for the filmography and cast queries used to fill play menus.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::GraphAccessor;
use crate::model::{Actor, ActorId, Movie, MovieId};

/// Ordering of a filmography query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieOrder {
    /// Uniform random sample over the whole filmography.
    #[default]
    Random,
    /// The store's enumeration order.
    All,
}

/// Ordering of a cast query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostarOrder {
    /// Best known first; actors without a score go last.
    #[default]
    PopularityDesc,
    /// Uniform random sample over the whole cast.
    Random,
    /// The store's enumeration order.
    All,
}

/// Query for the movies an actor appears in.
pub struct MovieQuery<'g, G: GraphAccessor + ?Sized> {
    graph: &'g G,
    actor: ActorId,
    exclude_titles: HashSet<String>,
    limit: Option<usize>,
    order: MovieOrder,
}

impl<'g, G: GraphAccessor + ?Sized> MovieQuery<'g, G> {
    /// Start a query over `actor`'s filmography.
    pub fn new(graph: &'g G, actor: ActorId) -> Self {
        Self {
            graph,
            actor,
            exclude_titles: HashSet::new(),
            limit: None,
            order: MovieOrder::default(),
        }
    }

    /// Skip movies with these titles (case-insensitive).
    pub fn exclude_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_titles
            .extend(titles.into_iter().map(|t| t.as_ref().to_lowercase()));
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set the result ordering.
    pub fn order(mut self, order: MovieOrder) -> Self {
        self.order = order;
        self
    }

    /// Execute the query.
    ///
    /// Sampling shuffles the complete filmography before the limit is applied,
    /// so every credit is equally likely to be offered.
    pub fn execute(self, rng: &mut StdRng) -> Vec<Movie> {
        let mut movies: Vec<Movie> = self
            .graph
            .filmography(self.actor)
            .into_iter()
            .filter(|m| !self.exclude_titles.contains(&m.title.to_lowercase()))
            .collect();

        if self.order == MovieOrder::Random {
            movies.shuffle(rng);
        }
        if let Some(limit) = self.limit {
            movies.truncate(limit);
        }
        movies
    }
}

/// Query for the cast of a movie.
pub struct CostarQuery<'g, G: GraphAccessor + ?Sized> {
    graph: &'g G,
    movie: MovieId,
    exclude_names: HashSet<String>,
    limit: Option<usize>,
    order: CostarOrder,
}

impl<'g, G: GraphAccessor + ?Sized> CostarQuery<'g, G> {
    /// Start a query over `movie`'s cast.
    pub fn new(graph: &'g G, movie: MovieId) -> Self {
        Self {
            graph,
            movie,
            exclude_names: HashSet::new(),
            limit: None,
            order: CostarOrder::default(),
        }
    }

    /// Skip actors with these names (case-insensitive).
    pub fn exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_names
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set the result ordering.
    pub fn order(mut self, order: CostarOrder) -> Self {
        self.order = order;
        self
    }

    /// Execute the query.
    pub fn execute(self, rng: &mut StdRng) -> Vec<Actor> {
        let mut cast: Vec<Actor> = self
            .graph
            .cast(self.movie)
            .into_iter()
            .filter(|a| !self.exclude_names.contains(&a.name.to_lowercase()))
            .collect();

        match self.order {
            CostarOrder::PopularityDesc => rank_by_popularity(&mut cast),
            CostarOrder::Random => cast.shuffle(rng),
            CostarOrder::All => {}
        }
        if let Some(limit) = self.limit {
            cast.truncate(limit);
        }
        cast
    }
}

/// Sort actors by popularity, highest first. Unscored actors sink to the end;
/// the sort is stable, so ties keep their incoming order.
pub fn rank_by_popularity(actors: &mut [Actor]) {
    actors.sort_by(|a, b| match (a.popularity, b.popularity) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::CastGraph;
    use crate::model::Credit;
    use rand::SeedableRng;

    fn busy_graph() -> CastGraph {
        let mut graph = CastGraph::new();
        graph.add_actor(Actor::new(1, "Lead")).unwrap();
        for i in 0..20u64 {
            graph.add_movie(Movie::new(100 + i, format!("Film {i}")));
            graph.add_credit(Credit::new(1, 100 + i)).unwrap();
        }
        for (id, name, pop) in [(2, "Low", Some(1.0)), (3, "High", Some(9.0)), (4, "Mid", Some(5.0))] {
            let mut actor = Actor::new(id, name);
            actor.popularity = pop;
            graph.add_actor(actor).unwrap();
            graph.add_credit(Credit::new(id, 100)).unwrap();
        }
        graph.add_actor(Actor::new(5, "Unknown")).unwrap();
        graph.add_credit(Credit::new(5, 100)).unwrap();
        graph
    }

    #[test]
    fn movie_query_limits_and_excludes() {
        let graph = busy_graph();
        let mut rng = StdRng::seed_from_u64(7);
        let movies = MovieQuery::new(&graph, ActorId(1))
            .exclude_titles(["film 0", "FILM 1"])
            .limit(7)
            .execute(&mut rng);
        assert_eq!(movies.len(), 7);
        assert!(movies.iter().all(|m| m.title != "Film 0" && m.title != "Film 1"));
    }

    #[test]
    fn movie_sample_reaches_beyond_first_rows() {
        let graph = busy_graph();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            for movie in MovieQuery::new(&graph, ActorId(1)).limit(3).execute(&mut rng) {
                seen.insert(movie.id);
            }
        }
        assert!(seen.len() > 10, "sampled only {} distinct films", seen.len());
    }

    #[test]
    fn movie_query_all_keeps_store_order() {
        let graph = busy_graph();
        let mut rng = StdRng::seed_from_u64(0);
        let movies = MovieQuery::new(&graph, ActorId(1))
            .order(MovieOrder::All)
            .limit(3)
            .execute(&mut rng);
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Film 0", "Film 1", "Film 2"]);
    }

    #[test]
    fn costar_query_ranks_by_popularity() {
        let graph = busy_graph();
        let mut rng = StdRng::seed_from_u64(0);
        let cast = CostarQuery::new(&graph, MovieId(100))
            .exclude_names(["lead"])
            .execute(&mut rng);
        let names: Vec<_> = cast.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low", "Unknown"]);
    }

    #[test]
    fn costar_query_random_respects_limit_and_exclusions() {
        let graph = busy_graph();
        let mut rng = StdRng::seed_from_u64(3);
        let cast = CostarQuery::new(&graph, MovieId(100))
            .exclude_names(["Lead", "High"])
            .order(CostarOrder::Random)
            .limit(2)
            .execute(&mut rng);
        assert_eq!(cast.len(), 2);
        assert!(cast.iter().all(|a| a.name != "Lead" && a.name != "High"));
    }
}
