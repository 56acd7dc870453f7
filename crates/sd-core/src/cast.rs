//! In-memory cast graph with name and title indexes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::GraphAccessor;
use crate::model::{Actor, ActorId, Credit, Movie, MovieId};

/// Serialized form of a cast graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastSnapshot {
    /// Every actor record.
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// Every movie record.
    #[serde(default)]
    pub movies: Vec<Movie>,
    /// Every actor-in-movie credit.
    #[serde(default)]
    pub credits: Vec<Credit>,
}

/// Record counts of a cast graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of actors.
    pub actors: usize,
    /// Number of movies.
    pub movies: usize,
    /// Number of credits.
    pub credits: usize,
}

/// Indexed in-memory store of actors, movies, and the credits between them.
#[derive(Debug, Clone, Default)]
pub struct CastGraph {
    actors: HashMap<ActorId, Actor>,
    movies: HashMap<MovieId, Movie>,
    credits: HashSet<Credit>,

    // Indexes
    by_name_lower: HashMap<String, ActorId>,
    by_title_lower: HashMap<String, Vec<MovieId>>,
    films_of: HashMap<ActorId, Vec<MovieId>>,
    cast_of: HashMap<MovieId, Vec<ActorId>>,
}

impl CastGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a snapshot, applying the usual upsert rules.
    pub fn from_snapshot(snapshot: CastSnapshot) -> GraphResult<Self> {
        let mut graph = Self::new();
        for actor in snapshot.actors {
            graph.add_actor(actor)?;
        }
        for movie in snapshot.movies {
            graph.add_movie(movie);
        }
        for credit in snapshot.credits {
            graph.add_credit(credit)?;
        }
        Ok(graph)
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let snapshot: CastSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Export the graph. Records are sorted by id so output is stable.
    pub fn to_snapshot(&self) -> CastSnapshot {
        let mut actors: Vec<Actor> = self.actors.values().cloned().collect();
        actors.sort_by_key(|a| a.id);
        let mut movies: Vec<Movie> = self.movies.values().cloned().collect();
        movies.sort_by_key(|m| m.id);
        let mut credits: Vec<Credit> = self.credits.iter().copied().collect();
        credits.sort_by_key(|c| (c.movie, c.actor));
        CastSnapshot {
            actors,
            movies,
            credits,
        }
    }

    /// Serialize the graph as pretty-printed JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    // -----------------------------------------------------------------------
    // Ingestion
    // -----------------------------------------------------------------------

    /// Insert an actor, or update the existing record with the same id.
    ///
    /// An update replaces the name but keeps the stored popularity when the
    /// incoming record has none.
    pub fn add_actor(&mut self, actor: Actor) -> GraphResult<ActorId> {
        let name_lower = actor.name.to_lowercase();
        if let Some(owner) = self.by_name_lower.get(&name_lower)
            && *owner != actor.id
        {
            return Err(GraphError::DuplicateName(actor.name));
        }

        let id = actor.id;
        match self.actors.get_mut(&id) {
            Some(existing) => {
                self.by_name_lower.remove(&existing.name.to_lowercase());
                existing.name = actor.name;
                existing.popularity = actor.popularity.or(existing.popularity);
            }
            None => {
                self.actors.insert(id, actor);
            }
        }
        self.by_name_lower.insert(name_lower, id);
        Ok(id)
    }

    /// Insert a movie. Returns `false` if a movie with this id already exists,
    /// in which case the stored record is left untouched.
    pub fn add_movie(&mut self, movie: Movie) -> bool {
        if self.movies.contains_key(&movie.id) {
            return false;
        }
        self.by_title_lower
            .entry(movie.title.to_lowercase())
            .or_default()
            .push(movie.id);
        self.movies.insert(movie.id, movie);
        true
    }

    /// Record a credit. Returns `false` if it was already present.
    pub fn add_credit(&mut self, credit: Credit) -> GraphResult<bool> {
        if !self.actors.contains_key(&credit.actor) {
            return Err(GraphError::UnknownActorId(credit.actor));
        }
        if !self.movies.contains_key(&credit.movie) {
            return Err(GraphError::UnknownMovieId(credit.movie));
        }
        if !self.credits.insert(credit) {
            return Ok(false);
        }
        self.films_of
            .entry(credit.actor)
            .or_default()
            .push(credit.movie);
        self.cast_of
            .entry(credit.movie)
            .or_default()
            .push(credit.actor);
        Ok(true)
    }

    /// Whether a movie with this id is stored.
    pub fn movie_exists(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }

    /// Whether any movie carries this title (case-insensitive).
    pub fn movie_exists_by_title(&self, title: &str) -> bool {
        self.by_title_lower
            .get(&title.to_lowercase())
            .is_some_and(|ids| !ids.is_empty())
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Look up an actor by name and fail with [`GraphError::ActorNotFound`].
    pub fn require_actor(&self, name: &str) -> GraphResult<&Actor> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.actors.get(id))
            .ok_or_else(|| GraphError::ActorNotFound(name.to_string()))
    }

    /// Look up the first movie with this title and fail with
    /// [`GraphError::MovieNotFound`].
    pub fn require_movie(&self, title: &str) -> GraphResult<&Movie> {
        self.by_title_lower
            .get(&title.to_lowercase())
            .and_then(|ids| ids.first())
            .and_then(|id| self.movies.get(id))
            .ok_or_else(|| GraphError::MovieNotFound(title.to_string()))
    }

    /// Iterate all actors in arbitrary order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Iterate all movies in arbitrary order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Record counts.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            actors: self.actors.len(),
            movies: self.movies.len(),
            credits: self.credits.len(),
        }
    }
}

impl GraphAccessor for CastGraph {
    fn actor(&self, id: ActorId) -> Option<Actor> {
        self.actors.get(&id).cloned()
    }

    fn actor_by_name(&self, name: &str) -> Option<Actor> {
        self.require_actor(name).ok().cloned()
    }

    fn movie(&self, id: MovieId) -> Option<Movie> {
        self.movies.get(&id).cloned()
    }

    fn movies_titled(&self, title: &str) -> Vec<Movie> {
        self.by_title_lower
            .get(&title.to_lowercase())
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.movies.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn filmography(&self, actor: ActorId) -> Vec<Movie> {
        self.films_of
            .get(&actor)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.movies.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn cast(&self, movie: MovieId) -> Vec<Actor> {
        self.cast_of
            .get(&movie)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.actors.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn credit_exists(&self, movie: MovieId, actor: ActorId) -> bool {
        self.credits.contains(&Credit { actor, movie })
    }

    fn neighbors_via_credits(&self, actor: ActorId) -> Vec<(MovieId, ActorId)> {
        let Some(films) = self.films_of.get(&actor) else {
            return Vec::new();
        };
        films
            .iter()
            .flat_map(|movie| {
                self.cast_of
                    .get(movie)
                    .into_iter()
                    .flatten()
                    .filter(move |costar| **costar != actor)
                    .map(move |costar| (*movie, *costar))
            })
            .collect()
    }
}
