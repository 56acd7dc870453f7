//! The read-only contract the path engine needs from a graph store.
//!
//! Implementations may sit on a relational database or on [`CastGraph`]. The
//! engine never assumes the graph is in memory: every method returns owned
//! records, and callers are expected to query only what they need.
//!
//! [`CastGraph`]: crate::cast::CastGraph

use crate::model::{Actor, ActorId, Movie, MovieId};

/// Read-only queries over the bipartite actor/movie credit graph.
pub trait GraphAccessor {
    /// Look up an actor by id.
    fn actor(&self, id: ActorId) -> Option<Actor>;

    /// Look up an actor by name (case-insensitive, exact).
    fn actor_by_name(&self, name: &str) -> Option<Actor>;

    /// Look up a movie by id.
    fn movie(&self, id: MovieId) -> Option<Movie>;

    /// All movies with this title (case-insensitive, exact).
    fn movies_titled(&self, title: &str) -> Vec<Movie>;

    /// The full filmography of an actor, in the store's enumeration order.
    fn filmography(&self, actor: ActorId) -> Vec<Movie>;

    /// The full cast of a movie, in the store's enumeration order.
    fn cast(&self, movie: MovieId) -> Vec<Actor>;

    /// Whether the actor holds a credit for the movie.
    fn credit_exists(&self, movie: MovieId, actor: ActorId) -> bool;

    /// Every `(movie, co-actor)` pair reachable from `actor` in one hop.
    ///
    /// The default walks [`filmography`](Self::filmography) and
    /// [`cast`](Self::cast); stores with a cheaper join should override it.
    fn neighbors_via_credits(&self, actor: ActorId) -> Vec<(MovieId, ActorId)> {
        let mut neighbors = Vec::new();
        for movie in self.filmography(actor) {
            for costar in self.cast(movie.id) {
                if costar.id != actor {
                    neighbors.push((movie.id, costar.id));
                }
            }
        }
        neighbors
    }

    /// Whether one movie titled `title` credits both `actor` and `costar`.
    ///
    /// All comparisons are case-insensitive. Titles are not unique, so every
    /// movie carrying the title is tried, but both names must be credited in
    /// the same one.
    fn shared_credit_by_name(&self, title: &str, actor: &str, costar: &str) -> bool {
        let (Some(actor), Some(costar)) = (self.actor_by_name(actor), self.actor_by_name(costar))
        else {
            return false;
        };
        self.movies_titled(title)
            .iter()
            .any(|movie| self.credit_exists(movie.id, actor.id) && self.credit_exists(movie.id, costar.id))
    }
}
