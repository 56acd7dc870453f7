//! Error types for the path engine.

use sd_core::{ActorId, MovieId};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a session cannot move forward from its current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeadEnd {
    /// The actor has no credited movies.
    #[error("{actor} has no known movies")]
    NoMovies {
        /// Name of the stranded actor.
        actor: String,
    },

    /// Every cast member of the movie is already on the path.
    #[error("no unvisited costars left in {movie}")]
    NoCostars {
        /// Title of the exhausted movie.
        movie: String,
    },
}

/// Errors that can occur in the path engine.
///
/// Bad menu picks and unmatched write-ins are not errors; they come back as
/// [`Effect::InvalidChoice`](crate::Effect::InvalidChoice).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The actor id is not in the graph.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The movie id is not in the graph.
    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),

    /// There is nothing to choose from; back up or choose differently.
    #[error("dead end: {0}")]
    NoCandidates(DeadEnd),

    /// The session has already reached its target.
    #[error("the game is already won")]
    GameOver,
}
