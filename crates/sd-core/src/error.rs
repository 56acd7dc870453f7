use crate::model::{ActorId, MovieId};

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when building or querying a cast graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// No actor with the given name exists.
    #[error("actor not found: \"{0}\"")]
    ActorNotFound(String),

    /// No movie with the given title exists.
    #[error("movie not found: \"{0}\"")]
    MovieNotFound(String),

    /// A credit or lookup referenced an actor id that is not in the graph.
    #[error("unknown actor id: {0}")]
    UnknownActorId(ActorId),

    /// A credit or lookup referenced a movie id that is not in the graph.
    #[error("unknown movie id: {0}")]
    UnknownMovieId(MovieId),

    /// Another actor already uses this name (case-insensitive).
    #[error("actor name already taken: \"{0}\"")]
    DuplicateName(String),

    /// The snapshot could not be parsed or written.
    #[error("invalid graph snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
