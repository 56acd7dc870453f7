use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A performer in the cast graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Stable identifier.
    pub id: ActorId,
    /// Display name. Unique when compared case-insensitively.
    pub name: String,
    /// Ranking signal for costar menus. Higher is better known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
}

impl Actor {
    /// Create an actor without a popularity score.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ActorId(id),
            name: name.into(),
            popularity: None,
        }
    }

    /// Attach a popularity score.
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }
}

/// A film in the cast graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identifier.
    pub id: MovieId,
    /// Display title. Not necessarily unique.
    pub title: String,
    /// Release date as provided by the metadata source (usually `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl Movie {
    /// Create a movie without a release date.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            release_date: None,
        }
    }

    /// Attach a release date.
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }
}

/// The fact that an actor appears in a movie. The only edge type of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credit {
    /// The credited actor.
    pub actor: ActorId,
    /// The movie the actor appears in.
    pub movie: MovieId,
}

impl Credit {
    /// Create a credit from raw ids.
    pub fn new(actor: u64, movie: u64) -> Self {
        Self {
            actor: ActorId(actor),
            movie: MovieId(movie),
        }
    }
}
