//! Core types for sixdeg: actors, movies, credits, and the cast graph.
//!
//! The path engine only ever talks to a [`GraphAccessor`]. This crate defines
//! that contract together with [`CastGraph`], an indexed in-memory store that
//! implements it and can be loaded from a JSON snapshot.

/// Indexed in-memory cast graph and its JSON snapshot format.
pub mod cast;
/// Error types used throughout the crate.
pub mod error;
/// The read-only graph contract consumed by the path engine.
pub mod graph;
/// Actor, movie, and credit records with their identifiers.
pub mod model;
/// Query builders for sampling filmographies and casts.
pub mod query;

/// Re-export the in-memory store.
pub use cast::{CastGraph, CastSnapshot, GraphStats};
/// Re-export error types.
pub use error::{GraphError, GraphResult};
/// Re-export the accessor trait.
pub use graph::GraphAccessor;
/// Re-export record types.
pub use model::{Actor, ActorId, Credit, Movie, MovieId};
/// Re-export query builders.
pub use query::{CostarOrder, CostarQuery, MovieOrder, MovieQuery};
