//! Path engine for sixdeg, the six-degrees actor connection game.
//!
//! Given a [`GraphAccessor`](sd_core::GraphAccessor), the engine finds
//! shortest connections between actors, validates finished paths, resolves
//! free-text guesses with diacritic-insensitive fuzzy matching, and drives
//! interactive play one turn at a time through a caller-owned
//! [`GameSession`].

/// Interactive turn handling.
pub mod builder;
/// Engine tunables.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Fuzzy write-in resolution.
pub mod fuzzy;
/// Turn input parsing.
pub mod input;
/// The actor/movie path value.
pub mod path;
/// Shortest-connection search.
pub mod search;
/// Game session state.
pub mod session;
/// Path validation.
pub mod validate;

pub use builder::{Effect, InvalidChoice, PathBuilder};
pub use config::EngineConfig;
pub use error::{DeadEnd, EngineError, EngineResult};
pub use fuzzy::resolve;
pub use input::Input;
pub use path::{NodeId, Path, PathNode, Rewind, is_winning_path};
pub use search::{Connection, Hop, shortest_path};
pub use session::{Counters, GameSession, MenuItem, Phase};
pub use validate::{validate, validate_connection, validate_ids, validate_names};
