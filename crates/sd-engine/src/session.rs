//! Caller-owned state of one game.
//!
//! A [`GameSession`] is a plain value: the engine reads it, computes the next
//! state, and writes it back. Nothing is kept between calls, so a web front
//! end can park it in whatever per-player storage it has.

use serde::{Deserialize, Serialize};
use sd_core::{Actor, MovieId};

use crate::path::Path;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Pick a movie of the current actor.
    ChoosingMovie,
    /// Pick a costar from the chosen movie.
    ChoosingCostar {
        /// The movie just added to the path.
        movie: MovieId,
    },
    /// The path reached the target.
    Won,
}

/// One numbered option of the current menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Raw movie or actor id, depending on the phase.
    pub id: u64,
    /// Title or name as shown.
    pub label: String,
}

/// Per-game tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Movies and costars chosen.
    pub turns: u32,
    /// Steps undone with "back".
    pub backs: u32,
    /// Menus redrawn on request.
    pub reshuffles: u32,
    /// Automatic rewinds caused by picking a movie already on the path.
    pub loop_rewinds: u32,
}

/// The full state of one game between two actors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) current: Actor,
    pub(crate) target: Actor,
    pub(crate) path: Path,
    pub(crate) phase: Phase,
    pub(crate) menu: Vec<MenuItem>,
    pub(crate) counters: Counters,
}

impl GameSession {
    /// The actor whose movies are (or were last) on offer.
    pub fn current(&self) -> &Actor {
        &self.current
    }

    /// The actor to reach.
    pub fn target(&self) -> &Actor {
        &self.target
    }

    /// The path so far.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The options shown this turn, numbered from 1.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Per-game tallies.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Whether the target has been reached.
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// One-line recap, e.g. `2 connections in 4 turns (1 back, 0 shuffles, 0 loops cut)`.
    pub fn summary(&self) -> String {
        let c = &self.counters;
        format!(
            "{} connection{} in {} turn{} ({} back{}, {} shuffle{}, {} loop{} cut)",
            self.path.connections(),
            plural(self.path.connections() as u32),
            c.turns,
            plural(c.turns),
            c.backs,
            plural(c.backs),
            c.reshuffles,
            plural(c.reshuffles),
            c.loop_rewinds,
            plural(c.loop_rewinds),
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
