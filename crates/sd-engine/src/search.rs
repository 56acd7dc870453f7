//! Breadth-first shortest connection between two actors.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use sd_core::{ActorId, GraphAccessor, MovieId};

use crate::error::{EngineError, EngineResult};

/// One actor-to-actor step: the shared movie and the actor reached through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// The movie both actors appear in.
    pub movie: MovieId,
    /// The actor reached.
    pub actor: ActorId,
}

/// An id-level path `[actor, movie, actor, ..., actor]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Where the path starts.
    pub start: ActorId,
    /// Every hop in order.
    pub hops: Vec<Hop>,
}

impl Connection {
    /// Number of actor-to-actor hops.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// The last actor on the path.
    pub fn end(&self) -> ActorId {
        self.hops.last().map_or(self.start, |h| h.actor)
    }

    /// Flatten to raw ids, alternating actor and movie.
    pub fn to_ids(&self) -> Vec<u64> {
        let mut ids = Vec::with_capacity(1 + self.hops.len() * 2);
        ids.push(self.start.0);
        for hop in &self.hops {
            ids.push(hop.movie.0);
            ids.push(hop.actor.0);
        }
        ids
    }

    /// Resolve every id to its display string. Missing rows read as
    /// `Actor <id>` or `Movie <id>`.
    pub fn describe<G: GraphAccessor + ?Sized>(&self, graph: &G) -> Vec<String> {
        let actor_name = |id: ActorId| {
            graph
                .actor(id)
                .map_or_else(|| format!("Actor {id}"), |a| a.name)
        };
        let mut names = vec![actor_name(self.start)];
        for hop in &self.hops {
            names.push(
                graph
                    .movie(hop.movie)
                    .map_or_else(|| format!("Movie {}", hop.movie), |m| m.title),
            );
            names.push(actor_name(hop.actor));
        }
        names
    }
}

/// Find a connection from `start` to `end` with the fewest hops.
///
/// The frontier holds actors only; movies are edge labels. Actors are marked
/// visited when enqueued, and the search stops as soon as `end` is produced
/// as a neighbor. Ties between equally short paths follow the accessor's
/// enumeration order.
///
/// Returns `Ok(None)` when the actors are not connected. Unknown actor ids are
/// an error.
pub fn shortest_path<G: GraphAccessor + ?Sized>(
    graph: &G,
    start: ActorId,
    end: ActorId,
) -> EngineResult<Option<Connection>> {
    if graph.actor(start).is_none() {
        return Err(EngineError::ActorNotFound(start));
    }
    if graph.actor(end).is_none() {
        return Err(EngineError::ActorNotFound(end));
    }
    if start == end {
        return Ok(Some(Connection {
            start,
            hops: Vec::new(),
        }));
    }

    // actor -> (previous actor, shared movie)
    let mut came_from: HashMap<ActorId, Option<(ActorId, MovieId)>> = HashMap::new();
    let mut frontier = VecDeque::new();
    came_from.insert(start, None);
    frontier.push_back(start);
    let mut expanded = 0usize;

    while let Some(current) = frontier.pop_front() {
        expanded += 1;
        for (movie, costar) in graph.neighbors_via_credits(current) {
            if came_from.contains_key(&costar) {
                continue;
            }
            came_from.insert(costar, Some((current, movie)));
            if costar == end {
                let connection = reconstruct(&came_from, start, end);
                tracing::debug!(
                    %start,
                    %end,
                    hops = connection.hop_count(),
                    expanded,
                    visited = came_from.len(),
                    "connection found"
                );
                return Ok(Some(connection));
            }
            frontier.push_back(costar);
        }
    }

    tracing::debug!(%start, %end, expanded, "no connection");
    Ok(None)
}

fn reconstruct(
    came_from: &HashMap<ActorId, Option<(ActorId, MovieId)>>,
    start: ActorId,
    end: ActorId,
) -> Connection {
    let mut hops = Vec::new();
    let mut node = end;
    while let Some(&Some((prev, movie))) = came_from.get(&node) {
        hops.push(Hop { movie, actor: node });
        node = prev;
    }
    hops.reverse();
    Connection { start, hops }
}
