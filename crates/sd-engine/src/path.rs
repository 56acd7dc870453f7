//! The in-progress actor/movie/actor chain built during play.

use serde::{Deserialize, Serialize};
use sd_core::{Actor, ActorId, Movie, MovieId};

/// Identity of one path element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NodeId {
    /// An actor, always at an even position.
    Actor(ActorId),
    /// A movie, always at an odd position.
    Movie(MovieId),
}

/// One element of a path: an identity plus the display string shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    /// Which actor or movie this is.
    pub id: NodeId,
    /// Actor name or movie title.
    pub label: String,
}

/// Result of [`Path::rewind_if_loop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewind {
    /// The movie is not on the path.
    Clean,
    /// The path was cut back to the actor before the earlier occurrence.
    Rewound {
        /// Name of the actor the path now ends on.
        to: String,
        /// Number of elements discarded.
        dropped: usize,
    },
    /// The title sat at an actor position; the path was left alone.
    Skipped {
        /// Where the title was found.
        index: usize,
    },
}

/// An alternating actor, movie, actor, ... sequence.
///
/// Even positions hold actors and odd positions hold movies. A path built by
/// the engine always starts with an actor and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<PathNode>,
}

impl Path {
    /// A path holding only the starting actor.
    pub fn start(actor: &Actor) -> Self {
        Self {
            nodes: vec![PathNode {
                id: NodeId::Actor(actor.id),
                label: actor.name.clone(),
            }],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All elements in order.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Display strings in order.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    /// The last element.
    pub fn last(&self) -> Option<&PathNode> {
        self.nodes.last()
    }

    /// The actor the path currently ends on, or the one just before a
    /// trailing movie.
    pub fn last_actor(&self) -> Option<ActorId> {
        self.nodes.iter().rev().find_map(|n| match n.id {
            NodeId::Actor(id) => Some(id),
            NodeId::Movie(_) => None,
        })
    }

    /// Whether the path ends on an actor.
    pub fn ends_on_actor(&self) -> bool {
        matches!(self.last().map(|n| n.id), Some(NodeId::Actor(_)))
    }

    /// Number of completed actor-to-actor hops.
    pub fn connections(&self) -> usize {
        self.nodes.len().saturating_sub(1) / 2
    }

    /// Whether the path ends on an actor named `target` (case-insensitive).
    pub fn is_winning(&self, target: &str) -> bool {
        self.ends_on_actor()
            && self
                .last()
                .is_some_and(|n| n.label.to_lowercase() == target.to_lowercase())
    }

    /// `"A -> M1 -> B"`.
    pub fn render(&self) -> String {
        self.labels().join(" -> ")
    }

    /// The path as a staircase of lines joined by "was in" / "with".
    pub fn victory_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.nodes.len() * 2);
        for (i, node) in self.nodes.iter().enumerate() {
            let indent = " ".repeat(i * 4);
            lines.push(format!("{indent}{}", node.label));
            if i + 1 < self.nodes.len() {
                let joiner = match node.id {
                    NodeId::Actor(_) => "was in",
                    NodeId::Movie(_) => "with",
                };
                lines.push(format!("{indent}  {joiner}"));
            }
        }
        lines
    }

    /// Cut the path back if `movie` already appears on it.
    ///
    /// The first node carrying the movie's title decides. A movie node counts
    /// only when it is the same movie; a different film that shares the title
    /// is not a loop. On a match the path is truncated to end on the actor
    /// directly before it. A title at an even position means the path is
    /// inconsistent, and it is left untouched.
    pub fn rewind_if_loop(&mut self, movie: &Movie) -> Rewind {
        let title = movie.title.as_str();
        let Some(index) = self.nodes.iter().position(|n| {
            n.label == title
                && match n.id {
                    NodeId::Movie(id) => id == movie.id,
                    NodeId::Actor(_) => true,
                }
        }) else {
            return Rewind::Clean;
        };
        if index % 2 != 1 {
            tracing::warn!(title, index, "title found at an actor position, not rewinding");
            return Rewind::Skipped { index };
        }

        let keep = index;
        let dropped = self.nodes.len() - keep;
        self.nodes.truncate(keep);
        let to = self.nodes[keep - 1].label.clone();
        tracing::info!(title, to = %to, dropped, "loop detected, rewound path");
        Rewind::Rewound { to, dropped }
    }

    pub(crate) fn push_movie(&mut self, movie: &Movie) {
        debug_assert!(self.ends_on_actor(), "movie appended after a movie");
        self.nodes.push(PathNode {
            id: NodeId::Movie(movie.id),
            label: movie.title.clone(),
        });
    }

    pub(crate) fn push_actor(&mut self, actor: &Actor) {
        debug_assert!(!self.ends_on_actor(), "actor appended after an actor");
        self.nodes.push(PathNode {
            id: NodeId::Actor(actor.id),
            label: actor.name.clone(),
        });
    }

    pub(crate) fn pop(&mut self) -> Option<PathNode> {
        if self.nodes.len() <= 1 {
            return None;
        }
        self.nodes.pop()
    }
}

/// Final win check: does `path` end on `target_name`, ignoring case?
pub fn is_winning_path(path: &Path, target_name: &str) -> bool {
    path.is_winning(target_name)
}
