//! Post-hoc path validation against the credit graph.

use sd_core::{ActorId, GraphAccessor, MovieId};

use crate::path::Path;
use crate::search::Connection;

/// Check a finished path using the display strings it carries.
pub fn validate<G: GraphAccessor + ?Sized>(graph: &G, path: &Path) -> bool {
    validate_names(graph, &path.labels())
}

/// Check an alternating `name, title, name, ...` sequence.
///
/// Names and titles are matched case-insensitively. Every triple must be two
/// different actors credited in the same movie.
pub fn validate_names<G, S>(graph: &G, path: &[S]) -> bool
where
    G: GraphAccessor + ?Sized,
    S: AsRef<str>,
{
    check_triples(path, |actor, movie, next| {
        let (actor, movie, next): (&str, &str, &str) = (actor.as_ref(), movie.as_ref(), next.as_ref());
        actor.to_lowercase() != next.to_lowercase()
            && graph.shared_credit_by_name(movie, actor, next)
    })
}

/// Check an alternating `actor id, movie id, actor id, ...` sequence.
pub fn validate_ids<G: GraphAccessor + ?Sized>(graph: &G, path: &[u64]) -> bool {
    check_triples(path, |&actor, &movie, &next| {
        actor != next
            && graph.credit_exists(MovieId(movie), ActorId(actor))
            && graph.credit_exists(MovieId(movie), ActorId(next))
    })
}

/// Check a connection produced by [`shortest_path`](crate::shortest_path).
pub fn validate_connection<G: GraphAccessor + ?Sized>(graph: &G, connection: &Connection) -> bool {
    validate_ids(graph, &connection.to_ids())
}

/// Shape check plus a short-circuiting walk over every `(actor, movie, actor)`
/// window starting at an even index.
fn check_triples<T>(path: &[T], mut linked: impl FnMut(&T, &T, &T) -> bool) -> bool {
    if path.len() < 3 || path.len() % 2 == 0 {
        return false;
    }
    path.windows(3)
        .step_by(2)
        .all(|w| linked(&w[0], &w[1], &w[2]))
}
