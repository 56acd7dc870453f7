//! The interactive path builder: one game turn at a time.

use std::fmt;

use rand::rngs::StdRng;
use sd_core::query::rank_by_popularity;
use sd_core::{
    Actor, ActorId, CostarOrder, CostarQuery, GraphAccessor, Movie, MovieId, MovieOrder, MovieQuery,
};

use crate::config::EngineConfig;
use crate::error::{DeadEnd, EngineError, EngineResult};
use crate::fuzzy::best_match;
use crate::input::Input;
use crate::path::{Path, Rewind};
use crate::session::{Counters, GameSession, MenuItem, Phase};

/// Why a turn's input was rejected. The session stays where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidChoice {
    /// The menu index does not exist.
    OutOfRange {
        /// The index the player gave.
        pick: usize,
        /// How many options were shown.
        available: usize,
    },
    /// No option is similar enough to the write-in.
    NoMatch(String),
    /// The write-in was blank.
    Empty,
    /// "Back" at the starting actor.
    AtStart,
}

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pick, available } => {
                write!(f, "{pick} is not an option (choose 1-{available})")
            }
            Self::NoMatch(text) => write!(f, "no match for \"{text}\""),
            Self::Empty => write!(f, "nothing entered"),
            Self::AtStart => write!(f, "already at the starting actor"),
        }
    }
}

/// What a turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The session moved on or redrew its menu.
    Continue,
    /// The input was not usable; ask again.
    InvalidChoice(InvalidChoice),
    /// The target was reached along this path.
    Won(Path),
}

/// Drives [`GameSession`]s over a graph.
///
/// Holds no game state itself. Every [`step`](Self::step) is all-or-nothing:
/// when it fails, the session is exactly as it was before the call.
pub struct PathBuilder<'g, G: GraphAccessor + ?Sized> {
    graph: &'g G,
    config: EngineConfig,
}

impl<'g, G: GraphAccessor + ?Sized> PathBuilder<'g, G> {
    /// Create a builder over `graph`.
    pub fn new(graph: &'g G, config: EngineConfig) -> Self {
        Self { graph, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A path holding only `actor`.
    pub fn start_path(&self, actor: ActorId) -> EngineResult<Path> {
        Ok(Path::start(&self.actor(actor)?))
    }

    /// Begin a game from `start` towards `target` and draw the first menu.
    pub fn start(&self, start: ActorId, target: ActorId, rng: &mut StdRng) -> EngineResult<GameSession> {
        let current = self.actor(start)?;
        let target = self.actor(target)?;
        let path = Path::start(&current);

        let (phase, menu) = if current.id == target.id {
            (Phase::Won, Vec::new())
        } else {
            (Phase::ChoosingMovie, self.movie_menu(&current, rng)?)
        };

        tracing::debug!(start = %current.name, target = %target.name, "game started");
        Ok(GameSession {
            current,
            target,
            path,
            phase,
            menu,
            counters: Counters::default(),
        })
    }

    /// Apply one turn of input.
    ///
    /// Unusable input comes back as [`Effect::InvalidChoice`]. Errors are
    /// reserved for dead ends ([`EngineError::NoCandidates`]), finished games,
    /// and records missing from the graph.
    pub fn step(&self, session: &mut GameSession, input: Input, rng: &mut StdRng) -> EngineResult<Effect> {
        let mut next = session.clone();
        let effect = match next.phase {
            Phase::ChoosingMovie => self.choose_movie(&mut next, input, rng)?,
            Phase::ChoosingCostar { movie } => self.choose_costar(&mut next, movie, input, rng)?,
            Phase::Won => return Err(EngineError::GameOver),
        };
        *session = next;
        Ok(effect)
    }

    fn choose_movie(&self, session: &mut GameSession, input: Input, rng: &mut StdRng) -> EngineResult<Effect> {
        match input {
            Input::Pick(pick) => match menu_id(&session.menu, pick) {
                Ok(id) => {
                    let movie = self.movie(MovieId(id))?;
                    self.add_movie(session, movie, rng)
                }
                Err(invalid) => Ok(Effect::InvalidChoice(invalid)),
            },
            Input::WriteIn(text) => {
                if text.trim().is_empty() {
                    return Ok(Effect::InvalidChoice(InvalidChoice::Empty));
                }
                // Write-ins may name any film, not just the ones on offer.
                let mut films = MovieQuery::new(self.graph, session.current.id)
                    .order(MovieOrder::All)
                    .execute(rng);
                let titles: Vec<&str> = films.iter().map(|m| m.title.as_str()).collect();
                match best_match(&text, &titles, self.config.fuzzy_cutoff) {
                    Some(i) => {
                        let movie = films.swap_remove(i);
                        self.add_movie(session, movie, rng)
                    }
                    None => Ok(Effect::InvalidChoice(InvalidChoice::NoMatch(text))),
                }
            }
            Input::Back => {
                if session.path.len() <= 1 {
                    return Ok(Effect::InvalidChoice(InvalidChoice::AtStart));
                }
                session.path.pop();
                session.path.pop();
                let previous = self.path_actor(&session.path)?;
                tracing::info!(actor = %previous.name, "stepped back");
                session.menu = self.movie_menu(&previous, rng)?;
                session.current = previous;
                session.counters.backs += 1;
                Ok(Effect::Continue)
            }
            Input::Shuffle => {
                session.menu = self.movie_menu(&session.current, rng)?;
                session.counters.reshuffles += 1;
                Ok(Effect::Continue)
            }
        }
    }

    fn choose_costar(
        &self,
        session: &mut GameSession,
        movie: MovieId,
        input: Input,
        rng: &mut StdRng,
    ) -> EngineResult<Effect> {
        match input {
            Input::Pick(pick) => match menu_id(&session.menu, pick) {
                Ok(id) => {
                    let actor = self.actor(ActorId(id))?;
                    self.add_costar(session, actor, rng)
                }
                Err(invalid) => Ok(Effect::InvalidChoice(invalid)),
            },
            Input::WriteIn(text) => {
                if text.trim().is_empty() {
                    return Ok(Effect::InvalidChoice(InvalidChoice::Empty));
                }
                let mut cast = CostarQuery::new(self.graph, movie)
                    .exclude_names(session.path.labels())
                    .order(CostarOrder::All)
                    .execute(rng);
                let names: Vec<&str> = cast.iter().map(|a| a.name.as_str()).collect();
                match best_match(&text, &names, self.config.fuzzy_cutoff) {
                    Some(i) => {
                        let actor = cast.swap_remove(i);
                        self.add_costar(session, actor, rng)
                    }
                    None => Ok(Effect::InvalidChoice(InvalidChoice::NoMatch(text))),
                }
            }
            Input::Back => {
                session.path.pop();
                let actor = self.path_actor(&session.path)?;
                session.menu = self.movie_menu(&actor, rng)?;
                session.current = actor;
                session.phase = Phase::ChoosingMovie;
                session.counters.backs += 1;
                Ok(Effect::Continue)
            }
            Input::Shuffle => {
                let movie = self.movie(movie)?;
                session.menu = self.costar_menu(&movie, &session.path, rng)?;
                session.counters.reshuffles += 1;
                Ok(Effect::Continue)
            }
        }
    }

    fn add_movie(&self, session: &mut GameSession, movie: Movie, rng: &mut StdRng) -> EngineResult<Effect> {
        if let Rewind::Rewound { .. } = session.path.rewind_if_loop(&movie) {
            session.counters.loop_rewinds += 1;
            session.current = self.path_actor(&session.path)?;
        }
        session.path.push_movie(&movie);

        session.menu = self.costar_menu(&movie, &session.path, rng)?;
        session.phase = Phase::ChoosingCostar { movie: movie.id };
        session.counters.turns += 1;
        Ok(Effect::Continue)
    }

    fn add_costar(&self, session: &mut GameSession, actor: Actor, rng: &mut StdRng) -> EngineResult<Effect> {
        session.path.push_actor(&actor);
        session.counters.turns += 1;

        if session.path.is_winning(&session.target.name) {
            tracing::info!(
                path = %session.path.render(),
                connections = session.path.connections(),
                turns = session.counters.turns,
                "target reached"
            );
            session.phase = Phase::Won;
            session.menu.clear();
            session.current = actor;
            return Ok(Effect::Won(session.path.clone()));
        }

        session.menu = self.movie_menu(&actor, rng)?;
        session.current = actor;
        session.phase = Phase::ChoosingMovie;
        Ok(Effect::Continue)
    }

    /// A uniform random sample of the actor's filmography.
    fn movie_menu(&self, actor: &Actor, rng: &mut StdRng) -> EngineResult<Vec<MenuItem>> {
        let movies = MovieQuery::new(self.graph, actor.id)
            .order(MovieOrder::Random)
            .limit(self.config.menu_size)
            .execute(rng);
        if movies.is_empty() {
            return Err(EngineError::NoCandidates(DeadEnd::NoMovies {
                actor: actor.name.clone(),
            }));
        }
        tracing::debug!(actor = %actor.name, offered = movies.len(), "movie menu");
        Ok(movies
            .into_iter()
            .map(|m| MenuItem {
                id: m.id.0,
                label: m.title,
            })
            .collect())
    }

    /// Draw an oversized random pool of unvisited cast members, then keep the
    /// best known of them.
    fn costar_menu(&self, movie: &Movie, path: &Path, rng: &mut StdRng) -> EngineResult<Vec<MenuItem>> {
        let mut pool = CostarQuery::new(self.graph, movie.id)
            .exclude_names(path.labels())
            .order(CostarOrder::Random)
            .limit(self.config.costar_pool_size())
            .execute(rng);
        if pool.is_empty() {
            return Err(EngineError::NoCandidates(DeadEnd::NoCostars {
                movie: movie.title.clone(),
            }));
        }
        let drawn = pool.len();
        rank_by_popularity(&mut pool);
        pool.truncate(self.config.menu_size);
        tracing::debug!(movie = %movie.title, drawn, offered = pool.len(), "costar menu");
        Ok(pool
            .into_iter()
            .map(|a| MenuItem {
                id: a.id.0,
                label: a.name,
            })
            .collect())
    }

    fn actor(&self, id: ActorId) -> EngineResult<Actor> {
        self.graph.actor(id).ok_or(EngineError::ActorNotFound(id))
    }

    fn movie(&self, id: MovieId) -> EngineResult<Movie> {
        self.graph.movie(id).ok_or(EngineError::MovieNotFound(id))
    }

    fn path_actor(&self, path: &Path) -> EngineResult<Actor> {
        let id = path.last_actor().ok_or(EngineError::GameOver)?;
        self.actor(id)
    }
}

fn menu_id(menu: &[MenuItem], pick: usize) -> Result<u64, InvalidChoice> {
    pick.checked_sub(1)
        .and_then(|i| menu.get(i))
        .map(|item| item.id)
        .ok_or(InvalidChoice::OutOfRange {
            pick,
            available: menu.len(),
        })
}
