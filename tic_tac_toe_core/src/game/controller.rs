use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{MoveError, ValidationError};
use crate::game::message::{Notice, Trigger};
use crate::game::models::{Player, Players};
use crate::game::session::{MoveOutcome, Session, SessionStarted, SurrenderStatus};
use crate::name_cache::{CachedNames, NameCache};
use crate::view::SessionView;

/// Trims both names and checks they are usable as a pair.
pub fn validate_names(name1: &str, name2: &str) -> Result<Players, ValidationError> {
    let o = name1.trim();
    let x = name2.trim();

    if o.is_empty() || x.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if same_ignoring_case(o, x) {
        return Err(ValidationError::DuplicateName);
    }

    Ok(Players {
        o: o.to_string(),
        x: x.to_string(),
    })
}

/// Character-by-character case-insensitive comparison. Whole-string
/// lowercasing would turn a trailing `Σ` into final `ς` and miss a match.
fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(l, r)| {
            l == r
                || l.to_uppercase().eq(r.to_uppercase())
                || l.to_lowercase().eq(r.to_lowercase())
        })
}

/// Drives one [`Session`] in response to button clicks.
///
/// Owns the name cache and the random source for the opening turn. Errors are
/// returned to the caller and never change state.
pub struct GameController<C, R = ThreadRng> {
    session: Session,
    cache: C,
    rng: R,
    cached_names: CachedNames,
}

impl<C: NameCache> GameController<C, ThreadRng> {
    pub fn new(cache: C) -> Self {
        Self::with_rng(cache, rand::thread_rng())
    }
}

impl<C: NameCache, R: Rng> GameController<C, R> {
    pub fn with_rng(cache: C, rng: R) -> Self {
        let cached_names = cache.load().unwrap_or_else(|err| {
            warn!("⚠️ Could not read cached names: {}", err);
            CachedNames::default()
        });

        Self {
            session: Session::default(),
            cache,
            rng,
            cached_names,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> SessionView {
        SessionView::from(&self.session)
    }

    /// Names found in the cache when the controller was built.
    pub fn cached_names(&self) -> &CachedNames {
        &self.cached_names
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn start(&mut self, name1: &str, name2: &str) -> Result<SessionStarted, ValidationError> {
        let players = validate_names(name1, name2).inspect_err(|err| {
            debug!("Start rejected: {}", err);
        })?;

        if let Err(err) = self.cache.store(&players.o, &players.x) {
            warn!("⚠️ Could not cache player names: {}", err);
        }

        let first = if self.rng.gen_bool(0.5) {
            Player::O
        } else {
            Player::X
        };
        self.session = self.session.start(players, first);

        let name = self.session.name_of(first);
        info!(
            "🆕 Game started: O = {}, X = {}, {} ({}) moves first",
            self.session.name_of(Player::O),
            self.session.name_of(Player::X),
            name,
            first
        );

        Ok(SessionStarted { first, name })
    }

    pub fn make_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let (next, outcome) = self.session.apply_move(index)?;
        self.session = next;

        match &outcome {
            MoveOutcome::Win { name, player, .. } => {
                info!("🏆 {} ({}) wins", name, player);
                self.reset();
            }
            MoveOutcome::Draw => {
                info!("🤝 Game ended in a draw");
                self.reset();
            }
            MoveOutcome::Continue { .. } => {}
        }

        Ok(outcome)
    }

    pub fn surrender_click(&mut self, now_ms: u64) -> SurrenderStatus {
        let (next, status) = self.session.surrender_click(now_ms);
        self.session = next;

        if let SurrenderStatus::Surrendered {
            loser_name,
            winner_name,
            ..
        } = &status
        {
            info!("🏳 {} surrendered, {} wins", loser_name, winner_name);
            self.reset();
        }

        status
    }

    /// Ends any session, forgets the players and clears the name cache.
    pub fn reset(&mut self) {
        self.session = self.session.cleared();
        if let Err(err) = self.cache.clear() {
            warn!("⚠️ Could not clear cached names: {}", err);
        }
        debug!("Session reset, name inputs re-enabled");
    }

    /// Applies one presentation trigger and returns the message to flash, if any.
    pub fn handle(&mut self, trigger: Trigger) -> Option<Notice> {
        debug!("📥 Trigger received: {:?}", trigger);

        match trigger {
            Trigger::StartClicked { name1, name2 } => Some(match self.start(&name1, &name2) {
                Ok(SessionStarted { first, name }) => Notice::GameStarted { first, name },
                Err(err) => err.into(),
            }),
            Trigger::CellClicked { index } => match self.make_move(index) {
                Ok(MoveOutcome::Continue { .. }) => None,
                Ok(MoveOutcome::Win { name, .. }) => Some(Notice::Win { name }),
                Ok(MoveOutcome::Draw) => Some(Notice::Draw),
                Err(err) => Some(err.into()),
            },
            Trigger::SurrenderClicked { now_millis } => match self.surrender_click(now_millis) {
                SurrenderStatus::NoActiveSession => Some(Notice::NoActiveSession),
                SurrenderStatus::Pending { .. } => None,
                SurrenderStatus::Surrendered {
                    loser_name,
                    winner_name,
                    ..
                } => Some(Notice::Surrendered {
                    loser: loser_name,
                    winner: winner_name,
                }),
            },
            Trigger::ResetClicked => {
                self.reset();
                None
            }
        }
    }
}
