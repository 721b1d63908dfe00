//! Hot-seat tic-tac-toe: turn taking, win and draw detection, and the
//! five-click surrender gesture, independent of any UI toolkit.

pub mod error;
pub mod escalation;
pub mod game;
pub mod name_cache;
pub mod view;

pub use error::{CacheError, MoveError, ValidationError};
pub use escalation::{Escalation, EscalationStep};
pub use game::controller::{validate_names, GameController};
pub use game::message::{Notice, NoticeLength, Trigger};
pub use game::models::{Board, Player, Players, BOARD_CELLS, WIN_PATTERNS};
pub use game::session::{
    MoveOutcome, Session, SessionStarted, SurrenderStatus, SURRENDER_CLICKS, SURRENDER_WINDOW_MS,
};
pub use name_cache::{
    CachedNames, JsonFileNameCache, MemoryNameCache, NameCache, NAME_CACHE_NAMESPACE,
};
pub use view::SessionView;
