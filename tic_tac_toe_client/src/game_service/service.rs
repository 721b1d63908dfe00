use crate::game_service::model::Toast;

use std::time::{SystemTime, UNIX_EPOCH};
use tic_tac_toe_core::{
    CachedNames, GameController, NameCache, Notice, SessionView, Trigger,
};
use tracing::{debug, info};

/// Screen-side wrapper around the controller: forwards clicks and keeps the
/// toast queue the controller's notices end up in.
pub struct GameService<C: NameCache> {
    controller: GameController<C>,
    toasts: Vec<Toast>,
}

impl<C: NameCache> GameService<C> {
    pub fn new(cache: C) -> Self {
        Self {
            controller: GameController::new(cache),
            toasts: Vec::new(),
        }
    }

    pub fn cached_names(&self) -> &CachedNames {
        self.controller.cached_names()
    }

    pub fn view(&self) -> SessionView {
        self.controller.view()
    }

    pub fn start(&mut self, name1: &str, name2: &str, now: f64) -> Option<Notice> {
        self.dispatch(
            Trigger::StartClicked {
                name1: name1.to_string(),
                name2: name2.to_string(),
            },
            now,
        )
    }

    pub fn click_cell(&mut self, index: usize, now: f64) -> Option<Notice> {
        self.dispatch(Trigger::CellClicked { index }, now)
    }

    pub fn click_surrender(&mut self, now: f64) -> Option<Notice> {
        self.dispatch(
            Trigger::SurrenderClicked {
                now_millis: wall_clock_millis(),
            },
            now,
        )
    }

    fn dispatch(&mut self, trigger: Trigger, now: f64) -> Option<Notice> {
        let notice = self.controller.handle(trigger);
        if let Some(notice) = &notice {
            info!("📣 {}", notice);
            self.toasts.push(Toast::new(notice.clone(), now));
        }
        notice
    }

    /// Drops expired toasts and returns the rest, oldest first.
    pub fn toasts(&mut self, now: f64) -> &[Toast] {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        if before != self.toasts.len() {
            debug!("Expired {} toast(s)", before - self.toasts.len());
        }
        &self.toasts
    }
}

/// Milliseconds since the Unix epoch; 0 if the system clock is before it.
pub fn wall_clock_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
