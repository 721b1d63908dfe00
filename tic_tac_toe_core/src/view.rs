use serde::{Deserialize, Serialize};

use crate::game::models::{Player, BOARD_CELLS};
use crate::game::session::Session;

/// Everything a screen needs to redraw after a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub version: u64,
    pub board: [Option<Player>; BOARD_CELLS],
    /// Name of the player to move; `None` when no game is running.
    pub turn_name: Option<String>,
    pub inputs_enabled: bool,
    pub player_o_label: String,
    pub player_x_label: String,
    /// Progress text while a surrender is being escalated.
    pub surrender_indicator: Option<String>,
}

fn player_label(session: &Session, player: Player) -> String {
    match session.players() {
        Some(players) => format!("{player}: {}", players.name(player)),
        None => format!("Player {player}"),
    }
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let surrender = session.surrender();
        let surrender_indicator = (session.is_active() && surrender.count() > 0).then(|| {
            format!(
                "Surrender! {} clicks left ({}/{})",
                surrender.threshold() - surrender.count(),
                surrender.count(),
                surrender.threshold()
            )
        });

        SessionView {
            version: session.version(),
            board: *session.board().cells(),
            turn_name: session
                .is_active()
                .then(|| session.name_of(session.turn())),
            inputs_enabled: !session.is_active(),
            player_o_label: player_label(session, Player::O),
            player_x_label: player_label(session, Player::X),
            surrender_indicator,
        }
    }
}
