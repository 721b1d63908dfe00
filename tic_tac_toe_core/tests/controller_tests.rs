use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tic_tac_toe_core::{
    GameController, JsonFileNameCache, MemoryNameCache, MoveError, MoveOutcome, NameCache, Notice,
    Player, SurrenderStatus, Trigger, ValidationError,
};

type Controller = GameController<MemoryNameCache, StdRng>;

fn controller(seed: u64) -> Controller {
    GameController::with_rng(MemoryNameCache::new(), StdRng::seed_from_u64(seed))
}

/// A started controller where `first` opens, found by walking seeds.
fn started_with(first: Player) -> Controller {
    (0..)
        .map(controller)
        .find_map(|mut c| {
            let started = c.start("Ann", "Bob").unwrap();
            (started.first == first).then_some(c)
        })
        .unwrap()
}

#[test]
fn start_assigns_first_entrant_to_o() {
    let mut c = controller(3);
    let started = c.start(" Ann ", "Bob").unwrap();

    let players = c.session().players().unwrap();
    assert_eq!(players.o, "Ann");
    assert_eq!(players.x, "Bob");
    assert_eq!(started.name, c.session().name_of(started.first));
    assert_eq!(c.session().turn(), started.first);
    assert!(c.session().is_active());
    assert!(c.session().board().is_empty());
}

#[test]
fn start_rejects_bad_names_and_keeps_state() {
    let mut c = controller(0);
    assert_eq!(c.start("Ann", "ann"), Err(ValidationError::DuplicateName));
    assert_eq!(c.start("", "Bob"), Err(ValidationError::EmptyName));
    assert!(!c.session().is_active());
    assert_eq!(c.session().version(), 0);
    assert!(c.cache().entries().is_empty());
}

#[test]
fn start_writes_names_to_cache() {
    let mut c = controller(0);
    c.start("Ann", "Bob").unwrap();
    let names = c.cache().load().unwrap();
    assert_eq!(names.player1, "Ann");
    assert_eq!(names.player2, "Bob");
}

#[test]
fn starting_turn_is_roughly_uniform() {
    let mut c = controller(42);
    let trials = 1000;
    let o_first = (0..trials)
        .filter(|_| c.start("Ann", "Bob").unwrap().first == Player::O)
        .count();
    assert!((400..=600).contains(&o_first), "O opened {o_first}/{trials} games");
}

#[test]
fn completing_top_row_wins_for_o() {
    let mut c = started_with(Player::O);
    // O: 0, 1   X: 3, 4
    for cell in [0, 3, 1, 4] {
        assert!(matches!(c.make_move(cell), Ok(MoveOutcome::Continue { .. })));
    }
    assert_eq!(c.session().turn(), Player::O);

    let outcome = c.make_move(2).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: Player::O,
            name: "Ann".to_string(),
            pattern: [0, 1, 2],
        }
    );
    assert!(!c.session().is_active());
    assert!(c.session().board().is_empty());
    assert!(c.session().players().is_none());
    assert!(c.cache().entries().is_empty());

    assert_eq!(c.make_move(5), Err(MoveError::SessionNotActive));
    assert_eq!(c.surrender_click(0), SurrenderStatus::NoActiveSession);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut c = started_with(Player::O);
    // O X O
    // O X X
    // X O O
    let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for &cell in &order[..8] {
        assert!(matches!(c.make_move(cell), Ok(MoveOutcome::Continue { .. })));
    }
    assert_eq!(c.make_move(order[8]), Ok(MoveOutcome::Draw));
    assert!(!c.session().is_active());

    assert_eq!(c.make_move(0), Err(MoveError::SessionNotActive));
    assert_eq!(c.surrender_click(0), SurrenderStatus::NoActiveSession);
}

#[test]
fn occupied_cell_leaves_board_unchanged() {
    let mut c = started_with(Player::X);
    c.make_move(4).unwrap();
    let before = c.session().clone();

    assert_eq!(c.make_move(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(c.session(), &before);
    assert_eq!(c.session().turn(), Player::O);
}

#[test]
fn turn_alternates() {
    let mut c = started_with(Player::X);
    let mut expected = Player::X;
    for cell in [0, 1, 2, 4] {
        assert_eq!(c.session().turn(), expected);
        c.make_move(cell).unwrap();
        expected = expected.opposite();
    }
}

#[test]
fn five_rapid_clicks_surrender_the_turn_holder() {
    let mut c = started_with(Player::X);
    for (i, t) in [0, 500, 1000, 1500].into_iter().enumerate() {
        let count = i as u32 + 1;
        assert_eq!(
            c.surrender_click(t),
            SurrenderStatus::Pending {
                remaining: 5 - count,
                count,
            }
        );
    }

    assert_eq!(
        c.surrender_click(2000),
        SurrenderStatus::Surrendered {
            loser: Player::X,
            loser_name: "Bob".to_string(),
            winner_name: "Ann".to_string(),
        }
    );
    assert!(!c.session().is_active());
    assert_eq!(c.session().surrender().count(), 0);
}

#[test]
fn slow_click_restarts_surrender_count() {
    let mut c = started_with(Player::O);
    c.surrender_click(0);
    assert_eq!(
        c.surrender_click(3000),
        SurrenderStatus::Pending {
            remaining: 4,
            count: 1,
        }
    );
}

#[test]
fn move_between_clicks_restarts_surrender_count() {
    let mut c = started_with(Player::O);
    for t in [0, 100, 200, 300] {
        c.surrender_click(t);
    }
    c.make_move(0).unwrap();
    assert_eq!(
        c.surrender_click(400),
        SurrenderStatus::Pending {
            remaining: 4,
            count: 1,
        }
    );
}

#[test]
fn finished_game_rejects_moves_and_clicks_until_restart() {
    let mut c = started_with(Player::O);
    for t in [0, 1, 2, 3, 4] {
        c.surrender_click(t);
    }

    assert_eq!(c.make_move(0), Err(MoveError::SessionNotActive));
    assert_eq!(c.surrender_click(5), SurrenderStatus::NoActiveSession);

    c.start("Ann", "Bob").unwrap();
    assert!(c.make_move(0).is_ok());
}

#[test]
fn triggers_map_to_notices() {
    let mut c = started_with(Player::O);

    assert_eq!(c.handle(Trigger::CellClicked { index: 0 }), None);
    assert_eq!(
        c.handle(Trigger::CellClicked { index: 0 }),
        Some(Notice::CellOccupied { index: 0 })
    );
    assert_eq!(c.handle(Trigger::SurrenderClicked { now_millis: 10 }), None);
    assert!(c.view().surrender_indicator.is_some());

    for t in [20, 30, 40] {
        c.handle(Trigger::SurrenderClicked { now_millis: t });
    }
    // X is to move after O's opening.
    assert_eq!(
        c.handle(Trigger::SurrenderClicked { now_millis: 50 }),
        Some(Notice::Surrendered {
            loser: "Bob".to_string(),
            winner: "Ann".to_string(),
        })
    );
    assert_eq!(
        c.handle(Trigger::SurrenderClicked { now_millis: 60 }),
        Some(Notice::NoActiveSession)
    );
    assert_eq!(
        c.handle(Trigger::CellClicked { index: 1 }),
        Some(Notice::SessionNotActive)
    );
    assert_eq!(
        c.handle(Trigger::StartClicked {
            name1: "Ann".to_string(),
            name2: "ANN".to_string(),
        }),
        Some(Notice::DuplicateName)
    );
}

#[test]
fn view_version_moves_with_every_change() {
    let mut c = controller(9);
    let v0 = c.view().version;
    c.start("Ann", "Bob").unwrap();
    let v1 = c.view().version;
    c.make_move(0).unwrap();
    let v2 = c.view().version;
    assert!(v0 < v1 && v1 < v2);

    let _ = c.make_move(0);
    assert_eq!(c.view().version, v2);
}

#[test]
fn corrupt_name_cache_file_is_repaired_on_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.json");
    fs::write(&path, "{ truncated").unwrap();

    let mut c =
        GameController::with_rng(JsonFileNameCache::new(&path), StdRng::seed_from_u64(5));
    assert_eq!(c.cached_names().player1, "");

    assert!(c.start("Ann", "Bob").is_ok());
    let names = JsonFileNameCache::new(&path).load().unwrap();
    assert_eq!(names.player1, "Ann");
    assert_eq!(names.player2, "Bob");

    c.reset();
    assert_eq!(JsonFileNameCache::new(&path).load().unwrap().player1, "");
}
