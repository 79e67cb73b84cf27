use std::collections::VecDeque;

use broadside::prelude::*;
use broadside::ShotLog;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fires at a fixed list of squares, then at A1 forever.
struct Scripted(VecDeque<Coord>);

impl Strategy for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _history: &ShotLog) -> Coord {
        self.0.pop_front().unwrap_or(Coord::new(1, 1))
    }
}

fn one_ship(x: u8, y: u8, len: u8) -> Player {
    Player::new(Fleet::from_ships(vec![Ship::new(x, y, len, Orientation::Horizontal).unwrap()]).unwrap())
}

fn session(turn: TurnState, script: &[(u8, u8)]) -> Session {
    Session::from_parts(
        BoardLayout::default(),
        one_ship(1, 1, 2),
        one_ship(5, 5, 2),
        turn,
        Box::new(Scripted(script.iter().map(|&(x, y)| Coord::new(x, y)).collect())),
        SmallRng::seed_from_u64(1),
    )
}

#[test]
fn test_click_outside_grid_keeps_turn() {
    let mut s = session(TurnState::PlayerTurn, &[]);
    // player's own grid and the label border of the opponent grid
    assert_eq!(s.click(100.0, 100.0), ClickOutcome::OutsideGrid);
    let o = s.layout().opponent_grid.origin();
    assert_eq!(s.click(o.x + 5.0, o.y + 5.0), ClickOutcome::OutsideGrid);
    assert_eq!(s.state(), TurnState::PlayerTurn);
    assert_eq!(s.opponent().shot_count(), 0);
}

#[test]
fn test_click_fires_and_passes_turn() {
    let mut s = session(TurnState::PlayerTurn, &[(9, 9)]);
    let outcome = s.fire_at(Coord::new(5, 5));
    assert!(matches!(outcome, ClickOutcome::Fired(shot) if shot.hit && shot.pos == Coord::new(5, 5)));
    assert_eq!(s.state(), TurnState::OpponentTurn);

    // clicks are ignored until the computer has moved
    assert_eq!(s.fire_at(Coord::new(6, 5)), ClickOutcome::NotPlayerTurn);

    let mv = s.play_opponent_turn().unwrap();
    assert_eq!(mv.target, Coord::new(9, 9));
    assert!(matches!(mv.shot, Some(shot) if !shot.hit));
    assert_eq!(s.state(), TurnState::PlayerTurn);
}

#[test]
fn test_repeat_click_does_not_consume_turn() {
    let mut s = session(TurnState::PlayerTurn, &[(9, 9)]);
    s.fire_at(Coord::new(2, 2));
    s.advance();
    assert_eq!(s.fire_at(Coord::new(2, 2)), ClickOutcome::AlreadyShot(Coord::new(2, 2)));
    assert_eq!(s.state(), TurnState::PlayerTurn);
    assert_eq!(s.opponent().shot_count(), 1);
}

#[test]
fn test_player_wins() {
    let mut s = session(TurnState::PlayerTurn, &[(9, 9)]);
    s.fire_at(Coord::new(5, 5));
    s.advance();
    assert!(matches!(s.fire_at(Coord::new(6, 5)), ClickOutcome::Fired(_)));
    assert_eq!(s.state(), TurnState::Won);
    assert_eq!(s.outcome(), Some(Outcome::Won));
    assert!(s.status_message().unwrap().starts_with("You won!"));
    // terminal: nothing else happens
    assert_eq!(s.fire_at(Coord::new(1, 1)), ClickOutcome::NotPlayerTurn);
    assert!(s.play_opponent_turn().is_none());
}

#[test]
fn test_opponent_wastes_turn_on_repeat() {
    let mut s = session(TurnState::OpponentTurn, &[(1, 1), (9, 9), (1, 1), (2, 1)]);
    s.advance();
    s.fire_at(Coord::new(3, 3));
    s.advance();
    s.fire_at(Coord::new(3, 4));
    let wasted = s.advance().unwrap();
    assert_eq!(wasted.target, Coord::new(1, 1));
    assert_eq!(wasted.shot, None);
    assert_eq!(s.state(), TurnState::PlayerTurn);
    assert_eq!(s.human().shot_count(), 2);
}

#[test]
fn test_opponent_wins() {
    let mut s = session(TurnState::OpponentTurn, &[(1, 1), (2, 1)]);
    s.advance();
    s.fire_at(Coord::new(10, 10));
    let mv = s.advance().unwrap();
    assert!(matches!(mv.shot, Some(shot) if shot.hit));
    assert_eq!(s.state(), TurnState::Lost);
    assert_eq!(s.outcome(), Some(Outcome::Lost));
    assert!(s.status_message().unwrap().starts_with("You lost."));
}

#[test]
fn test_advance_is_noop_on_player_turn() {
    let mut s = session(TurnState::PlayerTurn, &[]);
    assert!(s.advance().is_none());
    assert_eq!(s.state(), TurnState::PlayerTurn);
    assert!(s.status_message().is_none());
}

#[test]
fn test_new_session_deals_full_fleets() {
    for seed in 0..20 {
        let s = Session::new(LayoutConfig::default(), SmallRng::seed_from_u64(seed)).unwrap();
        assert_eq!(s.human().fleet().len(), broadside::NUM_SHIPS);
        assert_eq!(s.opponent().fleet().len(), broadside::NUM_SHIPS);
        assert!(matches!(s.state(), TurnState::PlayerTurn | TurnState::OpponentTurn));
    }
}

#[test]
fn test_first_turn_is_random() {
    let starts: Vec<_> = (0..64)
        .map(|seed| Session::new(LayoutConfig::default(), SmallRng::seed_from_u64(seed)).unwrap().state())
        .collect();
    assert!(starts.contains(&TurnState::PlayerTurn));
    assert!(starts.contains(&TurnState::OpponentTurn));
}

#[test]
fn test_random_game_terminates() {
    let mut s = Session::new(LayoutConfig::default(), SmallRng::seed_from_u64(99)).unwrap();
    let squares: Vec<Coord> = Coord::all().collect();
    let mut next = squares.iter();
    for _ in 0..10_000 {
        s.advance();
        if s.outcome().is_some() {
            break;
        }
        let c = next.next().expect("player ran out of squares before the game ended");
        assert!(matches!(s.fire_at(*c), ClickOutcome::Fired(_)));
    }
    assert!(s.outcome().is_some());
}
