use broadside::{resolve_shot, Coord, Fleet, Orientation, Player, Ship, ShotLog};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn player(ships: Vec<Ship>) -> Player {
    Player::new(Fleet::from_ships(ships).unwrap())
}

#[test]
fn test_single_ship_lost_after_one_hit() {
    let mut p = player(vec![Ship::new(5, 5, 1, Orientation::Horizontal).unwrap()]);
    assert!(!p.has_lost());
    assert!(p.shot(5, 5));
    assert_eq!(p.hit_count(), 1);
    assert_eq!(p.shot_count(), 1);
    assert!(p.has_lost());
}

#[test]
fn test_duplicate_shot_rejected() {
    let mut p = player(vec![Ship::new(1, 1, 2, Orientation::Vertical).unwrap()]);
    assert!(p.shot(4, 4));
    assert!(!p.shot(4, 4));
    assert_eq!(p.shot_count(), 1);
    assert_eq!(p.hit_count(), 0);
    assert!(!p.shots()[0].hit);
}

#[test]
fn test_shot_log_order_and_hits() {
    let mut p = player(vec![Ship::new(2, 2, 3, Orientation::Horizontal).unwrap()]);
    for (x, y) in [(2, 2), (9, 9), (3, 2), (4, 2)] {
        assert!(p.shot(x, y));
    }
    let hits: Vec<_> = p.shots().iter().map(|s| (s.pos, s.hit)).collect();
    assert_eq!(
        hits,
        vec![
            (Coord::new(2, 2), true),
            (Coord::new(9, 9), false),
            (Coord::new(3, 2), true),
            (Coord::new(4, 2), true),
        ]
    );
    assert_eq!(p.hit_count(), 3);
    assert!(p.has_lost());
}

#[test]
fn test_off_board_shot_rejected() {
    let mut p = player(vec![Ship::new(1, 1, 1, Orientation::Vertical).unwrap()]);
    assert!(!p.shot(0, 0));
    assert!(!p.shot(11, 11));
    assert_eq!(p.shot_count(), 0);
}

#[test]
fn test_has_lost_needs_every_ship() {
    let mut p = player(vec![
        Ship::new(1, 1, 1, Orientation::Vertical).unwrap(),
        Ship::new(3, 1, 2, Orientation::Vertical).unwrap(),
    ]);
    p.shot(1, 1);
    p.shot(3, 1);
    assert!(!p.has_lost());
    p.shot(3, 2);
    assert!(p.has_lost());
}

#[test]
fn test_resolve_shot_decoupled() {
    let mut fleet = Fleet::from_ships(vec![Ship::new(6, 6, 2, Orientation::Horizontal).unwrap()]).unwrap();
    let mut history = ShotLog::new();
    assert!(resolve_shot(&mut fleet, &mut history, 7, 6));
    assert!(!resolve_shot(&mut fleet, &mut history, 7, 6));
    assert_eq!(history.hit_count(), 1);
    assert!(fleet.ships()[0].cells()[1].hit);

    // a separate log does not know about earlier shots
    let mut other = ShotLog::new();
    assert!(resolve_shot(&mut fleet, &mut other, 7, 6));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shot_is_idempotent(seed in any::<u64>(), x in 1u8..=10, y in 1u8..=10) {
        let mut p = Player::new(Fleet::random(&mut SmallRng::seed_from_u64(seed)).unwrap());
        let on_ship = p.fleet().ship_at(Coord::new(x, y)).is_some();
        prop_assert!(p.shot(x, y));
        let after = p.clone();
        prop_assert!(!p.shot(x, y));
        prop_assert_eq!(&p, &after);
        prop_assert_eq!(p.shot_count(), 1);
        prop_assert_eq!(p.hit_count(), on_ship as usize);
    }

    #[test]
    fn shooting_every_square_sinks_fleet(seed in any::<u64>()) {
        let mut p = Player::new(Fleet::random(&mut SmallRng::seed_from_u64(seed)).unwrap());
        for c in Coord::all() {
            prop_assert!(p.shot(c.x, c.y));
        }
        prop_assert!(p.has_lost());
        prop_assert_eq!(p.shot_count(), 100);
        prop_assert_eq!(p.hit_count(), broadside::TOTAL_SHIP_CELLS);
    }
}
