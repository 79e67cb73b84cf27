use broadside::{Coord, Fleet, FleetError, Orientation, Ship, FLEET_LENGTHS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_from_ships_rejects_overlap() {
    let ships = vec![
        Ship::new(1, 1, 4, Orientation::Horizontal).unwrap(),
        Ship::new(5, 5, 2, Orientation::Vertical).unwrap(),
        Ship::new(2, 1, 2, Orientation::Vertical).unwrap(),
    ];
    assert_eq!(Fleet::from_ships(ships).unwrap_err(), FleetError::Overlap { index: 2 });
}

#[test]
fn test_hit_stops_at_first_ship() {
    let mut fleet = Fleet::from_ships(vec![
        Ship::new(1, 1, 2, Orientation::Horizontal).unwrap(),
        Ship::new(1, 2, 2, Orientation::Horizontal).unwrap(),
    ])
    .unwrap();
    assert!(fleet.hit(2, 2));
    assert!(!fleet.hit(3, 3));
    assert!(fleet.ships()[1].cells()[1].hit);
    assert!(fleet.ships()[0].cells().iter().all(|c| !c.hit));
}

#[test]
fn test_all_sunk() {
    let mut fleet = Fleet::from_ships(vec![
        Ship::new(1, 1, 1, Orientation::Horizontal).unwrap(),
        Ship::new(3, 3, 2, Orientation::Vertical).unwrap(),
    ])
    .unwrap();
    assert!(!fleet.all_sunk());
    fleet.hit(1, 1);
    fleet.hit(3, 3);
    assert!(!fleet.all_sunk());
    fleet.hit(3, 4);
    assert!(fleet.all_sunk());
}

#[test]
fn test_placement_exhausted() {
    let mut rng = SmallRng::seed_from_u64(7);
    // a ship longer than the board never fits
    let err = Fleet::random_with(&mut rng, &[11], 50).unwrap_err();
    assert_eq!(err, FleetError::PlacementExhausted { length: 11, attempts: 50 });
}

#[test]
fn test_reproducible_with_seed() {
    let a = Fleet::random(&mut SmallRng::seed_from_u64(42)).unwrap();
    let b = Fleet::random(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        let ships = fleet.ships();

        let mut lengths: Vec<usize> = ships.iter().map(|s| s.len()).collect();
        let mut expected: Vec<usize> = FLEET_LENGTHS.iter().map(|&l| l as usize).collect();
        lengths.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(lengths, expected);

        for (i, a) in ships.iter().enumerate() {
            prop_assert!(a.cells().iter().all(|c| c.pos.is_on_board()));
            for b in &ships[i + 1..] {
                prop_assert!(!a.overlap(b));
            }
        }
        prop_assert_eq!(fleet.occupied().len(), TOTAL_SHIP_CELLS);
        prop_assert!(!fleet.all_sunk());
    }
}

#[test]
fn test_mask_capacity() {
    assert!(broadside::BoardMask::capacity_ok());
    assert!(!broadside::CellMask::<u64>::capacity_ok());
    assert!(broadside::BoardMask::try_new().is_ok());
    assert_eq!(
        broadside::CellMask::<u64>::try_new(),
        Err(broadside::CellMaskError::SizeTooLarge { squares: 100, capacity: 64 })
    );
}

#[test]
fn test_narrow_mask_skips_squares_past_capacity() {
    let mut mask = broadside::CellMask::<u64>::new();
    assert!(!mask.insert(Coord::new(10, 10)));
    assert!(!mask.contains(Coord::new(10, 10)));
    assert!(mask.insert(Coord::new(4, 7)));
    assert!(mask.contains(Coord::new(4, 7)));
    assert_eq!(mask.len(), 1);
}

#[test]
fn test_occupied_mask_matches_ships() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(5)).unwrap();
    for c in fleet.occupied().iter() {
        assert!(fleet.ship_at(c).is_some());
    }
    assert_eq!(fleet.occupied().iter().count(), TOTAL_SHIP_CELLS);
}
