use aviones::{
    apply_shot, place_ship, FleetCell, FleetGrid, GameError, Orientation, Ship, ShotOutcome,
    ViewCell, ViewGrid,
};
use proptest::prelude::*;

fn fleet_with_ship() -> FleetGrid {
    let mut fleet = FleetGrid::new(8);
    let ship = Ship::new(3, Orientation::Vertical, 0, 0, 8).unwrap();
    place_ship(&mut fleet, &ship).unwrap();
    fleet
}

#[test]
fn test_hit_marks_both_grids() -> Result<(), GameError> {
    let mut fleet = fleet_with_ship();
    let mut view = ViewGrid::new(8);
    assert_eq!(apply_shot(&mut fleet, &mut view, 1, 0)?, ShotOutcome::Hit);
    assert_eq!(fleet.get(1, 0)?, FleetCell::Hit);
    assert_eq!(view.get(1, 0)?, ViewCell::Hit);
    assert_eq!(fleet.ships_remaining(), 2);
    Ok(())
}

#[test]
fn test_miss_marks_view_only() -> Result<(), GameError> {
    let mut fleet = fleet_with_ship();
    let mut view = ViewGrid::new(8);
    assert_eq!(apply_shot(&mut fleet, &mut view, 5, 5)?, ShotOutcome::Miss);
    assert_eq!(fleet.get(5, 5)?, FleetCell::Empty);
    assert_eq!(view.get(5, 5)?, ViewCell::Miss);
    Ok(())
}

#[test]
fn test_repeat_at_origin_rejected() -> Result<(), GameError> {
    let mut fleet = fleet_with_ship();
    let mut view = ViewGrid::new(8);
    let first = apply_shot(&mut fleet, &mut view, 0, 0)?;
    assert!(first.accepted());
    assert!(matches!(first, ShotOutcome::Hit | ShotOutcome::Miss));

    let (fleet_before, view_before) = (fleet.clone(), view.clone());
    let second = apply_shot(&mut fleet, &mut view, 0, 0)?;
    assert_eq!(second, ShotOutcome::AlreadyShot);
    assert!(!second.accepted());
    assert_eq!(fleet, fleet_before);
    assert_eq!(view, view_before);
    Ok(())
}

#[test]
fn test_out_of_bounds_is_error() {
    let mut fleet = fleet_with_ship();
    let mut view = ViewGrid::new(8);
    assert_eq!(
        apply_shot(&mut fleet, &mut view, 8, 0).unwrap_err(),
        GameError::InvalidCoordinate { row: 8, col: 0 }
    );
    assert_eq!(view, ViewGrid::new(8));
}

#[test]
fn test_sinking_last_cell() -> Result<(), GameError> {
    let mut fleet = fleet_with_ship();
    let mut view = ViewGrid::new(8);
    for r in 0..3 {
        assert!(!fleet.is_sunk());
        assert_eq!(apply_shot(&mut fleet, &mut view, r, 0)?, ShotOutcome::Hit);
    }
    assert!(fleet.is_sunk());
    assert_eq!(fleet.count(FleetCell::Hit), 3);
    Ok(())
}

proptest! {
    #[test]
    fn repeated_shot_never_mutates(row in 0usize..8, col in 0usize..8, repeats in 1usize..5) {
        let mut fleet = fleet_with_ship();
        let mut view = ViewGrid::new(8);
        prop_assert!(apply_shot(&mut fleet, &mut view, row, col).unwrap().accepted());
        let (fleet_after, view_after) = (fleet.clone(), view.clone());
        for _ in 0..repeats {
            prop_assert_eq!(apply_shot(&mut fleet, &mut view, row, col).unwrap(), ShotOutcome::AlreadyShot);
            prop_assert_eq!(&fleet, &fleet_after);
            prop_assert_eq!(&view, &view_after);
        }
    }
}
