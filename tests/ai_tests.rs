use aviones::{choose_shot, GameError, ViewCell, ViewGrid};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn view_with_one_open(open: (usize, usize)) -> Result<ViewGrid, GameError> {
    let mut view = ViewGrid::new(8);
    for r in 0..8 {
        for c in 0..8 {
            if (r, c) != open {
                view.set(r, c, ViewCell::Miss)?;
            }
        }
    }
    Ok(view)
}

#[test]
fn test_single_open_cell_always_chosen() -> Result<(), GameError> {
    let mut view = view_with_one_open((5, 2))?;
    let mut rng = SmallRng::seed_from_u64(123);
    for _ in 0..50 {
        assert_eq!(choose_shot(&view, &mut rng), Some((5, 2)));
    }
    view.set(5, 2, ViewCell::Hit)?;
    assert_eq!(choose_shot(&view, &mut rng), None);
    Ok(())
}

#[test]
fn test_never_picks_shot_cells() -> Result<(), GameError> {
    let mut view = ViewGrid::new(8);
    let mut rng = SmallRng::seed_from_u64(9);
    let mut seen = HashSet::new();
    for _ in 0..64 {
        let (r, c) = choose_shot(&view, &mut rng).unwrap();
        assert_eq!(view.get(r, c)?, ViewCell::Empty);
        assert!(seen.insert((r, c)));
        view.set(r, c, ViewCell::Miss)?;
    }
    assert_eq!(choose_shot(&view, &mut rng), None);
    Ok(())
}

#[test]
fn test_choice_covers_open_cells() {
    let view = ViewGrid::new(4);
    let mut rng = SmallRng::seed_from_u64(4);
    let picks: HashSet<_> = (0..2000)
        .filter_map(|_| choose_shot(&view, &mut rng))
        .collect();
    // uniform choice reaches every cell of a small grid
    assert_eq!(picks.len(), 16);
}
