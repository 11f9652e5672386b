// Computer targeting: uniform choice among coordinates not shot yet.
// No hunting around previous hits.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::grid::ViewGrid;

/// Pick an unshot coordinate uniformly at random, or `None` when every
/// coordinate of `view` has been shot.
pub fn choose_shot<R: Rng + ?Sized>(view: &ViewGrid, rng: &mut R) -> Option<(usize, usize)> {
    let candidates = view.unknown_cells();
    candidates.choose(rng).copied()
}
