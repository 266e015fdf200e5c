//! Fisher-Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place.
///
/// Walks the index from the last element down to the second, swapping each
/// slot with a uniformly chosen slot in `[0, i]`. Every ordering is equally
/// likely given a uniform `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
