use rand::Rng;

/// Shuffles `items` into a random cyclic order.
///
/// For `i` in `0..n - 1`, position `i` is swapped with a uniformly random
/// position in `[i + 1, n)`, so no element stays where it was when `n > 1`.
pub fn cycle_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let j = rng.gen_range(i + 1..n);
        items.swap(i, j);
    }
}
