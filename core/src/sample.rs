use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Uniformly pick `amount` items out of `pool` without replacement.
///
/// The order of the result is the sampling order, not the pool order. Fails instead of returning a shorter list when
/// the pool is too small.
pub fn sample_without_replacement<T, R>(pool: Vec<T>, amount: usize, rng: &mut R) -> Result<Vec<T>>
where
    R: Rng + ?Sized,
{
    let available = pool.len();
    if amount > available {
        log::debug!(
            "Cannot sample {} items from a pool of {}",
            amount,
            available
        );
        return Err(TriviaError::InsufficientPool {
            requested: amount,
            available,
        });
    }

    let picks = rand::seq::index::sample(rng, available, amount);
    let mut slots: Vec<Option<T>> = pool.into_iter().map(Some).collect();
    Ok(picks
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect())
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn dedup_preserving_order<T: Ord + Copy>(items: Vec<T>) -> Vec<T> {
    use alloc::collections::BTreeSet;

    let mut seen = BTreeSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
