use std::collections::VecDeque;
use std::iter::FusedIterator;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Shuffle a sequence with a generator seeded from system entropy.
///
/// Use [`shuffle_with`] or [`shuffle_seeded`] when the permutation has to
/// be reproducible.
pub fn shuffle<I>(seq: I) -> Shuffle<I::Item, Xoshiro256PlusPlus>
where
    I: IntoIterator,
{
    shuffle_with(seq, Xoshiro256PlusPlus::from_entropy())
}

/// Shuffle a sequence with a generator seeded from `seed`.
///
/// The same seed always produces the same permutation of the same input.
pub fn shuffle_seeded<I>(seq: I, seed: u64) -> Shuffle<I::Item, Xoshiro256PlusPlus>
where
    I: IntoIterator,
{
    shuffle_with(seq, Xoshiro256PlusPlus::seed_from_u64(seed))
}

/// Shuffle a sequence using `rng` as the source of randomness.
///
/// Pass `&mut rng` to keep using the generator afterwards.
///
/// The whole sequence is collected immediately; the Fisher-Yates steps
/// themselves run one per element pulled from the result.
pub fn shuffle_with<I, R>(seq: I, rng: R) -> Shuffle<I::Item, R>
where
    I: IntoIterator,
    R: Rng,
{
    Shuffle::new(seq.into_iter().collect(), rng)
}

/// An iterator producing a uniformly random permutation.
///
/// Each step picks an element uniformly from the ones not yet produced,
/// yields it, and moves the element from the front into the vacated slot.
#[derive(Debug, Clone)]
pub struct Shuffle<T, R> {
    remaining: VecDeque<T>,
    rng: R,
}

impl<T, R> Shuffle<T, R>
where
    R: Rng,
{
    pub(crate) fn new(remaining: VecDeque<T>, rng: R) -> Self {
        tracing::trace!(len = remaining.len(), "materialized sequence to shuffle");
        Self { remaining, rng }
    }
}

impl<T, R> Iterator for Shuffle<T, R>
where
    R: Rng,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining.is_empty() {
            return None;
        }
        // the front of the deque is position i of the full buffer; picking
        // in 0..len here is picking in i..n there
        let j = self.rng.gen_range(0..self.remaining.len());
        self.remaining.swap(0, j);
        self.remaining.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        (len, Some(len))
    }
}

impl<T, R> ExactSizeIterator for Shuffle<T, R> where R: Rng {}

impl<T, R> FusedIterator for Shuffle<T, R> where R: Rng {}
