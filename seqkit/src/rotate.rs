use std::iter::{Fuse, FusedIterator};

use crate::error;
use crate::size;

/// The distance used by [`rotate_once`].
pub const DEFAULT_DISTANCE: i64 = 1;

/// Rotate a sequence to the left by `distance` elements.
///
/// The first `distance` elements are moved to the end; a negative distance
/// rotates to the right. The distance is reduced modulo the size of the
/// sequence, so the result is always a permutation of the input.
///
/// The size is determined up front on a clone of the iterator, which costs
/// nothing for iterators that know their exact length and a full traversal
/// otherwise. Only the leading elements being moved are buffered; the rest
/// stream lazily from the source.
///
/// Rotating an empty sequence is an error.
pub fn rotate<I>(seq: I, distance: i64) -> error::Result<Rotate<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let iter = seq.into_iter();
    let size = size(iter.clone());
    if size == 0 {
        tracing::debug!("cannot rotate empty sequence");
        return Err(error::Error::EmptySequence);
    }
    let normalized = normalize(distance, size);
    tracing::trace!(size, distance, normalized, "rotating sequence");
    Ok(Rotate::new(iter, normalized))
}

/// Rotate a sequence to the left by [`DEFAULT_DISTANCE`].
pub fn rotate_once<I>(seq: I) -> error::Result<Rotate<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    rotate(seq, DEFAULT_DISTANCE)
}

// size is never 0 here
fn normalize(distance: i64, size: usize) -> usize {
    match i64::try_from(size) {
        Ok(size) => distance.rem_euclid(size) as usize,
        // a sequence this large is longer than any i64 distance
        Err(_) => {
            if distance >= 0 {
                distance as usize
            } else {
                size - distance.unsigned_abs() as usize
            }
        }
    }
}

/// An iterator over a rotated sequence.
///
/// Yields the source after its first elements, then those first elements.
#[derive(Debug, Clone)]
pub struct Rotate<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    moved: std::vec::IntoIter<I::Item>,
}

impl<I> Rotate<I>
where
    I: Iterator,
{
    pub(crate) fn new(iter: I, distance: usize) -> Self {
        let mut iter = iter.fuse();
        let mut moved = Vec::with_capacity(distance);
        moved.extend(iter.by_ref().take(distance));
        Self {
            iter,
            moved: moved.into_iter(),
        }
    }
}

impl<I> Iterator for Rotate<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().or_else(|| self.moved.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let moved = self.moved.len();
        (
            lower.saturating_add(moved),
            upper.and_then(|upper| upper.checked_add(moved)),
        )
    }
}

impl<I> ExactSizeIterator for Rotate<I> where I: ExactSizeIterator {}

impl<I> FusedIterator for Rotate<I> where I: Iterator {}
