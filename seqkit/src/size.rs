/// The number of elements in a sequence.
///
/// When the iterator reports an exact size (`size_hint` has equal lower and
/// upper bounds) that is returned without pulling a single element.
/// Otherwise the sequence is traversed once to count it, which consumes a
/// one-shot source.
pub fn size<I>(seq: I) -> usize
where
    I: IntoIterator,
{
    let iter = seq.into_iter();
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => lower,
        _ => iter.count(),
    }
}
