/// Call `action` on every element of `seq`, in order.
///
/// The sequence is consumed eagerly before this returns.
pub fn each<I, F>(seq: I, action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    seq.into_iter().for_each(action)
}
