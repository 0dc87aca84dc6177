use std::fmt::Display;
use std::iter::FusedIterator;

use regex::Regex;

use crate::error;
use crate::RegexOptions;

/// Lazily keep the elements whose textual form contains `pattern`.
///
/// The comparison is case-sensitive and ordinal; no locale rules apply.
pub fn grep<I, P>(seq: I, pattern: P) -> Grep<I::IntoIter, P>
where
    I: IntoIterator,
    I::Item: Display,
    P: AsRef<str>,
{
    Grep::new(seq.into_iter(), pattern)
}

/// Lazily keep the elements whose textual form matches the regular
/// expression `pattern` anywhere, using the default options.
pub fn egrep<I, P>(seq: I, pattern: P) -> error::Result<EGrep<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Display,
    P: AsRef<str>,
{
    egrep_with(seq, pattern, RegexOptions::default())
}

/// Like [`egrep`], compiling `pattern` with `options`.
///
/// The pattern is compiled once, before any element is pulled, so a
/// malformed pattern is reported without touching the sequence.
pub fn egrep_with<I, P>(
    seq: I,
    pattern: P,
    options: RegexOptions,
) -> error::Result<EGrep<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Display,
    P: AsRef<str>,
{
    let regex = options.build(pattern.as_ref())?;
    Ok(egrep_regex(seq, regex))
}

/// Like [`egrep`], with an already compiled regular expression.
pub fn egrep_regex<I>(seq: I, regex: Regex) -> EGrep<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Display,
{
    EGrep::new(seq.into_iter(), regex)
}

/// An iterator over the elements containing a substring.
#[derive(Debug, Clone)]
pub struct Grep<I, P> {
    iter: I,
    pattern: P,
}

impl<I, P> Grep<I, P>
where
    I: Iterator,
    I::Item: Display,
    P: AsRef<str>,
{
    pub(crate) fn new(iter: I, pattern: P) -> Self {
        Self { iter, pattern }
    }
}

impl<I, P> Iterator for Grep<I, P>
where
    I: Iterator,
    I::Item: Display,
    P: AsRef<str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.pattern.as_ref();
        self.iter
            .by_ref()
            .find(|item| item.to_string().contains(pattern))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // anything may be filtered out
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, P> FusedIterator for Grep<I, P>
where
    I: FusedIterator,
    I::Item: Display,
    P: AsRef<str>,
{
}

/// An iterator over the elements matching a regular expression.
#[derive(Debug, Clone)]
pub struct EGrep<I> {
    iter: I,
    regex: Regex,
}

impl<I> EGrep<I>
where
    I: Iterator,
    I::Item: Display,
{
    pub(crate) fn new(iter: I, regex: Regex) -> Self {
        Self { iter, regex }
    }

    /// The compiled expression elements are matched against.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl<I> Iterator for EGrep<I>
where
    I: Iterator,
    I::Item: Display,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let regex = &self.regex;
        self.iter
            .by_ref()
            .find(|item| regex.is_match(&item.to_string()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I> FusedIterator for EGrep<I>
where
    I: FusedIterator,
    I::Item: Display,
{
}
