use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error;

/// Options controlling how an `egrep` pattern is compiled.
///
/// The flags follow the single-letter convention of XPath's `fn:matches`:
///
/// - `i`: case-insensitive matching
/// - `m`: multi-line mode, `^` and `$` match at line boundaries
/// - `s`: single-line mode, `.` also matches a newline
/// - `x`: whitespace and `#` comments in the pattern are ignored
/// - `q`: the pattern is matched as a literal string
///
/// The default has every flag turned off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct RegexOptions {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    literal: bool,
}

impl RegexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    pub fn literal(mut self, yes: bool) -> Self {
        self.literal = yes;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn is_dot_matches_new_line(&self) -> bool {
        self.dot_matches_new_line
    }

    pub fn is_ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// Compile `pattern` with these options.
    ///
    /// All validation happens here, so a returned `Regex` never fails
    /// while matching.
    pub fn build(&self, pattern: &str) -> error::Result<Regex> {
        if self.literal && self.ignore_whitespace {
            tracing::debug!(flags = %self, "rejecting flag combination");
            return Err(error::Error::UnsupportedFlags(*self));
        }
        tracing::trace!(pattern, flags = %self, "compiling regex");
        let regex = if self.literal {
            // m, s and x have no meaning for a literal pattern
            RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(self.case_insensitive)
                .build()?
        } else {
            RegexBuilder::new(pattern)
                .case_insensitive(self.case_insensitive)
                .multi_line(self.multi_line)
                .dot_matches_new_line(self.dot_matches_new_line)
                .ignore_whitespace(self.ignore_whitespace)
                .build()?
        };
        Ok(regex)
    }
}

impl FromStr for RegexOptions {
    type Err = error::Error;

    fn from_str(flags: &str) -> Result<Self, Self::Err> {
        flags.chars().try_fold(Self::default(), |options, c| match c {
            'i' => Ok(options.case_insensitive(true)),
            'm' => Ok(options.multi_line(true)),
            's' => Ok(options.dot_matches_new_line(true)),
            'x' => Ok(options.ignore_whitespace(true)),
            'q' => Ok(options.literal(true)),
            _ => Err(error::Error::UnknownFlag(c)),
        })
    }
}

impl TryFrom<String> for RegexOptions {
    type Error = error::Error;

    fn try_from(flags: String) -> Result<Self, Self::Error> {
        flags.parse()
    }
}

impl From<RegexOptions> for String {
    fn from(options: RegexOptions) -> Self {
        options.to_string()
    }
}

impl fmt::Display for RegexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
            (self.literal, 'q'),
        ];
        for (_, c) in flags.into_iter().filter(|(set, _)| *set) {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
