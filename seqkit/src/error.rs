use thiserror::Error;

use crate::RegexOptions;

#[derive(Debug, Error)]
pub enum Error {
    /// The regular expression could not be compiled.
    #[error("Invalid regular expression: {0}")]
    Pattern(#[from] regex::Error),
    /// A flags string contained a character that is not a known flag.
    #[error("Unknown regular expression flag: {0:?}")]
    UnknownFlag(char),
    /// The flags are individually valid but cannot be combined.
    #[error("Unsupported regular expression flag combination: \"{0}\"")]
    UnsupportedFlags(RegexOptions),
    /// Rotation is only defined for sequences with at least one element.
    #[error("Cannot rotate an empty sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, Error>;
