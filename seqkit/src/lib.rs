//! Generic operations over sequences.
//!
//! Every operation takes anything that implements [`IntoIterator`]. The
//! filtering, rotating and shuffling operations return lazy iterators that
//! do their work as elements are pulled.
//!
//! ```
//! let rotated = seqkit::rotate([1, 2, 3, 4, 5], 2)?.collect::<Vec<_>>();
//! assert_eq!(rotated, vec![3, 4, 5, 1, 2]);
//!
//! let fruit = seqkit::grep(["apple", "banana", "grape"], "ap").collect::<Vec<_>>();
//! assert_eq!(fruit, vec!["apple", "grape"]);
//! # Ok::<(), seqkit::error::Error>(())
//! ```
mod each;
pub mod error;
mod filter;
mod regex_options;
mod rotate;
mod shuffle;
mod size;

pub use each::each;
pub use filter::{egrep, egrep_regex, egrep_with, grep, EGrep, Grep};
pub use regex_options::RegexOptions;
pub use rotate::{rotate, rotate_once, Rotate, DEFAULT_DISTANCE};
pub use shuffle::{shuffle, shuffle_seeded, shuffle_with, Shuffle};
pub use size::size;
