//! A crate for parsing and printing Larger than Life rules.
//!
//! Supported notations are the HROT notation used by
//! [Golly](https://golly.sourceforge.io/Help/Algorithms/Larger_than_Life.html),
//! Kellie Evans' five-number notation, and plain lists of neighbor counts.

#![warn(clippy::missing_const_for_fn)]
#![warn(missing_docs)]

mod error;
mod parse;
mod rule;

pub use error::{NeighborError, RuleStringError};
pub use parse::{parse_counts, parse_rule};
pub use rule::{NeighborhoodType, Rule};
