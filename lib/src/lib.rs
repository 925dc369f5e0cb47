//! A library for simulating Larger than Life cellular automata.
//!
//! A [`RuleConfig`] describes the rule, and a [`Board`] holds a square grid
//! of cells that evolves under it one [`step`](Board::step) at a time.
//!
//! ```
//! use ltlsim_lib::{seeded_rng, Board, RuleConfig};
//!
//! let rule: RuleConfig = "R5,C2,M1,S34..58,B34..45,NM".parse().unwrap();
//! let mut board = Board::random(rule, 60, 1200, &mut seeded_rng(Some(0))).unwrap();
//!
//! for _ in 0..10 {
//!     board.step();
//! }
//!
//! assert_eq!(board.size(), 60);
//! assert_eq!(board.generation(), 10);
//! ```

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod board;
mod config;
mod error;
mod grid;
mod random;
mod rle;
mod rule;
#[cfg(feature = "serde")]
mod rules_file;
mod step;

pub use board::Board;
pub use config::{Config, DEFAULT_ALIVE, DEFAULT_RULE, DEFAULT_SIZE};
pub use error::ConfigError;
pub use grid::{CellValue, Grid};
pub use ltl_rules::{NeighborhoodType, Rule, RuleStringError};
pub use random::seeded_rng;
pub use rule::{CountSet, RuleConfig, RADIUS_RANGE, STATES_RANGE};
#[cfg(feature = "serde")]
pub use rules_file::{Counts, RulesFile};
