use crate::{error::ConfigError, random::seeded_rng, rule::RuleConfig};
#[cfg(feature = "clap")]
use clap::Args;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Default side length of the board.
pub const DEFAULT_SIZE: usize = 60;

/// Default number of alive cells in a random start.
pub const DEFAULT_ALIVE: usize = 150;

/// Default rule string: Conway's Game of Life.
pub const DEFAULT_RULE: &str = "R1,C2,M0,S2-3,B3,NM";

/// The configuration of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
pub struct Config {
    /// The rule string of the cellular automaton.
    ///
    /// Two notations are supported:
    ///
    /// - [Golly's HROT notation](https://conwaylife.com/wiki/Larger_than_Life),
    ///   e.g. `R5,C2,M1,S34..58,B34..45,NM`. The neighborhood must be `NM` (Moore)
    ///   or `NN` (von Neumann), and defaults to Moore when omitted.
    /// - Kellie Evans' notation `r,bmin,bmax,smin,smax`, e.g. `5,34,45,34,58`.
    ///
    /// The radius must be between 1 and 10, and the number of states between 2 and 256.
    #[cfg_attr(
        feature = "clap",
        arg(short, long = "rule", default_value = DEFAULT_RULE)
    )]
    pub rule_str: String,

    /// Side length of the board.
    #[cfg_attr(feature = "clap", arg(short, long, default_value_t = DEFAULT_SIZE))]
    pub size: usize,

    /// Number of alive cells in a random start.
    #[cfg_attr(feature = "clap", arg(short, long, default_value_t = DEFAULT_ALIVE))]
    pub alive: usize,

    /// Random seed for the random start.
    ///
    /// If this is [`None`], then the seed is taken from the system's entropy.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_RULE)
    }
}

impl Config {
    /// Create a new configuration with the default size and number of alive cells.
    #[inline]
    pub fn new(rule_str: &str) -> Self {
        Self {
            rule_str: rule_str.to_string(),
            size: DEFAULT_SIZE,
            alive: DEFAULT_ALIVE,
            seed: None,
        }
    }

    /// Set the side length of the board.
    #[inline]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the number of alive cells in a random start.
    #[inline]
    pub const fn with_alive(mut self, alive: usize) -> Self {
        self.alive = alive;
        self
    }

    /// Set the random seed.
    ///
    /// See [`seed`](Config::seed) for more details.
    #[inline]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Try to parse the rule string into a validated rule.
    pub fn parse_rule(&self) -> Result<RuleConfig, ConfigError> {
        self.rule_str.parse()
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        self.parse_rule()?;

        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }

        let cells = self.size * self.size;
        if self.alive > cells {
            return Err(ConfigError::TooManyAliveCells {
                alive: self.alive,
                cells,
            });
        }

        Ok(self)
    }

    /// A random number generator seeded from [`seed`](Config::seed).
    pub fn rng(&self) -> Xoshiro256PlusPlus {
        seeded_rng(self.seed)
    }
}
