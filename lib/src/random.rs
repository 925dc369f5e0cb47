use crate::rule::{CountSet, RuleConfig};
use ltl_rules::NeighborhoodType;
use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::ops::RangeInclusive;

/// Radii of random rules.
const RANDOM_RADIUS: RangeInclusive<u32> = 1..=10;

/// Numbers of states of random rules.
const RANDOM_STATES: RangeInclusive<u32> = 2..=255;

/// Number of counts drawn for each condition set of a random rule.
const RANDOM_COUNTS_LEN: RangeInclusive<usize> = 1..=9;

/// Values of the counts of a random rule.
const RANDOM_COUNT_VALUE: RangeInclusive<u32> = 0..=9;

/// Creates a random number generator from an optional seed.
///
/// Without a seed, the generator is seeded from the system's entropy.
pub fn seeded_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    seed.map_or_else(
        Xoshiro256PlusPlus::from_entropy,
        Xoshiro256PlusPlus::seed_from_u64,
    )
}

fn random_counts<R: Rng + ?Sized>(rng: &mut R) -> CountSet {
    let len = rng.gen_range(RANDOM_COUNTS_LEN);
    (0..len)
        .map(|_| rng.gen_range(RANDOM_COUNT_VALUE))
        .collect()
}

fn random_neighborhood<R: Rng + ?Sized>(rng: &mut R) -> NeighborhoodType {
    if rng.gen_bool(0.5) {
        NeighborhoodType::Moore
    } else {
        NeighborhoodType::VonNeumann
    }
}

impl Distribution<RuleConfig> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RuleConfig {
        RuleConfig {
            radius: rng.gen_range(RANDOM_RADIUS),
            states: rng.gen_range(RANDOM_STATES),
            survival: random_counts(rng),
            birth: random_counts(rng),
            include_center: rng.gen_bool(0.5),
            neighborhood: random_neighborhood(rng),
        }
    }
}

impl RuleConfig {
    /// Draws a random rule.
    ///
    /// Every parameter is drawn independently and uniformly:
    /// the radius from `1..=10`, the number of states from `2..=255`,
    /// and each condition set as 1 to 9 counts from `0..=9`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ltlsim_lib::{seeded_rng, RuleConfig};
    /// let mut rng = seeded_rng(Some(1));
    /// let rule = RuleConfig::random(&mut rng);
    /// assert!((1..=10).contains(&rule.radius()));
    /// assert_eq!(rule, RuleConfig::random(&mut seeded_rng(Some(1))));
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}
