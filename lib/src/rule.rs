use crate::{error::ConfigError, grid::CellValue};
use ltl_rules::{NeighborhoodType, Rule};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    ops::RangeInclusive,
    str::FromStr,
};

/// Allowed neighborhood radii.
pub const RADIUS_RANGE: RangeInclusive<u32> = 1..=10;

/// Allowed numbers of states.
///
/// The upper bound is the number of distinct [`CellValue`]s.
pub const STATES_RANGE: RangeInclusive<u32> = 2..=256;

/// A set of neighbor counts.
///
/// Counts are kept sorted and deduplicated, so that the largest one is
/// known without a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CountSet(Vec<u32>);

impl CountSet {
    /// Whether the set contains the given count.
    pub fn contains(&self, count: u32) -> bool {
        self.0.binary_search(&count).is_ok()
    }

    /// The largest count in the set.
    pub fn max(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of counts in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The counts in ascending order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl FromIterator<u32> for CountSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut counts: Vec<u32> = iter.into_iter().collect();
        counts.sort_unstable();
        counts.dedup();
        Self(counts)
    }
}

/// A validated Larger than Life rule.
///
/// Once built, a rule config is never modified.
///
/// With the `serde` feature, a rule config is (de)serialized as a `RulesFile`.
///
/// # Examples
///
/// ```rust
/// # use ltlsim_lib::RuleConfig;
/// let rule: RuleConfig = "R5,C2,M1,S34..58,B34..45,NM".parse().unwrap();
/// assert_eq!(rule.radius(), 5);
/// assert!(rule.birth().contains(40));
/// assert_eq!(rule.to_string(), "R5,C2,M1,S34-58,B34-45,NM");
///
/// assert!("R11,C2,M1,S34..58,B34..45,NM".parse::<RuleConfig>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "crate::RulesFile", into = "crate::RulesFile")
)]
pub struct RuleConfig {
    pub(crate) radius: u32,
    pub(crate) states: u32,
    pub(crate) survival: CountSet,
    pub(crate) birth: CountSet,
    pub(crate) include_center: bool,
    pub(crate) neighborhood: NeighborhoodType,
}

impl RuleConfig {
    /// Creates a new rule config.
    ///
    /// # Errors
    ///
    /// Fails if the radius is not in [`RADIUS_RANGE`], the number of states
    /// is not in [`STATES_RANGE`], or either set of conditions is empty.
    pub fn new(
        radius: u32,
        states: u32,
        survival: impl IntoIterator<Item = u32>,
        birth: impl IntoIterator<Item = u32>,
        include_center: bool,
        neighborhood: NeighborhoodType,
    ) -> Result<Self, ConfigError> {
        if !RADIUS_RANGE.contains(&radius) {
            return Err(ConfigError::RadiusOutOfRange(radius));
        }

        if !STATES_RANGE.contains(&states) {
            return Err(ConfigError::StatesOutOfRange(states));
        }

        let birth: CountSet = birth.into_iter().collect();
        if birth.is_empty() {
            return Err(ConfigError::NoBirthConditions);
        }

        let survival: CountSet = survival.into_iter().collect();
        if survival.is_empty() {
            return Err(ConfigError::NoSurvivalConditions);
        }

        Ok(Self {
            radius,
            states,
            survival,
            birth,
            include_center,
            neighborhood,
        })
    }

    /// Radius of the neighborhood.
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of states, including the dead and the alive state.
    pub const fn states(&self) -> u32 {
        self.states
    }

    /// Neighbor counts that keep an alive cell alive.
    pub const fn survival(&self) -> &CountSet {
        &self.survival
    }

    /// Neighbor counts that bring a dead cell to life.
    pub const fn birth(&self) -> &CountSet {
        &self.birth
    }

    /// Whether a cell counts itself as a neighbor.
    pub const fn include_center(&self) -> bool {
        self.include_center
    }

    /// The neighborhood type.
    pub const fn neighborhood(&self) -> NeighborhoodType {
        self.neighborhood
    }

    /// Converts the config back to a plain [`Rule`].
    pub fn to_rule(&self) -> Rule {
        Rule {
            radius: self.radius,
            states: self.states,
            include_center: self.include_center,
            neighborhood: self.neighborhood,
            birth: self.birth.as_slice().to_vec(),
            survival: self.survival.as_slice().to_vec(),
        }
    }

    /// The state that follows `value` when a cell is not kept alive.
    ///
    /// An alive cell moves to the first aging state, an aging cell moves
    /// to the next one, and the last aging state goes back to dead.
    pub(crate) fn age(&self, value: CellValue) -> CellValue {
        let next = u32::from(value) + 1;
        if next >= self.states {
            0
        } else {
            CellValue::try_from(next).unwrap_or(0)
        }
    }

    /// Rows of the neighborhood as `(row offset, column half-width)` pairs.
    pub(crate) fn row_spans(&self) -> Vec<(isize, usize)> {
        let radius = self.radius as isize;
        (-radius..=radius)
            .filter_map(|dr| {
                self.neighborhood
                    .half_width(self.radius, dr.unsigned_abs() as u32)
                    .map(|w| (dr, w as usize))
            })
            .collect()
    }
}

impl TryFrom<Rule> for RuleConfig {
    type Error = ConfigError;

    fn try_from(rule: Rule) -> Result<Self, Self::Error> {
        Self::new(
            rule.radius,
            rule.states,
            rule.survival,
            rule.birth,
            rule.include_center,
            rule.neighborhood,
        )
    }
}

impl FromStr for RuleConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule: Rule = s.parse()?;
        Self::try_from(rule)
    }
}

impl Display for RuleConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rule())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltl_rules::RuleStringError;

    fn life() -> RuleConfig {
        RuleConfig::new(1, 2, [2, 3], [3], false, NeighborhoodType::Moore).unwrap()
    }

    #[test]
    fn test_count_set() {
        let counts: CountSet = [7, 2, 5, 2, 3].into_iter().collect();
        assert_eq!(counts.as_slice(), &[2, 3, 5, 7]);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.max(), Some(7));
        assert!(counts.contains(5));
        assert!(!counts.contains(4));
        assert_eq!(CountSet::default().max(), None);
    }

    #[test]
    fn test_validation() {
        let new = |radius, states, survival: &[u32], birth: &[u32]| {
            RuleConfig::new(
                radius,
                states,
                survival.iter().copied(),
                birth.iter().copied(),
                false,
                NeighborhoodType::Moore,
            )
        };

        assert!(new(1, 2, &[2], &[3]).is_ok());
        assert!(new(10, 256, &[0], &[0]).is_ok());
        assert_eq!(new(0, 2, &[2], &[3]), Err(ConfigError::RadiusOutOfRange(0)));
        assert_eq!(
            new(11, 2, &[2], &[3]),
            Err(ConfigError::RadiusOutOfRange(11))
        );
        assert_eq!(new(1, 1, &[2], &[3]), Err(ConfigError::StatesOutOfRange(1)));
        assert_eq!(
            new(1, 257, &[2], &[3]),
            Err(ConfigError::StatesOutOfRange(257))
        );
        assert_eq!(new(1, 2, &[2], &[]), Err(ConfigError::NoBirthConditions));
        assert_eq!(new(1, 2, &[], &[3]), Err(ConfigError::NoSurvivalConditions));
    }

    #[test]
    fn test_parse() {
        assert_eq!("R1,C0,M0,S2..3,B3,NM".parse::<RuleConfig>(), Ok(life()));
        assert_eq!(life().to_string(), "R1,C2,M0,S2-3,B3,NM");
        assert_eq!(
            "R1,C2,M0,S2..3,B3,NX".parse::<RuleConfig>(),
            Err(ConfigError::InvalidRule(
                RuleStringError::UnsupportedNeighborhood
            ))
        );
        assert_eq!(
            "R1,C2,M0,S2..3,B,NM".parse::<RuleConfig>(),
            Err(ConfigError::NoBirthConditions)
        );
        assert_eq!(
            "R12,C2,M0,S2..3,B3,NM".parse::<RuleConfig>(),
            Err(ConfigError::RadiusOutOfRange(12))
        );
    }

    #[test]
    fn test_age() {
        let rule = life();
        assert_eq!(rule.age(1), 0);

        let rule = RuleConfig::new(1, 5, [2], [3], false, NeighborhoodType::Moore).unwrap();
        assert_eq!(rule.age(1), 2);
        assert_eq!(rule.age(2), 3);
        assert_eq!(rule.age(3), 4);
        assert_eq!(rule.age(4), 0);

        let rule = RuleConfig::new(1, 256, [2], [3], false, NeighborhoodType::Moore).unwrap();
        assert_eq!(rule.age(254), 255);
        assert_eq!(rule.age(255), 0);
    }

    #[test]
    fn test_row_spans() {
        let rule = RuleConfig::new(2, 2, [2], [3], false, NeighborhoodType::Moore).unwrap();
        assert_eq!(
            rule.row_spans(),
            vec![(-2, 2), (-1, 2), (0, 2), (1, 2), (2, 2)]
        );

        let rule = RuleConfig::new(2, 2, [2], [3], false, NeighborhoodType::VonNeumann).unwrap();
        assert_eq!(
            rule.row_spans(),
            vec![(-2, 0), (-1, 1), (0, 2), (1, 1), (2, 0)]
        );
    }
}
