use crate::{parse::parse_rule, NeighborError, RuleStringError};
use std::{
    fmt::{self, Formatter},
    str::FromStr,
};
use strum::{Display, EnumIter, EnumString};

/// Predefined neighborhood types.
///
/// In rule strings, the neighborhood type is given by the `N` field:
/// `NM` for [`Moore`](NeighborhoodType::Moore) and `NN` for
/// [`VonNeumann`](NeighborhoodType::VonNeumann).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NeighborhoodType {
    /// The Moore neighborhood.
    ///
    /// For example, the Moore neighborhood of radius 2 is:
    ///
    /// ```text
    /// # # # # #
    /// # # # # #
    /// # # O # #
    /// # # # # #
    /// # # # # #
    /// ```
    #[default]
    #[strum(serialize = "M")]
    Moore,

    /// The von Neumann neighborhood.
    ///
    /// For example, the von Neumann neighborhood of radius 2 is:
    ///
    /// ```text
    /// . . # . .
    /// . # # # .
    /// # # O # #
    /// . # # # .
    /// . . # . .
    /// ```
    #[strum(serialize = "N")]
    VonNeumann,
}

impl NeighborhoodType {
    /// Half-width of the row at vertical offset `dr` from the center.
    ///
    /// The row covers the columns `-w..=w` relative to the center, where `w`
    /// is the returned value. Returns [`None`] if `dr` is outside the
    /// neighborhood.
    pub const fn half_width(self, radius: u32, dr: u32) -> Option<u32> {
        if dr > radius {
            return None;
        }

        match self {
            Self::Moore => Some(radius),
            Self::VonNeumann => Some(radius - dr),
        }
    }

    /// Number of cells in the neighborhood, not counting the center cell.
    pub const fn size(self, radius: u32) -> u64 {
        let radius = radius as u64;

        match self {
            Self::Moore => 4 * radius * (radius + 1),
            Self::VonNeumann => 2 * radius * (radius + 1),
        }
    }

    /// Creates a list of neighbor offsets `(dr, dc)` for the given radius.
    ///
    /// The center cell is not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius does not fit in an `i32`.
    pub fn neighbors(self, radius: u32) -> Result<Vec<(i32, i32)>, NeighborError> {
        let radius = i32::try_from(radius).map_err(|_| NeighborError::RadiusTooLarge)?;

        let mut offsets = Vec::new();

        for dr in -radius..=radius {
            let max_dc = match self {
                Self::Moore => radius,
                Self::VonNeumann => radius - dr.abs(),
            };
            for dc in -max_dc..=max_dc {
                if dr != 0 || dc != 0 {
                    offsets.push((dr, dc));
                }
            }
        }

        Ok(offsets)
    }
}

/// A Larger than Life rule.
///
/// # States
///
/// A rule has at least 2 states:
///
/// - A "dead" state, represented by the number 0.
/// - A "live" state, represented by the number 1.
/// - Possibly some "dying" states, represented by numbers greater than 1.
///
/// In each generation:
///
/// - A dead cell becomes alive if its neighbor count is in [`birth`](Rule::birth).
/// - A live cell stays alive if its neighbor count is in [`survival`](Rule::survival).
///   Otherwise it moves to the first dying state, or to the dead state if there are
///   only 2 states.
/// - A dying cell moves to the next dying state, or to the dead state after the last one.
///
/// Only live cells are counted as neighbors. The center cell is counted only if
/// [`include_center`](Rule::include_center) is set.
///
/// # Examples
///
/// Conway's Game of Life:
///
/// ```rust
/// # use ltl_rules::{NeighborhoodType, Rule};
/// let rule = Rule {
///     radius: 1,
///     states: 2,
///     include_center: false,
///     neighborhood: NeighborhoodType::Moore,
///     birth: vec![3],
///     survival: vec![2, 3],
/// };
/// assert_eq!(rule.to_string(), "R1,C2,M0,S2-3,B3,NM");
/// assert_eq!("R1,C0,M0,S2..3,B3,NM".parse::<Rule>().unwrap(), rule);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Radius of the neighborhood.
    pub radius: u32,
    /// The number of states.
    ///
    /// It must be at least 2.
    pub states: u32,
    /// Whether the center cell counts as its own neighbor.
    pub include_center: bool,
    /// The neighborhood type.
    pub neighborhood: NeighborhoodType,
    /// Birth conditions.
    pub birth: Vec<u32>,
    /// Survival conditions.
    pub survival: Vec<u32>,
}

impl Rule {
    /// Number of cells that can be counted as neighbors,
    /// including the center cell if it is counted.
    pub fn neighborhood_size(&self) -> u64 {
        self.neighborhood.size(self.radius) + u64::from(self.include_center)
    }

    /// Checks whether the birth and survival conditions are reachable.
    ///
    /// These conditions should not contain any number greater than the neighborhood size.
    pub fn check_conditions(&self) -> bool {
        let size = self.neighborhood_size();

        self.birth.iter().all(|&n| u64::from(n) <= size)
            && self.survival.iter().all(|&n| u64::from(n) <= size)
    }
}

/// Writes a list of counts, merging consecutive numbers into ranges.
struct Counts<'a>(&'a [u32]);

impl fmt::Display for Counts<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut counts = self.0.to_vec();
        counts.sort_unstable();
        counts.dedup();

        let mut first = true;
        let mut i = 0;
        while i < counts.len() {
            let start = counts[i];
            let mut end = start;
            while i + 1 < counts.len() && counts[i + 1] == end + 1 {
                end += 1;
                i += 1;
            }
            i += 1;

            if !first {
                write!(f, ",")?;
            }
            first = false;

            if start == end {
                write!(f, "{start}")?;
            } else {
                write!(f, "{start}-{end}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Rule {
    /// Writes the rule in HROT notation, e.g. `R1,C2,M0,S2-3,B3,NM`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R{},C{},M{},S{},B{},N{}",
            self.radius,
            self.states,
            u8::from(self.include_center),
            Counts(&self.survival),
            Counts(&self.birth),
            self.neighborhood
        )
    }
}

impl FromStr for Rule {
    type Err = RuleStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}
