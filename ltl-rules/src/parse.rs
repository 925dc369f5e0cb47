use crate::{NeighborhoodType, Rule, RuleStringError};
use std::{ops::RangeInclusive, str};

/// A pattern for matching a single character represented as a byte.
trait CharPattern {
    /// Returns `true` if the given character matches this pattern.
    fn matches(&self, c: u8) -> bool;
}

impl CharPattern for u8 {
    fn matches(&self, c: u8) -> bool {
        *self == c
    }
}

impl<const N: usize> CharPattern for &[u8; N] {
    fn matches(&self, c: u8) -> bool {
        self.contains(&c)
    }
}

impl<F> CharPattern for F
where
    F: Fn(&u8) -> bool,
{
    fn matches(&self, c: u8) -> bool {
        self(&c)
    }
}

impl CharPattern for RangeInclusive<u8> {
    fn matches(&self, c: u8) -> bool {
        self.contains(&c)
    }
}

/// A helper struct for parsing rule strings.
///
/// Inspired by the parser for [`IpAddr`](std::net::IpAddr) in Rust's standard
/// library.
struct Parser<'a> {
    input: &'a [u8],
}

impl<'a> Parser<'a> {
    /// Create a new parser from a string.
    const fn new(str: &'a str) -> Self {
        Self {
            input: str.as_bytes(),
        }
    }

    /// Try to parse something with a given parser function, and reset the
    /// parser if it fails.
    fn try_parse<T>(&mut self, parser_fn: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let input = self.input;
        let result = parser_fn(self);
        if result.is_none() {
            self.input = input;
        }
        result
    }

    /// Parse zero or more things with a given parser function.
    fn parse_many<T>(&mut self, parser_fn: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut result = Vec::new();
        let mut parser_fn = parser_fn;
        while let Some(item) = self.try_parse(&mut parser_fn) {
            result.push(item);
        }
        result
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.first().copied()
    }

    /// Try to read the next character and consume it if it matches the given
    /// pattern.
    fn read_matches(&mut self, pattern: impl CharPattern) -> Option<u8> {
        let c = self.peek()?;
        if pattern.matches(c) {
            self.input = &self.input[1..];
            Some(c)
        } else {
            None
        }
    }

    /// Try to read zero or more characters that match the given pattern.
    fn read_matches_many(&mut self, pattern: impl CharPattern) -> &'a [u8] {
        let input = self.input;
        let mut len = 0;
        while let Some(c) = self.peek() {
            if !pattern.matches(c) {
                break;
            }
            self.input = &self.input[1..];
            len += 1;
        }
        &input[..len]
    }

    /// Parse a number as a `u32`.
    fn parse_number(&mut self) -> Option<u32> {
        let digits = self.read_matches_many(b'0'..=b'9');
        str::from_utf8(digits).ok()?.parse().ok()
    }

    /// Parse the separator of a range, either `-` or `..`.
    fn parse_range_separator(&mut self) -> Option<()> {
        if self.read_matches(b'-').is_some() {
            return Some(());
        }
        self.try_parse(|parser| {
            parser.read_matches(b'.')?;
            parser.read_matches(b'.')?;
            Some(())
        })
    }

    /// Parse a single count `n` or a range of counts `a-b` / `a..b`.
    ///
    /// A single count `n` is returned as the range `(n, n)`.
    fn parse_count_item(&mut self) -> Option<(u32, u32)> {
        let start = self.parse_number()?;
        let end = self
            .try_parse(|parser| {
                parser.parse_range_separator()?;
                parser.parse_number()
            })
            .unwrap_or(start);
        Some((start, end))
    }

    /// Parse a possibly empty comma-separated list of counts and ranges.
    ///
    /// A comma that is not followed by a count is left unconsumed, so that
    /// the list can be followed by other comma-separated fields.
    fn parse_count_list(&mut self) -> Vec<(u32, u32)> {
        let mut items = Vec::new();
        if let Some(first) = self.try_parse(Self::parse_count_item) {
            items.push(first);
            items.extend(self.parse_many(|parser| {
                parser.read_matches(b',')?;
                parser.parse_count_item()
            }));
        }
        items
    }

    /// Parse a rule string in HROT notation.
    ///
    /// Returns `None` if this rule string is not using HROT notation.
    /// Returns `Some(Err(_))` if it is using HROT notation but there is some
    /// other error.
    ///
    /// See [`parse_rule`] for more details.
    fn parse_hrot(&mut self) -> Option<Result<Rule, RuleStringError>> {
        // Parse the radius.
        self.read_matches(b"Rr")?;
        let radius = self.parse_number()?;
        self.read_matches(b',')?;

        // Parse the number of states.
        self.read_matches(b"Cc")?;
        let states = self.parse_number()?;
        self.read_matches(b',')?;

        // Parse whether the center cell is counted.
        self.read_matches(b"Mm")?;
        let include_center = self.read_matches(b"01")? == b'1';
        self.read_matches(b',')?;

        // Parse the survival conditions.
        self.read_matches(b"Ss")?;
        let survival = self.parse_count_list();
        self.read_matches(b',')?;

        // Parse the birth conditions.
        self.read_matches(b"Bb")?;
        let birth = self.parse_count_list();

        // Parse the neighborhood type. This is optional.
        let neighborhood = if self.read_matches(b',').is_some() {
            self.read_matches(b"Nn")?;
            let letters = self.read_matches_many(|c: &u8| *c != b',');
            Some(str::from_utf8(letters).ok()?)
        } else {
            None
        };

        // Check that there is no more input.
        if self.peek().is_some() {
            return None;
        }

        let neighborhood = match neighborhood {
            None => NeighborhoodType::Moore,
            Some(letters) => match letters.parse::<NeighborhoodType>() {
                Ok(neighborhood) => neighborhood,
                Err(_) if !letters.is_empty() => {
                    return Some(Err(RuleStringError::UnsupportedNeighborhood))
                }
                Err(_) => return None,
            },
        };

        // `C0` is a synonym for `C2`.
        let states = match states {
            0 => 2,
            1 => return Some(Err(RuleStringError::InvalidNumberOfStates)),
            n => n,
        };

        Some(expand_ranges(&birth).and_then(|birth| {
            Ok(Rule {
                radius,
                states,
                include_center,
                neighborhood,
                birth,
                survival: expand_ranges(&survival)?,
            })
        }))
    }

    /// Parse a rule string in Kellie Evans' notation `r,bmin,bmax,smin,smax`.
    ///
    /// Returns `None` if this rule string is not using this notation.
    /// Returns `Some(Err(_))` if it is using this notation but there is some
    /// other error.
    ///
    /// See [`parse_rule`] for more details.
    fn parse_evans(&mut self) -> Option<Result<Rule, RuleStringError>> {
        let radius = self.parse_number()?;
        self.read_matches(b',')?;
        let birth_min = self.parse_number()?;
        self.read_matches(b',')?;
        let birth_max = self.parse_number()?;
        self.read_matches(b',')?;
        let survival_min = self.parse_number()?;
        self.read_matches(b',')?;
        let survival_max = self.parse_number()?;

        // Check that there is no more input.
        if self.peek().is_some() {
            return None;
        }

        Some(expand_ranges(&[(birth_min, birth_max)]).and_then(|birth| {
            Ok(Rule {
                radius,
                states: 2,
                include_center: true,
                neighborhood: NeighborhoodType::Moore,
                birth,
                survival: expand_ranges(&[(survival_min, survival_max)])?,
            })
        }))
    }

    /// Parse a rule string in any supported notation.
    fn parse_rule(&mut self) -> Option<Result<Rule, RuleStringError>> {
        self.try_parse(Self::parse_hrot)
            .or_else(|| self.try_parse(Self::parse_evans))
    }
}

/// Counts above this value can never be reached by any supported neighborhood.
const MAX_COUNT: u32 = 1 << 20;

/// Expand a list of inclusive ranges into a sorted list of distinct counts.
///
/// A range whose start is greater than its end, or which goes beyond
/// [`MAX_COUNT`], is an invalid condition.
fn expand_ranges(ranges: &[(u32, u32)]) -> Result<Vec<u32>, RuleStringError> {
    let mut counts = Vec::new();
    for &(start, end) in ranges {
        if start > end || end > MAX_COUNT {
            return Err(RuleStringError::InvalidCondition);
        }
        counts.extend(start..=end);
    }
    counts.sort_unstable();
    counts.dedup();
    Ok(counts)
}

/// Parse a [Larger than Life](https://conwaylife.com/wiki/Larger_than_Life) rule string.
///
/// Two notations are supported. Letters are case-insensitive.
///
/// # HROT notation
///
/// The rule string is in the form `R{r},C{c},M{m},S{survival},B{birth},N{n}`:
///
/// - `{r}` is the radius of the neighborhood.
/// - `{c}` is the number of states. `0` is the same as `2`.
/// - `{m}` is `1` if the center cell is counted as its own neighbor, `0` otherwise.
/// - `{survival}` and `{birth}` are comma-separated lists of counts. Each item is
///   either a single number, or a range written as `a-b` or `a..b`. These lists
///   may be empty.
/// - `{n}` is `M` for the Moore neighborhood and `N` for the von Neumann
///   neighborhood. The `,N{n}` part may be omitted, in which case the Moore
///   neighborhood is assumed.
///
/// For example, Bosco's rule is `R5,C2,M1,S34..58,B34..45,NM`.
///
/// # Kellie Evans' notation
///
/// The rule string is in the form `{r},{bmin},{bmax},{smin},{smax}`. This is a
/// 2-state rule with the Moore neighborhood of radius `{r}` where the center cell
/// is counted. A dead cell is born when its count is in `{bmin}..={bmax}`, and a
/// live cell survives when its count is in `{smin}..={smax}`.
///
/// For example, Bosco's rule is `5,34,45,34,58`.
pub fn parse_rule(rule_string: &str) -> Result<Rule, RuleStringError> {
    let mut parser = Parser::new(rule_string.trim());

    parser
        .parse_rule()
        .unwrap_or(Err(RuleStringError::InvalidSyntax))
}

/// Parse a list of neighbor counts, such as `2-5,7`.
///
/// Each comma-separated item is either a single number or a range written as
/// `a-b` or `a..b`. The result is sorted and contains no duplicates.
pub fn parse_counts(counts: &str) -> Result<Vec<u32>, RuleStringError> {
    let mut parser = Parser::new(counts.trim());
    let ranges = parser.parse_count_list();

    // Check that there is no more input.
    if parser.peek().is_some() {
        return Err(RuleStringError::InvalidSyntax);
    }

    expand_ranges(&ranges)
}
