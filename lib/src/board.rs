use crate::{
    config::{Config, DEFAULT_ALIVE, DEFAULT_SIZE},
    error::ConfigError,
    grid::{CellValue, Grid},
    random::seeded_rng,
    rule::RuleConfig,
};
use rand::Rng;
use std::collections::HashSet;

/// A square board evolving under a Larger than Life rule.
///
/// The board holds the current grid, which can be read between steps,
/// and a snapshot of the previous generation that is only used while
/// computing a step.
///
/// # Example
///
/// ```
/// use ltlsim_lib::{Board, Grid, RuleConfig};
///
/// let rule: RuleConfig = "R1,C2,M0,S2-3,B3,NM".parse().unwrap();
/// let grid = Grid::from_rows(&[
///     vec![0, 0, 0, 0, 0],
///     vec![0, 0, 1, 0, 0],
///     vec![0, 0, 1, 0, 0],
///     vec![0, 0, 1, 0, 0],
///     vec![0, 0, 0, 0, 0],
/// ])
/// .unwrap();
/// let mut board = Board::with_cells(rule, grid).unwrap();
///
/// board.step();
/// assert_eq!(board.cells().row(2), &[0, 1, 1, 1, 0]);
/// assert_eq!(board.generation(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    /// The rule of the board.
    pub(crate) rule: RuleConfig,

    /// The current generation.
    pub(crate) cells: Grid,

    /// The previous generation, read while computing a step.
    pub(crate) snapshot: Grid,

    /// Rows of the neighborhood, as `(row offset, column half-width)` pairs.
    pub(crate) spans: Vec<(isize, usize)>,

    /// Number of steps taken so far.
    pub(crate) generation: u64,
}

impl Board {
    /// Creates a board of the default size with the default number of
    /// alive cells placed at random.
    ///
    /// The random generator is seeded from the system's entropy.
    pub fn new(rule: RuleConfig) -> Self {
        let mut rng = seeded_rng(None);
        Self::random_unchecked(rule, DEFAULT_SIZE, DEFAULT_ALIVE, &mut rng)
    }

    /// Creates a board of side length `size` with exactly `alive` alive
    /// cells at distinct random positions. All other cells are dead.
    ///
    /// # Errors
    ///
    /// Fails if the size is zero, or if there are not enough cells to place
    /// `alive` alive cells.
    pub fn random<R: Rng + ?Sized>(
        rule: RuleConfig,
        size: usize,
        alive: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidSize);
        }

        let cells = size * size;
        if alive > cells {
            return Err(ConfigError::TooManyAliveCells { alive, cells });
        }

        Ok(Self::random_unchecked(rule, size, alive, rng))
    }

    /// Creates a random board from a [`Config`].
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid. See [`Config::check`].
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let rule = config.parse_rule()?;
        Self::random(rule, config.size, config.alive, &mut config.rng())
    }

    /// Creates a board with the given start grid.
    ///
    /// # Errors
    ///
    /// Fails if some cell of the grid is neither `0` nor `1`.
    pub fn with_cells(rule: RuleConfig, cells: Grid) -> Result<Self, ConfigError> {
        if cells.size() == 0 {
            return Err(ConfigError::InvalidSize);
        }

        for (row, values) in cells.rows().enumerate() {
            if let Some((col, &value)) = values.iter().enumerate().find(|(_, &v)| v > 1) {
                return Err(ConfigError::NonBinaryCell { row, col, value });
            }
        }

        log::debug!(
            "Created a {0}x{0} board with {1} alive cells, rule {2}",
            cells.size(),
            cells.count(1),
            rule
        );

        Ok(Self::from_parts(rule, cells))
    }

    fn random_unchecked<R: Rng + ?Sized>(
        rule: RuleConfig,
        size: usize,
        alive: usize,
        rng: &mut R,
    ) -> Self {
        let len = size * size;
        let mut chosen = HashSet::with_capacity(alive);
        while chosen.len() < alive {
            chosen.insert(rng.gen_range(0..len));
        }

        let mut cells = Grid::new(size);
        for index in chosen {
            cells[(index / size, index % size)] = 1;
        }

        log::debug!("Created a random {size}x{size} board with {alive} alive cells, rule {rule}");

        Self::from_parts(rule, cells)
    }

    fn from_parts(rule: RuleConfig, cells: Grid) -> Self {
        let spans = rule.row_spans();
        let snapshot = Grid::new(cells.size());

        Self {
            rule,
            cells,
            snapshot,
            spans,
            generation: 0,
        }
    }

    /// The current grid.
    pub const fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Side length of the board.
    pub const fn size(&self) -> usize {
        self.cells.size()
    }

    /// The rule of the board.
    pub const fn rule(&self) -> &RuleConfig {
        &self.rule
    }

    /// Number of steps taken so far.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of fully alive cells.
    pub fn population(&self) -> usize {
        self.cells.count(1)
    }

    /// Gets the value of a cell, or [`None`] if it is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        self.cells.get(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltl_rules::NeighborhoodType;

    fn life() -> RuleConfig {
        RuleConfig::new(1, 2, [2, 3], [3], false, NeighborhoodType::Moore).unwrap()
    }

    #[test]
    fn test_new() {
        let board = Board::new(life());
        assert_eq!(board.size(), DEFAULT_SIZE);
        assert_eq!(board.population(), DEFAULT_ALIVE);
        assert_eq!(board.cells().count(0), DEFAULT_SIZE * DEFAULT_SIZE - DEFAULT_ALIVE);
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn test_random() {
        let mut rng = seeded_rng(Some(3));
        let board = Board::random(life(), 10, 100, &mut rng).unwrap();
        assert_eq!(board.population(), 100);

        let board = Board::random(life(), 10, 0, &mut rng).unwrap();
        assert_eq!(board.population(), 0);

        assert_eq!(
            Board::random(life(), 10, 101, &mut rng).unwrap_err(),
            ConfigError::TooManyAliveCells {
                alive: 101,
                cells: 100
            }
        );
        assert_eq!(
            Board::random(life(), 0, 0, &mut rng).unwrap_err(),
            ConfigError::InvalidSize
        );
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Board::random(life(), 20, 50, &mut seeded_rng(Some(9))).unwrap();
        let b = Board::random(life(), 20, 50, &mut seeded_rng(Some(9))).unwrap();
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_from_config() {
        let config = Config::new("R2,C3,M1,S1-4,B2,NN")
            .with_size(12)
            .with_alive(30)
            .with_seed(5);
        let board = Board::from_config(&config).unwrap();
        assert_eq!(board.size(), 12);
        assert_eq!(board.population(), 30);
        assert_eq!(board.rule().states(), 3);
        assert_eq!(board.cells(), Board::from_config(&config).unwrap().cells());
    }

    #[test]
    fn test_with_cells() {
        let grid = Grid::from_rows(&[vec![0, 1], vec![1, 1]]).unwrap();
        let board = Board::with_cells(life(), grid.clone()).unwrap();
        assert_eq!(board.cells(), &grid);
        assert_eq!(board.get(0, 1), Some(1));
        assert_eq!(board.get(2, 0), None);

        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 2]]).unwrap();
        assert_eq!(
            Board::with_cells(life(), grid).unwrap_err(),
            ConfigError::NonBinaryCell {
                row: 2,
                col: 2,
                value: 2
            }
        );
    }

    #[test]
    fn test_cells_is_idempotent() {
        let board = Board::random(life(), 15, 40, &mut seeded_rng(Some(1))).unwrap();
        let first = board.cells().clone();
        assert_eq!(board.cells(), &first);
        assert_eq!(board.size(), 15);
    }
}
