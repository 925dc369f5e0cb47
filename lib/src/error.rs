use ltl_rules::RuleStringError;
use thiserror::Error;

/// An error that can occur when building a rule or a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The rule string cannot be parsed.
    #[error("Invalid rule string: {0}")]
    InvalidRule(#[from] RuleStringError),

    /// The neighborhood radius is not in `1..=10`.
    #[error("Neighborhood radius {0} is out of range (1 to 10)")]
    RadiusOutOfRange(u32),

    /// The number of states is not in `2..=256`.
    #[error("Number of states {0} is out of range (2 to 256)")]
    StatesOutOfRange(u32),

    /// The set of birth conditions is empty.
    #[error("No birth conditions specified")]
    NoBirthConditions,

    /// The set of survival conditions is empty.
    #[error("No survival conditions specified")]
    NoSurvivalConditions,

    /// A cell of an explicit start grid is neither 0 nor 1.
    #[error("Start cell values can only be 0 or 1, found {value} at row {row}, column {col}")]
    NonBinaryCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// Value of the offending cell.
        value: u8,
    },

    /// The board has no cells.
    #[error("The board size is zero")]
    InvalidSize,

    /// The rows of a grid do not form a square.
    #[error("The grid is not a square")]
    NotSquare,

    /// A random start asks for more alive cells than the board has.
    #[error("Cannot place {alive} alive cells on a board of {cells} cells")]
    TooManyAliveCells {
        /// Requested number of alive cells.
        alive: usize,
        /// Number of cells on the board.
        cells: usize,
    },
}
