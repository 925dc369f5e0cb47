use crate::error::ConfigError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The value of a single cell.
///
/// `0` is dead, `1` is fully alive, and larger values are aging.
pub type CellValue = u8;

/// A square grid of cells, stored row by row.
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<Vec<CellValue>>", try_from = "Vec<Vec<CellValue>>")
)]
pub struct Grid {
    size: usize,
    cells: Vec<CellValue>,
}

impl Grid {
    /// Creates a grid of dead cells with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Creates a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if there are no rows, and
    /// [`ConfigError::NotSquare`] if some row does not have as many cells
    /// as there are rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ltlsim_lib::Grid;
    /// let grid = Grid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid[(0, 1)], 1);
    /// assert!(Grid::from_rows(&[vec![0, 1]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<CellValue>]) -> Result<Self, ConfigError> {
        let size = rows.len();
        if size == 0 {
            return Err(ConfigError::InvalidSize);
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(ConfigError::NotSquare);
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Gets the value of a cell, or [`None`] if it is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// A single row of the grid.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[CellValue] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.cells.chunks(self.size.max(1))
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[CellValue] {
        &self.cells
    }

    /// Number of cells with the given value.
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// Copies the grid into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        self.rows().map(<[CellValue]>::to_vec).collect()
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.cells.clone_from(&source.cells);
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellValue;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a grid of size {}",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a grid of size {}",
            self.size
        );
        &mut self.cells[row * self.size + col]
    }
}

impl From<Grid> for Vec<Vec<CellValue>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl TryFrom<Vec<Vec<CellValue>>> for Grid {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<CellValue>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.count(1), 3);
        assert_eq!(grid.row(2), &[0, 1, 0]);
        assert_eq!(grid.get(1, 1), Some(1));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]
        );

        assert_eq!(Grid::from_rows(&[]), Err(ConfigError::InvalidSize));
        assert_eq!(
            Grid::from_rows(&[vec![0, 1], vec![0]]),
            Err(ConfigError::NotSquare)
        );
    }

    #[test]
    fn test_index() {
        let mut grid = Grid::new(4);
        assert_eq!(grid.count(0), 16);
        grid[(3, 2)] = 5;
        assert_eq!(grid[(3, 2)], 5);
        assert_eq!(grid.as_slice()[14], 5);
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let grid = Grid::new(4);
        let _ = grid[(0, 4)];
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let grid: Grid = serde_json::from_str("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(grid.count(1), 2);
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[[0,1],[1,0]]");
        assert!(serde_json::from_str::<Grid>("[[0, 1]]").is_err());
    }
}
