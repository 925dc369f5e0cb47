use crate::{board::Board, grid::CellValue, rule::CountSet};

impl Board {
    /// Advances the board by one generation.
    ///
    /// Every cell is updated from the previous generation:
    ///
    /// - A dead cell becomes alive if its neighbor count is a birth condition.
    /// - An alive cell stays alive if its neighbor count is a survival condition,
    ///   and starts aging otherwise.
    /// - An aging cell keeps aging until it wraps around to dead.
    ///
    /// Cells outside the board count as dead.
    pub fn step(&mut self) {
        self.snapshot.clone_from(&self.cells);

        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                let next = self.next_state(row, col);
                self.cells[(row, col)] = next;
            }
        }

        self.generation += 1;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Generation {}: {} alive cells",
                self.generation,
                self.population()
            );
        }
    }

    /// Computes the next state of a cell from the snapshot.
    fn next_state(&self, row: usize, col: usize) -> CellValue {
        match self.snapshot[(row, col)] {
            0 => CellValue::from(self.count_matches(row, col, &self.rule.birth)),
            1 if self.count_matches(row, col, &self.rule.survival) => 1,
            value => self.rule.age(value),
        }
    }

    /// Whether the neighbor count of a cell is in the given set.
    fn count_matches(&self, row: usize, col: usize, counts: &CountSet) -> bool {
        counts
            .max()
            .and_then(|max| self.count_neighbors(row, col, max))
            .is_some_and(|count| counts.contains(count))
    }

    /// Counts the alive neighbors of a cell in the snapshot.
    ///
    /// Returns [`None`] as soon as the count exceeds `limit`.
    fn count_neighbors(&self, row: usize, col: usize, limit: u32) -> Option<u32> {
        let size = self.snapshot.size();
        let mut count = 0;

        for &(dr, half_width) in &self.spans {
            let Some(r) = row.checked_add_signed(dr).filter(|&r| r < size) else {
                continue;
            };

            let start = col.saturating_sub(half_width);
            let end = (col + half_width).min(size - 1);
            let alive = self.snapshot.row(r)[start..=end]
                .iter()
                .filter(|&&v| v == 1)
                .count();
            count += alive as u32;

            if dr == 0 && !self.rule.include_center && self.snapshot[(row, col)] == 1 {
                count -= 1;
            }

            if count > limit {
                return None;
            }
        }

        Some(count)
    }
}
