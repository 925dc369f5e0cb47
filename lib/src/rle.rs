use crate::{board::Board, grid::CellValue};

/// Maximum length of a line of the RLE body.
const MAX_LINE_LEN: usize = 70;

/// Golly's name of a cell state.
///
/// Two-state rules use `b` and `o`. Multi-state rules use `.` for dead,
/// then `A` to `X`, `pA` to `pX`, `qA` to `qX`, and so on up to `yO`.
fn state_tag(value: CellValue, states: u32) -> String {
    if states == 2 {
        return if value == 0 { "b" } else { "o" }.to_string();
    }

    if value == 0 {
        return ".".to_string();
    }

    let index = value - 1;
    let letter = char::from(b'A' + index % 24);
    match index / 24 {
        0 => letter.to_string(),
        prefix => format!("{}{letter}", char::from(b'o' + prefix)),
    }
}

/// Collects RLE tokens and wraps them into lines.
#[derive(Default)]
struct RleWriter {
    body: String,
    line_len: usize,
}

impl RleWriter {
    fn push(&mut self, count: usize, tag: &str) {
        let token = if count > 1 {
            format!("{count}{tag}")
        } else {
            tag.to_string()
        };

        if self.line_len + token.len() > MAX_LINE_LEN {
            self.body.push('\n');
            self.line_len = 0;
        }

        self.line_len += token.len();
        self.body.push_str(&token);
    }
}

impl Board {
    /// Output the current generation in RLE format.
    ///
    /// The header gives the size of the board and the rule in HROT notation.
    /// Two-state rules write dead cells as `b` and alive cells as `o`.
    /// Multi-state rules use Golly's extended letters, with `.` for dead
    /// cells, `A` for alive cells and `B` onwards for aging cells.
    ///
    /// Rows are terminated by `$`, and the whole pattern by `!`. Dead cells
    /// at the end of a row, and empty rows at the end of the pattern, are
    /// omitted.
    ///
    /// # Example
    ///
    /// ```
    /// use ltlsim_lib::{Board, Grid, RuleConfig};
    ///
    /// let rule: RuleConfig = "R1,C2,M0,S2-3,B3,NM".parse().unwrap();
    /// let grid = Grid::from_rows(&[vec![0, 1, 1], vec![0, 0, 0], vec![1, 0, 0]]).unwrap();
    /// let board = Board::with_cells(rule, grid).unwrap();
    ///
    /// assert_eq!(board.rle(), "x = 3, y = 3, rule = R1,C2,M0,S2-3,B3,NM\nb2o2$o!\n");
    /// ```
    pub fn rle(&self) -> String {
        let size = self.size();
        let states = self.rule.states();
        let mut writer = RleWriter::default();
        let mut pending_rows = 0;

        for row in self.cells.rows() {
            let end = row.iter().rposition(|&v| v != 0).map_or(0, |i| i + 1);

            if end > 0 {
                if pending_rows > 0 {
                    writer.push(pending_rows, "$");
                    pending_rows = 0;
                }

                let mut cells = row[..end].iter().peekable();
                while let Some(&value) = cells.next() {
                    let mut count = 1;
                    while cells.next_if_eq(&&value).is_some() {
                        count += 1;
                    }
                    writer.push(count, &state_tag(value, states));
                }
            }

            pending_rows += 1;
        }

        writer.push(1, "!");

        format!(
            "x = {size}, y = {size}, rule = {}\n{}\n",
            self.rule, writer.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, RuleConfig};

    #[test]
    fn test_state_tag() {
        assert_eq!(state_tag(0, 2), "b");
        assert_eq!(state_tag(1, 2), "o");
        assert_eq!(state_tag(0, 5), ".");
        assert_eq!(state_tag(1, 5), "A");
        assert_eq!(state_tag(4, 5), "D");
        assert_eq!(state_tag(24, 256), "X");
        assert_eq!(state_tag(25, 256), "pA");
        assert_eq!(state_tag(49, 256), "qA");
        assert_eq!(state_tag(255, 256), "yO");
    }

    #[test]
    fn test_rle() {
        let rule: RuleConfig = "R1,C2,M0,S2-3,B3,NM".parse().unwrap();
        let mut grid = Grid::new(5);
        for col in 1..4 {
            grid[(2, col)] = 1;
        }
        let board = Board::with_cells(rule, grid).unwrap();
        assert_eq!(
            board.rle(),
            "x = 5, y = 5, rule = R1,C2,M0,S2-3,B3,NM\n2$b3o!\n"
        );
    }

    #[test]
    fn test_rle_multistate() {
        let rule: RuleConfig = "R1,C4,M0,S2,B9,NM".parse().unwrap();
        let grid = Grid::from_rows(&[vec![1, 1, 1, 0], vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap();
        let mut board = Board::with_cells(rule, grid).unwrap();
        board.step();
        assert_eq!(
            board.rle(),
            "x = 4, y = 4, rule = R1,C4,M0,S2,B9,NM\nBAB!\n"
        );
    }

    #[test]
    fn test_rle_empty() {
        let rule: RuleConfig = "R1,C2,M0,S2-3,B3,NM".parse().unwrap();
        let board = Board::with_cells(rule, Grid::new(3)).unwrap();
        assert_eq!(board.rle(), "x = 3, y = 3, rule = R1,C2,M0,S2-3,B3,NM\n!\n");
    }

    #[test]
    fn test_rle_line_wrap() {
        let rule: RuleConfig = "R1,C2,M0,S2-3,B3,NM".parse().unwrap();
        let mut grid = Grid::new(200);
        for col in (0..200).step_by(2) {
            grid[(0, col)] = 1;
        }
        let board = Board::with_cells(rule, grid).unwrap();
        let rle = board.rle();
        let body: Vec<&str> = rle.lines().skip(1).collect();
        assert!(body.len() > 1);
        assert!(body.iter().all(|line| line.len() <= MAX_LINE_LEN));
        assert_eq!(body.concat(), format!("{}o!", "ob".repeat(99)));
    }
}
