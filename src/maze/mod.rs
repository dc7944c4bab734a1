//! Maze model and text parser
//!
//! - [`cell`]: [`CellCode`] and the [`Walls`] flags it packs
//! - [`parse`]: text → [`Maze`] or [`ParseError`]
//!
//! A [`Maze`] is always rectangular and non-empty. The only ways to build one
//! are [`parse_maze`] and [`Maze::from_rows`], and neither hands out a partial
//! grid on failure.

pub mod cell;
pub mod parse;

pub use cell::{CellCode, Walls, MAX_CELL_VALUE};
pub use parse::{parse_maze, ParseError, ParseErrorKind, ParseOutcome};

/// A rectangular, non-empty grid of cell codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: Vec<Vec<CellCode>>,
}

impl Maze {
    /// Build a maze from rows, enforcing the same shape rules as the parser
    pub fn from_rows(rows: Vec<Vec<CellCode>>) -> Result<Self, ParseError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ParseError::new(ParseErrorKind::EmptyMaze, None)),
        };

        if let Some(index) = rows.iter().position(|row| row.len() != width) {
            return Err(ParseError::new(ParseErrorKind::RaggedRows, Some(index + 1)));
        }

        Ok(Maze { rows })
    }

    /// Caller guarantees the rows are rectangular and non-empty
    pub(crate) fn new_unchecked(rows: Vec<Vec<CellCode>>) -> Self {
        debug_assert!(!rows.is_empty() && !rows[0].is_empty());
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        Maze { rows }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in every row
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn row(&self, row: usize) -> Option<&[CellCode]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellCode> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Every cell in row-major order, with its position
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellCode)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, code)| (row, col, *code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[u8]) -> Vec<CellCode> {
        values.iter().map(|v| CellCode::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(
            Maze::from_rows(vec![]).unwrap_err().kind,
            ParseErrorKind::EmptyMaze
        );
        assert_eq!(
            Maze::from_rows(vec![vec![]]).unwrap_err().kind,
            ParseErrorKind::EmptyMaze
        );
        assert_eq!(
            Maze::from_rows(vec![codes(&[1, 2]), codes(&[3])]).unwrap_err().kind,
            ParseErrorKind::RaggedRows
        );
    }

    #[test]
    fn test_cells_are_row_major() {
        let maze = Maze::from_rows(vec![codes(&[1, 2]), codes(&[3, 4])]).unwrap();
        let order: Vec<(usize, usize, u8)> = maze
            .cells()
            .map(|(r, c, code)| (r, c, code.value()))
            .collect();
        assert_eq!(order, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
        assert_eq!(maze.get(2, 0), None);
        assert_eq!(maze.row(1).map(<[CellCode]>::len), Some(2));
    }
}
