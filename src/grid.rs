use std::fmt;

use hashbrown::HashSet;
use itertools::Itertools;
use log::debug;

use crate::{error::BoardError, point::Point};

/// The immutable part of a board: an N x N square of letters stored row-major,
/// plus the set of distinct letters on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    side_length: usize,
    letters: HashSet<char>,
}

impl Grid {
    /// Builds a grid from newline separated rows of letters. The whole text is
    /// trimmed first; every row must then be as long as there are rows.
    pub fn parse(board_text: &str) -> Result<Grid, BoardError> {
        let rows: Vec<Vec<char>> = board_text
            .trim()
            .split('\n')
            .map(|row| row.trim_end_matches('\r').chars().collect())
            .collect();

        let row_length = rows.last().map_or(0, |row| row.len());
        if let Some((index, row)) = rows.iter().find_position(|row| row.len() != row_length) {
            return Err(BoardError::Format(format!(
                "row {} has {} letters, expected {}",
                index,
                row.len(),
                row_length
            )));
        }
        if rows.len() != row_length {
            return Err(BoardError::Format(format!(
                "{} rows of {} letters is not a square board",
                rows.len(),
                row_length
            )));
        }

        let cells: Vec<char> = rows.into_iter().flatten().collect();
        let letters: HashSet<char> = cells.iter().copied().collect();
        debug!(
            "Parsed {}x{} board with {} distinct letters",
            row_length,
            row_length,
            letters.len()
        );
        Ok(Grid {
            cells,
            side_length: row_length,
            letters,
        })
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn index_of(&self, point: Point) -> usize {
        point.x + point.y * self.side_length
    }

    pub fn point_of(&self, index: usize) -> Point {
        Point::new(index % self.side_length, index / self.side_length)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x < self.side_length && point.y < self.side_length
    }

    pub fn letter(&self, point: Point) -> Result<char, BoardError> {
        if !self.in_bounds(point) {
            return Err(BoardError::OutOfBounds {
                point,
                side_length: self.side_length,
            });
        }
        Ok(self.cells[self.index_of(point)])
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn letters(&self) -> &HashSet<char> {
        &self.letters
    }

    /// Indices of every cell holding `letter`, in row-major order.
    pub fn cells_with(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == letter)
            .map(|(index, _)| index)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side_length) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::{error::BoardError, point::Point};

    const GEEKS: &str = "GIZ\nUEK\nGES";

    #[test]
    fn grid_parse_square_board() {
        let grid = Grid::parse(GEEKS).unwrap();
        assert_eq!(grid.side_length(), 3);
        assert_eq!(grid.num_cells(), 9);
        assert_eq!(grid.letters().len(), 7);
        assert!(grid.contains_letter('K'));
        assert!(!grid.contains_letter('Q'));
    }

    #[test]
    fn grid_parse_trims_surrounding_whitespace() {
        let grid = Grid::parse("\n\n  AB\nCD\n\n").unwrap();
        assert_eq!(grid.side_length(), 2);
        assert_eq!(grid.letter(Point::new(0, 0)).unwrap(), 'A');
        assert_eq!(grid.letter(Point::new(1, 1)).unwrap(), 'D');
    }

    #[test]
    fn grid_parse_accepts_crlf_rows() {
        let grid = Grid::parse("AB\r\nCD\r\n").unwrap();
        assert_eq!(grid.side_length(), 2);
        assert_eq!(grid.letter(Point::new(1, 0)).unwrap(), 'B');
    }

    #[test]
    fn grid_parse_inconsistent_rows_fails() {
        assert!(matches!(Grid::parse("AB\nC"), Err(BoardError::Format(_))));
        assert!(matches!(Grid::parse("A\nBC"), Err(BoardError::Format(_))));
    }

    #[test]
    fn grid_parse_rectangle_fails() {
        assert!(matches!(Grid::parse("ABC\nDEF"), Err(BoardError::Format(_))));
        assert!(matches!(Grid::parse("ABCD"), Err(BoardError::Format(_))));
    }

    #[test]
    fn grid_parse_empty_fails() {
        assert!(matches!(Grid::parse(""), Err(BoardError::Format(_))));
        assert!(matches!(Grid::parse(" \n \n"), Err(BoardError::Format(_))));
    }

    #[test]
    fn grid_parse_single_letter() {
        let grid = Grid::parse("X").unwrap();
        assert_eq!(grid.side_length(), 1);
        assert_eq!(grid.letter(Point::new(0, 0)).unwrap(), 'X');
    }

    #[test]
    fn grid_index_point_round_trip() {
        let grid = Grid::parse("ABCD\nEFGH\nIJKL\nMNOP").unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let p = Point::new(x, y);
                assert_eq!(grid.point_of(grid.index_of(p)), p);
            }
        }
        for i in 0..grid.num_cells() {
            assert_eq!(grid.index_of(grid.point_of(i)), i);
        }
    }

    #[test]
    fn grid_letter_is_row_major() {
        let grid = Grid::parse(GEEKS).unwrap();
        assert_eq!(grid.letter(Point::new(2, 0)).unwrap(), 'Z');
        assert_eq!(grid.letter(Point::new(0, 1)).unwrap(), 'U');
        assert_eq!(grid.letter(Point::new(2, 2)).unwrap(), 'S');
    }

    #[test]
    fn grid_letter_out_of_bounds() {
        let grid = Grid::parse(GEEKS).unwrap();
        assert_eq!(
            grid.letter(Point::new(3, 0)),
            Err(BoardError::OutOfBounds {
                point: Point::new(3, 0),
                side_length: 3
            })
        );
        assert!(grid.letter(Point::new(0, 3)).is_err());
        assert!(grid.letter(Point::new(7, 9)).is_err());
    }

    #[test]
    fn grid_cells_with_letter() {
        let grid = Grid::parse(GEEKS).unwrap();
        assert_eq!(grid.cells_with('E').collect::<Vec<_>>(), vec![4, 7]);
        assert_eq!(grid.cells_with('G').collect::<Vec<_>>(), vec![0, 6]);
        assert_eq!(grid.cells_with('Q').count(), 0);
    }

    #[test]
    fn grid_display() {
        let grid = Grid::parse("AB\nCD").unwrap();
        assert_eq!(grid.to_string(), "A B\nC D\n\n");
    }
}
