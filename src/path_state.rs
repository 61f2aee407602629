use crate::{error::BoardError, point::Point};

/// One way of tracing a prefix on the board: which cells it used and where it
/// ended. Extending a state clones it, so sibling branches never share cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathState {
    side_length: usize,
    last_cell: Point,
    visited: Vec<bool>,
    visited_count: usize,
}

impl PathState {
    /// A path consisting of the single cell `start`.
    pub fn start(start: Point, side_length: usize) -> Result<PathState, BoardError> {
        let mut state = PathState {
            side_length,
            last_cell: start,
            visited: vec![false; side_length * side_length],
            visited_count: 0,
        };
        state.visit(start)?;
        Ok(state)
    }

    pub fn visit(&mut self, point: Point) -> Result<(), BoardError> {
        if point.x >= self.side_length || point.y >= self.side_length {
            return Err(BoardError::OutOfBounds {
                point,
                side_length: self.side_length,
            });
        }
        let index = point.x + point.y * self.side_length;
        if !self.visited[index] {
            self.visited[index] = true;
            self.visited_count += 1;
        }
        self.last_cell = point;
        Ok(())
    }

    /// A copy of this path with `point` appended.
    pub fn extended(&self, point: Point) -> Result<PathState, BoardError> {
        let mut next = self.clone();
        next.visit(point)?;
        Ok(next)
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn last_cell(&self) -> Point {
        self.last_cell
    }

    pub fn visited_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, visited)| **visited)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::PathState;
    use crate::{error::BoardError, point::Point};

    #[test]
    fn path_state_start_visits_one_cell() {
        let state = PathState::start(Point::new(1, 2), 3).unwrap();
        assert_eq!(state.visited_count(), 1);
        assert_eq!(state.last_cell(), Point::new(1, 2));
        assert!(state.is_visited(7));
        assert!(!state.is_visited(0));
        assert_eq!(state.visited_indices().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn path_state_extended_copies_instead_of_mutating() {
        let state = PathState::start(Point::new(0, 0), 3).unwrap();
        let next = state.extended(Point::new(1, 1)).unwrap();
        assert_eq!(state.visited_count(), 1);
        assert_eq!(state.last_cell(), Point::new(0, 0));
        assert!(!state.is_visited(4));
        assert_eq!(next.visited_count(), 2);
        assert_eq!(next.last_cell(), Point::new(1, 1));
        assert!(next.is_visited(0));
        assert!(next.is_visited(4));
    }

    #[test]
    fn path_state_visit_off_board_fails() {
        let mut state = PathState::start(Point::new(0, 0), 2).unwrap();
        assert_eq!(
            state.visit(Point::new(2, 0)),
            Err(BoardError::OutOfBounds {
                point: Point::new(2, 0),
                side_length: 2
            })
        );
        assert!(PathState::start(Point::new(0, 5), 2).is_err());
        assert_eq!(state.visited_count(), 1);
    }

    #[test]
    fn path_state_is_visited_past_end_is_false() {
        let state = PathState::start(Point::new(0, 0), 1).unwrap();
        assert!(!state.is_visited(1));
    }
}
