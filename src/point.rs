use std::fmt;

/// A cell coordinate on the board. `(0, 0)` is the top left corner and
/// `(N - 1, N - 1)` the bottom right one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// King-move adjacency. A cell is never adjacent to itself.
    pub fn adjacent(&self, other: &Point) -> bool {
        let delta_x = self.x.abs_diff(other.x);
        let delta_y = self.y.abs_diff(other.y);
        (delta_x != 0 || delta_y != 0) && delta_x <= 1 && delta_y <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
