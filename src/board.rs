use std::{fmt, str::FromStr, sync::Arc};

use log::{debug, error};

use crate::{
    error::BoardError,
    grid::Grid,
    path_state::PathState,
    point::Point,
    prefix_cache::{CacheStats, PrefixCache},
};

/// A boggle board that answers whether words can be traced on it.
///
/// Every `exists` call memoizes the placements of the prefixes it looks at,
/// so checking a dictionary in sorted order gets cheaper as it goes. The
/// cache is never evicted; use `clear_cache` to drop it.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Arc<Grid>,
    cache: PrefixCache,
}

impl Board {
    pub fn new(board_text: &str) -> Result<Board, BoardError> {
        Ok(Board::from_grid(Arc::new(Grid::parse(board_text)?)))
    }

    pub fn from_grid(grid: Arc<Grid>) -> Board {
        Board {
            grid,
            cache: PrefixCache::new(),
        }
    }

    /// A board over the same letters with its own, empty cache.
    pub fn fork(&self) -> Board {
        Board::from_grid(Arc::clone(&self.grid))
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    pub fn side_length(&self) -> usize {
        self.grid.side_length()
    }

    pub fn index_of(&self, point: Point) -> usize {
        self.grid.index_of(point)
    }

    pub fn point_of(&self, index: usize) -> Point {
        self.grid.point_of(index)
    }

    pub fn letter(&self, point: Point) -> Result<char, BoardError> {
        self.grid.letter(point)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cached_prefixes(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// True if `word` can be spelled by a path of adjacent cells that uses
    /// no cell twice.
    pub fn exists(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if word.chars().any(|letter| !self.grid.contains_letter(letter)) {
            return false;
        }
        match self.search(word) {
            Ok(found) => found,
            Err(err) => {
                error!("Search for {:?} left the board: {}", word, err);
                false
            }
        }
    }

    fn search(&mut self, word: &str) -> Result<bool, BoardError> {
        let letters: Vec<char> = word.chars().collect();
        let prefix_ends: Vec<usize> = word
            .char_indices()
            .map(|(index, letter)| index + letter.len_utf8())
            .collect();

        let cached_len = match self.cache.longest_cached_prefix(word, &prefix_ends) {
            Some(len) => len,
            None => {
                self.seed(letters[0])?;
                1
            }
        };
        if self.cache.is_dead_end(&word[..prefix_ends[cached_len - 1]]) {
            return Ok(false);
        }
        if cached_len == letters.len() {
            return Ok(true);
        }

        for len in cached_len + 1..=letters.len() {
            let previous = &word[..prefix_ends[len - 2]];
            let states = self.extend(previous, letters[len - 1])?;
            let dead_end = states.is_empty();
            self.cache
                .record(word[..prefix_ends[len - 1]].to_string(), states);
            if dead_end {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn seed(&mut self, letter: char) -> Result<(), BoardError> {
        let side_length = self.grid.side_length();
        let states = self
            .grid
            .cells_with(letter)
            .map(|index| PathState::start(self.grid.point_of(index), side_length))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Seeding {:?} with {} starting cells", letter, states.len());
        self.cache.seed(letter.to_string(), states);
        Ok(())
    }

    /// Every way of appending a `letter` cell to a placement of `previous`.
    fn extend(&self, previous: &str, letter: char) -> Result<Vec<PathState>, BoardError> {
        let mut states = Vec::new();
        let Some(previous_states) = self.cache.states(previous) else {
            return Ok(states);
        };
        for state in previous_states {
            for index in self.grid.cells_with(letter) {
                if state.is_visited(index) {
                    continue;
                }
                let point = self.grid.point_of(index);
                if !state.last_cell().adjacent(&point) {
                    continue;
                }
                states.push(state.extended(point)?);
            }
        }
        Ok(states)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::new(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
