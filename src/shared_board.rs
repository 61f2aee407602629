use std::sync::Arc;

use parking_lot::Mutex;

use crate::{board::Board, prefix_cache::CacheStats};

/// A board that several threads can query at once. Every lookup holds the
/// lock for its whole duration, so cache entries are never written twice.
#[derive(Clone)]
pub struct SharedBoard {
    board: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        SharedBoard {
            board: Arc::new(Mutex::new(board)),
        }
    }

    pub fn exists(&self, word: &str) -> bool {
        self.board.lock().exists(word)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.board.lock().cache_stats()
    }

    /// A private, unshared board over the same grid.
    pub fn fork(&self) -> Board {
        self.board.lock().fork()
    }
}
