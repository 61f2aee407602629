use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::board::Board;

/// Checks every word against `board`, in order, and returns the ones that
/// can be traced and have at least `min_len` letters. Shorter words are still
/// looked up since they prime the cache for the longer words sharing them.
pub fn solve<S: AsRef<str>>(board: &mut Board, words: &[S], min_len: usize) -> Vec<String> {
    let start = Instant::now();
    let found: Vec<String> = words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| board.exists(word) && word.chars().count() >= min_len)
        .map(str::to_string)
        .collect();
    let stats = board.cache_stats();
    info!(
        "Found {} of {} words in {:?}",
        found.len(),
        words.len(),
        start.elapsed()
    );
    debug!(
        "Cache: {} prefixes, {} hits over {} lookups, {} dead ends",
        board.cached_prefixes(),
        stats.hits,
        stats.lookups,
        stats.dead_ends
    );
    found
}

/// Same result as `solve`, computed on the rayon pool. The word list is cut
/// into contiguous chunks so words sharing a prefix tend to land on the same
/// worker, and every chunk gets a private board forked from `board`.
pub fn par_solve<S: AsRef<str> + Sync>(board: &Board, words: &[S], min_len: usize) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }
    let start = Instant::now();
    let chunk_size = words.len().div_ceil(rayon::current_num_threads() * 4).max(1);
    let found: Vec<String> = words
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut worker_board = board.fork();
            solve(&mut worker_board, chunk, min_len)
        })
        .collect::<Vec<_>>()
        .concat();
    info!(
        "Found {} of {} words in {:?} across {} chunks",
        found.len(),
        words.len(),
        start.elapsed(),
        words.len().div_ceil(chunk_size)
    );
    found
}
