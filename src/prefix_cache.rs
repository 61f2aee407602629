use hashbrown::HashMap;
use log::trace;

use crate::path_state::PathState;

/// Counters describing how much work the cache saved or did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Words that reached the cache lookup (passed the letter check).
    pub lookups: usize,
    /// Lookups that found some prefix already memoized.
    pub hits: usize,
    /// Single letter prefixes primed from a full board scan.
    pub seeds: usize,
    /// Prefixes computed by extending a shorter cached prefix.
    pub derived_prefixes: usize,
    /// Prefixes recorded with no states.
    pub dead_ends: usize,
}

/// Memoized placements keyed by prefix. An empty entry is a definitive
/// negative for the prefix and everything starting with it. Entries are
/// never evicted.
#[derive(Clone, Debug, Default)]
pub struct PrefixCache {
    entries: HashMap<String, Vec<PathState>>,
    stats: CacheStats,
}

impl PrefixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `prefix_ends[k - 1]` is the byte offset where the `k` letter prefix of
    /// `word` ends. Returns the letter count of the longest cached prefix.
    pub fn longest_cached_prefix(&mut self, word: &str, prefix_ends: &[usize]) -> Option<usize> {
        self.stats.lookups += 1;
        let found = (1..=prefix_ends.len())
            .rev()
            .find(|len| self.entries.contains_key(&word[..prefix_ends[len - 1]]));
        if found.is_some() {
            self.stats.hits += 1;
        }
        found
    }

    pub fn states(&self, prefix: &str) -> Option<&[PathState]> {
        self.entries.get(prefix).map(|states| states.as_slice())
    }

    pub fn is_dead_end(&self, prefix: &str) -> bool {
        self.states(prefix).map_or(false, |states| states.is_empty())
    }

    pub fn seed(&mut self, prefix: String, states: Vec<PathState>) {
        self.stats.seeds += 1;
        self.insert(prefix, states);
    }

    pub fn record(&mut self, prefix: String, states: Vec<PathState>) {
        self.stats.derived_prefixes += 1;
        self.insert(prefix, states);
    }

    fn insert(&mut self, prefix: String, states: Vec<PathState>) {
        if states.is_empty() {
            trace!("Dead end at prefix {:?}", prefix);
            self.stats.dead_ends += 1;
        } else {
            trace!("Prefix {:?} has {} placements", prefix, states.len());
        }
        self.entries.insert(prefix, states);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
