/// Words shorter than this aren't playable, though they are still looked up.
pub const MIN_REPORTED_WORD_LEN: usize = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";
