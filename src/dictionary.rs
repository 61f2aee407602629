use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use log::info;
use serde_json::Value;

pub fn read_board(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("couldn't read board file {}", path.display()))
}

/// Candidate words from `path`. `.json` files hold either an array of words or
/// an object keyed by word (a frequency list, say); anything else is one word
/// per line.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("couldn't open dictionary file {}", path.display()))?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        let value: Value = serde_json::from_reader(reader)
            .with_context(|| format!("couldn't parse {} as json", path.display()))?;
        words_from_json(value)?
    } else {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.with_context(|| format!("couldn't read {}", path.display()))?;
            let word = line.trim_end_matches('\r');
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        words
    };
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn words_from_json(value: Value) -> Result<Vec<String>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(word) => Ok(word),
                other => bail!("expected a word, found {}", other),
            })
            .collect(),
        Value::Object(map) => Ok(map.into_iter().map(|(word, _)| word).sorted().collect()),
        other => bail!("expected an array or object of words, found {}", other),
    }
}
