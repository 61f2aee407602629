use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use board::Board;
use dictionary::{load_words, read_board};
use globals::{DEFAULT_LOG_FILTER, MIN_REPORTED_WORD_LEN};
use solver::{par_solve, solve};

pub mod board;
pub mod dictionary;
pub mod error;
pub mod globals;
pub mod grid;
pub mod path_state;
pub mod point;
pub mod prefix_cache;
pub mod shared_board;
pub mod solver;

#[derive(Parser)]
#[command(name = "boggle", about = "Lists the dictionary words playable on a boggle board", version)]
struct Cli {
    /// File holding the board, one row of letters per line.
    board_file: PathBuf,

    /// Word list, one word per line, or a .json array/object of words.
    dictionary_file: PathBuf,

    #[arg(long, default_value_t = MIN_REPORTED_WORD_LEN)]
    min_len: usize,

    /// Check the dictionary on all cores, one cache per worker.
    #[arg(long)]
    parallel: bool,

    /// Print cache statistics to stderr when done.
    #[arg(long)]
    stats: bool,

    #[arg(long)]
    print_board: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let board_text = read_board(&cli.board_file)?;
    let mut board = Board::new(&board_text)
        .with_context(|| format!("malformed board in {}", cli.board_file.display()))?;
    let words = load_words(&cli.dictionary_file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.print_board {
        write!(out, "{}", board)?;
    }

    let found = if cli.parallel {
        par_solve(&board, &words, cli.min_len)
    } else {
        solve(&mut board, &words, cli.min_len)
    };
    for word in &found {
        writeln!(out, "{}", word)?;
    }
    writeln!(out)?;
    out.flush()?;

    if cli.stats && !cli.parallel {
        let stats = board.cache_stats();
        eprintln!(
            "{} prefixes cached, {} lookups, {} hits, {} seeds, {} derived, {} dead ends",
            board.cached_prefixes(),
            stats.lookups,
            stats.hits,
            stats.seeds,
            stats.derived_prefixes,
            stats.dead_ends
        );
    } else if cli.stats {
        eprintln!("{} words found; per-worker caches are discarded", found.len());
    }
    Ok(())
}
