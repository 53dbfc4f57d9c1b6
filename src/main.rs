//! Minimax chess: engine-vs-engine self-play demo.
//!
//! ## Usage
//!
//! - `minimax-chess` - Play 20 half-moves at depth 3
//! - `minimax-chess --plies 60 --depth 2 --seed 7` - Reproducible longer game
//! - `minimax-chess --verbose` - Also print search logs to stderr (`RUST_LOG` overrides)

use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_chess::board::SearchConfig;
use minimax_chess::engine::{Game, GameStatus};

/// Minimax chess: fixed-depth minimax engine playing itself
#[derive(Parser)]
#[command(name = "minimax-chess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of half-moves to play
    #[arg(long, default_value_t = 20)]
    plies: u32,
    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,
    /// Seed for the tie-break between equal moves
    #[arg(long)]
    seed: Option<u64>,
    /// Print search logs to stderr
    #[arg(long)]
    verbose: bool,
}

/// Default log level before `RUST_LOG` is applied.
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the level picked from --verbose.
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = SearchConfig::with_depth(cli.depth);
    let mut game = Game::new();

    println!("{}\n", game.board());
    for ply in 1..=cli.plies {
        let side = game.side_to_move();
        match game.engine_move(&config, &mut rng) {
            Some(mv) => println!("{ply:>3}. {side}: {mv}"),
            None => break,
        }
    }
    println!("\n{}\n", game.board());

    match game.status() {
        GameStatus::Ongoing => println!("Game continues, {} to move", game.side_to_move()),
        GameStatus::Checkmate { winner } => println!("Checkmate, {winner} wins"),
        GameStatus::Stalemate => println!("Stalemate"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_search_logs() {
        let cli = Cli::try_parse_from(["minimax-chess", "--verbose", "--depth", "2"]).unwrap();
        assert_eq!(log_level(cli.verbose), LevelFilter::Debug);
        assert!(log_level(cli.verbose) >= log::Level::Debug);
        assert_eq!(cli.depth, 2);
    }

    #[test]
    fn test_quiet_by_default() {
        let cli = Cli::try_parse_from(["minimax-chess"]).unwrap();
        assert_eq!(log_level(cli.verbose), LevelFilter::Warn);
        assert!(log_level(cli.verbose) < log::Level::Debug);
        assert_eq!((cli.plies, cli.depth, cli.seed), (20, 3, None));
    }
}
