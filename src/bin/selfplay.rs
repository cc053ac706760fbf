//! Let two minimax bots play a game against each other, printing every position.
//!
//! Usage: `selfplay [depth] [seconds per move] [move limit]`, without a time limit each move gets 20 seconds.
use std::time::Duration;

use itertools::Itertools;
use tablut::ai::minimax::{find_move, SearchLimits, DEFAULT_DEPTH, DEFAULT_TIME_BUDGET};
use tablut::board::Board;
use tablut::game::TablutBoard;
use tablut::heuristic::tablut::MaterialHeuristic;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let depth = parse_arg(&args, 0, "depth").unwrap_or(DEFAULT_DEPTH);
    let seconds = parse_arg::<u64>(&args, 1, "seconds per move");
    let move_limit = parse_arg::<u32>(&args, 2, "move limit");

    let time = seconds.map_or(DEFAULT_TIME_BUDGET, Duration::from_secs);
    let limits = SearchLimits::depth(depth).with_time(time);

    let mut board = TablutBoard::default();
    if let Some(move_limit) = move_limit {
        if let Err(e) = board.set_move_limit(move_limit) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    println!("{}", board);

    while !board.is_done() {
        let side = board.turn();
        let result = match find_move(&board, &MaterialHeuristic, limits) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

        println!(
            "{} plays {} (value {}, depth {}, {} nodes)",
            side, result.best_move, result.value, result.depth, result.nodes
        );
        let captures = board.make_move(result.best_move);
        if !captures.is_empty() {
            println!("  captured {}", captures.squares().join(", "));
        }
        println!("{}", board);
    }

    // SAFETY: the loop only stops once the game is done
    let winner = board.winner().unwrap();
    if board.repeated_position() {
        println!("{} wins by repetition after {} moves", winner, board.move_count());
    } else {
        println!("{} wins after {} moves", winner, board.move_count());
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> Option<T> {
    let arg = args.get(index)?;
    match arg.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Invalid {} '{}'", name, arg);
            std::process::exit(1);
        }
    }
}
