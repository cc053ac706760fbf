#![allow(clippy::assertions_on_constants)]

use std::time::Instant;

use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tablut::ai::minimax::{find_move, SearchLimits};
use tablut::game::TablutBoard;
use tablut::heuristic::tablut::MaterialHeuristic;
use tablut::util::board_gen::random_board_with_moves;
use tablut::util::game_stats::perft;

fn main() {
    bench("perft_3", || {
        perft(&TablutBoard::default(), 3);
    });

    bench("search_start_depth_3", || {
        find_move(&TablutBoard::default(), &MaterialHeuristic, SearchLimits::depth(3)).unwrap();
    });

    bench("search_midgame_depth_3", || {
        let board = random_board_with_moves(&TablutBoard::default(), 20, &mut SmallRng::from_entropy());
        // the random game may already be decided, nothing to search then
        let _ = find_move(&board, &MaterialHeuristic, SearchLimits::depth(3));
    });
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut()) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    let mut timings = vec![];

    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        f();
        timings.push(start.elapsed());
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        timings.remove(timings.iter().position_min().unwrap());
        timings.remove(timings.iter().position_max().unwrap());
    }

    let timings = timings.iter().map(|d| d.as_secs_f32() * 1000.0).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!("  {:.2}ms\t +- {:.2}ms", mean, stddev);
}
