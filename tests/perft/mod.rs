use std::time::Instant;

use tablut::board::Board;
use tablut::game::TablutBoard;
use tablut::util::game_stats;

pub fn perft_main(cases: Vec<(Vec<&str>, Vec<u64>)>) {
    let total_start = Instant::now();

    for (moves, expected_perfts) in cases {
        let mut board = TablutBoard::default();
        for mv in &moves {
            board.play(mv.parse().unwrap()).unwrap();
        }
        println!("After {:?}", moves);
        println!("{}", board);

        for (depth, &expected_perft) in expected_perfts.iter().enumerate() {
            let curr_start = Instant::now();
            let perft = game_stats::perft(&board, depth as u32);
            println!(
                "   depth {} -> {} =? {}, took {:?}",
                depth,
                expected_perft,
                perft,
                curr_start.elapsed(),
            );
            assert_eq!(expected_perft, perft)
        }
    }

    println!("Total: took {:?}", total_start.elapsed());
}

#[test]
fn tablut_perft() {
    perft_main(vec![
        (vec![], vec![1, 80, 4400, 353200]),
        (vec!["d1-3", "d5-7", "e1-c", "e5-d"], vec![1, 88, 4296, 374395]),
    ]);
}

/// The starting position is still in the history here, so the lines that return to it end the game early.
#[test]
fn tablut_perft_with_history() {
    perft_main(vec![(vec!["d1-3", "d5-7", "d3-1"], vec![1, 57, 4431])]);
}

#[test]
#[ignore]
fn tablut_perft_deep() {
    perft_main(vec![(vec![], vec![1, 80, 4400, 353200, 19913864])]);
}
