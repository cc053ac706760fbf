use tablut::ai::minimax::{MiniMaxBot, SearchLimits};
use tablut::ai::simple::RandomBot;
use tablut::board::Side;
use tablut::game::TablutBoard;
use tablut::heuristic::tablut::MaterialHeuristic;
use tablut::util::bot_game;
use tablut::util::tiny::consistent_rng;

#[test]
fn minimax_against_random() {
    let start = || {
        let mut board = TablutBoard::default();
        board.set_move_limit(50).unwrap();
        board
    };

    let result = bot_game::run(
        start,
        || MiniMaxBot::new(SearchLimits::depth(1), MaterialHeuristic),
        || RandomBot::new(consistent_rng()),
        2,
        true,
        |wins, replay| println!("{:?} after {} moves", wins, replay.moves.len()),
    );
    println!("{:?}", result);

    assert_eq!(result.game_count(), 4);
    assert_eq!(result.replays.len(), 4);
    assert_eq!(result.wins.total(), 4);
    assert!(result.replays.iter().all(|r| r.moves.len() <= 101));
    assert!(result.average_game_length() <= 101.0);
    assert_eq!(result.attacker_wins, result.replays.iter().filter(|r| r.winner == Side::Attacker).count() as u32);
}
