use std::time::Duration;

use internal_iterator::InternalIterator;

use tablut::ai::minimax::{find_move, minimax_value, Heuristic, MiniMaxBot, SearchLimits};
use tablut::ai::Bot;
use tablut::board::{Board, BoardDone, BoardMoves, Side};
use tablut::game::{Move, Piece, TablutBoard};
use tablut::heuristic::tablut::{MaterialHeuristic, WIN_VALUE};
use tablut::util::board_gen::random_board_with_moves;
use tablut::util::tiny::consistent_rng;

fn layout(text: &str, turn: Side) -> TablutBoard {
    TablutBoard::from_layout(text, turn).unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Plain negamax without pruning, on fresh copies of the board.
fn naive_value(board: &TablutBoard, length: u32, depth: u32) -> i32 {
    if board.is_done() || depth == 0 {
        return MaterialHeuristic.value(board, length);
    }

    let moves: Vec<_> = board.available_moves().unwrap().collect();
    moves
        .into_iter()
        .map(|mv| {
            let mut child = board.snapshot();
            child.play(mv).unwrap();
            -naive_value(&child, length + 1, depth - 1)
        })
        .max()
        .unwrap()
}

#[test]
fn deterministic() {
    let board = TablutBoard::default();
    let limits = SearchLimits::depth(2);

    let first = find_move(&board, &MaterialHeuristic, limits).unwrap();
    let second = find_move(&board, &MaterialHeuristic, limits).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.depth, 2);
    assert!(board.is_available_move(first.best_move).unwrap());
}

#[test]
fn single_legal_move() {
    let board = layout(
        "
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - B - - - - - - -
        B - - - - - - - -
        W K B - - - - - -
        W W B - - - - - -
        ",
        Side::Defender,
    );
    let moves: Vec<_> = board.available_moves().unwrap().collect();
    assert_eq!(moves, vec![mv("b2-3")]);

    for depth in 1..=3 {
        let result = find_move(&board, &MaterialHeuristic, SearchLimits::depth(depth)).unwrap();
        assert_eq!(result.best_move, moves[0]);
    }
}

#[test]
fn defender_takes_immediate_escape() {
    let board = layout(
        "
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - K - - - - - -
        - - - - - - - - -
        - - - - - - - - B
        ",
        Side::Defender,
    );

    for depth in 1..=3 {
        let result = find_move(&board, &MaterialHeuristic, SearchLimits::depth(depth)).unwrap();
        println!("depth {}: {:?}", depth, result);

        let child = board.clone_and_play(result.best_move).unwrap();
        assert_eq!(child.winner(), Some(Side::Defender));
        assert_eq!(result.value, WIN_VALUE - 1);
    }
}

#[test]
fn attacker_takes_immediate_capture() {
    let board = layout(
        "
        - - - - - - - - -
        - - - - - - - - -
        - - B - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - - - - - - - -
        - - K - - - - - -
        - - B - - - - - -
        - - - - - - - - -
        ",
        Side::Attacker,
    );

    let result = find_move(&board, &MaterialHeuristic, SearchLimits::depth(3)).unwrap();
    assert_eq!(result.best_move, mv("c7-4"));
    assert_eq!(result.value, -(WIN_VALUE - 1));
}

#[test]
fn done_board_errors() {
    let mut board = TablutBoard::default();
    for mv in ["d1-3", "d5-7", "d3-1", "d7-5"] {
        board.play(mv.parse().unwrap()).unwrap();
    }
    assert!(board.is_done());

    assert_eq!(find_move(&board, &MaterialHeuristic, SearchLimits::default()), Err(BoardDone));
    // the attackers are to move and won, so this is a win from their POV
    assert_eq!(minimax_value(&board, &MaterialHeuristic, 3), WIN_VALUE);
}

#[test]
fn value_matches_minimax_value() {
    let board = TablutBoard::default();
    let result = find_move(&board, &MaterialHeuristic, SearchLimits::depth(2)).unwrap();

    // the attacker is to move, so the POV flips
    assert_eq!(result.value, -minimax_value(&board, &MaterialHeuristic, 2));
}

#[test]
fn alpha_beta_matches_plain_minimax() {
    let mut rng = consistent_rng();

    for _ in 0..4 {
        let board = random_board_with_moves(&TablutBoard::default(), 20, &mut rng);
        println!("{}", board);

        for depth in 0..=2 {
            assert_eq!(
                minimax_value(&board, &MaterialHeuristic, depth),
                naive_value(&board, 0, depth),
                "depth {}",
                depth
            );
        }
    }
}

#[test]
fn time_budget_stops_search() {
    let board = TablutBoard::default();
    let limits = SearchLimits::depth(10).with_time(Duration::from_millis(1));

    let result = find_move(&board, &MaterialHeuristic, limits).unwrap();
    println!("{:?}", result);

    assert!(result.depth >= 1 && result.depth < 10);
    assert!(board.is_available_move(result.best_move).unwrap());
    assert_eq!(board, TablutBoard::default());
    assert_eq!(board.undo_depth(), 0);
}

#[test]
fn search_keeps_history() {
    let mut board = TablutBoard::default();
    for mv in ["d1-3", "d5-7"] {
        board.play(mv.parse().unwrap()).unwrap();
    }

    let before = board.clone();
    find_move(&board, &MaterialHeuristic, SearchLimits::depth(3)).unwrap();
    assert_eq!(board, before);
    assert_eq!(board.undo_depth(), 2);
}

#[test]
fn bot_plays_available_moves() {
    let mut bot = MiniMaxBot::new(SearchLimits::depth(2), MaterialHeuristic);
    let mut board = TablutBoard::default();
    board.set_move_limit(10).unwrap();

    while !board.is_done() {
        let mv = bot.select_move(&board).unwrap();
        board.play(mv).unwrap();
    }

    assert_eq!(bot.select_move(&board), Err(BoardDone));
}

#[test]
fn no_pieces_to_move_is_terminal() {
    let mut board = TablutBoard::empty();
    board.put(Piece::King, "c3".parse().unwrap());
    board.clear_undo();
    assert_eq!(board.winner(), Some(Side::Defender));

    assert_eq!(find_move(&board, &MaterialHeuristic, SearchLimits::depth(2)), Err(BoardDone));
    assert_eq!(minimax_value(&board, &MaterialHeuristic, 2), -WIN_VALUE);
}

#[test]
fn search_without_moves_on_unchecked_board() {
    // removing pieces with put doesn't update the winner until clear_undo
    let mut board = TablutBoard::default();
    for square in board.piece_locations(Side::Attacker) {
        board.put(Piece::Empty, square);
    }
    assert_eq!(board.winner(), None);

    assert_eq!(find_move(&board, &MaterialHeuristic, SearchLimits::depth(2)), Err(BoardDone));
    assert_eq!(
        find_move(&board, &MaterialHeuristic, SearchLimits::depth(2).with_time(Duration::from_secs(1))),
        Err(BoardDone)
    );
    assert_eq!(minimax_value(&board, &MaterialHeuristic, 2), -9);
}
