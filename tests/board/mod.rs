use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

use internal_iterator::InternalIterator;

use tablut::board::{Board, BoardDone, BoardMoves, PlayError, UndoBoard};
use tablut::game::{Move, TablutBoard};
use tablut::util::tiny::consistent_rng;

use crate::util::test_sampler_uniform;


pub fn board_test_main(board: &TablutBoard) {
    let all = Move::all().collect::<Vec<_>>();
    board_test_main_impl(board, &all, true)
}

pub fn board_test_main_without_uniform(board: &TablutBoard) {
    let all = Move::all().collect::<Vec<_>>();
    board_test_main_impl(board, &all, false)
}

fn board_test_main_impl<B: UndoBoard>(board: &B, all: &[B::Move], random_uniform: bool)
where
    B::Move: Hash,
{
    println!("Currently testing board\n{:?}\n{}", board, board);

    if board.is_done() {
        test_done_board_errors(board, all);
    } else {
        test_available_match(board, all);
        test_play_undo(board);

        if random_uniform {
            test_random_available_uniform(board);
        }
    }
}

fn test_done_board_errors<B: Board>(board: &B, all: &[B::Move]) {
    assert!(board.is_done(), "bug in test implementation, expected done board");

    assert!(matches!(board.available_moves(), Err(BoardDone)));
    assert!(matches!(
        board.random_available_move(&mut consistent_rng()),
        Err(BoardDone)
    ));

    for &mv in all {
        assert!(matches!(board.clone().play(mv), Err(PlayError::BoardDone)));
        assert!(matches!(board.is_available_move(mv), Err(BoardDone)));
    }
}

fn test_available_match<B: Board>(board: &B, all: &[B::Move])
where
    B::Move: Hash,
{
    println!("available_moves and is_available match:");

    let available: Vec<B::Move> = board.available_moves().unwrap().collect();
    let available_count = board.available_moves().unwrap().count();
    assert_eq!(available.len(), available_count, "available_moves count mismatch");

    assert!(
        !available.is_empty(),
        "must have at least one available move for non-done board"
    );

    // check that every generated move is indeed available, and that it is contained within all possible moves
    for &mv in &available {
        assert!(
            board.is_available_move(mv).unwrap(),
            "generated move {:?} is not available",
            mv
        );
        assert!(all.contains(&mv), "generated move {:?} is not in all possible moves", mv);
    }

    // check that every available move is generated
    for &mv in all {
        if board.is_available_move(mv).unwrap() {
            assert!(available.contains(&mv), "available move {:?} was not generated", mv);
        } else {
            assert!(!available.contains(&mv), "non-available move {:?} was generated", mv);
            assert!(
                matches!(board.clone().play(mv), Err(PlayError::UnavailableMove)),
                "playing non-available move {:?} did not fail",
                mv
            );
        }
    }

    assert_eq!(
        available.len(),
        HashSet::<_, RandomState>::from_iter(&available).len(),
        "Found duplicate move"
    );
}

/// Play every available move and undo it again, the board has to end up exactly where it started.
fn test_play_undo<B: UndoBoard>(board: &B) {
    println!("play and undo:");

    let mut curr = board.clone();
    let available: Vec<B::Move> = board.available_moves().unwrap().collect();

    for mv in available {
        curr.play(mv).unwrap();
        assert_ne!(&curr, board, "playing {} did not change the board", mv);
        curr.undo();
        assert_eq!(&curr, board, "undoing {} did not restore the board", mv);
    }
}

fn test_random_available_uniform<B: Board>(board: &B)
where
    B::Move: Hash,
{
    assert!(!board.is_done(), "invalid board to test");

    println!("random_available uniform:");

    let expected: Vec<_> = board.available_moves().unwrap().collect();
    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, false, || Some(board.random_available_move(&mut rng).unwrap()));
}

pub fn print_board_with_moves(start: TablutBoard, moves: &[&str]) -> TablutBoard {
    let mut board = start;
    println!("{}", board);

    for &mv in moves {
        println!("Playing {}", mv);
        board.play(mv.parse().unwrap()).unwrap();
        println!("{}", board);
    }

    board
}
