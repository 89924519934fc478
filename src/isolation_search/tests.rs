//! End-to-end searches over real Isolation boards.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::alpha_beta_searcher::{
    alpha_beta, choose_move, minimax, BoardView, SearchContext, TimeBudget,
};
use crate::board::{IsolationBoard, Move, Player};
use crate::evaluate::EvaluatorKind;
use crate::isolation_position;

use super::*;

fn open_board() -> IsolationBoard {
    isolation_position! {
        . . . . . . .
        . # . . . . .
        . . . . . . .
        . . 1 . 2 . .
        . . . # . . .
        . . . . . # .
        # . . . . . .
    }
}

fn partitioned_board() -> IsolationBoard {
    isolation_position! {
        1 . # # # # #
        # # . # # # #
        # # . # . # #
        # # # # # # .
        # . # # # # #
        # # # # # . #
        2 # # . # # #
    }
}

fn describe<B: BoardView>(position: &B) -> (u8, u8, usize, Player, usize) {
    (
        position.width(),
        position.height(),
        position.cell_count(),
        position.active_player(),
        position.blank_cells().len(),
    )
}

#[test]
fn test_board_view_matches_board() {
    let board = open_board();
    assert_eq!((7, 7, 49, Player::One, 43), describe(&board));
    assert_eq!(
        board.legal_moves(Player::Two),
        BoardView::legal_moves(&board, Player::Two)
    );
    assert_eq!(
        board.forecast_move(Move::new(1, 3)),
        BoardView::forecast_move(&board, Move::new(1, 3))
    );
}

#[test]
fn test_alpha_beta_agrees_with_minimax_for_every_evaluator() {
    let board = open_board();

    for kind in EvaluatorKind::ALL {
        let evaluator = kind.build::<IsolationBoard>(None);
        for depth in 1..=3 {
            let full = minimax(&mut SearchContext::unlimited(), &board, depth, &evaluator).unwrap();
            let pruned = alpha_beta(
                &mut SearchContext::unlimited(),
                &board,
                depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                &evaluator,
            )
            .unwrap();
            assert_eq!(full, pruned, "{} at depth {}", kind, depth);
        }
    }
}

#[test]
fn test_search_best_move_finds_partition_win() {
    let board = partitioned_board();
    let mut context = SearchContext::new(TimeBudget::new(std::time::Duration::from_secs(5)));

    let best_move = search_best_move(&mut context, &board).unwrap();

    // The only legal move, and it keeps player one in the larger region.
    assert_eq!(Some(Move::new(1, 2)), best_move);
    assert_eq!(Some(f64::INFINITY), context.last_score());
    assert_eq!(1, context.completed_depth());
}

#[test]
fn test_choose_move_is_legal_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let board = IsolationBoard::random(6, 6, 8, &mut rng).unwrap();
        for kind in EvaluatorKind::ALL {
            let evaluator = kind.build::<IsolationBoard>(Some(5));
            let budget = TimeBudget::unlimited().with_poll_limit(2_000);
            let chosen = choose_move(&board, budget, &evaluator).unwrap();
            match chosen {
                Some(mv) => assert!(board.is_legal(mv), "{} is illegal in\n{}", mv, board),
                None => assert!(board.legal_moves(board.active_player()).is_empty()),
            }
        }
    }
}

#[test]
fn test_symmetric_root_dedupe_keeps_the_score() {
    // Player one in the centre, player two in a corner: the diagonal mirror
    // maps the position onto itself.
    let board = IsolationBoard::new(7, 7, Move::new(3, 3), Move::new(0, 0)).unwrap();
    let evaluator = EvaluatorKind::Mobility.build::<IsolationBoard>(None);

    let mut plain = SearchContext::unlimited();
    let full = alpha_beta(
        &mut plain,
        &board,
        2,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &evaluator,
    )
    .unwrap();

    let mut deduped = SearchContext::unlimited().with_symmetric_root_dedupe(true);
    let reduced = alpha_beta(
        &mut deduped,
        &board,
        2,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &evaluator,
    )
    .unwrap();

    assert_eq!(full.score, reduced.score);
    assert!(board.is_legal(reduced.best_move.unwrap()));
    assert!(deduped.searched_position_count() < plain.searched_position_count());
}
