use super::*;
use crate::isolation_position;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_board_places_both_players() {
    let board = IsolationBoard::new(7, 7, Move::new(0, 0), Move::new(6, 6)).unwrap();

    assert_eq!(Some(Cell::Occupied(Player::One)), board.get(Move::new(0, 0)));
    assert_eq!(Some(Cell::Occupied(Player::Two)), board.get(Move::new(6, 6)));
    assert_eq!(47, board.blank_cells().len());
    assert_eq!(Player::One, board.active_player());
    assert_eq!(0, board.move_count());
}

#[test]
fn test_new_board_rejects_shared_cell() {
    let result = IsolationBoard::new(7, 7, Move::new(3, 3), Move::new(3, 3));
    assert_eq!(
        Err(BoardError::CellNotEmptyError {
            cell: Move::new(3, 3)
        }),
        result
    );
}

#[test]
fn test_new_board_rejects_out_of_bounds_player() {
    let result = IsolationBoard::new(7, 7, Move::new(0, 0), Move::new(7, 0));
    assert!(matches!(result, Err(BoardError::OutOfBoundsError { .. })));
}

#[test]
fn test_legal_moves_follow_knight_order_and_skip_blocked_cells() {
    let board = isolation_position! {
        . . . . . . .
        . . # . . . .
        . . . . . . .
        . . . 1 . . .
        . . . . . # .
        . . . . . . .
        2 . . . . . .
    };

    let moves = board.legal_moves(Player::One);
    assert_eq!(
        vec![
            Move::new(1, 4),
            Move::new(2, 1),
            Move::new(2, 5),
            Move::new(4, 1),
            Move::new(5, 2),
            Move::new(5, 4),
        ],
        moves.to_vec()
    );
}

#[test]
fn test_players_block_each_other() {
    let board = isolation_position! {
        1 . .
        . . 2
        . . .
    };

    // (1, 2) holds player two, so only (2, 1) is reachable.
    assert_eq!(vec![Move::new(2, 1)], board.legal_moves(Player::One).to_vec());
}

#[test]
fn test_forecast_move_leaves_original_untouched() {
    let board = IsolationBoard::new(5, 5, Move::new(0, 0), Move::new(4, 4)).unwrap();
    let before = board.clone();

    let next = board.forecast_move(Move::new(1, 2)).unwrap();

    assert_eq!(before, board);
    assert_eq!(Some(Cell::Blocked), next.get(Move::new(0, 0)));
    assert_eq!(Some(Cell::Occupied(Player::One)), next.get(Move::new(1, 2)));
    assert_eq!(Move::new(1, 2), next.location(Player::One));
    assert_eq!(Player::Two, next.active_player());
    assert_eq!(1, next.move_count());
}

#[test]
fn test_forecast_illegal_move_is_an_error() {
    let board = IsolationBoard::new(5, 5, Move::new(0, 0), Move::new(4, 4)).unwrap();

    let result = board.forecast_move(Move::new(1, 1));

    assert_eq!(
        Err(BoardError::IllegalMoveError {
            mv: Move::new(1, 1),
            player: Player::One
        }),
        result
    );
}

#[test]
fn test_visited_cells_cannot_be_revisited() {
    let board = IsolationBoard::new(5, 5, Move::new(0, 0), Move::new(4, 4)).unwrap();
    let board = board.forecast_move(Move::new(1, 2)).unwrap();
    let board = board.forecast_move(Move::new(3, 2)).unwrap();

    assert!(!board.legal_moves(Player::One).contains(&Move::new(0, 0)));
    assert!(board.forecast_move(Move::new(0, 0)).is_err());
}

#[test]
fn test_winner_and_loser_when_active_player_is_stuck() {
    let board = isolation_position! {
        1 # #
        # # #
        # # 2
    }
    .with_active_player(Player::One);

    assert!(board.is_loser(Player::One));
    assert!(board.is_winner(Player::Two));
    assert!(!board.is_winner(Player::One));
    assert!(!board.is_loser(Player::Two));
}

#[test]
fn test_stuck_inactive_player_has_not_lost_yet() {
    let board = isolation_position! {
        1 . #
        # # #
        # # 2
    }
    .with_active_player(Player::Two);

    assert!(!board.is_loser(Player::One));
    assert!(!board.is_winner(Player::Two));
}

#[test]
fn test_encoding_round_trip() {
    let board = isolation_position! {
        . # . .
        1 . . .
        . . # 2
        . . . .
    }
    .with_active_player(Player::Two);

    let encoding = board.encoding();
    assert_eq!(Some(4), encoding.width);
    assert_eq!([4, 11], encoding.locations);
    assert_eq!(Player::Two, encoding.active_player);

    let rebuilt = IsolationBoard::from_encoding(&encoding).unwrap();
    assert_eq!(board, rebuilt);
}

#[test]
fn test_from_encoding_without_width_is_missing_geometry() {
    let mut encoding = IsolationBoard::new(3, 3, Move::new(0, 0), Move::new(2, 2))
        .unwrap()
        .encoding();
    encoding.width = None;

    assert_eq!(
        Err(BoardError::MissingGeometryError),
        IsolationBoard::from_encoding(&encoding)
    );
}

#[test]
fn test_from_encoding_rejects_mismatched_locations() {
    let mut encoding = IsolationBoard::new(3, 3, Move::new(0, 0), Move::new(2, 2))
        .unwrap()
        .encoding();
    encoding.locations = [1, 8];

    assert!(matches!(
        IsolationBoard::from_encoding(&encoding),
        Err(BoardError::InconsistentEncodingError { .. })
    ));
}

#[test]
fn test_from_cells_requires_both_players() {
    let cells = vec![Cell::Occupied(Player::One), Cell::Empty, Cell::Empty, Cell::Empty];
    assert!(IsolationBoard::from_cells(2, 2, &cells).is_err());
}

#[test]
fn test_notation_round_trip() {
    let notation = "1.#..../......./...#.../......./......./......./......2 2 7";
    let board: IsolationBoard = notation.parse().unwrap();

    assert_eq!(7, board.width());
    assert_eq!(7, board.height());
    assert_eq!(Player::Two, board.active_player());
    assert_eq!(7, board.move_count());
    assert_eq!(Move::new(6, 6), board.location(Player::Two));
    assert_eq!(notation, board.to_notation());
}

#[test]
fn test_notation_defaults_active_player_and_move_count() {
    let board: IsolationBoard = "1../.../..2".parse().unwrap();
    assert_eq!(Player::One, board.active_player());
    assert_eq!(0, board.move_count());
}

#[test]
fn test_notation_supports_rectangular_boards() {
    let board: IsolationBoard = "1..../....2 1 0".parse().unwrap();
    assert_eq!(5, board.width());
    assert_eq!(2, board.height());
}

#[test]
fn test_invalid_notation_is_rejected() {
    assert!("1../..x/..2".parse::<IsolationBoard>().is_err());
    assert!("1../../..2".parse::<IsolationBoard>().is_err());
    assert!("1../.../..2 3 0".parse::<IsolationBoard>().is_err());
    assert!("1../.../..2 1 -4".parse::<IsolationBoard>().is_err());
}

#[test]
fn test_random_board_is_reproducible_for_a_seed() {
    let board1 = IsolationBoard::random(7, 7, 5, &mut StdRng::seed_from_u64(42)).unwrap();
    let board2 = IsolationBoard::random(7, 7, 5, &mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(board1, board2);
    assert_eq!(49 - 2 - 5, board1.blank_cells().len());
    assert_ne!(board1.location(Player::One), board1.location(Player::Two));
}

#[test]
fn test_random_board_rejects_too_many_obstacles() {
    assert!(IsolationBoard::random(2, 2, 3, &mut StdRng::seed_from_u64(1)).is_err());
}

#[test]
fn test_display_renders_grid() {
    let board = isolation_position! {
        1 . #
        . . .
        . . 2
    };
    assert_eq!(
        "1 . #\n. . .\n. . 2\nplayer 1 to move, 0 moves played",
        board.to_string()
    );
}
