use super::color::Color;
use super::coordinate::*;
use super::piece::Piece;
use super::square::Square;
use super::Board;
use crate::chess_move::Move;
use crate::chess_position;

#[test]
fn test_starting_position_layout() {
    let board = Board::starting_position();
    assert_eq!(Square::Occupied(Piece::Rook, Color::Black), board.get(A8));
    assert_eq!(Square::Occupied(Piece::King, Color::Black), board.get(E8));
    assert_eq!(Square::Occupied(Piece::Pawn, Color::Black), board.get(D7));
    assert_eq!(Square::Empty, board.get(E4));
    assert_eq!(Square::Occupied(Piece::Pawn, Color::White), board.get(E2));
    assert_eq!(Square::Occupied(Piece::Queen, Color::White), board.get(D1));
    assert_eq!(Color::White, board.turn());
    assert!(board.move_log().is_empty());
}

#[test]
fn test_chess_position_macro_matches_starting_position() {
    let board = chess_position! {
        rnbqkbnr
        pppppppp
        ........
        ........
        ........
        ........
        PPPPPPPP
        RNBQKBNR
    };
    assert_eq!(
        format!("{}", Board::starting_position()),
        format!("{}", board)
    );
}

#[test]
fn test_apply_move_bookkeeping() {
    let mut board = Board::starting_position();
    let chess_move = Move::new(E2, E4, &board);

    board.apply_move(chess_move);

    assert_eq!(Square::Empty, board.get(E2));
    assert_eq!(Square::Occupied(Piece::Pawn, Color::White), board.get(E4));
    assert_eq!(Color::Black, board.turn());
    assert_eq!(1, board.move_log().len());
    assert_eq!(Some(&chess_move), board.last_move());
}

#[test]
fn test_undo_move_bookkeeping() {
    let mut board = Board::starting_position();
    let chess_move = Move::new(E2, E4, &board);
    board.apply_move(chess_move);

    let undone = board.undo_move();

    assert_eq!(Some(chess_move), undone);
    assert_eq!(Square::Occupied(Piece::Pawn, Color::White), board.get(E2));
    assert_eq!(Square::Empty, board.get(E4));
    assert_eq!(Color::White, board.turn());
    assert!(board.move_log().is_empty());
}

#[test]
fn test_undo_on_empty_log_is_a_noop() {
    let mut board = Board::starting_position();
    let before = format!("{}", board);

    assert_eq!(None, board.undo_move());
    assert_eq!(before, format!("{}", board));
    assert_eq!(Color::White, board.turn());
}

#[test]
fn test_capture_round_trip() {
    let mut board = chess_position! {
        ........
        ........
        ........
        ........
        .p......
        ........
        N.......
        ........
    };
    let before = format!("{}", board);

    let capture = Move::new(A2, B4, &board);
    board.apply_move(capture);
    assert_eq!(Square::Occupied(Piece::Knight, Color::White), board.get(B4));
    assert_eq!(Square::Empty, board.get(A2));

    board.undo_move();
    assert_eq!(Square::Occupied(Piece::Knight, Color::White), board.get(A2));
    assert_eq!(Square::Occupied(Piece::Pawn, Color::Black), board.get(B4));
    assert_eq!(before, format!("{}", board));
}

#[test]
fn test_round_trip_over_a_sequence_of_moves() {
    let mut board = Board::starting_position();
    let initial = format!("{}", board);

    // a queen's gambit accepted line, including a capture
    let line = [(D2, D4), (D7, D5), (C2, C4), (D5, C4), (E2, E4), (E7, E5)];

    for &(start, end) in line.iter() {
        let chess_move = Move::new(start, end, &board);
        board.apply_move(chess_move);
    }
    assert_eq!(line.len(), board.move_log().len());

    for _ in 0..line.len() {
        assert!(board.undo_move().is_some());
    }

    assert_eq!(initial, format!("{}", board));
    assert_eq!(Color::White, board.turn());
    assert!(board.move_log().is_empty());
}

#[test]
fn test_put_rejects_occupied_square() {
    let mut board = Board::starting_position();
    assert!(board.put(E2, Piece::Queen, Color::White).is_err());
    assert_eq!(Square::Occupied(Piece::Pawn, Color::White), board.get(E2));
}

#[test]
fn test_valid_moves_tracks_side_to_move() {
    let mut board = Board::starting_position();
    let white_moves = board.valid_moves();
    assert!(!white_moves.is_empty());

    let first = white_moves[0];
    board.apply_move(first);

    // every move offered now belongs to Black
    for chess_move in board.valid_moves().iter() {
        assert!(chess_move.moved_piece().is_color(Color::Black));
    }
}
