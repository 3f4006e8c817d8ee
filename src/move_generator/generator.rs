//! Pseudo-legal move generation.
//!
//! The generator scans the grid in row-major order and dispatches by piece
//! type for every square occupied by the side to move. Output order is
//! deterministic: fixed scan order, fixed per-piece ray and offset order.
//!
//! Moves are pseudo-legal only: geometry and occupancy are respected, but no
//! check is made that the resulting position keeps the mover's king safe.

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::coordinate::Coordinate;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::Move;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[Move; 32]>;

const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates all pseudo-legal moves for the side to move on a given board.
#[derive(Clone)]
pub struct MoveGenerator;

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_moves(&self, board: &Board) -> ChessMoveList {
        let player = board.turn();
        let mut moves = ChessMoveList::new();

        for row in 0..8u8 {
            for col in 0..8u8 {
                let coord = Coordinate::new(row, col);
                let (piece, color) = match board.get(coord).piece() {
                    Some(occupant) => occupant,
                    None => continue,
                };
                // the occupant's color must equal the side to move
                if color != player {
                    continue;
                }
                match piece {
                    Piece::Pawn => generate_pawn_moves(board, coord, color, &mut moves),
                    Piece::Knight => {
                        generate_step_moves(board, coord, color, &KNIGHT_OFFSETS, &mut moves)
                    }
                    Piece::Bishop => {
                        generate_sliding_moves(board, coord, color, &BISHOP_RAYS, &mut moves)
                    }
                    Piece::Rook => {
                        generate_sliding_moves(board, coord, color, &ROOK_RAYS, &mut moves)
                    }
                    Piece::Queen => {
                        generate_sliding_moves(board, coord, color, &ROOK_RAYS, &mut moves);
                        generate_sliding_moves(board, coord, color, &BISHOP_RAYS, &mut moves);
                    }
                    Piece::King => {
                        generate_step_moves(board, coord, color, &KING_OFFSETS, &mut moves)
                    }
                }
            }
        }

        moves
    }
}

/// Pawns advance one square toward the opposing back rank if it is empty,
/// two squares from their home rank if both squares are empty, and capture
/// one square diagonally forward.
fn generate_pawn_moves(board: &Board, coord: Coordinate, color: Color, moves: &mut ChessMoveList) {
    let (forward, home_row): (i8, u8) = match color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    if let Some(one_ahead) = coord.offset(forward, 0) {
        if board.get(one_ahead).is_empty() {
            moves.push(Move::new(coord, one_ahead, board));
            if coord.row() == home_row {
                if let Some(two_ahead) = coord.offset(2 * forward, 0) {
                    if board.get(two_ahead).is_empty() {
                        moves.push(Move::new(coord, two_ahead, board));
                    }
                }
            }
        }
    }

    for &capture_col in [-1, 1].iter() {
        if let Some(target) = coord.offset(forward, capture_col) {
            if board.get(target).is_color(color.opposite()) {
                moves.push(Move::new(coord, target, board));
            }
        }
    }
}

/// Single-step movers (knight, king): each offset is a destination iff it is
/// on the board and not occupied by a friendly piece.
fn generate_step_moves(
    board: &Board,
    coord: Coordinate,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut ChessMoveList,
) {
    for &(row_delta, col_delta) in offsets {
        if let Some(target) = coord.offset(row_delta, col_delta) {
            if !board.get(target).is_color(color) {
                moves.push(Move::new(coord, target, board));
            }
        }
    }
}

/// Sliders (rook, bishop, queen): walk each ray square by square, adding a
/// move per empty square; a friendly piece stops the ray, an enemy piece
/// adds one capture and then stops it.
fn generate_sliding_moves(
    board: &Board,
    coord: Coordinate,
    color: Color,
    rays: &[(i8, i8)],
    moves: &mut ChessMoveList,
) {
    for &(row_delta, col_delta) in rays {
        let mut current = coord;
        while let Some(target) = current.offset(row_delta, col_delta) {
            let occupant = board.get(target);
            if occupant.is_empty() {
                moves.push(Move::new(coord, target, board));
                current = target;
                continue;
            }
            if occupant.is_color(color.opposite()) {
                moves.push(Move::new(coord, target, board));
            }
            break;
        }
    }
}
