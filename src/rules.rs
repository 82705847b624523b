// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Piece-local move legality: the per-piece geometric and capture rules,
//! including path clearance for sliding pieces.
//!
//! Legality here is *piece-local*: a move that satisfies its piece's rule
//! is legal even if it leaves the mover's own king attacked. Callers that
//! care about king safety (checkmate detection does) simulate the move
//! and re-test for check afterwards.

use crate::board::Board;
use crate::core::{Color, Piece, PieceKind, Square};

/// Decides whether moving `piece` from `from` to `to` is legal on the
/// given board, for that piece's rule in isolation.
pub fn is_legal_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }

    // No piece may land on a friendly occupant.
    if let Some(occupant) = board.piece_at(to) {
        if occupant.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(piece.color, from, to, board),
        PieceKind::Knight => knight_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(from, to, board),
        PieceKind::Rook => rook_move_is_legal(from, to, board),
        PieceKind::Queen => {
            rook_move_is_legal(from, to, board) || bishop_move_is_legal(from, to, board)
        }
        PieceKind::King => king_move_is_legal(from, to),
    }
}

fn pawn_move_is_legal(us: Color, from: Square, to: Square, board: &Board) -> bool {
    let forward: i8 = match us {
        Color::White => -1,
        Color::Black => 1,
    };
    let row_diff = (to.row() as i8 - from.row() as i8) * forward;
    let col_diff = to.col() as i8 - from.col() as i8;

    // Single push onto an empty square.
    if col_diff == 0 && row_diff == 1 {
        return board.piece_at(to).is_none();
    }

    // Double push from the starting rank; both the midway square and the
    // target must be empty.
    let start_row = match us {
        Color::White => 6,
        Color::Black => 1,
    };
    if col_diff == 0 && row_diff == 2 && from.row() == start_row {
        let midway = match from.offset(forward, 0) {
            Some(sq) => sq,
            None => return false,
        };
        return board.piece_at(midway).is_none() && board.piece_at(to).is_none();
    }

    // Diagonal forward, capture only. An empty diagonal is not a pawn
    // move.
    if col_diff.abs() == 1 && row_diff == 1 {
        return matches!(board.piece_at(to), Some(occupant) if occupant.color != us);
    }

    false
}

fn knight_move_is_legal(from: Square, to: Square) -> bool {
    // Knights jump; intervening squares are irrelevant.
    matches!(deltas(from, to), (1, 2) | (2, 1))
}

fn bishop_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    let (row_dist, col_dist) = deltas(from, to);
    row_dist == col_dist && path_is_clear(from, to, board)
}

fn rook_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && path_is_clear(from, to, board)
}

fn king_move_is_legal(from: Square, to: Square) -> bool {
    let (row_dist, col_dist) = deltas(from, to);
    row_dist <= 1 && col_dist <= 1
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        (to.row() as i8 - from.row() as i8).abs(),
        (to.col() as i8 - from.col() as i8).abs(),
    )
}

/// Walks every square strictly between `from` and `to` along the rank,
/// file, or diagonal joining them, and reports whether all are empty.
/// Only meaningful when the two squares share a line; callers establish
/// that first.
fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    let row_step = (to.row() as i8 - from.row() as i8).signum();
    let col_step = (to.col() as i8 - from.col() as i8).signum();

    let mut sq = from;
    loop {
        sq = match sq.offset(row_step, col_step) {
            Some(next) => next,
            None => return false,
        };
        if sq == to {
            return true;
        }
        if board.piece_at(sq).is_some() {
            return false;
        }
    }
}
