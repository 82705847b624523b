// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game state machine: turn order, click-driven piece selection,
//! legal-move enumeration, and check/checkmate detection.
//!
//! A front-end drives play by feeding every clicked (or typed) square to
//! [`Game::select_or_move`]; the game selects, re-selects, or moves
//! according to what the square holds, and the front-end re-reads the
//! board to redraw.

use crate::board::{Board, FenParseError};
use crate::core::{self, Color, MoveOutcome, Square};
use crate::rules;

/// A chess game in progress: a board, the color whose turn it is, and
/// the transient selection state driven by `select_or_move`.
///
/// The selection, when present, always names a cell holding a piece of
/// the active color.
pub struct Game {
    board: Board,
    to_move: Color,
    selected: Option<Square>,
}

impl Game {
    /// A fresh game: standard starting position, White to move, nothing
    /// selected.
    pub fn new() -> Game {
        Game {
            board: Board::standard(),
            to_move: Color::White,
            selected: None,
        }
    }

    /// Builds a game from a FEN string, for driving arbitrary positions
    /// from tests and tools. Nothing is selected initially.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<Game, FenParseError> {
        let (board, to_move) = Board::from_fen(fen)?;
        Ok(Game {
            board,
            to_move,
            selected: None,
        })
    }

    /// Read access to the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.to_move
    }

    pub fn is_piece_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Handles one square activation, the single entry point a front-end
    /// calls per click.
    ///
    /// With nothing selected, clicking a piece of the active color
    /// selects it; any other square is ignored. With a selection held, a
    /// legal destination applies the move, flips the turn, and clears
    /// the selection; an illegal destination either re-selects (if the
    /// square holds another active-color piece) or clears the selection.
    ///
    /// Returns `Applied` exactly when a move was made on the board.
    pub fn select_or_move(&mut self, square: Square) -> MoveOutcome {
        let origin = match self.selected {
            Some(origin) => origin,
            None => {
                if self.holds_active_piece(square) {
                    tracing::trace!(square = %square, "piece selected");
                    self.selected = Some(square);
                }
                return MoveOutcome::Rejected;
            }
        };

        let outcome = self.board.move_piece(origin, square);
        match outcome {
            MoveOutcome::Applied => {
                tracing::debug!(from = %origin, to = %square, side = %self.to_move, "move applied");
                self.to_move = self.to_move.toggle();
                self.selected = None;
            }
            MoveOutcome::Rejected => {
                tracing::trace!(from = %origin, to = %square, "move rejected");
                self.selected = if self.holds_active_piece(square) {
                    Some(square)
                } else {
                    None
                };
            }
        }
        outcome
    }

    /// Every destination the piece at `square` may legally move to; an
    /// empty vector if the square is empty.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Square> {
        let piece = match self.board.piece_at(square) {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        core::squares()
            .filter(|&to| rules::is_legal_move(piece, square, to, &self.board))
            .collect()
    }

    /// Whether the given color's king is attacked: some enemy piece has
    /// a legal move onto the king's square. False if the king is absent.
    pub fn in_check(&self, color: Color) -> bool {
        board_in_check(&self.board, color)
    }

    /// Whether the given color is checkmated: in check, and every legal
    /// move of every one of its pieces still leaves it in check. Each
    /// candidate move is simulated on a discarded copy of the board; the
    /// live board is never touched.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.in_check(color) {
            return false;
        }

        for from in core::squares() {
            let piece = match self.board.piece_at(from) {
                Some(piece) if piece.color == color => piece,
                _ => continue,
            };
            for to in core::squares() {
                if !rules::is_legal_move(piece, from, to, &self.board) {
                    continue;
                }

                let mut trial = self.board.clone();
                trial.set_piece(to, Some(piece));
                trial.set_piece(from, None);
                if !board_in_check(&trial, color) {
                    return false;
                }
            }
        }

        true
    }

    /// Discards all game state and starts over from the standard
    /// position, White to move.
    pub fn reset(&mut self) {
        tracing::debug!("game reset");
        *self = Game::new();
    }

    fn holds_active_piece(&self, square: Square) -> bool {
        matches!(
            self.board.piece_at(square),
            Some(piece) if piece.color == self.to_move
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn board_in_check(board: &Board, color: Color) -> bool {
    let king = match board.king_square(color) {
        Some(square) => square,
        None => return false,
    };

    core::squares().any(|from| {
        matches!(
            board.piece_at(from),
            Some(piece) if piece.color != color && rules::is_legal_move(piece, from, king, board)
        )
    })
}
