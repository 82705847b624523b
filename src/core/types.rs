// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SquareParseError {
    #[error("row index out of range: {0}")]
    RowOutOfRange(u8),
    #[error("column index out of range: {0}")]
    ColOutOfRange(u8),
    #[error("invalid file char: {0}")]
    InvalidFile(char),
    #[error("invalid rank char: {0}")]
    InvalidRank(char),
    #[error("expected two chars, got: {0:?}")]
    BadLength(String),
}

#[derive(Debug, Error)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A square on the chessboard, addressed by row and column. Row 0 is
/// Black's back rank and row 7 is White's, so White moves toward lower
/// rows. A `Square` is in range by construction; raw indices enter
/// through `Square::new` or the `TryFrom` conversion and are validated
/// there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from raw indices, or `None` if either is out of
    /// the board's [0, 7] range.
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square displaced from this one by the given row and
    /// column deltas, or `None` if the step leaves the board.
    pub fn offset(self, row_delta: i8, col_delta: i8) -> Option<Square> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareParseError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareParseError::RowOutOfRange(row));
        }
        if col >= 8 {
            return Err(SquareParseError::ColOutOfRange(col));
        }

        Ok(Square { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parses algebraic notation, e.g. "e4". Files run a-h left to
    /// right; rank 1 is White's back rank, which is row 7 here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(SquareParseError::BadLength(s.to_string())),
        };

        let col = match file {
            'a'..='h' => file as u8 - b'a',
            c => return Err(SquareParseError::InvalidFile(c)),
        };
        let row = match rank {
            '1'..='8' => 7 - (rank as u8 - b'1'),
            c => return Err(SquareParseError::InvalidRank(c)),
        };

        Ok(Square { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// A piece: a color and a kind. A piece does not know where it stands;
/// the board's grid is the single source of truth for placement, so
/// there is no piece/grid agreement to maintain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    /// Parses a FEN piece letter: uppercase for White, lowercase for
    /// Black.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            c => return Err(PieceParseError::InvalidChar(c)),
        };
        let color = if value.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => write!(f, "{}", c.to_ascii_uppercase()),
            Color::Black => write!(f, "{}", c),
        }
    }
}

/// The result of a move attempt. An illegal move is a normal outcome
/// rather than an error: `Rejected` guarantees that no state changed.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    Rejected,
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Iterates every square on the board in row-major order, top row
/// (Black's back rank) first.
pub fn squares() -> impl Iterator<Item = Square> {
    (0..64u8).map(|index| Square {
        row: index / 8,
        col: index % 8,
    })
}

pub fn colors() -> impl Iterator<Item = Color> {
    [Color::White, Color::Black].into_iter()
}

pub fn piece_kinds() -> impl Iterator<Item = PieceKind> {
    [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ]
    .into_iter()
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    #[test]
    fn square_new_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn square_try_from_rejects_out_of_range() {
        assert!(Square::try_from((3, 4)).is_ok());
        assert!(matches!(
            Square::try_from((9, 0)),
            Err(SquareParseError::RowOutOfRange(9))
        ));
        assert!(matches!(
            Square::try_from((0, 12)),
            Err(SquareParseError::ColOutOfRange(12))
        ));
    }

    #[test]
    fn square_algebraic_round_trip() {
        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));

        let h1: Square = "h1".parse().unwrap();
        assert_eq!((h1.row(), h1.col()), (7, 7));

        let e4: Square = "e4".parse().unwrap();
        assert_eq!((e4.row(), e4.col()), (4, 4));

        for sq in squares() {
            let round_tripped: Square = sq.to_string().parse().unwrap();
            assert_eq!(sq, round_tripped);
        }
    }

    #[test]
    fn square_parse_rejects_garbage() {
        assert!("".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("i4".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
    }

    #[test]
    fn square_offset_stops_at_edges() {
        let a8 = Square::new(0, 0).unwrap();
        assert!(a8.offset(-1, 0).is_none());
        assert!(a8.offset(0, -1).is_none());
        assert_eq!(a8.offset(1, 1), Square::new(1, 1));
    }

    #[test]
    fn piece_char_round_trip() {
        for color in colors() {
            for kind in piece_kinds() {
                let piece = Piece { color, kind };
                let c = piece.to_string().chars().next().unwrap();
                assert_eq!(piece, Piece::try_from(c).unwrap());
            }
        }
    }

    #[test]
    fn piece_char_case_encodes_color() {
        let white_knight = Piece::try_from('N').unwrap();
        assert_eq!(white_knight.color, Color::White);
        assert_eq!(white_knight.kind, PieceKind::Knight);

        let black_knight = Piece::try_from('n').unwrap();
        assert_eq!(black_knight.color, Color::Black);
        assert_eq!(black_knight.kind, PieceKind::Knight);

        assert!(Piece::try_from('x').is_err());
    }
}
