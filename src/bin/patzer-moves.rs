use anyhow::Context;
use serde::Serialize;
use structopt::StructOpt;

use patzer::core::{Color, PieceKind, Square};
use patzer::Game;

/// Prints every legal destination for the piece on a given square.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to analyze.
    #[structopt(name = "FEN")]
    fen: String,
    /// The square holding the piece, e.g. "e2".
    #[structopt(name = "SQUARE")]
    square: String,
    /// Emit a JSON object instead of one move per line.
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct MoveReport {
    square: String,
    piece: Option<PieceReport>,
    moves: Vec<String>,
}

#[derive(Serialize)]
struct PieceReport {
    color: Color,
    kind: PieceKind,
}

fn main() -> anyhow::Result<()> {
    let ops = Options::from_args();
    let game = Game::from_fen(&ops.fen).context("invalid FEN")?;
    let square: Square = ops.square.parse().context("invalid square")?;
    let moves = game.legal_moves_from(square);

    if ops.json {
        let report = MoveReport {
            square: square.to_string(),
            piece: game.board().piece_at(square).map(|piece| PieceReport {
                color: piece.color,
                kind: piece.kind,
            }),
            moves: moves.iter().map(Square::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for mov in moves {
            println!("{}", mov);
        }
    }

    Ok(())
}
