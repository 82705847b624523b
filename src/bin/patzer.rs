// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented front-end for playing a game of `patzer` chess in a
//! terminal. Each typed square acts like a click on a board widget:
//! the first selects a piece, the second attempts the move.

use std::io::{self, BufRead};

use patzer::core::{MoveOutcome, Square};
use patzer::Game;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_env("PATZER_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    run().expect("fatal error while running game loop");
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let locked_stdin = stdin.lock();
    let mut game = Game::new();
    println!("{}", game.board());

    for maybe_line in locked_stdin.lines() {
        let line = maybe_line?;
        let components: Vec<_> = line.split_whitespace().collect();
        match components.as_slice() {
            [] => continue,
            ["quit"] => break,
            ["reset"] => {
                game.reset();
                println!("{}", game.board());
            }
            ["moves", square] => match square.parse::<Square>() {
                Ok(square) => {
                    for dest in game.legal_moves_from(square) {
                        println!("{}", dest);
                    }
                }
                Err(e) => println!("bad square: {}", e),
            },
            [square] => match square.parse::<Square>() {
                Ok(square) => handle_square(&mut game, square),
                Err(e) => println!("bad square: {}", e),
            },
            _ => println!("unrecognized command: {}", line),
        }
    }

    Ok(())
}

fn handle_square(game: &mut Game, square: Square) {
    match game.select_or_move(square) {
        MoveOutcome::Applied => {
            println!("{}", game.board());
            let side = game.side_to_move();
            if game.is_checkmate(side) {
                println!("checkmate! {} wins", side.toggle());
            } else if game.in_check(side) {
                println!("{} is in check!", side);
            } else {
                println!("{} to move", side);
            }
        }
        MoveOutcome::Rejected => match game.selected_square() {
            Some(selected) => println!("selected {}", selected),
            None => println!("nothing selected"),
        },
    }
}
