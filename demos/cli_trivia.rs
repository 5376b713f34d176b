//! CLI trivia example: three players play a seeded game to the end.
//!
//! Pass a seed as the first argument to replay a specific game.

use std::time::{SystemTime, UNIX_EPOCH};

use trivrs::{Game, GameOptions, Simulation};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Trivia CLI example (seed {seed})");

    let mut game = Game::new(GameOptions::default());
    game.add_player("Chet");
    game.add_player("Pat");
    game.add_player("Sue");

    let mut sim = Simulation::new(seed);
    let result = loop {
        match sim.play_turn(&mut game) {
            Ok(won) => {
                for event in game.sink_mut().drain() {
                    println!("{event}");
                }
                if won {
                    break Ok(game.current_seat());
                }
            }
            Err(err) => break Err(err),
        }
    };

    match result {
        Ok(seat) => {
            if let Some(winner) = game.player(seat) {
                println!("{} wins with {} Gold Coins.", winner.name(), winner.purse());
            }
        }
        Err(err) => println!("Game aborted: {err}"),
    }
}
