//! Seeded self-play driver.
//!
//! The engine never rolls dice or decides answers. [`Simulation`] plays that
//! external role: it rolls a six-sided die, answers wrongly about one time in
//! ten, and passes the turn unless the answer won. Two simulations built from
//! the same seed drive a game through exactly the same events.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RollError;
use crate::event::EventSink;
use crate::game::Game;

/// Summary of a finished [`Simulation::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Number of turns played.
    pub turns: usize,
    /// Seat of the winning player, or `None` if the turn limit was hit or the
    /// game was not playable.
    pub winner: Option<usize>,
}

/// A seeded driver that plays a [`Game`] to the end.
#[derive(Debug, Clone)]
pub struct Simulation {
    rng: ChaCha8Rng,
    wrong_answer_odds: u32,
    max_turns: usize,
}

impl Simulation {
    /// Creates a driver with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::{Game, GameOptions, Simulation};
    ///
    /// let mut game = Game::new(GameOptions::default());
    /// game.add_player("Chet");
    /// game.add_player("Pat");
    ///
    /// let report = Simulation::new(7).run(&mut game).unwrap();
    /// assert!(report.winner.is_some());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            wrong_answer_odds: 10,
            max_turns: 10_000,
        }
    }

    /// Sets the odds of a wrong answer to one in `odds`.
    ///
    /// A value of 0 is treated as 1, i.e. every answer is wrong.
    #[must_use]
    pub const fn with_wrong_answer_odds(mut self, odds: u32) -> Self {
        self.wrong_answer_odds = odds;
        self
    }

    /// Sets the number of turns after which [`run`](Self::run) gives up.
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Rolls a six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }

    fn answers_wrong(&mut self) -> bool {
        self.rng.random_ratio(1, self.wrong_answer_odds.max(1))
    }

    /// Plays one turn: roll, answer, then pass the turn unless the answer won.
    ///
    /// Returns `true` if the game was won on this turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the roll ran out of questions.
    pub fn play_turn<S: EventSink>(&mut self, game: &mut Game<S>) -> Result<bool, RollError> {
        let value = self.roll_die();
        game.roll_dice(value)?;

        let won = if self.answers_wrong() {
            game.wrong_answer()
        } else {
            game.was_correctly_answered()
        };

        if !won {
            game.next_player();
        }

        Ok(won)
    }

    /// Plays turns until someone wins or the turn limit is reached.
    ///
    /// Returns at once, without rolling, if the game is not playable.
    ///
    /// # Errors
    ///
    /// Returns an error if a roll ran out of questions.
    pub fn run<S: EventSink>(&mut self, game: &mut Game<S>) -> Result<SimulationReport, RollError> {
        let mut report = SimulationReport {
            turns: 0,
            winner: None,
        };

        if !game.is_playable() {
            tracing::debug!("simulation skipped: game is not playable");
            return Ok(report);
        }

        while report.turns < self.max_turns {
            report.turns += 1;
            if self.play_turn(game)? {
                report.winner = Some(game.current_seat());
                break;
            }
        }

        tracing::debug!(turns = report.turns, winner = ?report.winner, "simulation finished");
        Ok(report)
    }
}
