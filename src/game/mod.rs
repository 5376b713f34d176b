//! Game engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::event::EventLog;
use crate::options::GameOptions;
use crate::player::Player;
use crate::questions::QuestionBank;

mod board;
mod penalty;
mod roster;
pub mod state;
mod turn;

pub use state::{RollOutcome, TurnPhase};

/// A trivia game engine that manages the table, the board and the turn flow.
///
/// The game owns every player record, the question bank and the event sink.
/// Dice values and answer outcomes are always supplied by the caller; a turn
/// is one [`roll_dice`](Self::roll_dice), one of
/// [`was_correctly_answered`](Self::was_correctly_answered) or
/// [`wrong_answer`](Self::wrong_answer), then [`next_player`](Self::next_player)
/// unless the answer won the game.
#[derive(Debug, Clone)]
pub struct Game<S = EventLog> {
    /// Game options.
    options: GameOptions,
    /// Seated players in seating order.
    players: Vec<Player>,
    /// Seat index of the player whose turn it is.
    current: usize,
    /// Parity verdict of the last roll, read by the following answer.
    is_getting_out_of_penalty_box: bool,
    /// Remaining questions.
    questions: QuestionBank,
    /// Where the current turn stands.
    phase: TurnPhase,
    /// First seat to reach the winning purse.
    winner: Option<usize>,
    /// Receiver of game events.
    sink: S,
}

impl Game {
    /// Creates a new game that records its events in an [`EventLog`].
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert_eq!(game.player_count(), 0);
    /// assert!(game.sink().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self::with_sink(options, EventLog::new())
    }
}

impl<S> Game<S> {
    /// Creates a new game that reports its events to `sink`.
    #[must_use]
    pub fn with_sink(options: GameOptions, sink: S) -> Self {
        tracing::debug!(
            max_players = options.max_players,
            board_size = options.board_size,
            questions = options.questions_per_category,
            "new game"
        );

        Self {
            options,
            players: Vec::new(),
            current: 0,
            is_getting_out_of_penalty_box: false,
            questions: QuestionBank::new(options.questions_per_category),
            phase: TurnPhase::AwaitingRoll,
            winner: None,
            sink,
        }
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns all seated players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seat index of the player whose turn it is.
    pub const fn current_seat(&self) -> usize {
        self.current
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` before anyone has joined.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Returns where the current turn stands.
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the seat of the first player to reach the winning purse.
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns whether the last roll was odd, i.e. would free a player from
    /// the penalty box.
    pub const fn is_getting_out_of_penalty_box(&self) -> bool {
        self.is_getting_out_of_penalty_box
    }

    /// Returns the remaining question supply.
    pub const fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    /// Returns the event sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably, e.g. to drain an [`EventLog`].
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the game and returns its event sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn name_of(&self, seat: usize) -> String {
        self.players
            .get(seat)
            .map(|player| String::from(player.name()))
            .unwrap_or_default()
    }

    /// Moves the turn to `phase`. A won game stays won.
    fn set_phase(&mut self, phase: TurnPhase) {
        if self.phase != TurnPhase::Won {
            self.phase = phase;
        }
    }
}
