extern crate alloc;

use alloc::string::String;

use crate::event::{EventSink, GameEvent};
use crate::player::Player;

use super::{Game, TurnPhase};

impl<S: EventSink> Game<S> {
    /// Seats a new player at the end of the table.
    ///
    /// The player starts on place 0 with an empty purse, outside the penalty
    /// box. Returns `false` and changes nothing if every seat is taken.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default().with_max_players(1));
    /// assert!(game.add_player("Ann"));
    /// assert!(!game.add_player("Bo"));
    /// assert_eq!(game.player_count(), 1);
    /// ```
    pub fn add_player(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();

        if self.players.len() >= self.options.max_players {
            tracing::debug!(%name, max = self.options.max_players, "table is full");
            self.sink.emit(GameEvent::TableFull { name });
            return false;
        }

        let seat = self.players.len();
        self.players.push(Player::new(name.clone()));
        tracing::debug!(seat, %name, "player seated");

        let count = self.players.len();
        self.sink.emit(GameEvent::PlayerAdded { seat, name });
        self.sink.emit(GameEvent::PlayerCount { count });

        true
    }

    /// Returns whether enough players are seated to roll the dice.
    ///
    /// A configured minimum below 1 is treated as 1.
    pub fn is_playable(&self) -> bool {
        self.players.len() >= self.options.min_players.max(1)
    }

    /// Passes the turn to the next seat, wrapping after the last one.
    ///
    /// Does nothing while the table is empty.
    pub fn next_player(&mut self) {
        if self.players.is_empty() {
            return;
        }

        self.current = (self.current + 1) % self.players.len();
        self.set_phase(TurnPhase::AwaitingRoll);
        tracing::trace!(seat = self.current, "turn passed");
    }
}
