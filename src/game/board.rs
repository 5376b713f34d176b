use crate::category::Category;
use crate::event::{EventSink, GameEvent};

use super::Game;

impl<S> Game<S> {
    /// Returns the category asked on the place the player stands on.
    ///
    /// Returns `None` if the seat is empty.
    pub fn category_for(&self, seat: usize) -> Option<Category> {
        self.players
            .get(seat)
            .map(|player| Category::from_position(player.position()))
    }

    /// Returns whether the player's purse equals the winning purse.
    pub fn has_won(&self, seat: usize) -> bool {
        self.players
            .get(seat)
            .is_some_and(|player| player.purse() == self.options.winning_purse)
    }
}

impl<S: EventSink> Game<S> {
    /// Moves the player `steps` places around the board and returns the new
    /// place.
    pub(super) fn move_player(&mut self, seat: usize, steps: u8) -> usize {
        let places = self.options.places();
        let Some(player) = self.players.get_mut(seat) else {
            return 0;
        };

        let from = player.position();
        let position = player.advance(steps, places);
        tracing::trace!(seat, from, to = position, "moved");

        let name = self.name_of(seat);
        self.sink.emit(GameEvent::Moved { seat, name, position });

        position
    }

    /// Gives the player one gold coin.
    pub(super) fn reward(&mut self, seat: usize) {
        let Some(player) = self.players.get_mut(seat) else {
            return;
        };

        let purse = player.add_coin();
        tracing::trace!(seat, purse, "coin awarded");

        let name = self.name_of(seat);
        self.sink.emit(GameEvent::PurseUpdated { seat, name, purse });
    }
}
