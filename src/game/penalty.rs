use crate::event::{EventSink, GameEvent};
use crate::player::Player;

use super::Game;

impl<S> Game<S> {
    /// Returns whether a roll of `value` frees a player from the penalty box.
    ///
    /// Odd rolls escape, even rolls do not.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::Game;
    ///
    /// assert!(<Game>::escapes_penalty_box(3));
    /// assert!(!<Game>::escapes_penalty_box(4));
    /// ```
    #[must_use]
    pub const fn escapes_penalty_box(value: u8) -> bool {
        value % 2 != 0
    }

    /// Returns whether the player in `seat` is in the penalty box.
    pub fn is_in_penalty_box(&self, seat: usize) -> bool {
        self.players
            .get(seat)
            .is_some_and(Player::in_penalty_box)
    }

    pub(super) fn release_from_penalty_box(&mut self, seat: usize) {
        if let Some(player) = self.players.get_mut(seat) {
            player.set_in_penalty_box(false);
            tracing::trace!(seat, "released from penalty box");
        }
    }
}

impl<S: EventSink> Game<S> {
    /// Puts the player in the penalty box. Sending a player who is already
    /// there changes nothing but still reports it.
    pub(super) fn send_to_penalty_box(&mut self, seat: usize) {
        let Some(player) = self.players.get_mut(seat) else {
            return;
        };

        player.set_in_penalty_box(true);
        tracing::trace!(seat, "sent to penalty box");

        let name = self.name_of(seat);
        self.sink.emit(GameEvent::SentToPenaltyBox { seat, name });
    }
}
