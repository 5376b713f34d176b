//! Turn state types.

extern crate alloc;

use alloc::string::String;

use crate::category::Category;

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    AwaitingRoll,
    /// A roll happened and an answer is expected.
    AwaitingAnswer,
    /// A player reached the winning purse.
    Won,
}

/// What a dice roll did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// Not enough players are seated; nothing happened.
    NotPlayable,
    /// The player rolled even while in the penalty box and did not move.
    ///
    /// The turn does not advance by itself; the caller still answers and
    /// calls [`Game::next_player`](crate::Game::next_player) as usual.
    StayedInPenaltyBox,
    /// The player moved and was asked a question.
    Asked {
        /// Board place the player landed on.
        position: usize,
        /// Category of that place.
        category: Category,
        /// Question text.
        question: String,
    },
}
