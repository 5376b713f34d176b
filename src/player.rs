//! Per-seat player records.

extern crate alloc;

use alloc::string::String;

/// A player seated at the table.
///
/// Position, purse and penalty state live together in one record per seat.
/// Only the engine mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Name given at registration.
    name: String,
    /// Board place, always below the board size.
    position: usize,
    /// Gold coins collected so far.
    purse: u32,
    /// Whether the player is in the penalty box.
    in_penalty_box: bool,
}

impl Player {
    /// Creates a player on the starting place with an empty purse.
    #[must_use]
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            position: 0,
            purse: 0,
            in_penalty_box: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's board place.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of gold coins the player holds.
    #[must_use]
    pub const fn purse(&self) -> u32 {
        self.purse
    }

    /// Returns whether the player is in the penalty box.
    #[must_use]
    pub const fn in_penalty_box(&self) -> bool {
        self.in_penalty_box
    }

    pub(crate) const fn advance(&mut self, steps: u8, board_size: usize) -> usize {
        self.position = (self.position + steps as usize) % board_size;
        self.position
    }

    pub(crate) const fn add_coin(&mut self) -> u32 {
        self.purse = self.purse.saturating_add(1);
        self.purse
    }

    pub(crate) const fn set_in_penalty_box(&mut self, in_box: bool) {
        self.in_penalty_box = in_box;
    }
}
