//! Game events and the sinks that receive them.
//!
//! Every observable step of the engine is reported as a [`GameEvent`]. The
//! engine never prints; rendering is left to whoever consumes the events. The
//! [`Display`](core::fmt::Display) implementation gives the classic console
//! wording for callers that just want text.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::category::Category;

/// A notification produced by the engine.
///
/// Seats are indices into [`Game::players`](crate::Game::players).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player took a seat.
    PlayerAdded {
        /// Seat index of the new player.
        seat: usize,
        /// Player name.
        name: String,
    },
    /// Number of seated players after a registration.
    PlayerCount {
        /// Players at the table.
        count: usize,
    },
    /// A registration was rejected because every seat is taken.
    TableFull {
        /// Name of the rejected player.
        name: String,
    },
    /// Dice were rolled before enough players joined.
    NotEnoughPlayers,
    /// A turn started for this player.
    CurrentPlayer {
        /// Seat index.
        seat: usize,
        /// Player name.
        name: String,
    },
    /// The current player rolled the dice.
    DiceRolled {
        /// Seat index.
        seat: usize,
        /// Value supplied by the caller.
        value: u8,
    },
    /// An even roll kept the player in the penalty box.
    StaysInPenaltyBox {
        /// Seat index.
        seat: usize,
        /// Player name.
        name: String,
    },
    /// An odd roll released the player from the penalty box.
    LeavesPenaltyBox {
        /// Seat index.
        seat: usize,
        /// Player name.
        name: String,
    },
    /// The player moved to a new board place.
    Moved {
        /// Seat index.
        seat: usize,
        /// Player name.
        name: String,
        /// New board place.
        position: usize,
    },
    /// The category of the place the player landed on.
    CategoryDrawn {
        /// The category.
        category: Category,
    },
    /// A question was drawn and asked.
    QuestionAsked {
        /// Category the question came from.
        category: Category,
        /// Question text.
        text: String,
    },
    /// The current player answered correctly.
    CorrectAnswer {
        /// Seat index.
        seat: usize,
    },
    /// The player's purse changed.
    PurseUpdated {
        /// Seat index.
        seat: usize,
        /// Player name.
        name: String,
        /// Coins now held.
        purse: u32,
    },
    /// The current player answered incorrectly.
    WrongAnswer {
        /// Seat index.
        seat: usize,
    },
    /// The player was sent to the penalty box.
    SentToPenaltyBox {
        /// Seat index.
        seat: usize,
        /// Player name.
        name: String,
    },
}

impl GameEvent {
    /// Returns a short, stable identifier for the kind of event.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PlayerAdded { .. } => "player_added",
            Self::PlayerCount { .. } => "player_count",
            Self::TableFull { .. } => "table_full",
            Self::NotEnoughPlayers => "not_enough_players",
            Self::CurrentPlayer { .. } => "current_player",
            Self::DiceRolled { .. } => "dice_rolled",
            Self::StaysInPenaltyBox { .. } => "stays_in_penalty_box",
            Self::LeavesPenaltyBox { .. } => "leaves_penalty_box",
            Self::Moved { .. } => "moved",
            Self::CategoryDrawn { .. } => "category_drawn",
            Self::QuestionAsked { .. } => "question_asked",
            Self::CorrectAnswer { .. } => "correct_answer",
            Self::PurseUpdated { .. } => "purse_updated",
            Self::WrongAnswer { .. } => "wrong_answer",
            Self::SentToPenaltyBox { .. } => "sent_to_penalty_box",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerAdded { name, .. } => write!(f, "{name} was added"),
            Self::PlayerCount { count: 1 } => f.write_str("There is 1 player"),
            Self::PlayerCount { count } => write!(f, "There are {count} players"),
            Self::TableFull { name } => write!(
                f,
                "Cannot add player {name}. Maximum number of players reached."
            ),
            Self::NotEnoughPlayers => f.write_str("Cannot start game. Not enough players."),
            Self::CurrentPlayer { name, .. } => write!(f, "{name} is the current player"),
            Self::DiceRolled { value, .. } => write!(f, "They have rolled a {value}"),
            Self::StaysInPenaltyBox { name, .. } => {
                write!(f, "{name} is not getting out of the penalty box")
            }
            Self::LeavesPenaltyBox { name, .. } => {
                write!(f, "{name} is getting out of the penalty box")
            }
            Self::Moved { name, position, .. } => write!(f, "{name}'s new location is {position}"),
            Self::CategoryDrawn { category } => write!(f, "The category is {category}"),
            Self::QuestionAsked { text, .. } => f.write_str(text),
            Self::CorrectAnswer { .. } => f.write_str("Answer was correct!!!!"),
            Self::PurseUpdated { name, purse, .. } => {
                write!(f, "{name} now has {purse} Gold Coins.")
            }
            Self::WrongAnswer { .. } => f.write_str("Question was incorrectly answered"),
            Self::SentToPenaltyBox { name, .. } => {
                write!(f, "{name} was sent to the penalty box")
            }
        }
    }
}

/// Receiver of engine events.
pub trait EventSink {
    /// Handles one event. Events arrive in the order they happen.
    fn emit(&mut self, event: GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// A sink that records every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// A sink that forwards every event to [`tracing`] at `INFO` level.
///
/// Events are logged under the `trivrs::event` target with their kind as a
/// field and the rendered text as the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: GameEvent) {
        tracing::info!(target: "trivrs::event", kind = event.kind(), "{event}");
    }
}
