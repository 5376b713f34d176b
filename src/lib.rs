//! A trivia board game rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks a table of players moving
//! around a circular board, drawing category questions, collecting gold coins
//! and serving time in the penalty box until one of them reaches the winning
//! purse.
//!
//! The engine never rolls dice or decides answers on its own. Callers supply
//! the dice value and the answer outcome, and every observable step of a turn
//! is reported to an [`EventSink`] as a [`GameEvent`].
//!
//! # Example
//!
//! ```
//! use trivrs::{Category, Game, GameOptions, RollOutcome};
//!
//! let mut game = Game::new(GameOptions::default());
//! game.add_player("Ann");
//! game.add_player("Bo");
//!
//! let outcome = game.roll_dice(5).unwrap();
//! assert!(matches!(
//!     outcome,
//!     RollOutcome::Asked { position: 5, category: Category::Science, .. }
//! ));
//! assert!(!game.was_correctly_answered());
//! game.next_player();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod category;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod questions;
pub mod sim;

// Re-export main types
pub use category::Category;
pub use error::{DrawError, RollError};
pub use event::{EventLog, EventSink, GameEvent, TracingSink};
pub use game::{Game, RollOutcome, TurnPhase};
pub use options::GameOptions;
pub use player::Player;
pub use questions::QuestionBank;
pub use sim::{Simulation, SimulationReport};
