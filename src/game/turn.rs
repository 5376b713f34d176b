use crate::category::Category;
use crate::error::RollError;
use crate::event::{EventSink, GameEvent};

use super::{Game, RollOutcome, TurnPhase};

impl<S: EventSink> Game<S> {
    /// Rolls the dice for the current player.
    ///
    /// An odd `value` frees a player from the penalty box; an even one keeps
    /// them there without moving. Otherwise the player advances `value`
    /// places, and a question is drawn from the category of the place they
    /// land on.
    ///
    /// The value is not checked against the faces of a die. The turn never
    /// passes by itself, not even when the player stays in the penalty box.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::QuestionsExhausted`] if the category the player
    /// landed on has no questions left. The move is kept and the phase is
    /// left unchanged.
    pub fn roll_dice(&mut self, value: u8) -> Result<RollOutcome, RollError> {
        if !self.is_playable() {
            tracing::debug!(players = self.players.len(), "roll before table is playable");
            self.sink.emit(GameEvent::NotEnoughPlayers);
            return Ok(RollOutcome::NotPlayable);
        }

        let seat = self.current;
        let name = self.name_of(seat);
        tracing::debug!(seat, value, "dice rolled");
        self.sink.emit(GameEvent::CurrentPlayer {
            seat,
            name: name.clone(),
        });
        self.sink.emit(GameEvent::DiceRolled { seat, value });

        self.is_getting_out_of_penalty_box = Self::escapes_penalty_box(value);

        if self.is_in_penalty_box(seat) {
            if !self.is_getting_out_of_penalty_box {
                self.sink.emit(GameEvent::StaysInPenaltyBox { seat, name });
                self.set_phase(TurnPhase::AwaitingAnswer);
                return Ok(RollOutcome::StayedInPenaltyBox);
            }

            self.sink.emit(GameEvent::LeavesPenaltyBox { seat, name });
            self.release_from_penalty_box(seat);
        }

        let position = self.move_player(seat, value);

        let category = Category::from_position(position);
        self.sink.emit(GameEvent::CategoryDrawn { category });

        let question = self.questions.draw(category).inspect_err(|err| {
            tracing::warn!(seat, %category, %err, "question bank exhausted");
        })?;

        self.sink.emit(GameEvent::QuestionAsked {
            category,
            text: question.clone(),
        });
        self.set_phase(TurnPhase::AwaitingAnswer);

        Ok(RollOutcome::Asked {
            position,
            category,
            question,
        })
    }

    /// Resolves the current question as answered correctly.
    ///
    /// Awards one gold coin and returns `true` if the player now holds exactly
    /// the winning purse. A player who stayed in the penalty box on this roll
    /// earns nothing and `false` is returned.
    pub fn was_correctly_answered(&mut self) -> bool {
        let seat = self.current;
        if seat >= self.players.len() {
            return false;
        }

        if self.is_in_penalty_box(seat) && !self.is_getting_out_of_penalty_box {
            tracing::debug!(seat, "answer ignored while in penalty box");
            self.set_phase(TurnPhase::AwaitingRoll);
            return false;
        }

        self.sink.emit(GameEvent::CorrectAnswer { seat });
        self.reward(seat);

        let won = self.has_won(seat);
        if won {
            tracing::debug!(seat, "player won");
            self.winner = self.winner.or(Some(seat));
            self.phase = TurnPhase::Won;
        } else {
            self.set_phase(TurnPhase::AwaitingRoll);
        }

        won
    }

    /// Resolves the current question as answered incorrectly.
    ///
    /// Sends the player to the penalty box, whatever their state. Always
    /// returns `false`: a wrong answer never wins.
    pub fn wrong_answer(&mut self) -> bool {
        let seat = self.current;
        if seat >= self.players.len() {
            return false;
        }

        self.sink.emit(GameEvent::WrongAnswer { seat });
        self.send_to_penalty_box(seat);
        self.set_phase(TurnPhase::AwaitingRoll);

        false
    }
}
