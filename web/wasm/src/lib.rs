use trivrs::{Category, Game, GameEvent, GameOptions, Player, RollOutcome, Simulation, TurnPhase};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    sim: Simulation,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default()),
            sim: Simulation::new(seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default());
        self.sim = Simulation::new(seed as u64);
    }

    pub fn add_player(&mut self, name: String) -> bool {
        self.game.add_player(name)
    }

    pub fn is_playable(&self) -> bool {
        self.game.is_playable()
    }

    pub fn roll_die(&mut self) -> u8 {
        self.sim.roll_die()
    }

    pub fn roll_dice(&mut self, value: u8) -> Result<JsValue, JsValue> {
        let outcome = self.game.roll_dice(value).map_err(js_err)?;
        to_js_value(&JsRollOutcome::from(outcome))
    }

    pub fn was_correctly_answered(&mut self) -> bool {
        self.game.was_correctly_answered()
    }

    pub fn wrong_answer(&mut self) -> bool {
        self.game.wrong_answer()
    }

    pub fn next_player(&mut self) {
        self.game.next_player();
    }

    pub fn play_turn(&mut self) -> Result<bool, JsValue> {
        self.sim.play_turn(&mut self.game).map_err(js_err)
    }

    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .sink_mut()
            .drain()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            phase: phase_to_str(self.game.phase()),
            players: self.game.players().iter().map(JsPlayer::from).collect(),
            current_seat: self.game.current_player().map(|_| self.game.current_seat() as u32),
            winner: self.game.winner().map(|seat| seat as u32),
            questions_remaining: Category::ALL
                .iter()
                .map(|&category| JsRemaining {
                    category: category.name(),
                    remaining: self.game.questions().remaining(category) as u32,
                })
                .collect(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    players: Vec<JsPlayer>,
    current_seat: Option<u32>,
    winner: Option<u32>,
    questions_remaining: Vec<JsRemaining>,
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    position: u32,
    purse: u32,
    in_penalty_box: bool,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_owned(),
            position: player.position() as u32,
            purse: player.purse(),
            in_penalty_box: player.in_penalty_box(),
        }
    }
}

#[derive(Serialize)]
struct JsRemaining {
    category: &'static str,
    remaining: u32,
}

#[derive(Serialize)]
struct JsRollOutcome {
    outcome: &'static str,
    position: Option<u32>,
    category: Option<&'static str>,
    question: Option<String>,
}

impl From<RollOutcome> for JsRollOutcome {
    fn from(outcome: RollOutcome) -> Self {
        match outcome {
            RollOutcome::NotPlayable => Self {
                outcome: "NotPlayable",
                position: None,
                category: None,
                question: None,
            },
            RollOutcome::StayedInPenaltyBox => Self {
                outcome: "StayedInPenaltyBox",
                position: None,
                category: None,
                question: None,
            },
            RollOutcome::Asked {
                position,
                category,
                question,
            } => Self {
                outcome: "Asked",
                position: Some(position as u32),
                category: Some(category.name()),
                question: Some(question),
            },
        }
    }
}

#[derive(Serialize)]
struct JsEvent {
    kind: &'static str,
    message: String,
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        Self {
            kind: event.kind(),
            message: event.to_string(),
        }
    }
}

fn phase_to_str(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::AwaitingRoll => "AwaitingRoll",
        TurnPhase::AwaitingAnswer => "AwaitingAnswer",
        TurnPhase::Won => "Won",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
