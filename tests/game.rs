//! Game integration tests.

use trivrs::{
    Category, DrawError, EventLog, Game, GameEvent, GameOptions, QuestionBank, RollError,
    RollOutcome, Simulation, TracingSink, TurnPhase,
};

fn table(names: &[&str]) -> Game {
    let mut game = Game::new(GameOptions::default());
    for name in names {
        assert!(game.add_player(*name));
    }
    game.sink_mut().clear();
    game
}

/// Ann answers one question, Bo misses one and lands in the penalty box on
/// place 3, Ann answers again. It is Bo's turn afterwards.
fn bo_in_penalty_box() -> Game {
    let mut game = table(&["Ann", "Bo"]);

    game.roll_dice(1).unwrap();
    assert!(!game.was_correctly_answered());
    game.next_player();

    game.roll_dice(3).unwrap();
    assert!(!game.wrong_answer());
    game.next_player();

    game.roll_dice(1).unwrap();
    assert!(!game.was_correctly_answered());
    game.next_player();

    game.sink_mut().clear();
    game
}

#[test]
fn registration_stops_at_six_players() {
    let mut game = Game::new(GameOptions::default());
    for name in ["Ann", "Bo", "Cy", "Di", "Ed", "Flo"] {
        assert!(game.add_player(name));
    }

    assert!(!game.add_player("Gus"));
    assert_eq!(game.player_count(), 6);
    assert_eq!(
        game.sink().events().last(),
        Some(&GameEvent::TableFull {
            name: "Gus".into()
        })
    );
}

#[test]
fn registration_reports_seat_and_count() {
    let mut game = Game::new(GameOptions::default());
    game.add_player("Ann");
    game.add_player("Bo");

    assert_eq!(
        game.sink().events(),
        [
            GameEvent::PlayerAdded {
                seat: 0,
                name: "Ann".into()
            },
            GameEvent::PlayerCount { count: 1 },
            GameEvent::PlayerAdded {
                seat: 1,
                name: "Bo".into()
            },
            GameEvent::PlayerCount { count: 2 },
        ]
    );

    let new_player = game.player(1).unwrap();
    assert_eq!(new_player.name(), "Bo");
    assert_eq!(new_player.position(), 0);
    assert_eq!(new_player.purse(), 0);
    assert!(!new_player.in_penalty_box());
}

#[test]
fn playable_needs_two_players() {
    let mut game = Game::new(GameOptions::default());
    assert!(!game.is_playable());

    game.add_player("Ann");
    assert!(!game.is_playable());

    for name in ["Bo", "Cy", "Di", "Ed", "Flo"] {
        game.add_player(name);
        assert!(game.is_playable());
    }
}

#[test]
fn roll_without_enough_players_does_nothing() {
    let mut game = table(&["Ann"]);

    assert_eq!(game.roll_dice(3).unwrap(), RollOutcome::NotPlayable);
    assert_eq!(game.sink().events(), [GameEvent::NotEnoughPlayers]);
    assert_eq!(game.player(0).unwrap().position(), 0);
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
    for category in Category::ALL {
        assert_eq!(game.questions().remaining(category), 50);
    }
}

#[test]
fn first_roll_moves_and_asks() {
    let mut game = table(&["Ann", "Bo"]);

    let outcome = game.roll_dice(5).unwrap();
    assert_eq!(
        outcome,
        RollOutcome::Asked {
            position: 5,
            category: Category::Science,
            question: "Science Question 0".into(),
        }
    );

    assert_eq!(
        game.sink().events(),
        [
            GameEvent::CurrentPlayer {
                seat: 0,
                name: "Ann".into()
            },
            GameEvent::DiceRolled { seat: 0, value: 5 },
            GameEvent::Moved {
                seat: 0,
                name: "Ann".into(),
                position: 5
            },
            GameEvent::CategoryDrawn {
                category: Category::Science
            },
            GameEvent::QuestionAsked {
                category: Category::Science,
                text: "Science Question 0".into()
            },
        ]
    );
    assert_eq!(game.phase(), TurnPhase::AwaitingAnswer);
    assert_eq!(game.category_for(0), Some(Category::Science));
    assert_eq!(game.questions().remaining(Category::Science), 49);
    assert_eq!(game.current_seat(), 0);
}

#[test]
fn board_wraps_after_last_place() {
    let mut game = table(&["Ann", "Bo"]);

    game.roll_dice(11).unwrap();
    assert_eq!(game.player(0).unwrap().position(), 11);

    let outcome = game.roll_dice(3).unwrap();
    assert!(matches!(
        outcome,
        RollOutcome::Asked {
            position: 2,
            category: Category::Sports,
            ..
        }
    ));
}

#[test]
fn sixth_coin_wins() {
    let mut game = table(&["Ann", "Bo"]);

    for _ in 0..5 {
        game.roll_dice(2).unwrap();
        assert!(!game.was_correctly_answered());
        game.next_player();

        game.roll_dice(2).unwrap();
        assert!(!game.was_correctly_answered());
        game.next_player();
    }

    assert_eq!(game.player(0).unwrap().purse(), 5);
    assert!(!game.has_won(0));

    game.roll_dice(2).unwrap();
    game.sink_mut().clear();
    assert!(game.was_correctly_answered());

    assert_eq!(game.player(0).unwrap().purse(), 6);
    assert!(game.has_won(0));
    assert!(!game.has_won(1));
    assert_eq!(game.phase(), TurnPhase::Won);
    assert_eq!(game.winner(), Some(0));
    assert_eq!(
        game.sink().events(),
        [
            GameEvent::CorrectAnswer { seat: 0 },
            GameEvent::PurseUpdated {
                seat: 0,
                name: "Ann".into(),
                purse: 6
            },
        ]
    );
}

#[test]
fn wrong_answer_sends_player_to_penalty_box() {
    let mut game = table(&["Ann", "Bo"]);
    game.roll_dice(1).unwrap();
    game.was_correctly_answered();
    game.next_player();

    game.roll_dice(3).unwrap();
    game.sink_mut().clear();

    assert!(!game.wrong_answer());
    assert!(game.is_in_penalty_box(1));
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(
        game.sink().events(),
        [
            GameEvent::WrongAnswer { seat: 1 },
            GameEvent::SentToPenaltyBox {
                seat: 1,
                name: "Bo".into()
            },
        ]
    );

    assert!(!game.wrong_answer());
    assert!(game.is_in_penalty_box(1));
}

#[test]
fn even_roll_keeps_player_in_penalty_box() {
    let mut game = bo_in_penalty_box();
    assert_eq!(game.current_seat(), 1);

    let before = game.player(1).unwrap().clone();
    let remaining = Category::ALL.map(|category| game.questions().remaining(category));

    assert_eq!(game.roll_dice(4).unwrap(), RollOutcome::StayedInPenaltyBox);
    assert!(!game.is_getting_out_of_penalty_box());
    assert_eq!(game.player(1), Some(&before));
    assert_eq!(
        Category::ALL.map(|category| game.questions().remaining(category)),
        remaining
    );
    assert_eq!(
        game.sink().events(),
        [
            GameEvent::CurrentPlayer {
                seat: 1,
                name: "Bo".into()
            },
            GameEvent::DiceRolled { seat: 1, value: 4 },
            GameEvent::StaysInPenaltyBox {
                seat: 1,
                name: "Bo".into()
            },
        ]
    );
    assert_eq!(game.current_seat(), 1);
    assert_eq!(game.phase(), TurnPhase::AwaitingAnswer);

    game.sink_mut().clear();
    assert!(!game.was_correctly_answered());
    assert_eq!(game.player(1), Some(&before));
    assert!(game.sink().is_empty());
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
}

#[test]
fn odd_roll_releases_player_and_plays_on() {
    let mut game = bo_in_penalty_box();

    let outcome = game.roll_dice(3).unwrap();
    assert!(game.is_getting_out_of_penalty_box());
    assert!(!game.is_in_penalty_box(1));
    assert_eq!(
        outcome,
        RollOutcome::Asked {
            position: 6,
            category: Category::Sports,
            question: "Sports Question 1".into(),
        }
    );
    assert_eq!(
        game.sink().events()[2],
        GameEvent::LeavesPenaltyBox {
            seat: 1,
            name: "Bo".into()
        }
    );

    assert!(!game.was_correctly_answered());
    assert_eq!(game.player(1).unwrap().purse(), 1);
}

#[test]
fn wrong_answer_after_release_sends_back() {
    let mut game = bo_in_penalty_box();

    game.roll_dice(5).unwrap();
    assert!(!game.is_in_penalty_box(1));

    assert!(!game.wrong_answer());
    assert!(game.is_in_penalty_box(1));
}

#[test]
fn next_player_cycles_through_seats() {
    let mut game = table(&["Ann", "Bo", "Cy"]);
    assert_eq!(game.current_player().unwrap().name(), "Ann");

    game.next_player();
    assert_eq!(game.current_seat(), 1);
    game.next_player();
    assert_eq!(game.current_seat(), 2);
    game.next_player();
    assert_eq!(game.current_seat(), 0);
}

#[test]
fn empty_table_ignores_turn_calls() {
    let mut game = Game::new(GameOptions::default());

    game.next_player();
    assert_eq!(game.current_seat(), 0);
    assert!(game.current_player().is_none());
    assert!(!game.was_correctly_answered());
    assert!(!game.wrong_answer());
    assert!(game.sink().is_empty());
}

#[test]
fn exhausted_category_is_an_error() {
    let options = GameOptions::default().with_questions_per_category(1);
    let mut game = Game::new(options);
    game.add_player("Ann");
    game.add_player("Bo");

    game.roll_dice(4).unwrap();
    game.was_correctly_answered();
    game.next_player();

    let err = game.roll_dice(4).unwrap_err();
    assert_eq!(err, RollError::QuestionsExhausted(Category::Pop));
    assert_eq!(err.to_string(), "no questions left in category Pop");
    assert_eq!(game.player(1).unwrap().position(), 4);
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
}

#[test]
fn question_bank_is_fifo() {
    let mut bank = QuestionBank::new(2);

    assert_eq!(bank.draw(Category::Rock).unwrap(), "Rock Question 0");
    assert_eq!(bank.draw(Category::Rock).unwrap(), "Rock Question 1");
    assert_eq!(
        bank.draw(Category::Rock).unwrap_err(),
        DrawError::Exhausted {
            category: Category::Rock
        }
    );
    assert_eq!(bank.remaining(Category::Pop), 2);
    assert_eq!(bank.peek(Category::Pop), Some("Pop Question 0"));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_max_players(4)
        .with_min_players(3)
        .with_winning_purse(10)
        .with_board_size(8)
        .with_questions_per_category(5);

    assert_eq!(options.max_players, 4);
    assert_eq!(options.min_players, 3);
    assert_eq!(options.winning_purse, 10);
    assert_eq!(options.board_size, 8);
    assert_eq!(options.questions_per_category, 5);
}

#[test]
fn custom_board_and_purse() {
    let options = GameOptions::default()
        .with_board_size(8)
        .with_winning_purse(1);
    let mut game = Game::new(options);
    game.add_player("Ann");
    game.add_player("Bo");

    let outcome = game.roll_dice(9).unwrap();
    assert!(matches!(outcome, RollOutcome::Asked { position: 1, .. }));
    assert!(game.was_correctly_answered());
}

#[test]
fn events_render_classic_messages() {
    let rendered = [
        GameEvent::PlayerCount { count: 1 },
        GameEvent::PlayerCount { count: 3 },
        GameEvent::Moved {
            seat: 0,
            name: "Ann".into(),
            position: 7,
        },
        GameEvent::CategoryDrawn {
            category: Category::Rock,
        },
        GameEvent::PurseUpdated {
            seat: 0,
            name: "Ann".into(),
            purse: 2,
        },
        GameEvent::NotEnoughPlayers,
    ]
    .map(|event| event.to_string());

    assert_eq!(
        rendered,
        [
            "There is 1 player",
            "There are 3 players",
            "Ann's new location is 7",
            "The category is Rock",
            "Ann now has 2 Gold Coins.",
            "Cannot start game. Not enough players.",
        ]
    );
}

#[test]
fn alternative_sinks_receive_events() {
    let mut game = Game::with_sink(GameOptions::default(), Vec::<GameEvent>::new());
    game.add_player("Ann");
    assert_eq!(game.into_sink().len(), 2);

    let mut log = EventLog::new();
    {
        let mut game = Game::with_sink(GameOptions::default(), &mut log);
        game.add_player("Ann");
        game.add_player("Bo");
        game.roll_dice(2).unwrap();
    }
    assert_eq!(log.len(), 9);
    assert_eq!(log.drain().len(), 9);
    assert!(log.is_empty());

    let mut game = Game::with_sink(GameOptions::default(), TracingSink);
    game.add_player("Ann");
    game.add_player("Bo");
    game.roll_dice(1).unwrap();
    assert!(!game.was_correctly_answered());
}

#[test]
fn simulation_is_deterministic() {
    let play = |seed| {
        let mut game = table(&["Chet", "Pat", "Sue"]);
        let report = Simulation::new(seed).run(&mut game).unwrap();
        (report, game.into_sink())
    };

    let (first, first_log) = play(42);
    let (second, second_log) = play(42);

    assert_eq!(first, second);
    assert_eq!(first_log, second_log);
}

#[test]
fn simulation_plays_to_a_winner() {
    let mut game = table(&["Chet", "Pat", "Sue"]);
    let report = Simulation::new(7).run(&mut game).unwrap();

    let winner = report.winner.unwrap();
    assert_eq!(game.winner(), Some(winner));
    assert_eq!(game.player(winner).unwrap().purse(), 6);
    assert_eq!(game.phase(), TurnPhase::Won);
    assert!(report.turns >= 6);
}

#[test]
fn simulation_skips_unplayable_game() {
    let mut game = table(&["Chet"]);
    let report = Simulation::new(1).run(&mut game).unwrap();

    assert_eq!(report.turns, 0);
    assert_eq!(report.winner, None);
    assert!(game.sink().is_empty());
}

#[test]
fn simulation_respects_turn_limit() {
    let mut game = table(&["Chet", "Pat"]);
    let report = Simulation::new(3)
        .with_wrong_answer_odds(1)
        .with_max_turns(20)
        .run(&mut game)
        .unwrap();

    assert_eq!(report.turns, 20);
    assert_eq!(report.winner, None);
    assert!(game.players().iter().all(|player| player.purse() == 0));
}

#[test]
fn simulated_die_stays_on_six_faces() {
    let mut sim = Simulation::new(11);
    for _ in 0..200 {
        assert!((1..=6).contains(&sim.roll_die()));
    }
}
