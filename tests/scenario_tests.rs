//! End-to-end game scenarios.
//!
//! Each test plays the engine through `HatGame::apply` exactly as a front end
//! would, one event at a time.

mod common;

use common::{build_game, scenario_game, two_teams};
use hat_engine::{
    EngineConfig, GameEvent, GameState, HatGame, Round, Team, TeamId, Transition, TurnPhase,
};

const A: TeamId = TeamId::new(0);
const B: TeamId = TeamId::new(1);

fn tick(game: &HatGame, state: &mut GameState, seconds: u32) {
    for _ in 0..seconds {
        game.apply(state, GameEvent::Tick).unwrap();
    }
}

/// Start a turn and guess every remaining word.
fn clear_round(game: &HatGame, state: &mut GameState) -> Transition {
    game.apply(state, GameEvent::StartTurn).unwrap();
    let mut last = Transition::Ignored;
    while state.phase() == TurnPhase::Playing {
        last = game.apply(state, GameEvent::Guessed).unwrap();
    }
    last
}

// =============================================================================
// Round clearing and time carry-over
// =============================================================================

/// Team A clears all three words with 45 seconds left.
#[test]
fn test_clearing_round_awards_score_and_bonus() {
    let (game, mut state) = scenario_game();

    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    tick(&game, &mut state, 15);
    game.apply(&mut state, GameEvent::Guessed).unwrap();
    game.apply(&mut state, GameEvent::Guessed).unwrap();
    let last = game.apply(&mut state, GameEvent::Guessed).unwrap();

    assert!(matches!(
        last,
        Transition::RoundAdvanced { team: A, bonus: 45, next_round: Round::Charades, .. }
    ));
    assert_eq!(state.ledger.team(A).score, 3);
    assert_eq!(state.ledger.team(A).time_bonus, 45);
    assert_eq!(state.round.round(), Round::Charades);
    assert_eq!(state.round.queue().len(), 3);

    let mut words = state.round.queue().words().to_vec();
    words.sort();
    assert_eq!(words, vec!["cat", "dog", "sun"]);
}

/// After clearing with 45 seconds left, team A's next turn starts at 45.
#[test]
fn test_leftover_time_carries_into_next_round() {
    let (game, mut state) = scenario_game();
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    tick(&game, &mut state, 15);
    for _ in 0..3 {
        game.apply(&mut state, GameEvent::Guessed).unwrap();
    }

    assert_eq!(state.time_bank.time_for(A), 45);
    assert_eq!(state.time_bank.time_for(B), 60);

    match game.apply(&mut state, GameEvent::StartTurn).unwrap() {
        Transition::TurnStarted { team, player, time_left, .. } => {
            assert_eq!(team, A);
            assert_eq!(player, "Ann");
            assert_eq!(time_left, 45);
        }
        other => panic!("unexpected transition {other:?}"),
    }
}

/// Carried time that runs out resets the team to a full clock.
#[test]
fn test_carried_time_consumed_then_reset() {
    let (game, mut state) = scenario_game();
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    tick(&game, &mut state, 15);
    for _ in 0..3 {
        game.apply(&mut state, GameEvent::Guessed).unwrap();
    }

    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    tick(&game, &mut state, 45);

    assert_eq!(state.phase(), TurnPhase::TurnEnd);
    assert_eq!(state.time_bank.stored(A), 0);
    assert_eq!(state.time_bank.time_for(A), 60);
}

// =============================================================================
// Timeouts
// =============================================================================

/// Clock runs out with one word left and nothing guessed this turn.
#[test]
fn test_timeout_with_word_left() {
    let (game, mut state) = scenario_game();

    // Team A guesses two words then runs out.
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    game.apply(&mut state, GameEvent::Guessed).unwrap();
    game.apply(&mut state, GameEvent::Guessed).unwrap();
    tick(&game, &mut state, 60);
    game.apply(&mut state, GameEvent::NextTurn).unwrap();

    // Team B gets nothing.
    let before = state.ledger.teams().clone();
    let left_word = state.round.queue().words().to_vec();
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    tick(&game, &mut state, 59);
    let transition = game.apply(&mut state, GameEvent::Tick).unwrap();

    assert_eq!(transition, Transition::TimeUp { team: B, guessed: 0 });
    assert_eq!(state.phase(), TurnPhase::TurnEnd);
    assert_eq!(state.time_bank.stored(B), 0);
    assert_eq!(state.ledger.teams(), &before);
    assert_eq!(state.round.queue().words(), left_word.as_slice());
    assert_eq!(left_word.len(), 1);
}

/// Timeouts never touch the time bonus.
#[test]
fn test_timeout_awards_no_bonus() {
    let (game, mut state) = scenario_game();
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    game.apply(&mut state, GameEvent::Guessed).unwrap();
    tick(&game, &mut state, 60);

    assert_eq!(state.ledger.team(A).score, 1);
    assert_eq!(state.ledger.team(A).time_bonus, 0);
}

// =============================================================================
// Game completion
// =============================================================================

/// Clearing round 3 completes the game; there is no round 4.
#[test]
fn test_third_clear_completes_game() {
    let (game, mut state) = scenario_game();

    assert!(matches!(clear_round(&game, &mut state), Transition::RoundAdvanced { next_round: Round::Charades, .. }));
    assert!(matches!(clear_round(&game, &mut state), Transition::RoundAdvanced { next_round: Round::OneWord, .. }));

    match clear_round(&game, &mut state) {
        Transition::GameComplete { team, report, .. } => {
            assert_eq!(team, A);
            assert_eq!(report.log.len(), 9);
            assert_eq!(report.teams[0].score, 9);
        }
        other => panic!("unexpected transition {other:?}"),
    }

    assert_eq!(state.phase(), TurnPhase::GameOver);
    assert_eq!(state.round.round(), Round::OneWord);
    for event in [GameEvent::StartTurn, GameEvent::Guessed, GameEvent::Tick, GameEvent::NextTurn] {
        assert!(game.apply(&mut state, event).unwrap().is_ignored());
    }
}

/// The last team to play may be the one that finishes the game.
#[test]
fn test_last_team_finishes_game() {
    let (game, mut state) = scenario_game();
    clear_round(&game, &mut state);
    clear_round(&game, &mut state);

    // A runs out in round 3, B clears it.
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    tick(&game, &mut state, 60);
    game.apply(&mut state, GameEvent::NextTurn).unwrap();
    let last = clear_round(&game, &mut state);

    match last {
        Transition::GameComplete { team, bonus, report, .. } => {
            assert_eq!(team, B);
            assert_eq!(bonus, 60);
            assert_eq!(report.ranking, vec![A, B]);
            assert_eq!(report.winners(), vec![A]);
        }
        other => panic!("unexpected transition {other:?}"),
    }
}

/// A shorter game configured for one round finishes on the first clear.
#[test]
fn test_single_round_game() {
    let config = EngineConfig::default().with_round_count(1).with_round_time(30);
    let (game, mut state) = build_game(two_teams(), &["cat", "dog"], config, 3);

    match clear_round(&game, &mut state) {
        Transition::GameComplete { bonus, .. } => assert_eq!(bonus, 30),
        other => panic!("unexpected transition {other:?}"),
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Teams alternate and each team cycles through its own players.
#[test]
fn test_rotation_across_uneven_teams() {
    let teams = vec![
        Team::new("A", vec!["Ann".into(), "Bob".into(), "Eve".into()]),
        Team::new("B", vec!["Cid".into(), "Dee".into()]),
    ];
    let (game, mut state) = build_game(teams, &["cat", "dog", "sun", "moon"], EngineConfig::default(), 1);

    let mut explainers = Vec::new();
    for _ in 0..6 {
        match game.apply(&mut state, GameEvent::StartTurn).unwrap() {
            Transition::TurnStarted { player, .. } => explainers.push(player),
            other => panic!("unexpected transition {other:?}"),
        }
        tick(&game, &mut state, 60);
        game.apply(&mut state, GameEvent::NextTurn).unwrap();
    }

    assert_eq!(explainers, vec!["Ann", "Cid", "Bob", "Dee", "Eve", "Cid"]);
}

/// Guess log records who explained each word and in which round.
#[test]
fn test_guess_log_attribution() {
    let (game, mut state) = scenario_game();
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    game.apply(&mut state, GameEvent::Guessed).unwrap();
    tick(&game, &mut state, 60);
    game.apply(&mut state, GameEvent::NextTurn).unwrap();
    game.apply(&mut state, GameEvent::StartTurn).unwrap();
    game.apply(&mut state, GameEvent::Guessed).unwrap();

    let log = state.ledger.log();
    assert_eq!(log.len(), 2);
    assert_eq!((log[0].guessed_by.as_str(), log[0].team.as_str()), ("Ann", "A"));
    assert_eq!((log[1].guessed_by.as_str(), log[1].team.as_str()), ("Cid", "B"));
    assert!(log.iter().all(|r| r.round == Round::Describe));
}
