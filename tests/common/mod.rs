//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use hat_engine::{EngineConfig, GameState, HatGame, HatGameBuilder, Team, WordPool};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn words(list: &[&str]) -> WordPool {
    WordPool::from(list.iter().map(|w| w.to_string()).collect::<Vec<_>>())
}

/// Two teams of two: A = [Ann, Bob], B = [Cid, Dee].
pub fn two_teams() -> Vec<Team> {
    vec![
        Team::new("A", vec!["Ann".into(), "Bob".into()]),
        Team::new("B", vec!["Cid".into(), "Dee".into()]),
    ]
}

pub fn build_game(teams: Vec<Team>, list: &[&str], config: EngineConfig, seed: u64) -> (HatGame, GameState) {
    init_logging();
    HatGameBuilder::new()
        .config(config)
        .teams(teams)
        .words(words(list))
        .seed(seed)
        .build()
        .expect("valid game")
}

/// Four players, two teams, `["cat", "dog", "sun"]`, 60 second clock.
pub fn scenario_game() -> (HatGame, GameState) {
    build_game(two_teams(), &["cat", "dog", "sun"], EngineConfig::default(), 42)
}
