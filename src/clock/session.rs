//! Async session: serializes player actions and clock ticks into one engine.
//!
//! Player actions and ticks arrive on separate channels and are applied one
//! at a time by a single task that owns the game state. When both are ready,
//! the action goes first: an explainer who pressed "guessed" in the same
//! instant the clock ran out gets the word.

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::timer::{ClockTick, GameClock};
use crate::core::EngineError;
use crate::scoring::GameReport;
use crate::turns::{GameEvent, GameState, HatGame, PlayerAction, Transition, TurnView};

/// Sent to the renderer after every applied event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUpdate {
    pub transition: Transition,
    pub view: TurnView,
}

/// Owns a game and drives it from player actions and a real-time clock.
pub struct GameSession {
    game: HatGame,
    state: GameState,
    clock: GameClock,
    ticks_tx: mpsc::UnboundedSender<ClockTick>,
    ticks_rx: Option<mpsc::UnboundedReceiver<ClockTick>>,
}

impl GameSession {
    #[must_use]
    pub fn new(game: HatGame, state: GameState) -> Self {
        let clock = GameClock::new(game.config().tick_interval);
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        Self {
            game,
            state,
            clock,
            ticks_tx,
            ticks_rx: Some(ticks_rx),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> TurnView {
        self.game.view(&self.state)
    }

    /// Run until the game completes.
    ///
    /// Returns `SessionClosed` if the action sender is dropped first. Updates
    /// are best-effort: a dropped update receiver does not stop the game.
    pub async fn run(
        mut self,
        mut actions: mpsc::Receiver<PlayerAction>,
        updates: mpsc::UnboundedSender<SessionUpdate>,
    ) -> Result<GameReport, EngineError> {
        let mut ticks = self.ticks_rx.take().ok_or(EngineError::SessionClosed)?;
        info!("session started");

        loop {
            tokio::select! {
                biased;

                action = actions.recv() => match action {
                    Some(action) => self.handle(GameEvent::from(action), &updates)?,
                    None => {
                        self.clock.stop();
                        info!("session closed before game end");
                        return Err(EngineError::SessionClosed);
                    }
                },
                Some(tick) = ticks.recv() => {
                    if self.clock.is_current(tick) {
                        self.handle(GameEvent::Tick, &updates)?;
                    } else {
                        debug!(generation = tick.generation, "stale tick dropped");
                    }
                }
            }

            if let Some(report) = self.game.report(&self.state) {
                self.clock.stop();
                info!("session finished");
                return Ok(report);
            }
        }
    }

    fn handle(&mut self, event: GameEvent, updates: &mpsc::UnboundedSender<SessionUpdate>) -> Result<(), EngineError> {
        let transition = self.game.apply(&mut self.state, event)?;

        if matches!(transition, Transition::TurnStarted { .. }) {
            self.clock.start(self.ticks_tx.clone());
        } else if !self.state.phase().clock_running() {
            self.clock.stop();
        }

        if transition.is_ignored() {
            return Ok(());
        }
        let update = SessionUpdate {
            transition,
            view: self.game.view(&self.state),
        };
        if updates.send(update).is_err() {
            debug!("update receiver dropped");
        }
        Ok(())
    }
}
