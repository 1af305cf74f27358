//! Real-time driving of the engine.
//!
//! - `timer`: `GameClock`, the cancellable 1-Hz tick source
//! - `session`: `GameSession`, the event loop that owns a game

pub mod timer;
pub mod session;

pub use timer::{ClockTick, GameClock};
pub use session::{GameSession, SessionUpdate};
