//! Turn and round sequencing.
//!
//! - `phase`: turn phase and per-team player rotation
//! - `round`: round number and per-round word queue
//! - `event`: controller inputs and transitions
//! - `controller`: `HatGame` and the transition function
//! - `view`: render snapshot

pub mod phase;
pub mod round;
pub mod event;
pub mod controller;
pub mod view;

pub use phase::{TurnPhase, TurnState};
pub use round::{RoundOutcome, RoundState};
pub use event::{GameEvent, PlayerAction, Transition};
pub use controller::{GameState, HatGame, HatGameBuilder};
pub use view::TurnView;
