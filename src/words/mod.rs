//! Word pool collection and the per-round word queue.

pub mod pool;
pub mod queue;

pub use pool::WordPool;
pub use queue::{shuffle_words, QueueStatus, WordQueue};
