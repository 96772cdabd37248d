//! Per-player win counts and the stores that persist them across sessions.

mod record;
mod store;

pub use record::ScoreRecord;
pub use store::{JsonScoreStore, MemoryScoreStore, ScoreStore};
