//! Players, renderers and game records for `chess_rules`.
//!
//! Everything here sits outside the rules core and only uses its public
//! surface:
//! - [`RandomPlayer`]: uniform choice among the legal moves
//! - [`GreedyPlayer`]: takes the most valuable safe-ish capture, else random
//! - [`TextPlayer`] / [`TextRenderer`]: line-oriented human play
//! - [`GameRecord`] and [`write_history`]: persisted move history

mod greedy;
mod random;
mod record;
mod text;

pub use greedy::GreedyPlayer;
pub use random::RandomPlayer;
pub use record::{GameRecord, save_history, write_history};
pub use text::{TextPlayer, TextRenderer};
