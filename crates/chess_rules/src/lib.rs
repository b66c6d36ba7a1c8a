pub mod board;
mod check;
pub mod config;
pub mod error;
mod fen;
pub mod game;
mod notation;
pub mod perft;
pub mod pieces;
mod speculation;
pub mod types;

pub use board::*;
pub use config::GameConfig;
pub use error::*;
pub use game::*;
pub use perft::perft;
pub use types::*;
