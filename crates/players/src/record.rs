use std::io::{self, Write};
use std::path::Path;

use chess_rules::{Game, GameConfig, GameResult, Move};
use serde::{Deserialize, Serialize};

/// A finished (or abandoned) game: its moves and, if it ended, the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub history: Vec<Move>,
    pub result: Option<GameResult>,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        Self {
            history: game.history().to_vec(),
            result: game.result(),
        }
    }

    /// Replay the history from the standard start under `config`.
    pub fn replay(&self, config: GameConfig) -> Result<Game, String> {
        let mut game = Game::new(config);
        for (ply, mv) in self.history.iter().enumerate() {
            game.apply(*mv)
                .map_err(|e| format!("Ply {} ({}) failed: {}", ply + 1, mv, e))?;
        }
        Ok(game)
    }

    /// Save the record to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a record from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }
}

/// One `FROM→TO` line per move.
pub fn write_history<W: Write>(history: &[Move], mut out: W) -> io::Result<()> {
    for mv in history {
        writeln!(out, "{}", mv.arrow())?;
    }
    out.flush()
}

pub fn save_history(history: &[Move], path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_history(history, io::BufWriter::new(file))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
