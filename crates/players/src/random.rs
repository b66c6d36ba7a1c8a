use chess_rules::{Game, Move, Player, PlayerError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A player that picks uniformly among the legal moves.
///
/// The move list is sorted before choosing, so a seeded player replays the
/// same game every time.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn pick_move(&mut self, game: &Game) -> Result<Move, PlayerError> {
        let mut moves: Vec<Move> = game.legal_moves().into_keys().collect();
        moves.sort();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayerError::NoMoveAvailable)
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;
