use chess_rules::{Board, Game, Move, MoveOutcome, Player, PlayerError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Percent chance an even trade is taken over a random quiet move.
const EVEN_TRADE_BIAS: u32 = 80;

/// A one-ply capture bot.
///
/// Each capture is scored by the victim's value, minus the capturer's value
/// when the opponent could take back on that square. The best positive score
/// wins; without one the bot plays a random legal move.
#[derive(Debug, Clone)]
pub struct GreedyPlayer {
    rng: StdRng,
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyPlayer {
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

    fn score(&mut self, board: &Board, mv: Move, outcome: MoveOutcome) -> i32 {
        let Some(victim) = outcome.captured() else {
            return 0;
        };
        let Some(attacker) = board.piece_at(mv.from).copied() else {
            return 0;
        };
        let mut value = board.piece(victim).kind.value() as i32;

        let mut after = board.clone();
        if after.apply_move(mv).is_ok() {
            let opponent = attacker.color.other();
            let ids: Vec<_> = after.ids_in_play(opponent).collect();
            let recapture = ids
                .into_iter()
                .any(|id| {
                    after.attempt_move(id, mv.to, true).is_ok() && after.move_is_legal(id, mv.to)
                });
            if recapture {
                value -= attacker.kind.value() as i32;
            }
        }

        if value == 0 && self.rng.gen_range(0..100) < EVEN_TRADE_BIAS {
            value = 1;
        }
        value
    }
}

impl Player for GreedyPlayer {
    fn pick_move(&mut self, game: &Game) -> Result<Move, PlayerError> {
        let mut moves: Vec<(Move, MoveOutcome)> = game.legal_moves().into_iter().collect();
        moves.sort_by_key(|(mv, _)| *mv);

        let board = game.board();
        let mut best: Option<(Move, i32)> = None;
        for &(mv, outcome) in &moves {
            let value = self.score(board, mv, outcome);
            if value > best.map_or(0, |(_, v)| v) {
                best = Some((mv, value));
            }
        }

        if let Some((mv, value)) = best {
            debug!("greedy capture {} worth {}", mv.arrow(), value);
            return Ok(mv);
        }
        moves
            .choose(&mut self.rng)
            .map(|(mv, _)| *mv)
            .ok_or(PlayerError::NoMoveAvailable)
    }
}

#[cfg(test)]
#[path = "greedy_tests.rs"]
mod greedy_tests;
