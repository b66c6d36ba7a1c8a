//! Turn sequencing and draw bookkeeping.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{FenError, GameError, MoveError, PlayerError};
use crate::fen;
use crate::types::*;

/// Something that chooses moves for one side.
///
/// A player only sees the game through its public queries; a rejected move
/// is logged and the same player is asked again.
pub trait Player {
    fn pick_move(&mut self, game: &Game) -> Result<Move, PlayerError>;
}

/// Called at game start and after every committed ply.
pub trait Renderer {
    fn render(&mut self, board: &Board);
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    Repetition,
    PlyLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::FiftyMoveRule => "fifty-move rule",
            Termination::Repetition => "repetition",
            Termination::PlyLimit => "ply limit",
        };
        f.write_str(name)
    }
}

/// Terminal value of a finished game. `winner` is `None` for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub termination: Termination,
}

impl GameResult {
    pub fn win(winner: Color, termination: Termination) -> Self {
        Self {
            winner: Some(winner),
            termination,
        }
    }

    pub fn draw(termination: Termination) -> Self {
        Self {
            winner: None,
            termination,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Human-readable reason, e.g. "Black is in mate".
    pub fn reason(&self) -> String {
        match (self.winner, self.termination) {
            (Some(winner), Termination::Checkmate) => format!("{} is in mate", winner.other()),
            (Some(winner), other) => format!("{winner} wins by {other}"),
            (None, Termination::Stalemate) => "draw by stalemate".to_string(),
            (None, Termination::FiftyMoveRule) => {
                "draw: fifty moves without a capture or pawn move".to_string()
            }
            (None, Termination::Repetition) => "draw by repetition".to_string(),
            (None, other) => format!("draw by {other}"),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    WhiteToMove,
    BlackToMove,
    Finished(GameResult),
}

/// One game: the board plus turn order, history and draw counters.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    to_move: Color,
    history: Vec<Move>,
    fifty_move_counter: u32,
    positions: HashMap<String, u32>,
    moves_made: [u32; 2],
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_board(Board::startpos(), Color::White, 0, config)
    }

    /// Start from a FEN position; its half-move field seeds the fifty-move
    /// counter.
    pub fn from_fen(fen: &str, config: GameConfig) -> Result<Self, FenError> {
        let parsed = fen::parse(fen)?;
        let mut game = Self::with_board(
            parsed.board,
            parsed.side_to_move,
            parsed.halfmove_clock,
            config,
        );
        // The position may already be decided.
        game.result = game.evaluate();
        Ok(game)
    }

    fn with_board(
        board: Board,
        to_move: Color,
        fifty_move_counter: u32,
        config: GameConfig,
    ) -> Self {
        Self {
            board,
            config,
            to_move,
            history: Vec::new(),
            fifty_move_counter,
            positions: HashMap::new(),
            moves_made: [0, 0],
            result: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side_to_move(&self) -> Color {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        match (self.result, self.to_move) {
            (Some(result), _) => GameState::Finished(result),
            (None, Color::White) => GameState::WhiteToMove,
            (None, Color::Black) => GameState::BlackToMove,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Plies since the last capture or pawn move.
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    /// How often the repetition key `key` has been reached after a move.
    pub fn repetitions(&self, key: &str) -> u32 {
        self.positions.get(key).copied().unwrap_or(0)
    }

    /// Repetition key of the current position: placement plus side to move.
    pub fn position_key(&self) -> String {
        let side = match self.to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {side}", self.board.position_key())
    }

    pub fn moves_made(&self, color: Color) -> u32 {
        self.moves_made[color.idx()]
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> HashMap<Move, MoveOutcome> {
        if self.is_over() {
            return HashMap::new();
        }
        self.board.all_legal_moves(self.to_move)
    }

    // ------------------------------------------------------------------
    // Moves
    // ------------------------------------------------------------------

    /// Validate and commit one ply for the side to move, then update the
    /// counters and evaluate termination.
    ///
    /// A ply that completes a draw condition is committed and ends the game.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let id = self
            .board
            .piece_id_at(mv.from)
            .ok_or(MoveError::NoPieceAtSquare(mv.from))?;
        let mover = *self.board.piece(id);
        if mover.color != self.to_move {
            return Err(MoveError::NotYourPiece(mv.from));
        }

        let outcome = self.board.attempt_move(id, mv.to, false)?;
        self.board.assert_invariants();

        self.moves_made[mover.color.idx()] += 1;
        if outcome.is_capture() || mover.kind == PieceKind::Pawn {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter += 1;
        }
        self.history.push(mv);
        self.to_move = self.to_move.other();
        *self.positions.entry(self.position_key()).or_insert(0) += 1;

        let (white, black) = (self.moves_made[0], self.moves_made[1]);
        assert!(
            white.abs_diff(black) <= 1,
            "turn order broken: white made {white} moves, black {black}"
        );

        self.result = self.evaluate();
        if let Some(result) = self.result {
            info!(plies = self.history.len(), "game over: {result}");
        }
        Ok(outcome)
    }

    /// Checkmate, then stalemate (either colour, side to move first), then
    /// fifty-move counter, repetition tally and ply cap; first match wins.
    fn evaluate(&self) -> Option<GameResult> {
        let sides = [self.to_move, self.to_move.other()];
        for color in sides {
            if self.board.is_checkmate(color) {
                return Some(GameResult::win(color.other(), Termination::Checkmate));
            }
        }
        if sides.into_iter().any(|color| self.board.is_stalemate(color)) {
            return Some(GameResult::draw(Termination::Stalemate));
        }
        if self.fifty_move_counter >= self.config.fifty_move_limit {
            return Some(GameResult::draw(Termination::FiftyMoveRule));
        }
        if self.repetitions(&self.position_key()) >= self.config.repetition_limit {
            return Some(GameResult::draw(Termination::Repetition));
        }
        if let Some(cap) = self.config.max_plies {
            if self.history.len() >= cap as usize {
                return Some(GameResult::draw(Termination::PlyLimit));
            }
        }
        None
    }

    /// Run the game to completion, asking `white` and `black` for moves in
    /// turn and rendering after each committed ply.
    pub fn play(
        &mut self,
        white: &mut dyn Player,
        black: &mut dyn Player,
        renderer: &mut dyn Renderer,
    ) -> Result<GameResult, GameError> {
        info!(side = %self.to_move, "game started");
        renderer.render(&self.board);

        loop {
            if let Some(result) = self.result {
                return Ok(result);
            }
            let color = self.to_move;
            let player: &mut dyn Player = match color {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let mv = match player.pick_move(self) {
                Ok(mv) => mv,
                Err(PlayerError::Aborted) => {
                    info!(plies = self.history.len(), "{color} aborted the game");
                    return Err(GameError::Aborted {
                        plies: self.history.len(),
                    });
                }
                Err(PlayerError::InvalidInput(input)) => {
                    warn!("{color} gave unreadable input {input:?}");
                    continue;
                }
                Err(err) => {
                    warn!("{color} failed to produce a move: {err}");
                    return Err(GameError::Player(err));
                }
            };

            match self.apply(mv) {
                Ok(_) => renderer.render(&self.board),
                Err(err) => warn!("{color} tried {mv}: {err}"),
            }
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
