//! Error types for move validation, parsing, configuration and players.

use thiserror::Error;

use crate::types::{Color, PieceKind, Square};

/// Why a move attempt was refused. No variant is fatal: the game loop reports
/// it back to the player and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{found} handed to the {expected} validator")]
    WrongPieceKind { expected: PieceKind, found: PieceKind },
    #[error("piece is not in play")]
    NotInPlay,
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    #[error("cannot castle: {0}")]
    Castling(#[from] CastlingError),
    #[error("cannot capture en passant: {0}")]
    EnPassant(#[from] EnPassantError),
    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),
    #[error("no legal moves")]
    NoLegalMoves,
    #[error("the piece at {0} belongs to the opponent")]
    NotYourPiece(Square),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the piece is already on that square")]
    AlreadyThere,
    #[error("the move would leave the king in check")]
    LeavesKingInCheck,
    #[error("{0} is occupied by a piece of the same colour")]
    OccupiedByOwnPiece(Square),
    #[error("{0} is in the way")]
    Blocked(Square),
    #[error("a {kind} cannot move from {from} to {to}")]
    Geometry {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastlingError {
    #[error("the king has already moved")]
    KingMoved,
    #[error("the rook has already moved")]
    RookMoved,
    #[error("there is no rook on that side")]
    NoRook,
    #[error("{0} is not empty")]
    PathBlocked(Square),
    #[error("the king is in check")]
    InCheck,
    #[error("the king would pass through the attacked square {0}")]
    PassesThroughAttack(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnPassantError {
    #[error("the capturing pawn is not on its fifth rank")]
    WrongRank,
    #[error("the opponent's last move was not a double step onto the passed square")]
    NoDoubleStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square {0:?}")]
pub struct ParseSquareError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected two squares separated by whitespace, got {0:?}")]
    Shape(String),
    #[error(transparent)]
    Square(#[from] ParseSquareError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid FEN rank {0:?}")]
    BadRank(String),
    #[error("invalid FEN piece letter {0:?}")]
    BadPiece(char),
    #[error("invalid side to move {0:?}")]
    BadSideToMove(String),
    #[error("castling right {0:?} has no unmoved king and rook to back it")]
    BadCastling(char),
    #[error("invalid en passant field {0:?}")]
    BadEnPassant(String),
    #[error("invalid half-move clock {0:?}")]
    BadClock(String),
    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure reported by a [`crate::Player`] instead of a move.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no move available")]
    NoMoveAvailable,
    /// The player walked away; the game stops without a result.
    #[error("player aborted the game")]
    Aborted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why [`crate::Game::play`] stopped without a result.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("game aborted by a player after {plies} plies")]
    Aborted { plies: usize },
    #[error("player failed: {0}")]
    Player(#[source] PlayerError),
}
