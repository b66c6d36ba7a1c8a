use std::collections::HashMap;
use std::fmt;

use crate::check;
use crate::error::{FenError, MoveError};
use crate::fen;
use crate::pieces;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The authoritative position.
///
/// Pieces live in an arena indexed by [`PieceId`] and are never removed; a
/// capture only clears `in_play`. `occupancy` is derived from the arena and
/// kept in step by the few mutators below.
///
/// Query methods take `&self` and run their simulations on a private copy, so
/// nothing a caller (or a renderer) can observe is ever half-applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    occupancy: [Option<PieceId>; 64],
    last_moves: [Option<LastMove>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn startpos() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                if let Some(sq) = Square::at((b'A' + file as u8) as char, color.back_row()) {
                    pieces.push(Piece::new(kind, color, sq));
                }
            }
            for file in 0..8u8 {
                if let Some(sq) = Square::at((b'A' + file) as char, color.pawn_row()) {
                    pieces.push(Piece::new(PieceKind::Pawn, color, sq));
                }
            }
        }
        Self::from_parts(pieces, [None, None])
    }

    /// Board from the placement, castling and en passant fields of a FEN
    /// string. Side to move and clocks are ignored here; see
    /// [`crate::Game::from_fen`].
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(fen::parse(fen)?.board)
    }

    pub(crate) fn from_parts(pieces: Vec<Piece>, last_moves: [Option<LastMove>; 2]) -> Self {
        let mut occupancy = [None; 64];
        for (i, piece) in pieces.iter().enumerate() {
            if piece.in_play {
                occupancy[piece.square.index()] = Some(PieceId(i as u8));
            }
        }
        Self {
            pieces,
            occupancy,
            last_moves,
        }
    }

    // ------------------------------------------------------------------
    // Positional queries
    // ------------------------------------------------------------------

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Every piece ever placed, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u8), p))
    }

    pub fn ids_in_play(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.in_play && p.color == color)
            .map(|(id, _)| id)
    }

    pub fn piece_id_at(&self, sq: Square) -> Option<PieceId> {
        self.occupancy[sq.index()]
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.piece_id_at(sq).map(|id| self.piece(id))
    }

    /// The in-play king of `color`.
    ///
    /// # Panics
    /// If `color` has no king, which means the board is corrupted.
    pub fn king(&self, color: Color) -> PieceId {
        self.ids_in_play(color)
            .find(|&id| self.piece(id).kind == PieceKind::King)
            .unwrap_or_else(|| panic!("{color} has no king on the board"))
    }

    /// The last committed move of `color`, consulted for en passant.
    pub fn last_move(&self, color: Color) -> Option<LastMove> {
        self.last_moves[color.idx()]
    }

    /// Pieces of `color` that have been captured.
    pub fn captured(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .iter()
            .filter(move |p| !p.in_play && p.color == color)
    }

    /// Material of `color` still in play, king excluded.
    pub fn material(&self, color: Color) -> u32 {
        self.pieces
            .iter()
            .filter(|p| p.in_play && p.color == color && p.kind != PieceKind::King)
            .map(|p| p.kind.value())
            .sum()
    }

    /// Canonical placement string (the FEN placement field), used as the
    /// repetition key.
    pub fn position_key(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..8).rev() {
            let mut empty = 0u8;
            for file in 0..8 {
                match Square::new(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Move generation and the check oracle
    // ------------------------------------------------------------------

    /// Every legal move of `color`, keyed by coordinate pair.
    pub fn all_legal_moves(&self, color: Color) -> HashMap<Move, MoveOutcome> {
        pieces::all_legal_moves(&mut self.clone(), color)
    }

    /// Legal moves of a single piece.
    pub fn legal_moves_of(&self, id: PieceId) -> HashMap<Move, MoveOutcome> {
        pieces::legal_moves_of(&mut self.clone(), id)
    }

    /// Enemy pieces that could move onto the king of `color` right now.
    pub fn checking_pieces(&self, color: Color) -> Vec<PieceId> {
        check::checkers(&mut self.clone(), color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        check::in_check(&mut self.clone(), color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        check::is_checkmate(&mut self.clone(), color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        check::is_stalemate(&mut self.clone(), color)
    }

    /// Whether moving `id` to `target` keeps its own king out of check. Says
    /// nothing about whether the piece can actually make that move.
    pub fn move_is_legal(&self, id: PieceId, target: Square) -> bool {
        check::move_is_legal(&mut self.clone(), id, target)
    }

    /// Validate and (unless `dry_run`) commit a move of `id` to `target`.
    /// A dry run leaves the board exactly as it found it.
    pub fn attempt_move(
        &mut self,
        id: PieceId,
        target: Square,
        dry_run: bool,
    ) -> Result<MoveOutcome, MoveError> {
        pieces::attempt_move(self, id, target, dry_run)
    }

    /// Commit `mv` for whichever piece stands on `mv.from`.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let id = self
            .piece_id_at(mv.from)
            .ok_or(MoveError::NoPieceAtSquare(mv.from))?;
        self.attempt_move(id, mv.to, false)
    }

    /// Abort if any structural invariant is broken: one king per colour and
    /// an occupancy index that agrees with the arena.
    pub fn assert_invariants(&self) {
        for color in [Color::White, Color::Black] {
            let kings = self
                .ids_in_play(color)
                .filter(|&id| self.piece(id).kind == PieceKind::King)
                .count();
            assert!(kings == 1, "{color} has {kings} kings in play");
        }
        let mut derived = [None; 64];
        for (id, piece) in self.pieces() {
            if !piece.in_play {
                continue;
            }
            let slot = &mut derived[piece.square.index()];
            assert!(slot.is_none(), "two pieces in play on {}", piece.square);
            *slot = Some(id);
        }
        assert!(
            derived == self.occupancy,
            "occupancy index out of step with the piece arena"
        );
    }

    // ------------------------------------------------------------------
    // Raw mutators: no validation. Only validators (commits) and
    // `Speculation` (self-reverting) call these.
    // ------------------------------------------------------------------

    pub(crate) fn place(&mut self, id: PieceId, to: Square) {
        let from = self.pieces[id.index()].square;
        if self.occupancy[from.index()] == Some(id) {
            self.occupancy[from.index()] = None;
        }
        debug_assert!(
            self.occupancy[to.index()].is_none_or(|other| other == id),
            "placing a piece on an occupied square"
        );
        let piece = &mut self.pieces[id.index()];
        piece.square = to;
        if piece.in_play {
            self.occupancy[to.index()] = Some(id);
        }
    }

    pub(crate) fn take_off(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.index()];
        piece.in_play = false;
        let sq = piece.square.index();
        if self.occupancy[sq] == Some(id) {
            self.occupancy[sq] = None;
        }
    }

    pub(crate) fn put_back(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.index()];
        piece.in_play = true;
        self.occupancy[piece.square.index()] = Some(id);
    }

    pub(crate) fn mark_moved(&mut self, id: PieceId) {
        self.pieces[id.index()].has_moved = true;
    }

    pub(crate) fn promote(&mut self, id: PieceId, kind: PieceKind) {
        self.pieces[id.index()].kind = kind;
    }

    pub(crate) fn record_last_move(&mut self, id: PieceId, mv: Move) {
        let color = self.pieces[id.index()].color;
        self.last_moves[color.idx()] = Some(LastMove { piece: id, mv });
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let symbol = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.symbol());
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  A B C D E F G H")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
