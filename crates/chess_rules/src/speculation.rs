//! Scoped, self-reverting edits used by the legality and check oracles.
//!
//! Every hypothetical relocation or capture goes through a [`Speculation`].
//! The guard records each edit and undoes them in reverse order when it is
//! dropped, so early returns and `?` cannot leave a half-applied position
//! behind.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::types::{PieceId, Square};

enum Edit {
    Relocated { piece: PieceId, from: Square },
    Captured(PieceId),
}

pub(crate) struct Speculation<'b> {
    board: &'b mut Board,
    edits: Vec<Edit>,
}

impl<'b> Speculation<'b> {
    pub(crate) fn new(board: &'b mut Board) -> Self {
        Self {
            board,
            edits: Vec::with_capacity(3),
        }
    }

    /// Move `piece` to `to` without validating anything. `to` must be empty
    /// or already vacated by [`Speculation::capture`].
    pub(crate) fn relocate(&mut self, piece: PieceId, to: Square) {
        let from = self.board.piece(piece).square;
        self.board.place(piece, to);
        self.edits.push(Edit::Relocated { piece, from });
    }

    /// Take `piece` out of play for the lifetime of the guard.
    pub(crate) fn capture(&mut self, piece: PieceId) {
        if self.board.piece(piece).in_play {
            self.board.take_off(piece);
            self.edits.push(Edit::Captured(piece));
        }
    }

    /// Capture whatever stands on `to` (other than `piece`), then relocate.
    pub(crate) fn displace(&mut self, piece: PieceId, to: Square) {
        if let Some(occupant) = self.board.piece_id_at(to) {
            if occupant != piece {
                self.capture(occupant);
            }
        }
        self.relocate(piece, to);
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        while let Some(edit) = self.edits.pop() {
            match edit {
                Edit::Relocated { piece, from } => self.board.place(piece, from),
                Edit::Captured(piece) => self.board.put_back(piece),
            }
        }
    }
}

#[cfg(test)]
#[path = "speculation_tests.rs"]
mod speculation_tests;
