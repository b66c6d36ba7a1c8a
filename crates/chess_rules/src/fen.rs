//! Forsyth-Edwards Notation reader, used to set up test and analysis
//! positions.
//!
//! The board tracks "has moved" per piece rather than castling rights, so the
//! castling field is translated: a right leaves its king and corner rook
//! unmoved, every other king and rook counts as moved. Pawns off their
//! starting row count as moved. The en passant field becomes the opponent's
//! last move (the double step that created it).

use crate::board::Board;
use crate::check;
use crate::error::FenError;
use crate::types::*;

pub(crate) struct FenPosition {
    pub board: Board,
    pub side_to_move: Color,
    pub halfmove_clock: u32,
}

pub(crate) fn parse(fen: &str) -> Result<FenPosition, FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or(FenError::MissingField("piece placement"))?;
    let side_part = fields.next().unwrap_or("w");
    let castle_part = fields.next().unwrap_or("-");
    let ep_part = fields.next().unwrap_or("-");
    let halfmove_part = fields.next().unwrap_or("0");

    let mut pieces = parse_placement(placement)?;

    for color in [Color::White, Color::Black] {
        let count = pieces
            .iter()
            .filter(|p| p.color == color && p.kind == PieceKind::King)
            .count();
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }

    let side_to_move = match side_part {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::BadSideToMove(other.to_string())),
    };

    for piece in pieces.iter_mut() {
        piece.has_moved = match piece.kind {
            PieceKind::Pawn => piece.square.row() != piece.color.pawn_row(),
            PieceKind::King | PieceKind::Rook => true,
            _ => false,
        };
    }
    if castle_part != "-" {
        for c in castle_part.chars() {
            grant_castling(&mut pieces, c)?;
        }
    }

    let mut last_moves = [None, None];
    if ep_part != "-" {
        let last = passed_pawn_move(&pieces, side_to_move.other(), ep_part)?;
        last_moves[side_to_move.other().idx()] = Some(last);
    }

    let halfmove_clock = halfmove_part
        .parse()
        .map_err(|_| FenError::BadClock(halfmove_part.to_string()))?;

    let mut board = Board::from_parts(pieces, last_moves);
    // The side that just moved cannot have left its king attacked.
    if check::in_check(&mut board, side_to_move.other()) {
        return Err(FenError::OpponentInCheck(side_to_move.other()));
    }

    Ok(FenPosition {
        board,
        side_to_move,
        halfmove_clock,
    })
}

fn parse_placement(placement: &str) -> Result<Vec<Piece>, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRank(placement.to_string()));
    }

    let mut pieces = Vec::with_capacity(32);
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank = 7 - rank_idx as i8;
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
                continue;
            }
            let kind = PieceKind::from_letter(ch).ok_or(FenError::BadPiece(ch))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square =
                Square::new(file, rank).ok_or_else(|| FenError::BadRank(rank_str.to_string()))?;
            pieces.push(Piece::new(kind, color, square));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRank(rank_str.to_string()));
        }
    }
    Ok(pieces)
}

fn grant_castling(pieces: &mut [Piece], right: char) -> Result<(), FenError> {
    let (color, rook_column) = match right {
        'K' => (Color::White, 'H'),
        'Q' => (Color::White, 'A'),
        'k' => (Color::Black, 'H'),
        'q' => (Color::Black, 'A'),
        _ => return Err(FenError::BadCastling(right)),
    };
    let row = color.back_row();
    let king_home = Square::at('E', row);
    let rook_home = Square::at(rook_column, row);

    let king = pieces
        .iter()
        .position(|p| p.kind == PieceKind::King && p.color == color && Some(p.square) == king_home);
    let rook = pieces
        .iter()
        .position(|p| p.kind == PieceKind::Rook && p.color == color && Some(p.square) == rook_home);
    match (king, rook) {
        (Some(k), Some(r)) => {
            pieces[k].has_moved = false;
            pieces[r].has_moved = false;
            Ok(())
        }
        _ => Err(FenError::BadCastling(right)),
    }
}

/// Rebuild the double step that left `ep` (the skipped square) behind.
fn passed_pawn_move(pieces: &[Piece], mover: Color, ep: &str) -> Result<LastMove, FenError> {
    let bad = || FenError::BadEnPassant(ep.to_string());
    let skipped: Square = ep.parse().map_err(|_| bad())?;
    let landed = skipped.offset(0, mover.forward()).ok_or_else(bad)?;
    let started = skipped.offset(0, -mover.forward()).ok_or_else(bad)?;
    if started.row() != mover.pawn_row() {
        return Err(bad());
    }
    let idx = pieces
        .iter()
        .position(|p| p.kind == PieceKind::Pawn && p.color == mover && p.square == landed)
        .ok_or_else(bad)?;
    Ok(LastMove {
        piece: PieceId(idx as u8),
        mv: Move::new(started, landed),
    })
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
