use crate::{board::Board, types::Color};

/// Pure perft node count.
/// Counts all legal move sequences of length `depth` starting with `color`.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.all_legal_moves(color);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.into_keys() {
        let mut child = board.clone();
        child
            .apply_move(mv)
            .unwrap_or_else(|err| panic!("generated move {mv} failed to replay: {err}"));
        nodes += perft(&child, color.other(), depth - 1);
    }
    nodes
}
