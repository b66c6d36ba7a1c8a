use std::io::{BufRead, Write};

use chess_rules::{Board, Color, Game, Move, MoveError, Player, PlayerError, Renderer};
use tracing::warn;

/// A human at a line-oriented terminal.
///
/// Each prompt reads one line holding two squares (`e2 e4`, any case). An
/// illegal move is explained and the prompt repeated; unreadable input is
/// reported as [`PlayerError::InvalidInput`]. End of input or `quit` aborts.
pub struct TextPlayer<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for TextPlayer<R, W> {
    fn pick_move(&mut self, game: &Game) -> Result<Move, PlayerError> {
        loop {
            write!(self.output, "\n{} to move: ", game.side_to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::Aborted);
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") {
                return Err(PlayerError::Aborted);
            }

            let mv: Move = match line.parse() {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(self.output, "{err}; enter a move like E2 E4 or e2 e4")?;
                    return Err(PlayerError::InvalidInput(line.to_string()));
                }
            };
            match check_move(game, mv) {
                Ok(()) => return Ok(mv),
                Err(err) => writeln!(self.output, "{}: {err}", mv.arrow())?,
            }
        }
    }
}

/// Why `mv` would be refused, found by trying it on a copy of the board.
fn check_move(game: &Game, mv: Move) -> Result<(), MoveError> {
    if game.is_over() {
        return Err(MoveError::GameOver);
    }
    let mut board = game.board().clone();
    let id = board
        .piece_id_at(mv.from)
        .ok_or(MoveError::NoPieceAtSquare(mv.from))?;
    if board.piece(id).color != game.side_to_move() {
        return Err(MoveError::NotYourPiece(mv.from));
    }
    board.attempt_move(id, mv.to, false).map(|_| ())
}

/// Draws the board as text, followed by each side's captured pieces.
pub struct TextRenderer<W: Write> {
    output: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn draw(&mut self, board: &Board) -> std::io::Result<()> {
        writeln!(self.output, "\n{board}")?;
        for color in [Color::White, Color::Black] {
            let captured: Vec<String> = board
                .captured(color.other())
                .map(|p| p.symbol().to_string())
                .collect();
            writeln!(self.output, "{color}'s captured pieces: {}", captured.join(" "))?;
        }
        self.output.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board) {
        if let Err(err) = self.draw(board) {
            warn!("failed to render board: {err}");
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
