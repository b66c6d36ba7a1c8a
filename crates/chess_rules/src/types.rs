use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn step towards the opponent.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Row (1..=8) the pieces start on.
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used for capture tallies.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    /// Lowercase FEN letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A square on the 8x8 board. Columns A..H map to files 0..7, rows 1..8 to
/// ranks 0..7; a `Square` is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const fn new(file: i8, rank: i8) -> Option<Square> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Square from its column letter (case-insensitive) and 1-based row.
    pub fn at(column: char, row: u8) -> Option<Square> {
        let column = column.to_ascii_uppercase();
        if !('A'..='H').contains(&column) || !(1..=8).contains(&row) {
            return None;
        }
        Square::new((column as u8 - b'A') as i8, row as i8 - 1)
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        if idx < 64 {
            Square::new((idx % 8) as i8, (idx / 8) as i8)
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }
    pub fn file(self) -> i8 {
        self.file as i8
    }
    pub fn rank(self) -> i8 {
        self.rank as i8
    }
    pub fn column(self) -> char {
        (b'A' + self.file) as char
    }
    pub fn row(self) -> u8 {
        self.rank + 1
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file() + df, self.rank() + dr)
    }

    /// (file delta, rank delta) from `self` to `to`.
    pub fn delta(self, to: Square) -> (i8, i8) {
        (to.file() - self.file(), to.rank() - self.rank())
    }

    /// Squares strictly between `self` and `to` on a shared row, column or
    /// diagonal. Empty when the two squares are not aligned or are adjacent.
    pub fn between(self, to: Square) -> Vec<Square> {
        let (df, dr) = self.delta(to);
        let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
        if !aligned || (df == 0 && dr == 0) {
            return Vec::new();
        }
        let (sf, sr) = (df.signum(), dr.signum());
        let steps = df.abs().max(dr.abs());
        (1..steps)
            .filter_map(|i| self.offset(sf * i, sr * i))
            .collect()
    }
}

/// A coordinate pair. Promotion is implicit (always to a queen).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Stable index of a piece in the board's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Cleared on capture and never set again.
    pub in_play: bool,
    /// Gates the pawn double step and castling.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            in_play: true,
            has_moved: false,
        }
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    GoTo,
    Take(PieceId),
    Castle { rook: PieceId },
    /// Carries the passed pawn, which is not on the destination square.
    EnPassant(PieceId),
}

impl MoveOutcome {
    pub fn captured(&self) -> Option<PieceId> {
        match *self {
            MoveOutcome::Take(id) | MoveOutcome::EnPassant(id) => Some(id),
            MoveOutcome::GoTo | MoveOutcome::Castle { .. } => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }
}

/// The most recent committed move of one colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub piece: PieceId,
    pub mv: Move,
}
