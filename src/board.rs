// Mapping delle caselle: index = x + y * 8, con y = 0 sulla traversa 8 (in alto)
// e x = 0 sulla colonna a. Tutti i generatori passano da questa formula.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step: white pawns walk towards `y = 0`.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Only these kinds carry a meaningful has-moved flag.
    pub fn tracks_has_moved(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }

    /// Placement letter: uppercase for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

/// A board coordinate. Both components are always in `[0, 8)`.
///
/// The fields are private so that an out-of-range coordinate cannot be built:
/// every constructor that takes signed input returns `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    #[inline]
    pub const fn is_legal_position(x: i8, y: i8) -> bool {
        x >= 0 && x < 8 && y >= 0 && y < 8
    }

    #[inline]
    pub fn new(x: i8, y: i8) -> Option<Self> {
        if Self::is_legal_position(x, y) {
            Some(Position {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    // Solo per coordinate già note valide (layout iniziale, scansione 0..64)
    #[inline]
    pub(crate) const fn from_parts(x: u8, y: u8) -> Self {
        debug_assert!(x < 8 && y < 8);
        Position { x, y }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self::from_parts((index % 8) as u8, (index / 8) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    #[inline]
    pub fn index(self) -> usize {
        self.x as usize + self.y as usize * 8
    }

    /// The coordinate `(x + dx, y + dy)`, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = (self.x as i8).checked_add(dx)?;
        let y = (self.y as i8).checked_add(dy)?;
        Self::new(x, y)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64u8).map(|i| Self::from_parts(i % 8, i / 8))
    }

    /// Parse algebraic notation like "e2" (file a..h, rank 1..8).
    pub fn from_algebraic(s: &str) -> ChessResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Self::from_parts(file - b'a', b'8' - rank))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.x) as char;
        let rank = (b'8' - self.y) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    pub fn is_same_color(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    /// The copy of this piece that ends up on `to` after a move.
    pub fn moved_to(self, to: Position) -> Piece {
        Piece {
            position: to,
            has_moved: self.has_moved || self.kind.tracks_has_moved(),
            ..self
        }
    }

    pub fn to_char(&self) -> char {
        self.kind.to_char(self.color)
    }
}

// Posizione iniziale standard (solo la disposizione dei pezzi)
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

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

/// 64 optional piece slots indexed by `x + y * 8`.
///
/// `Piece` is `Copy`, so cloning a board duplicates every occupant and the
/// clone shares nothing with the original.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// The canonical 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            let x = x as u8;
            board.put(Piece::new(kind, Color::Black, Position::from_parts(x, 0)));
            board.put(Piece::new(PieceKind::Pawn, Color::Black, Position::from_parts(x, 1)));
            board.put(Piece::new(PieceKind::Pawn, Color::White, Position::from_parts(x, 6)));
            board.put(Piece::new(kind, Color::White, Position::from_parts(x, 7)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cells[pos.index()].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// Place `piece` on its own `position`, returning whatever was there.
    pub fn put(&mut self, piece: Piece) -> Option<Piece> {
        self.cells[piece.position.index()].replace(piece)
    }

    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()].take()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Scan for the king of `color`. `None` on sandbox boards without one.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    pub fn count(&self) -> usize {
        self.pieces().count()
    }
}

// Parsing della disposizione (prima sezione FEN) su Board
impl Board {
    /// Load a rank-by-rank placement, top rank first.
    ///
    /// Anything after the first whitespace-separated field (side to move,
    /// castling, en passant, counters) is accepted and ignored. Every loaded
    /// piece starts with `has_moved == false`.
    pub fn from_placement(placement: &str) -> ChessResult<Board> {
        let mut fields = placement.split_whitespace();
        let piece_part = fields
            .next()
            .ok_or_else(|| ChessError::InvalidPlacement("empty placement".to_string()))?;
        let trailer: Vec<&str> = fields.collect();
        if !trailer.is_empty() {
            tracing::debug!(?trailer, "placement trailer fields are not interpreted");
        }

        let ranks: Vec<&str> = piece_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (y, rank_part) in ranks.iter().enumerate() {
            let rank_label = 8 - y;
            let mut x = 0usize;
            for ch in rank_part.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(ChessError::InvalidPlacement(format!(
                            "invalid skip count '{}' on rank {}",
                            ch, rank_label
                        )));
                    }
                    x += skip as usize;
                } else {
                    let (kind, color) = PieceKind::from_char(ch).ok_or_else(|| {
                        ChessError::InvalidPlacement(format!(
                            "invalid piece char '{}' on rank {}",
                            ch, rank_label
                        ))
                    })?;
                    if x >= 8 {
                        return Err(ChessError::InvalidPlacement(format!(
                            "rank {} has more than 8 files",
                            rank_label
                        )));
                    }
                    board.put(Piece::new(kind, color, Position::from_parts(x as u8, y as u8)));
                    x += 1;
                }
                if x > 8 {
                    return Err(ChessError::InvalidPlacement(format!(
                        "rank {} has more than 8 files",
                        rank_label
                    )));
                }
            }
            if x != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {} covers {} files, expected 8",
                    rank_label, x
                )));
            }
        }

        tracing::debug!(pieces = board.count(), "placement loaded");
        Ok(board)
    }

    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for y in 0..8u8 {
            if y > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for x in 0..8u8 {
                match self.piece_at(Position::from_parts(x, y)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_placement(s)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.to_placement()).finish()
    }
}

// Diagramma semplice, traversa 8 in alto
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8u8 {
            write!(f, "{} ", 8 - y)?;
            for x in 0..8u8 {
                match self.piece_at(Position::from_parts(x, y)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
