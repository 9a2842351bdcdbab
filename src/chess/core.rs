//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A cell of the board addressed by row and column, both within
/// `0..BOARD_WIDTH`. Row 0 is the top of the board as it is drawn (Black's
/// back rank), row 7 is White's back rank:
///
/// ```
/// use twochess::chess::core::Square;
///
/// let e2 = Square::try_from("e2").unwrap();
/// assert_eq!((e2.row(), e2.col()), (6, 4));
/// assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
/// assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
/// ```
///
/// Squares can only be created through checked constructors, so every
/// [`Square`] is on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from zero-based row and column.
    ///
    /// # Errors
    ///
    /// If either coordinate is outside `0..BOARD_WIDTH`.
    pub fn new(row: u8, col: u8) -> anyhow::Result<Self> {
        if row >= BOARD_WIDTH {
            bail!("row should be within 0..{BOARD_WIDTH}, got {row}");
        }
        if col >= BOARD_WIDTH {
            bail!("column should be within 0..{BOARD_WIDTH}, got {col}");
        }
        Ok(Self { row, col })
    }

    /// Row of the square, 0 being the top of the board.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column of the square, 0 being file "a".
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Iterates over all squares row by row, starting from the top-left
    /// corner (a8).
    pub fn iter() -> impl Iterator<Item = Self> {
        itertools::iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH).map(|(row, col)| Self { row, col })
    }

    /// Returns the square shifted by given number of rows and columns or
    /// [`None`] if it falls off the board.
    #[must_use]
    pub fn offset(self, rows: i16, cols: i16) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + rows).ok()?;
        let col = u8::try_from(i16::from(self.col) + cols).ok()?;
        Self::new(row, col).ok()
    }

    /// Signed (row, column) distance from `self` to `target`.
    #[must_use]
    pub fn delta(self, target: Self) -> (i16, i16) {
        (
            i16::from(target.row) - i16::from(self.row),
            i16::from(target.col) - i16::from(self.col),
        )
    }

    /// The corner squares (a8 and h1) are light, as is every square of the
    /// same parity.
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses algebraic notation ("e2") of the square.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Self::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.col) as char)?;
        f.write_char((b'8' - self.row) as char)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row increment of a pawn push: White pawns walk up the board, Black
    /// pawns walk down.
    #[must_use]
    pub const fn push_direction(self) -> i16 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// The row pawns start from. Double pushes are only allowed from here.
    #[must_use]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    /// Parses the kind from a case-insensitive piece symbol.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Ok(Self::King),
            'q' => Ok(Self::Queen),
            'r' => Ok(Self::Rook),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            'p' => Ok(Self::Pawn),
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player and the square it stands on.
///
/// The square is updated by [`crate::chess::board::Board::apply_move`] and
/// always matches the board cell holding the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
    pub(super) square: Square,
}

impl Piece {
    /// Parses a piece symbol: uppercase for White and lowercase for Black.
    ///
    /// # Errors
    ///
    /// If the symbol is not one of "KQRBNPkqrbnp".
    pub fn from_symbol(symbol: char, square: Square) -> anyhow::Result<Self> {
        let kind = PieceKind::try_from(symbol)?;
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self {
            owner,
            kind,
            square,
        })
    }

    /// Current location of the piece.
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.square.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.square.col
    }

    /// FEN symbol of the piece.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match (&self.owner, &self.kind) {
            // White player: uppercase symbols.
            (Player::White, PieceKind::King) => 'K',
            (Player::White, PieceKind::Queen) => 'Q',
            (Player::White, PieceKind::Rook) => 'R',
            (Player::White, PieceKind::Bishop) => 'B',
            (Player::White, PieceKind::Knight) => 'N',
            (Player::White, PieceKind::Pawn) => 'P',
            // Black player: lowercase symbols.
            (Player::Black, PieceKind::King) => 'k',
            (Player::Black, PieceKind::Queen) => 'q',
            (Player::Black, PieceKind::Rook) => 'r',
            (Player::Black, PieceKind::Bishop) => 'b',
            (Player::Black, PieceKind::Knight) => 'n',
            (Player::Black, PieceKind::Pawn) => 'p',
        }
    }

    /// Unicode chess glyph: outlined for White, filled for Black.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match (&self.owner, &self.kind) {
            (Player::White, PieceKind::King) => '♔',
            (Player::White, PieceKind::Queen) => '♕',
            (Player::White, PieceKind::Rook) => '♖',
            (Player::White, PieceKind::Bishop) => '♗',
            (Player::White, PieceKind::Knight) => '♘',
            (Player::White, PieceKind::Pawn) => '♙',
            (Player::Black, PieceKind::King) => '♚',
            (Player::Black, PieceKind::Queen) => '♛',
            (Player::Black, PieceKind::Rook) => '♜',
            (Player::Black, PieceKind::Bishop) => '♝',
            (Player::Black, PieceKind::Knight) => '♞',
            (Player::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// A move accepted by [`crate::chess::game::Game`]: the piece (already on its
/// new square) and whatever it captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
    #[allow(missing_docs)]
    pub piece: Piece,
    #[allow(missing_docs)]
    pub captured: Option<Piece>,
}

impl fmt::Display for Move {
    /// Serializes a move in coordinate notation ("e2e4").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
