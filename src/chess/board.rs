//! Mailbox representation of the board: an 8×8 grid where each cell either
//! holds a [`Piece`] or is empty.

use std::fmt::{self, Write};

use anyhow::{bail, Context};

use crate::chess::core::{Piece, PieceKind, Player, Square, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Layout of the standard starting position: uppercase symbols are White
/// pieces, lowercase symbols are Black pieces and `' '` is an empty cell.
/// Row 0 is the top of the board.
#[rustfmt::skip]
pub const STARTING_LAYOUT: [[char; WIDTH]; WIDTH] = [
    ['r', 'n', 'b', 'q', 'k', 'b', 'n', 'r'],
    ['p', 'p', 'p', 'p', 'p', 'p', 'p', 'p'],
    [' ', ' ', ' ', ' ', ' ', ' ', ' ', ' '],
    [' ', ' ', ' ', ' ', ' ', ' ', ' ', ' '],
    [' ', ' ', ' ', ' ', ' ', ' ', ' ', ' '],
    [' ', ' ', ' ', ' ', ' ', ' ', ' ', ' '],
    ['P', 'P', 'P', 'P', 'P', 'P', 'P', 'P'],
    ['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R'],
];

/// Piece placement on the board. The board is the single source of truth for
/// piece locations: every [`Piece`] it holds stores exactly the square of its
/// cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; WIDTH]; WIDTH],
}

impl Board {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; WIDTH]; WIDTH],
        }
    }

    /// Creates the board with the standard starting position.
    ///
    /// ```
    /// use twochess::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for square in Square::iter() {
            let symbol = STARTING_LAYOUT[square.row() as usize][square.col() as usize];
            if let Ok(piece) = Piece::from_symbol(symbol, square) {
                board.cells[square.row() as usize][square.col() as usize] = Some(piece);
            }
        }
        board
    }

    /// Creates a board from an 8×8 array of piece symbols (row 0 first).
    /// Empty cells are `' '` or `'.'`.
    ///
    /// # Errors
    ///
    /// If any cell holds an unknown symbol.
    pub fn from_layout(layout: &[[char; WIDTH]; WIDTH]) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        for square in Square::iter() {
            match layout[square.row() as usize][square.col() as usize] {
                ' ' | '.' => continue,
                symbol => {
                    let piece = Piece::from_symbol(symbol, square)
                        .with_context(|| format!("incorrect layout at {square}"))?;
                    board.put(piece.kind, piece.owner, square);
                },
            }
        }
        Ok(board)
    }

    /// Returns the piece standing on given square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<&Piece> {
        self.cells[square.row() as usize][square.col() as usize].as_ref()
    }

    /// Places a new piece on an empty square.
    pub fn put(&mut self, kind: PieceKind, owner: Player, square: Square) {
        let cell = self.cell_mut(square);
        debug_assert!(cell.is_none(), "Can't put piece to already occupied square");
        *cell = Some(Piece {
            owner,
            kind,
            square,
        });
    }

    /// Removes the piece from given square and returns it.
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    /// Moves the piece standing on `from` to `to`, updating its location, and
    /// returns the piece previously standing on `to` (if any). The move is not
    /// validated: callers decide whether it is legal.
    ///
    /// Does nothing if `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let Some(mut piece) = self.clear(from) else {
            return None;
        };
        piece.square = to;
        self.cell_mut(to).replace(piece)
    }

    /// Iterates over all pieces on the board, row by row starting from a8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().flatten()
    }

    /// Iterates over pieces owned by `player`.
    pub fn player_pieces(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.owner == player)
    }

    fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.row() as usize][square.col() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the piece placement field of [FEN] (e.g.
    /// "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"). The first rank in the
    /// input is row 0.
    ///
    /// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    fn try_from(placement: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let mut row: u8 = 0;
        for rank in placement.trim().split('/') {
            if row == BOARD_WIDTH {
                bail!("incorrect placement: expected {BOARD_WIDTH} ranks, got {placement}");
            }
            let mut col: u8 = 0;
            for symbol in rank.chars() {
                if col >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {rank} is longer than {BOARD_WIDTH}");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        col += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let square = Square::new(row, col)?;
                let piece = Piece::from_symbol(symbol, square)?;
                board.put(piece.kind, piece.owner, square);
                col += 1;
            }
            if col != BOARD_WIDTH {
                bail!(
                    "incorrect placement: rank size should be exactly {BOARD_WIDTH}, got {rank} \
                     of length {col}"
                );
            }
            row += 1;
        }
        if row != BOARD_WIDTH {
            bail!("incorrect placement: there should be {BOARD_WIDTH} ranks, got {placement}");
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Prints board representation in FEN piece placement format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty_squares = 0;
            for cell in cells {
                if let Some(piece) = cell {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if row + 1 != WIDTH {
                const RANK_SEPARATOR: char = '/';
                f.write_char(RANK_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if col + 1 != WIDTH {
                    write!(f, "{SQUARE_SEPARATOR}")?;
                }
            }
            if row + 1 != WIDTH {
                write!(f, "{LINE_SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
