//! Drawing the board for the player. The game controller never draws
//! anything itself: it only tells when the board changed
//! ([`crate::chess::game::Click::needs_redraw`]) and hands out a read-only
//! [`Board`].

use std::io::Write;

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Square, BOARD_WIDTH};

/// Anything that can present the board to the players.
pub trait Renderer {
    /// Draws the whole board from scratch.
    ///
    /// # Errors
    ///
    /// If the underlying output fails.
    fn render(&mut self, board: &Board) -> anyhow::Result<()>;
}

const LIGHT_SQUARE: char = '.';
const DARK_SQUARE: char = ':';

/// Draws the board as text with chess glyphs, rank labels on the left and file
/// labels underneath:
///
/// ```text
/// 8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
/// 7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟
/// 6 . : . : . : . :
/// ...
///   a b c d e f g h
/// ```
///
/// Empty squares are shaded: `.` for light and `:` for dark ones.
pub struct TextRenderer<W: Write> {
    output: W,
}

impl<W: Write> TextRenderer<W> {
    #[allow(missing_docs)]
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Returns the underlying output.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board) -> anyhow::Result<()> {
        for (row, squares) in &Square::iter().chunk_by(|square| square.row()) {
            let cells = squares
                .map(|square| match board.at(square) {
                    Some(piece) => piece.glyph(),
                    None if square.is_light() => LIGHT_SQUARE,
                    None => DARK_SQUARE,
                })
                .join(" ");
            writeln!(self.output, "{} {cells}", BOARD_WIDTH - row)?;
        }
        writeln!(
            self.output,
            "  {}",
            (0..BOARD_WIDTH).map(|col| (b'a' + col) as char).join(" ")
        )?;
        self.output.flush()?;
        Ok(())
    }
}
