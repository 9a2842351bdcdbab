//! The engine puts all pieces together: it reads commands from the input
//! stream, forwards clicks to the [`Game`] and redraws the board through a
//! [`TextRenderer`] whenever a move is made.
//!
//! [`Engine::run`] is the "main loop" of the program. Diagnostics are written
//! to the output as `info string ...` lines.
use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Player, Square};
use crate::chess::game::{Click, Game};
use crate::engine::command::Command;
use crate::render::{Renderer, TextRenderer};

mod command;

/// The Engine connects the game controller with the outside world, including
/// I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    game: Game,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with starting position and provided
    /// I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
        }
    }

    /// Draws the board and then executes commands from the input stream until
    /// "quit" is sent or the input ends.
    ///
    /// Malformed and unsupported commands are reported and skipped: they never
    /// stop the loop. Illegal clicks leave the game untouched.
    ///
    /// # Errors
    ///
    /// If reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.draw()?;
        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading from input")?;
            if read == 0 {
                break;
            }
            match Command::parse(&line) {
                Command::Click(square) => self.handle_click(square)?,
                Command::Draw => self.draw()?,
                Command::Fen => {
                    writeln!(self.output, "{} {}", self.game.board(), self.game.turn())?;
                },
                Command::Turn => writeln!(self.output, "turn {}", self.game.turn())?,
                Command::Moves => self.handle_moves()?,
                Command::NewGame => {
                    self.game = Game::new();
                    self.draw()?;
                },
                Command::Layout { placement, turn } => {
                    self.handle_layout(&placement, turn.as_deref())?;
                },
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
        }
        Ok(())
    }

    /// The game as seen by the engine.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        TextRenderer::new(&mut *self.output).render(self.game.board())
    }

    fn handle_click(&mut self, square: Square) -> anyhow::Result<()> {
        let attempted = self.game.selected().copied();
        let click = self.game.handle_click(square);
        match click {
            Click::Ignored => writeln!(self.output, "info string Ignored click on {square}")?,
            Click::Selected(square) => writeln!(self.output, "info string Selected {square}")?,
            Click::Switched(square) => {
                writeln!(self.output, "info string Switched selection to {square}")?;
            },
            Click::Rejected => {
                if let Some(piece) = attempted {
                    writeln!(
                        self.output,
                        "info string Illegal move: {piece} from {} to {square}",
                        piece.square()
                    )?;
                }
            },
            Click::Moved(played) => match played.captured {
                Some(captured) => writeln!(
                    self.output,
                    "info string Moved {} {played}, captured {captured}",
                    played.piece
                )?,
                None => writeln!(self.output, "info string Moved {} {played}", played.piece)?,
            },
        }
        if click.needs_redraw() {
            self.draw()?;
        }
        Ok(())
    }

    fn handle_moves(&mut self) -> anyhow::Result<()> {
        if self.game.selected().is_none() {
            writeln!(self.output, "info string No piece selected")?;
            return Ok(());
        }
        writeln!(self.output, "moves {}", self.game.targets().iter().join(" "))?;
        Ok(())
    }

    fn handle_layout(&mut self, placement: &str, turn: Option<&str>) -> anyhow::Result<()> {
        let layout = Board::try_from(placement).and_then(|board| {
            let turn = turn.map_or(Ok(Player::White), Player::try_from)?;
            Ok((board, turn))
        });
        match layout {
            Ok((board, turn)) => {
                self.game = Game::with_board(board, turn);
                self.draw()?;
            },
            Err(e) => writeln!(self.output, "info string Invalid layout: {e}")?,
        }
        Ok(())
    }
}
