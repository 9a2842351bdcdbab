//! Turn-based game controller: tracks whose turn it is and which piece is
//! selected, and turns square clicks into moves.

use crate::chess::board::Board;
use crate::chess::core::{Move, Piece, Player, Square};
use crate::chess::rules;

/// Outcome of a single [`Game::handle_click`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click {
    /// Nothing is selected and the square does not hold a piece of the player
    /// to move.
    Ignored,
    /// The piece on the square became selected.
    Selected(Square),
    /// Another piece of the same player was clicked while one was already
    /// selected: the selection moved to it.
    Switched(Square),
    /// The selected piece moved. The board changed and the turn passed to the
    /// opponent, so the board should be redrawn.
    Moved(Move),
    /// The selected piece can not move to the square. Nothing changed and the
    /// piece stays selected.
    Rejected,
}

impl Click {
    /// Whether the board changed and renderers should redraw it.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// State of the game between two players sharing one board.
///
/// The controller owns the [`Board`]; the outside world only gets to read it
/// and to report clicks through [`Game::handle_click`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Player,
    selected: Option<Square>,
}

impl Game {
    /// Starts a game from the standard starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::starting(), Player::White)
    }

    /// Starts a game from an arbitrary position.
    #[must_use]
    pub const fn with_board(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            selected: None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// The piece awaiting a destination click, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.and_then(|square| self.board.at(square))
    }

    /// Processes a click on `square`:
    ///
    /// - With nothing selected, a piece of the player to move becomes
    ///   selected; clicks on empty squares and opponent pieces are ignored.
    /// - With a piece selected, clicking another piece of the same color
    ///   switches the selection. Any other square is a move attempt: if the
    ///   selected piece can go there, the move is made, the selection is
    ///   cleared and the turn passes to the opponent. Otherwise nothing
    ///   changes.
    ///
    /// ```
    /// use twochess::chess::core::{Player, Square};
    /// use twochess::chess::game::{Click, Game};
    ///
    /// let mut game = Game::new();
    /// let e2 = Square::try_from("e2").unwrap();
    /// let e4 = Square::try_from("e4").unwrap();
    /// assert_eq!(game.handle_click(e2), Click::Selected(e2));
    /// assert!(game.handle_click(e4).needs_redraw());
    /// assert_eq!(game.turn(), Player::Black);
    /// ```
    pub fn handle_click(&mut self, square: Square) -> Click {
        let clicked = self.board.at(square).copied();
        let Some(selected) = self.selected().copied() else {
            return match clicked {
                Some(piece) if piece.owner == self.turn => {
                    self.selected = Some(square);
                    Click::Selected(square)
                },
                _ => Click::Ignored,
            };
        };
        if clicked.is_some_and(|piece| piece.owner == selected.owner) {
            self.selected = Some(square);
            return Click::Switched(square);
        }
        if !rules::validate(&selected, square, &self.board) {
            return Click::Rejected;
        }
        let from = selected.square();
        let captured = self.board.apply_move(from, square);
        self.selected = None;
        self.turn = self.turn.opponent();
        Click::Moved(Move {
            from,
            to: square,
            piece: Piece { square, ..selected },
            captured,
        })
    }

    /// Squares the selected piece can be moved to with a click. Empty if
    /// nothing is selected.
    #[must_use]
    pub fn targets(&self) -> Vec<Square> {
        self.selected()
            .map(|piece| rules::targets(piece, &self.board))
            .unwrap_or_default()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
