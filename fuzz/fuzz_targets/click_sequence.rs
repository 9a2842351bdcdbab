#![no_main]
use libfuzzer_sys::fuzz_target;
use twochess::chess::core::Square;
use twochess::chess::game::{Click, Game};

fuzz_target!(|data: &[u8]| {
    let mut game = Game::new();
    let mut pieces = game.board().pieces().count();
    for &byte in data {
        let Ok(square) = Square::new(byte / 8 % 8, byte % 8) else {
            continue;
        };
        let turn = game.turn();
        let click = game.handle_click(square);
        // Every piece stands where the board says it does.
        for piece in game.board().pieces() {
            assert_eq!(game.board().at(piece.square()), Some(piece));
        }
        if let Some(selected) = game.selected() {
            assert_eq!(selected.owner, game.turn());
        }
        let remaining = game.board().pieces().count();
        match click {
            Click::Moved(played) => {
                assert_eq!(game.turn(), turn.opponent());
                assert_eq!(remaining + usize::from(played.captured.is_some()), pieces);
            },
            _ => {
                assert_eq!(game.turn(), turn);
                assert_eq!(remaining, pieces);
            },
        }
        pieces = remaining;
    }
});
