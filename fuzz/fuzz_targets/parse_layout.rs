#![no_main]
use libfuzzer_sys::fuzz_target;
use twochess::chess::board::Board;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(board) = Board::try_from(s) {
            assert_eq!(Board::try_from(board.to_string().as_str()).ok(), Some(board));
        }
    }
});
