use crate::chess::core::Square;

/// Commands understood by [`super::Engine`], one per input line.
#[derive(Debug, PartialEq)]
pub(super) enum Command {
    /// Click on a square, given either in algebraic notation (`click e2`) or
    /// as zero-based row and column (`click 6 4`).
    Click(Square),
    Draw,
    Fen,
    Turn,
    Moves,
    NewGame,
    Layout {
        placement: String,
        turn: Option<String>,
    },
    Quit,
    Unknown(String),
}

fn parse_click(parts: &[&str]) -> Option<Square> {
    match parts {
        [square] => Square::try_from(*square).ok(),
        [row, col] => Square::new(row.parse().ok()?, col.parse().ok()?).ok(),
        _ => None,
    }
}

fn parse_layout(parts: &[&str]) -> Option<Command> {
    match parts {
        [placement] => Some(Command::Layout {
            placement: (*placement).to_string(),
            turn: None,
        }),
        [placement, turn] => Some(Command::Layout {
            placement: (*placement).to_string(),
            turn: Some((*turn).to_string()),
        }),
        _ => None,
    }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let unknown = || Self::Unknown(input.trim().to_string());

        let Some((&command, arguments)) = parts.split_first() else {
            return unknown();
        };
        match command {
            "click" => parse_click(arguments).map_or_else(unknown, Self::Click),
            "d" | "board" if arguments.is_empty() => Self::Draw,
            "fen" if arguments.is_empty() => Self::Fen,
            "turn" if arguments.is_empty() => Self::Turn,
            "moves" if arguments.is_empty() => Self::Moves,
            "new" if arguments.is_empty() => Self::NewGame,
            "layout" => parse_layout(arguments).unwrap_or_else(unknown),
            "quit" => Self::Quit,
            _ => unknown(),
        }
    }
}
