//! Implementation of the chess board, its (reduced) rules and the turn-based
//! controller driving a two-player game.

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
